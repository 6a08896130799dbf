pub mod calculator;
pub mod clock;
pub mod config;
pub mod log;
pub mod logic;
pub mod scheduler;
