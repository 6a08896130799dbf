pub mod advisory;
pub mod offset;
pub mod overlap;
pub mod progress;
pub mod status;
