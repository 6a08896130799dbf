pub mod advisory;
pub mod location;
pub mod offset;
pub mod overlap;
pub mod progress;
pub mod schedule;
pub mod snapshot;
pub mod work_status;
