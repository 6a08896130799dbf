pub mod config;
pub mod init;
pub mod log;
pub mod overlap;
pub mod show;
pub mod watch;

use crate::AppContext;
use crate::core::log::ttlog;
use crate::ui::messages::warning;

/// Write to the activity log without failing the command.
pub(crate) fn record(ctx: &AppContext, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(&ctx.cfg.log_file, operation, target, message) {
        warning(format!("Failed to write activity log: {}", e));
    }
}
