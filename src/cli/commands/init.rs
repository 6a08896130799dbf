use crate::AppContext;
use crate::cli::commands::record;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: write the settings file with defaults
/// unless one already exists.
pub fn handle(ctx: &AppContext) -> AppResult<()> {
    let path = &ctx.cfg.settings_file;

    println!("⚙️  Initializing tzglance…");
    println!("📄 Settings file : {}", path.display());
    println!("📜 Activity log  : {}", ctx.cfg.log_file.display());

    if path.exists() {
        info("Settings file already exists, leaving it untouched.");
        return Ok(());
    }

    // Persists whatever was loaded, i.e. the defaults.
    ctx.settings.update(|_| {})?;
    record(
        ctx,
        "init",
        "",
        &format!("Settings initialized at {}", path.display()),
    );

    success(format!("Settings written to {}", path.display()));
    Ok(())
}
