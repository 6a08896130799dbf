use crate::AppContext;
use crate::cli::parser::Commands;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::render::render_dashboard;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Show { json } = cmd {
        let settings = ctx.settings.current();
        let snapshot = Core::build_snapshot(ctx.clock.now(), &settings);

        if *json {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        } else {
            print!("{}", render_dashboard(&snapshot, settings.theme));
        }
    }
    Ok(())
}
