use crate::AppContext;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::render::render_overlap;

pub fn handle(ctx: &AppContext) -> AppResult<()> {
    let snapshot = Core::build_snapshot(ctx.clock.now(), &ctx.settings.current());

    println!("{}\n", snapshot.offset.text);
    print!("{}", render_overlap(&snapshot.overlap));
    Ok(())
}
