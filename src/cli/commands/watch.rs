use crate::AppContext;
use crate::cli::parser::Commands;
use crate::core::scheduler::Ticker;
use crate::errors::AppResult;
use crate::ui::render::render_dashboard;
use std::io::{self, IsTerminal, Write};
use std::sync::Arc;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Watch { ticks, frequency } = cmd {
        let mut builder = Ticker::builder()
            .settings(Arc::clone(&ctx.settings))
            .clock(Arc::clone(&ctx.clock));
        if let Some(f) = frequency {
            builder = builder.interval(f.interval());
        }

        let mut ticker = builder.build()?;
        let snapshots = ticker.subscribe();
        ticker.start()?;

        let clear = io::stdout().is_terminal();
        let limit = ticks.unwrap_or(usize::MAX);

        for snapshot in snapshots.iter().take(limit) {
            let theme = ctx.settings.current().theme;
            let mut out = io::stdout().lock();
            if clear {
                write!(out, "{CLEAR_SCREEN}")?;
            }
            write!(out, "{}", render_dashboard(&snapshot, theme))?;
            out.flush()?;
        }

        ticker.stop();
    }
    Ok(())
}
