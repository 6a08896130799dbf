use crate::AppContext;
use crate::cli::commands::record;
use crate::cli::parser::Commands;
use crate::config::check::check_stored;
use crate::config::{FileStore, SettingsStore};
use crate::core::config::ConfigLogic;
use crate::errors::{AppError, AppResult};
use crate::models::schedule::{ClockTime, SchedulePatch};
use crate::ui::messages::{info, success, warning};

fn parse_patch(
    start: &Option<String>,
    lunch_start: &Option<String>,
    lunch_end: &Option<String>,
    end: &Option<String>,
) -> AppResult<SchedulePatch> {
    let parse = |v: &Option<String>| v.as_deref().map(str::parse::<ClockTime>).transpose();

    Ok(SchedulePatch {
        start_time: parse(start)?,
        lunch_start: parse(lunch_start)?,
        lunch_end: parse(lunch_end)?,
        end_time: parse(end)?,
    })
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    let Commands::Config {
        print_config,
        check,
        reset,
        edit_config,
        editor,
        location,
        start,
        lunch_start,
        lunch_end,
        end,
        use_24h,
        show_seconds,
        theme,
        frequency,
    } = cmd
    else {
        return Ok(());
    };

    let path = &ctx.cfg.settings_file;

    // ---- RESET ----
    if *reset {
        ctx.settings.reset()?;
        record(ctx, "reset", "", "Settings restored to defaults");
        success("Settings restored to defaults");
    }

    // ---- SETTERS ----
    let patch = parse_patch(start, lunch_start, lunch_end, end)?;
    if location.is_some() && patch.is_empty() {
        return Err(AppError::Config(
            "--location needs at least one of --start, --lunch-start, --lunch-end, --end".into(),
        ));
    }

    let mut changed: Vec<String> = Vec::new();
    if let Some(loc) = location {
        changed.push(format!("{}Schedule", loc.code()));
    }
    if use_24h.is_some() {
        changed.push("use24Hour".into());
    }
    if show_seconds.is_some() {
        changed.push("showSeconds".into());
    }
    if theme.is_some() {
        changed.push("theme".into());
    }
    if frequency.is_some() {
        changed.push("updateFrequency".into());
    }

    if !changed.is_empty() {
        let committed = ctx.settings.update(|s| {
            if let Some(loc) = location {
                s.schedule_mut(*loc).apply(&patch);
            }
            if let Some(v) = use_24h {
                s.use_24_hour = *v;
            }
            if let Some(v) = show_seconds {
                s.show_seconds = *v;
            }
            if let Some(t) = theme {
                s.theme = *t;
            }
            if let Some(f) = frequency {
                s.update_frequency = *f;
            }
        })?;

        let target = changed.join(", ");
        record(ctx, "set", &target, "Settings updated");
        success(format!("Updated {}", target));

        if let Some(loc) = location
            && !committed.schedule(*loc).is_ordered()
        {
            warning(format!(
                "{} schedule is not ordered (start ≤ lunch start ≤ lunch end ≤ end)",
                loc.label()
            ));
        }
    }

    // ---- CHECK ----
    if *check {
        let raw = FileStore::new(path).load()?;
        if raw.is_none() {
            info(format!("No settings file at {}, defaults are in use", path.display()));
        }

        let report = check_stored(raw.as_deref());
        if report.unreadable {
            warning("Settings file is unreadable, defaults are in use");
        }
        for field in &report.invalid_fields {
            warning(format!("Invalid value for '{}' (default applies)", field));
        }
        for field in &report.missing_fields {
            warning(format!("Missing field '{}' (default applies)", field));
        }
        for loc in &report.unordered_schedules {
            warning(format!("{} schedule is not ordered", loc.label()));
        }
        if report.is_clean() {
            success("Settings file is complete and consistent");
        }
    }

    // ---- PRINT ----
    if *print_config {
        println!("📄 Current settings ({}):\n", path.display());
        println!("{}", serde_json::to_string_pretty(&ctx.settings.current())?);
    }

    // ---- EDIT ----
    if *edit_config {
        if !path.exists() {
            ctx.settings.update(|_| {})?;
        }
        ConfigLogic::edit(path, editor.as_deref())?;
        record(ctx, "edit", "", &format!("Edited {}", path.display()));
    }

    Ok(())
}
