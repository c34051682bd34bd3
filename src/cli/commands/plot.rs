use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::bucket::{bucketize, populated_range};
use crate::errors::AppResult;
use crate::render::timeline::{PlotOptions, render_timeline};
use crate::store::TimerStore;
use crate::ui::messages::info;
use crate::utils::date::parse_date;
use crate::utils::time::now;

/// `plot` shows the most recent populated days, skipping empty ones;
/// `plot-dates` shows an explicit range, empty days included.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let store = TimerStore::new(cfg.storage_root());

    match cmd {
        Commands::Plot { name, days } => {
            let timer = store.load(name)?;
            let map = bucketize(&timer.sessions, now());

            let Some((start, end)) = populated_range(&map, days.unwrap_or(cfg.plot_days)) else {
                info(format!("Nothing recorded for \"{}\" yet.", name));
                return Ok(());
            };
            let opts = plot_options(cfg, true);
            print!("{}", render_timeline(name, &map, start, end, &opts)?);
        }
        Commands::PlotDates { name, start, end } => {
            // both dates are validated before anything is loaded
            let start = parse_date(start, &cfg.date_input_format)?;
            let end = parse_date(end, &cfg.date_input_format)?;

            let timer = store.load(name)?;
            let map = bucketize(&timer.sessions, now());
            let opts = plot_options(cfg, false);
            print!("{}", render_timeline(name, &map, start, end, &opts)?);
        }
        _ => {}
    }

    Ok(())
}

fn plot_options(cfg: &Config, skip_empty: bool) -> PlotOptions<'_> {
    PlotOptions {
        time_format: &cfg.time_format,
        date_format: &cfg.date_format,
        skip_empty,
    }
}
