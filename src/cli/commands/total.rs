use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::bucket::total_elapsed;
use crate::errors::AppResult;
use crate::store::TimerStore;
use crate::utils::date::parse_date;
use crate::utils::time::{format_elapsed, now};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Total { name, since } = cmd {
        let since_date = parse_date(since, &cfg.date_input_format)?;

        let store = TimerStore::new(cfg.storage_root());
        let timer = store.load(name)?;
        let total = total_elapsed(&timer.sessions, now(), since_date);

        println!(
            "Total time elapsed in {} since {}: {}",
            name,
            since,
            format_elapsed(total)
        );
    }

    Ok(())
}
