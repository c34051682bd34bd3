use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::journal;
use crate::errors::AppResult;
use crate::store::{ClockIn, TimerStore};
use crate::ui::messages::{confirm, info, success};
use crate::utils::time::{format_stamp, now};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::In { name, yes } = cmd {
        let store = TimerStore::new(cfg.storage_root());
        let at = now();

        let outcome = store.clock_in(name, at, |prompt| *yes || confirm(prompt))?;
        match outcome {
            ClockIn::Created => {
                success(format!("Created clock \"{}\" and clocked in!", name));
                journal(store.root(), "create", name, &format!("Clocked in at {}", format_stamp(at)));
            }
            ClockIn::ClockedIn => {
                success("Clocked in!");
                journal(store.root(), "in", name, &format!("Clocked in at {}", format_stamp(at)));
            }
            ClockIn::Declined => info("No clock created."),
        }
    }

    Ok(())
}
