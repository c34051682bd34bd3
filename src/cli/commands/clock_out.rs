use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::journal;
use crate::errors::AppResult;
use crate::store::TimerStore;
use crate::ui::messages::success;
use crate::utils::time::{format_elapsed, now};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Out { name } = cmd {
        let store = TimerStore::new(cfg.storage_root());
        let at = now();

        let closed = store.clock_out(name, at)?;
        let elapsed = format_elapsed(closed.elapsed(at));

        success("Clocked out!");
        println!("elapsed time: {}", elapsed);
        journal(store.root(), "out", name, &format!("Clocked out after {}", elapsed));
    }

    Ok(())
}
