use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::TimerStore;
use crate::utils::time::{format_elapsed, format_stamp, now};

/// `show NAME` describes the last session; bare `show` lists every clock.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { name } = cmd {
        let Some(name) = name else {
            return super::list::handle(&Commands::List, cfg);
        };

        let store = TimerStore::new(cfg.storage_root());
        let at = now();
        let current = store.show_current(name, at)?;

        println!("started: {}", format_stamp(current.start));
        match current.end {
            Some(end) => println!("ended: {}", format_stamp(end)),
            None => println!("now: {}", format_stamp(at)),
        }
        println!("elapsed time: {}", format_elapsed(current.elapsed));
    }

    Ok(())
}
