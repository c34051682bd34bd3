use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::TimerStore;
use crate::ui::messages::info;

/// `list` prints every clock, `running` only the clocked-in ones.
/// Names go to stdout one per line so the output can be piped.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let store = TimerStore::new(cfg.storage_root());

    let (names, empty_msg) = match cmd {
        Commands::List => (store.list_all()?, "No clocks yet."),
        Commands::Running => (store.list_running()?, "No clock is running."),
        _ => return Ok(()),
    };

    if names.is_empty() {
        info(empty_msg);
    }
    for name in names {
        println!("{}", name);
    }

    Ok(())
}
