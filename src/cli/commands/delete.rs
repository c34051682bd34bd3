use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::journal;
use crate::errors::AppResult;
use crate::store::TimerStore;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Delete { name } = cmd {
        let store = TimerStore::new(cfg.storage_root());
        store.delete(name)?;

        success(format!("Clock \"{}\" has been deleted.", name));
        journal(store.root(), "delete", name, "Clock deleted");
    }

    Ok(())
}
