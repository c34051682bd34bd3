use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::pool::{DbPool, journal_path};
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if !*print {
            info("Nothing to do: use `punchclock log --print`.");
            return Ok(());
        }

        let root = cfg.storage_root();
        if !journal_path(&root).exists() {
            info("Internal log is empty.");
            return Ok(());
        }

        let pool = DbPool::open_in(&root)?;
        LogLogic::print_log(&pool)?;
    }

    Ok(())
}
