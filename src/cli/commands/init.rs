use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::journal;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the storage directory and its journal
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing punchclock…");
    cfg.init_all(cli.test)?;

    let root = cfg.storage_root();
    journal(
        &root,
        "init",
        "",
        &format!("Storage initialized at {}", root.display()),
    );

    success("punchclock initialization completed!");
    Ok(())
}
