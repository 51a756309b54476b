use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db = db_path.to_string_lossy().to_string();

    info("Initializing Plantões…");

    // Opening the pool creates the tables and runs the migrations
    let pool = DbPool::new(&db)?;

    audit(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {db}"),
    );

    success(format!("Database initialized at {db}"));
    Ok(())
}
