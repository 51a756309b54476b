use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clear::ClearLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { force } = cmd {
        if !*force && !confirm("Delete ALL locations and shifts? This action is irreversible.") {
            info("Operation cancelled.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;
        let (locations, shifts) = ClearLogic::apply(&pool)?;
        success(format!(
            "All data cleared ({locations} location(s), {shifts} shift(s))."
        ));
    }
    Ok(())
}
