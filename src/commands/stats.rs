use crate::{
    db::{db::Db, tasks::Tasks},
    libs::{analytics::TaskAnalytics, messages::Message, view::View},
    msg_info,
};
use anyhow::Result;
use chrono::Local;

pub fn cmd(db: &Db) -> Result<()> {
    let snapshot = Tasks::new(db).all()?;
    let stats = TaskAnalytics::compute(&snapshot, Local::now().naive_local());

    if stats.is_empty() {
        msg_info!(Message::NoDataToAnalyze);
        return Ok(());
    }

    View::stats(&stats);
    Ok(())
}
