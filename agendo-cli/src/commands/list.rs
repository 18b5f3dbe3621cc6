use anyhow::Result;

use crate::config::GlobalConfig;
use crate::render::Render;
use crate::store::JsonTaskStore;

pub fn run() -> Result<()> {
    let config = GlobalConfig::load()?;
    let store = JsonTaskStore::new(config.tasks_path());
    let mut tasks = store.load()?;

    if tasks.is_empty() {
        println!(
            "No tasks stored yet.\n\n\
            Import a calendar export with:\n  \
            agendo import <FILE.ics>"
        );
        return Ok(());
    }

    tasks.sort_by(|a, b| a.date.cmp(&b.date));

    for task in &tasks {
        println!("{}", task.render());
    }

    println!("\n{} task(s)", tasks.len());

    Ok(())
}
