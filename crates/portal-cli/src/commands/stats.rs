//! Stats command
//!
//! Usage: portal stats [--db PATH] [--json]

use std::path::PathBuf;

use clap::Args;
use portal_core::queries::{dashboard_analytics, revenue_summary};
use portal_store::SqliteRepo;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Path to the SQLite database
    #[arg(long, default_value = "portal.db")]
    pub db: PathBuf,

    /// Emit the dashboard snapshot as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: StatsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = super::open_database(&args.db)?;
    let store = portal_store::load_store(&conn)?;

    let analytics = dashboard_analytics(&store);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analytics)?);
        return Ok(());
    }

    println!("Collections:");
    for (table, count) in SqliteRepo::collection_counts(&conn)? {
        println!("  {:<16} {}", table, count);
    }

    println!();
    println!("Dashboard:");
    println!("  active projects   {}", analytics.active_projects);
    println!(
        "  tasks             {} total, {} completed, {} in progress",
        analytics.total_tasks, analytics.completed_tasks, analytics.in_progress_tasks
    );

    let revenue = revenue_summary(&store);
    println!(
        "  revenue           {:.2} total, {:.2} paid, {:.2} pending, {:.2} overdue",
        revenue.total, revenue.paid, revenue.pending, revenue.overdue
    );

    Ok(())
}
