//! Serve command
//!
//! Usage: portal serve [--db PATH] [--addr ADDR] [--log-json]

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Args;
use portal_api::AppState;
use portal_core::logging_facility::{init, Profile};

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Path to the SQLite database
    #[arg(long, default_value = "portal.db")]
    pub db: PathBuf,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub addr: SocketAddr,

    /// Emit JSON structured logs instead of human-readable output
    #[arg(long)]
    pub log_json: bool,
}

pub fn execute(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log_json {
        init(Profile::Production);
    } else {
        init(Profile::Development);
    }

    let conn = super::open_database(&args.db)?;
    let store = portal_store::load_store(&conn)?;
    tracing::info!(db = %args.db.display(), "store hydrated");

    let state = AppState::new(store, conn);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(portal_api::serve(state, args.addr))?;
    Ok(())
}
