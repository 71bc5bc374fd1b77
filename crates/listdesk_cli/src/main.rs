//! Store summary probe.
//!
//! # Responsibility
//! - Verify `listdesk_core` linkage and open a state file end to end.
//! - Print a deterministic summary for quick local sanity checks.
//!
//! Usage: `listdesk_cli [STATE_DB_PATH]`

use listdesk_core::db::open_db;
use listdesk_core::query::analytics::{metric_totals, traffic_by_source};
use listdesk_core::{core_version, PropertyStore, SqliteStateStorage};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("listdesk_core version={}", core_version());

    let Some(path) = std::env::args().nth(1) else {
        return ExitCode::SUCCESS;
    };

    match print_summary(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_summary(path: &str) -> Result<(), Box<dyn Error>> {
    let conn = open_db(path)?;
    let storage = SqliteStateStorage::try_new(&conn)?;
    let store = PropertyStore::open(storage)?;

    println!(
        "properties={} lists={} inquiries={} traffic_sources={}",
        store.properties().len(),
        store.lists().len(),
        store.inquiries().len(),
        store.traffic_sources().len()
    );

    let totals = metric_totals(store.properties());
    println!(
        "views={} link_clicks={} qr_code_scans={}",
        totals.views, totals.link_clicks, totals.qr_code_scans
    );

    for summary in traffic_by_source(store.traffic_sources()) {
        println!("traffic source={:?} visits={}", summary.name, summary.visits);
    }
    Ok(())
}
