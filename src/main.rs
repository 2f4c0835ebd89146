pub mod config;
pub mod display;
pub mod schedule;

use anyhow::Result;
use std::io::{stdout, Write};

use crate::config::{load_bookings, BufferConfig};
use crate::display::render_schedule;
use crate::schedule::pad_bookings;

// Optional overrides next to the binary; defaults apply when absent.
const CONFIG_FILE: &str = "scheduler.json";
const BOOKINGS_FILE: &str = "bookings.json";

fn main() -> Result<()> {
    let config = BufferConfig::load(CONFIG_FILE)?;
    let bookings = load_bookings(BOOKINGS_FILE)?;

    let outcome = pad_bookings(&bookings, config.pre(), config.post());
    for failure in &outcome.failures {
        eprintln!(
            "{}: entry {} skipped: {:#}",
            failure.room, failure.index, failure.reason
        );
    }
    if outcome.totally_failed() {
        eprintln!("no valid bookings, nothing to schedule");
    }

    if let Err(e) = render_schedule(&outcome.schedule, &mut stdout()) {
        eprintln!("failed to display schedule: {:#}", e);
    }
    stdout().flush()?;
    Ok(())
}
