use anyhow::Result;
use std::io::Write;

use crate::schedule::{ActiveWindow, Schedule, TIME_FORMAT};

pub fn format_window(window: &ActiveWindow) -> String {
    format!(
        "Resource active from {} to {}",
        window.start.format(TIME_FORMAT),
        window.end.format(TIME_FORMAT)
    )
}

/// Write the schedule to `out`, one block per room in map order, windows
/// in their stored order.
pub fn render_schedule<W: Write>(schedule: &Schedule, out: &mut W) -> Result<()> {
    for (room, windows) in schedule {
        writeln!(out)?;
        writeln!(out, "Optimized schedule for {}:", room)?;
        for window in windows {
            writeln!(out, "{}", format_window(window))?;
        }
    }
    Ok(())
}
