use anyhow::{bail, Context, Result};
use chrono::{Duration, NaiveDateTime};
use std::collections::BTreeMap;

/// Timestamp format shared by booking input and schedule output.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

// --- Sample Booking Data ---
// Room bookings as (start, end) pairs in TIME_FORMAT.
// Stands in for a calendar feed; a real deployment would pull these from
// the booking system.

pub const SAMPLE_BOOKINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Room A",
        &[
            ("2023-10-03 09:00", "2023-10-03 11:00"),
            ("2023-10-03 14:00", "2023-10-03 16:00"),
        ],
    ),
    (
        "Room B",
        &[
            ("2023-10-03 10:00", "2023-10-03 12:00"),
            ("2023-10-03 15:00", "2023-10-03 17:00"),
        ],
    ),
];

/// Raw booking input: room name to (start, end) timestamp strings, in
/// booking order. BTreeMap keeps room iteration deterministic.
pub type Bookings = BTreeMap<String, Vec<(String, String)>>;

/// Per-room padded windows, one per valid booking, booking order preserved.
pub type Schedule = BTreeMap<String, Vec<ActiveWindow>>;

/// Time span during which a room's resources (heating, lighting) stay on.
/// Covers the booking itself plus warm-up and cool-down buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

#[derive(Debug)]
pub struct PadFailure {
    pub room: String,
    /// Position of the rejected entry within its room's booking list.
    pub index: usize,
    pub reason: anyhow::Error,
}

/// Result of a padding pass. Valid bookings land in `schedule`, rejected
/// ones in `failures`; one bad entry never discards its siblings.
#[derive(Debug, Default)]
pub struct PadOutcome {
    pub schedule: Schedule,
    pub failures: Vec<PadFailure>,
}

impl PadOutcome {
    pub fn fully_succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    /// Every entry was rejected (or there was nothing to do but errors).
    pub fn totally_failed(&self) -> bool {
        self.schedule.is_empty() && !self.failures.is_empty()
    }
}

pub fn sample_bookings() -> Bookings {
    SAMPLE_BOOKINGS
        .iter()
        .map(|(room, times)| {
            let times = times
                .iter()
                .map(|(start, end)| (start.to_string(), end.to_string()))
                .collect();
            (room.to_string(), times)
        })
        .collect()
}

fn pad_one(start_str: &str, end_str: &str, pre: Duration, post: Duration) -> Result<ActiveWindow> {
    let start = NaiveDateTime::parse_from_str(start_str, TIME_FORMAT)
        .with_context(|| format!("bad start time {:?}, expected YYYY-MM-DD HH:MM", start_str))?;
    let end = NaiveDateTime::parse_from_str(end_str, TIME_FORMAT)
        .with_context(|| format!("bad end time {:?}, expected YYYY-MM-DD HH:MM", end_str))?;

    if start >= end {
        bail!("booking must start before it ends: {} >= {}", start_str, end_str);
    }

    Ok(ActiveWindow {
        start: start - pre,
        end: end + post,
    })
}

/// Pad every booking with the pre/post buffers. Rooms are independent and
/// intervals within a room are independent: no merging, no sorting, one
/// output window per valid input pair, input order kept. Negative buffers
/// shrink the window instead of growing it.
pub fn pad_bookings(bookings: &Bookings, pre: Duration, post: Duration) -> PadOutcome {
    let mut outcome = PadOutcome::default();

    for (room, times) in bookings {
        for (index, (start_str, end_str)) in times.iter().enumerate() {
            match pad_one(start_str, end_str, pre, post) {
                Ok(window) => outcome
                    .schedule
                    .entry(room.clone())
                    .or_default()
                    .push(window),
                Err(reason) => outcome.failures.push(PadFailure {
                    room: room.clone(),
                    index,
                    reason,
                }),
            }
        }
    }

    outcome
}
