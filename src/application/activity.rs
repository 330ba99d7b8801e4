//! # Activity Graph
//!
//! Buckets recent push activity by calendar day and draws it as a fixed-height
//! bar chart of block characters, with an axis rule and the boundary dates.

use chrono::{Duration, NaiveDate};

use crate::domain::config::MAX_LOOKBACK_DAYS;
use crate::domain::types::Event;

/// Number of rows (and discrete levels) of the chart
pub const GRAPH_HEIGHT: u8 = 7;

const BAR: char = '█';
const AXIS: char = '─';
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Commit counts for each day from `today - lookback_days` through `today`.
///
/// Returns `lookback_days + 1` buckets, oldest first. Windows longer than
/// `MAX_LOOKBACK_DAYS` are clamped and never start before `NaiveDate::MIN`.
pub fn bucket_commits(events: &[Event], today: NaiveDate, lookback_days: u32) -> Vec<(NaiveDate, u64)> {
    let requested = lookback_days.min(MAX_LOOKBACK_DAYS);
    let start = today
        .checked_sub_signed(Duration::days(i64::from(requested)))
        .unwrap_or(NaiveDate::MIN);
    let lookback_days = (today - start).num_days() as u32;
    let mut buckets: Vec<(NaiveDate, u64)> = (0..=lookback_days)
        .map(|i| (start + Duration::days(i64::from(i)), 0))
        .collect();

    for event in events.iter().filter(|e| e.is_push()) {
        let day = event.created_at.date_naive();
        if day < start || day > today {
            continue;
        }
        let index = (day - start).num_days() as usize;
        buckets[index].1 += event.commit_count();
    }

    buckets
}

/// Scale counts to levels `0..=GRAPH_HEIGHT` relative to the busiest day.
pub fn normalize(counts: &[u64]) -> Vec<u8> {
    let max = u128::from(counts.iter().copied().max().unwrap_or(0).max(1));
    counts
        .iter()
        .map(|&count| {
            let level = u128::from(count) * u128::from(GRAPH_HEIGHT) / max;
            level.min(u128::from(GRAPH_HEIGHT)) as u8
        })
        .collect()
}

/// Draw the chart: one row per level from highest to lowest, the axis, then the date line.
pub fn render(buckets: &[(NaiveDate, u64)]) -> String {
    let counts: Vec<u64> = buckets.iter().map(|(_, c)| *c).collect();
    let levels = normalize(&counts);
    let width = levels.len();

    let mut lines: Vec<String> = (1..=GRAPH_HEIGHT)
        .rev()
        .map(|row| {
            levels
                .iter()
                .map(|&level| if level >= row { BAR } else { ' ' })
                .collect()
        })
        .collect();

    lines.push(AXIS.to_string().repeat(width));

    if let (Some((first, _)), Some((last, _))) = (buckets.first(), buckets.last()) {
        lines.push(format!(
            "{}{}{}",
            first.format(DATE_FORMAT),
            " ".repeat(width.saturating_sub(20)),
            last.format(DATE_FORMAT)
        ));
    }

    lines.join("\n")
}

/// Build the full `ACTIVITY_GRAPH` value.
pub fn activity_graph(events: &[Event], today: NaiveDate, lookback_days: u32) -> String {
    render(&bucket_commits(events, today, lookback_days))
}
