// Dashboard aggregation

use chrono::{Days, NaiveDate};

use crate::core::models::{DashboardStats, Event};

/// Length of the "upcoming" window, inclusive of both ends
pub const UPCOMING_WINDOW_DAYS: u64 = 7;

/// Compute dashboard counters relative to `today`
///
/// Time of day is ignored; only event dates are compared.
pub fn dashboard_stats<'a, I>(events: I, today: NaiveDate) -> DashboardStats
where
    I: IntoIterator<Item = &'a Event>,
{
    let window_end = today
        .checked_add_days(Days::new(UPCOMING_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MAX);

    events
        .into_iter()
        .fold(DashboardStats::default(), |mut stats, event| {
            stats.total_events += 1;
            stats.total_registrations += event.registrations.len();
            if event.date >= today {
                stats.active_events += 1;
                if event.date <= window_end {
                    stats.upcoming_events += 1;
                }
            }
            stats
        })
}
