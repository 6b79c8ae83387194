use crate::date::CalendarDate;
use crate::models::{CheckInRecord, UserStats};

/// Streak summary of `records` as seen on `today`.
///
/// The current streak is the run ending at the most recent check-in, and it
/// still counts the day after that check-in (before today's entry exists).
pub fn build_stats_at(today: CalendarDate, records: &[CheckInRecord]) -> UserStats {
    let mut dates: Vec<CalendarDate> = records.iter().map(|record| record.date).collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));

    let Some(&latest) = dates.first() else {
        return UserStats::default();
    };

    let mut longest = 0u32;
    let mut run = 1u32;
    let mut head_run = None;

    for pair in dates.windows(2) {
        if pair[0].days_since(pair[1]) == 1 {
            run += 1;
        } else {
            head_run.get_or_insert(run);
            longest = longest.max(run);
            run = 1;
        }
    }
    longest = longest.max(run);
    let head_run = head_run.unwrap_or(run);

    let current_streak = match today.days_since(latest) {
        0 | 1 => head_run,
        _ => 0,
    };

    UserStats {
        total_check_ins: records.len(),
        current_streak,
        longest_streak: longest,
        last_check_in_date: latest.to_string(),
    }
}
