//! Journal statistics: streaks, dominant moods and per-day counts.
//!
//! Dates are bucketed by UTC calendar day. Entry order does not matter.

use crate::journal::JournalEntry;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use moodsync_engine::MoodId;
use serde::Serialize;
use std::collections::BTreeSet;

/// Window for [`weekly_summary`].
pub const WEEK_DAYS: i64 = 7;
/// Window for the monthly distribution.
pub const MONTH_DAYS: i64 = 30;
/// Moods shown in the monthly distribution.
pub const DISTRIBUTION_LIMIT: usize = 8;

/// How often a mood occurs in a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodCount {
    pub mood: MoodId,
    pub count: usize,
}

/// Entries written on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Last seven days at a glance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklySummary {
    pub entries: usize,
    /// Up to two most frequent moods, most frequent first.
    pub top_moods: Vec<MoodId>,
}

/// Consecutive days with at least one entry, counting back from `today`.
///
/// Zero when there is no entry on `today`.
pub fn current_streak(entries: &[JournalEntry], today: NaiveDate) -> u32 {
    let days: BTreeSet<NaiveDate> = entries.iter().map(|e| e.date.date_naive()).collect();
    let mut streak = 0;
    let mut day = today;
    while days.contains(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(previous) => day = previous,
            None => break,
        }
    }
    streak
}

/// Mood counts for entries on or after `since`, most frequent first.
///
/// Equal counts keep catalog order. At most `limit` moods are returned.
pub fn mood_distribution(entries: &[JournalEntry], since: DateTime<Utc>, limit: usize) -> Vec<MoodCount> {
    let mut counts = [0usize; MoodId::COUNT];
    for entry in entries.iter().filter(|e| e.date >= since) {
        counts[entry.mood.index()] += 1;
    }
    let mut distribution: Vec<MoodCount> = MoodId::ALL
        .into_iter()
        .zip(counts)
        .filter(|&(_, count)| count > 0)
        .map(|(mood, count)| MoodCount { mood, count })
        .collect();
    distribution.sort_by(|a, b| b.count.cmp(&a.count));
    distribution.truncate(limit);
    distribution
}

/// The `limit` most frequent moods since `since`.
pub fn dominant_moods(entries: &[JournalEntry], since: DateTime<Utc>, limit: usize) -> Vec<MoodId> {
    mood_distribution(entries, since, limit)
        .into_iter()
        .map(|c| c.mood)
        .collect()
}

/// Entry count and top two moods over the seven days before `now`.
pub fn weekly_summary(entries: &[JournalEntry], now: DateTime<Utc>) -> WeeklySummary {
    let since = now - Duration::days(WEEK_DAYS);
    WeeklySummary {
        entries: entries.iter().filter(|e| e.date >= since).count(),
        top_moods: dominant_moods(entries, since, 2),
    }
}

/// Per-day entry counts for the `days` days ending on `today`, oldest first.
pub fn entries_per_day(entries: &[JournalEntry], today: NaiveDate, days: u32) -> Vec<DayCount> {
    (0..i64::from(days))
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            let count = entries.iter().filter(|e| e.date.date_naive() == date).count();
            DayCount { date, count }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32, mood: MoodId) -> JournalEntry {
        JournalEntry {
            date: Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap(),
            mood,
            confidence: 0.8,
            text: String::new(),
            reply: None,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn streak_counts_consecutive_days() {
        let entries = vec![
            at(10, 20, MoodId::Happy),
            at(10, 8, MoodId::Calm),
            at(9, 12, MoodId::Sad),
            at(8, 12, MoodId::Sad),
            at(6, 12, MoodId::Tired),
        ];
        assert_eq!(current_streak(&entries, day(10)), 3);
        assert_eq!(current_streak(&entries, day(6)), 1);
    }

    #[test]
    fn streak_is_zero_without_entry_today() {
        let entries = vec![at(9, 12, MoodId::Sad)];
        assert_eq!(current_streak(&entries, day(10)), 0);
        assert_eq!(current_streak(&[], day(10)), 0);
    }

    #[test]
    fn distribution_orders_by_count_then_catalog() {
        let entries = vec![
            at(10, 9, MoodId::Tired),
            at(10, 10, MoodId::Tired),
            at(9, 9, MoodId::Guilty),
            at(9, 10, MoodId::Happy),
            at(1, 10, MoodId::Sad),
        ];
        let since = Utc.with_ymd_and_hms(2026, 3, 5, 0, 0, 0).unwrap();
        let distribution = mood_distribution(&entries, since, 8);
        assert_eq!(
            distribution,
            vec![
                MoodCount { mood: MoodId::Tired, count: 2 },
                MoodCount { mood: MoodId::Happy, count: 1 },
                MoodCount { mood: MoodId::Guilty, count: 1 },
            ]
        );
        assert_eq!(dominant_moods(&entries, since, 1), vec![MoodId::Tired]);
    }

    #[test]
    fn weekly_summary_uses_last_seven_days() {
        let entries = vec![
            at(10, 9, MoodId::Calm),
            at(8, 9, MoodId::Anxious),
            at(7, 9, MoodId::Anxious),
            at(1, 9, MoodId::Sad),
        ];
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        let summary = weekly_summary(&entries, now);
        assert_eq!(summary.entries, 3);
        assert_eq!(summary.top_moods, vec![MoodId::Anxious, MoodId::Calm]);
    }

    #[test]
    fn weekly_summary_of_empty_journal() {
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        let summary = weekly_summary(&[], now);
        assert_eq!(summary.entries, 0);
        assert!(summary.top_moods.is_empty());
    }

    #[test]
    fn per_day_counts_oldest_first() {
        let entries = vec![at(10, 9, MoodId::Calm), at(10, 18, MoodId::Calm), at(8, 9, MoodId::Sad)];
        let counts = entries_per_day(&entries, day(10), 3);
        assert_eq!(
            counts,
            vec![
                DayCount { date: day(8), count: 1 },
                DayCount { date: day(9), count: 0 },
                DayCount { date: day(10), count: 2 },
            ]
        );
    }
}
