//! End-to-end journal flow without network access: classify (with and
//! without an arbiter), compose a reply, persist, and summarise.

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use moodsync::engine::{MoodId, VerdictSource};
use moodsync::stats::{current_streak, dominant_moods, weekly_summary};
use moodsync::{
    JournalEntry, JournalStore, MoodArbiter, MoodsyncConfig, MoodsyncError, analyze_mood, compose_reply,
};

/// Always answers with the same raw reply.
struct FixedArbiter(&'static str);

#[async_trait]
impl MoodArbiter for FixedArbiter {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn assess(&self, _text: &str) -> moodsync::Result<String> {
        Ok(self.0.to_owned())
    }
}

/// Always fails.
struct DownArbiter;

#[async_trait]
impl MoodArbiter for DownArbiter {
    fn name(&self) -> &str {
        "down"
    }

    async fn assess(&self, _text: &str) -> moodsync::Result<String> {
        Err(MoodsyncError::Arbiter("service unavailable".into()))
    }
}

fn quick_config() -> MoodsyncConfig {
    let mut config = MoodsyncConfig::default();
    config.arbiter.retry_backoff_ms = 0;
    config
}

#[tokio::test]
async fn week_of_entries() {
    let dir = tempfile::tempdir().unwrap();
    let store = JournalStore::open(dir.path().join("journal.json"));
    let config = quick_config();
    let start = Utc.with_ymd_and_hms(2026, 5, 4, 21, 0, 0).unwrap();

    let days = [
        "I'm feeling so anxious about tomorrow's presentation",
        "I failed my exam today and I feel so guilty and ashamed",
        "😊 Had a great day with friends!",
        "so tired",
        "Meditated this morning, feeling calm and peaceful 😌",
    ];
    for (offset, text) in days.iter().enumerate() {
        let result = analyze_mood(text, None, &config).await;
        let reply = compose_reply(text, &result);
        assert!(!reply.is_empty());
        let date = start + Duration::days(offset as i64);
        store
            .append(JournalEntry::from_classification(text, &result, date).with_reply(reply))
            .unwrap();
    }

    let entries = store.load().unwrap();
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0].mood, MoodId::Calm);
    assert_eq!(entries[4].mood, MoodId::Anxious);

    let last_day = start + Duration::days(4);
    assert_eq!(current_streak(&entries, last_day.date_naive()), 5);

    let summary = weekly_summary(&entries, last_day + Duration::hours(1));
    assert_eq!(summary.entries, 5);
    // All moods tie at one entry, so catalog order decides.
    assert_eq!(summary.top_moods, vec![MoodId::Happy, MoodId::Anxious]);
    assert_eq!(
        dominant_moods(&entries, start, 5),
        vec![MoodId::Happy, MoodId::Anxious, MoodId::Calm, MoodId::Tired, MoodId::Guilty]
    );
}

#[tokio::test]
async fn arbiter_verdict_is_stored() {
    let dir = tempfile::tempdir().unwrap();
    let store = JournalStore::open(dir.path().join("journal.json"));
    let arbiter = FixedArbiter("```json\n{\"mood\":\"hopeful\",\"confidence\":0.82,\"reasoning\":\"looking ahead\"}\n```");
    let text = "New job starts on Monday and I can't wait";

    let result = analyze_mood(text, Some(&arbiter), &quick_config()).await;
    assert_eq!(result.mood, MoodId::Hopeful);
    assert_eq!(result.source, VerdictSource::Arbiter);

    let entry = JournalEntry::from_classification(text, &result, Utc::now());
    store.append(entry).unwrap();
    let stored = store.load().unwrap();
    assert_eq!(stored[0].mood, MoodId::Hopeful);
    assert!((stored[0].confidence - 0.82).abs() < f64::EPSILON);
}

#[tokio::test]
async fn unavailable_arbiter_degrades_to_heuristic() {
    let text = "I am not happy today";
    let result = analyze_mood(text, Some(&DownArbiter), &quick_config()).await;
    assert_eq!(result, moodsync::engine::classify(text));
    assert_eq!(result.mood, MoodId::Sad);
}

#[tokio::test]
async fn config_file_drives_scoring() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[scoring.lexical]\nnegated_positive_sad = 0.0\n\n[arbiter]\nenabled = false\n").unwrap();
    let config = MoodsyncConfig::load(Some(&path)).unwrap();

    let arbiter = FixedArbiter(r#"{"mood":"joyful","confidence":0.9}"#);
    let result = analyze_mood("I am not happy today", Some(&arbiter), &config).await;
    assert_eq!(result.mood, MoodId::Disappointed);
    assert_eq!(result.source, VerdictSource::Heuristic);
}
