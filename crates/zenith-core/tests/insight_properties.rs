use proptest::prelude::*;
use zenith_core::insight::{
    Consistency, DominantEmotion, POSITIVE_WORDS, STRESS_WORDS, StressLevel, analyze,
    scan_keywords,
};
use zenith_core::model::{JournalEntry, Task};

fn arb_tasks() -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec(any::<bool>(), 0..64).prop_map(|flags| {
        flags
            .into_iter()
            .enumerate()
            .map(|(i, completed)| Task::new(i.to_string(), format!("task {i}"), completed))
            .collect()
    })
}

fn arb_entries() -> impl Strategy<Value = Vec<JournalEntry>> {
    let word = prop::sample::select(
        STRESS_WORDS
            .iter()
            .chain(POSITIVE_WORDS.iter())
            .copied()
            .chain(["today", "walked", "coffee", "MEETING", "Stressed", "Proud"])
            .collect::<Vec<_>>(),
    );
    prop::collection::vec(prop::collection::vec(word, 0..12), 0..6).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, words)| JournalEntry::new(i.to_string(), "", words.join(" ")))
            .collect()
    })
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(512))]

    #[test]
    fn completion_rate_matches_rounded_ratio(tasks in arb_tasks()) {
        let report = analyze(&[], &tasks);
        let rate = report.productivity_analysis.completion_rate;
        prop_assert!(rate <= 100);

        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        let expected = if total == 0 {
            0
        } else {
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let rounded = (100.0 * completed as f64 / total as f64).round() as u32;
            rounded
        };
        prop_assert_eq!(rate, expected);
    }

    #[test]
    fn analyze_is_idempotent(entries in arb_entries(), tasks in arb_tasks()) {
        let first = serde_json::to_string(&analyze(&entries, &tasks)).unwrap();
        let second = serde_json::to_string(&analyze(&entries, &tasks)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn repeating_text_keeps_distinct_counts(entries in arb_entries(), repeats in 1usize..50) {
        let repeated: Vec<JournalEntry> = entries
            .iter()
            .map(|e| JournalEntry::new(e.id.clone(), "", vec![e.content.as_str(); repeats].join(" ")))
            .collect();
        let scan = scan_keywords(&entries);
        prop_assert!(scan.stress_count() <= STRESS_WORDS.len());
        prop_assert!(scan.positive_count() <= POSITIVE_WORDS.len());

        let rescan = scan_keywords(&repeated);
        prop_assert_eq!(rescan.stress_count(), scan.stress_count());
        prop_assert_eq!(rescan.positive_count(), scan.positive_count());
        prop_assert_eq!(rescan, scan);
    }

    #[test]
    fn enums_agree_with_their_counts(entries in arb_entries(), tasks in arb_tasks()) {
        let scan = scan_keywords(&entries);
        let report = analyze(&entries, &tasks);
        let stress = scan.stress_count();
        let positive = scan.positive_count();

        let expected_emotion = if stress > positive {
            DominantEmotion::Anxious
        } else if positive > 0 {
            DominantEmotion::Positive
        } else {
            DominantEmotion::Neutral
        };
        prop_assert_eq!(report.emotional_analysis.dominant_emotion, expected_emotion);

        let expected_level = match stress {
            0 => StressLevel::Low,
            1 | 2 => StressLevel::Medium,
            _ => StressLevel::High,
        };
        prop_assert_eq!(report.emotional_analysis.stress_level, expected_level);

        let rate = report.productivity_analysis.completion_rate;
        let expected_consistency = if rate > 80 { Consistency::Excellent } else { Consistency::Fluctuating };
        prop_assert_eq!(report.productivity_analysis.consistency, expected_consistency);
        prop_assert_eq!(report.growth_areas[2].as_str(), "Mindfulness");
    }
}

#[test]
fn hundred_repeats_of_one_stress_word_count_once() {
    let text = "Overwhelmed ".repeat(100);
    let scan = scan_keywords(&[JournalEntry::new("1", "", text)]);
    assert_eq!(scan.stress_count(), 1);

    let report = analyze(&[JournalEntry::new("1", "", "overwhelmed ".repeat(100))], &[]);
    assert_eq!(report.emotional_analysis.stress_level, StressLevel::Medium);
}

#[test]
fn three_stress_words_are_high() {
    let report = analyze(
        &[JournalEntry::new("1", "", "busy, tired, and one more deadline")],
        &[],
    );
    assert_eq!(report.emotional_analysis.stress_level, StressLevel::High);
}
