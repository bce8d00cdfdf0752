mod common;

use std::collections::HashSet;

use proptest::prelude::*;
use recant::config::DetectorConfig;
use recant::intelligence::utils::{cosine_similarity, jaccard_similarity};
use recant::intelligence::ContradictionClassifier;
use recant::models::{Segment, TranscriptSet};
use recant::processing::LanguageResources;
use recant::services::InconsistencyAggregator;

const WORDS: &[&str] = &[
    "i", "was", "not", "never", "at", "home", "store", "car", "red", "saw", "him", "the", "day",
    "night", "left", "early", "nobody", "called", "police", "door",
];

const SPEAKERS: &[&str] = &["Suspect", "Witness", "Officer"];

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 3..8).prop_map(|words| {
        let mut text = words.join(" ");
        text.push('.');
        text
    })
}

fn transcript() -> impl Strategy<Value = Vec<Segment>> {
    prop::collection::vec((prop::sample::select(SPEAKERS), sentence()), 1..6).prop_map(|lines| {
        lines
            .into_iter()
            .enumerate()
            .map(|(i, (speaker, text))| {
                let start = i as f64 * 3.0;
                Segment::new(text, start, start + 2.0).with_speaker(speaker)
            })
            .collect()
    })
}

fn transcript_set() -> impl Strategy<Value = TranscriptSet> {
    prop::collection::vec(transcript(), 2..5).prop_map(|interviews| {
        interviews
            .into_iter()
            .enumerate()
            .map(|(i, t)| (format!("interview{}", i + 1), t))
            .collect()
    })
}

fn word_set() -> impl Strategy<Value = HashSet<String>> {
    prop::collection::hash_set(prop::sample::select(WORDS).prop_map(str::to_string), 0..10)
}

proptest! {
    #[test]
    fn jaccard_is_symmetric_and_bounded(a in word_set(), b in word_set()) {
        let forward = jaccard_similarity(&a, &b);
        prop_assert_eq!(forward, jaccard_similarity(&b, &a));
        match forward {
            Some(score) => prop_assert!((0.0..=1.0).contains(&score)),
            None => prop_assert!(a.is_empty() || b.is_empty()),
        }
    }

    #[test]
    fn cosine_is_bounded(
        a in prop::collection::vec(-10.0f64..10.0, 4),
        b in prop::collection::vec(-10.0f64..10.0, 4),
    ) {
        let score = cosine_similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn contradiction_is_negation_mismatch(a in sentence(), b in sentence()) {
        let resources = LanguageResources::default();
        let classifier = ContradictionClassifier::new(&resources);
        let expected = classifier.has_negation(&a) != classifier.has_negation(&b);
        prop_assert_eq!(classifier.is_contradiction(&a, &b), expected);
        prop_assert_eq!(classifier.is_contradiction(&b, &a), expected);
    }

    #[test]
    fn records_stay_cross_interview(input in transcript_set()) {
        let aggregator = common::english_aggregator();
        let report = aggregator.aggregate(&input);

        prop_assert_eq!(
            report.total_inconsistencies,
            report.contradictions.len() + report.similar_statements.len()
        );
        for record in report.records() {
            prop_assert!(record.interview_id_1 < record.interview_id_2);
            prop_assert!(record.statement_1.is_from(&record.interview_id_1));
            prop_assert!(record.statement_2.is_from(&record.interview_id_2));
            prop_assert!(record.similarity_score >= aggregator.config().similarity_threshold);
            prop_assert!(record.similarity_score <= 1.0);
        }
    }

    #[test]
    fn aggregation_is_deterministic(input in transcript_set()) {
        let parallel = common::english_aggregator().aggregate(&input);
        let sequential = InconsistencyAggregator::new(DetectorConfig {
            parallel: false,
            ..DetectorConfig::default()
        })
        .aggregate(&input);

        prop_assert_eq!(&parallel, &common::english_aggregator().aggregate(&input));
        prop_assert_eq!(&parallel, &sequential);
    }
}
