// Host-side tests for the knowledge catalog.

use kinetic_core::catalog::{filter, tag_index, Difficulty, DifficultyFilter, SizeHint, KNOWLEDGE};
use kinetic_core::KineticError;
use std::collections::BTreeSet;

#[test]
fn catalog_has_six_entries_with_unique_ids() {
    assert_eq!(KNOWLEDGE.len(), 6);
    let ids: BTreeSet<_> = KNOWLEDGE.iter().map(|k| k.id).collect();
    assert_eq!(ids.len(), 6);
    assert_eq!(KNOWLEDGE[0].size, SizeHint::Large);
    assert_eq!(KNOWLEDGE[3].size, SizeHint::Tall);
}

#[test]
fn filter_by_difficulty() {
    assert_eq!(filter(KNOWLEDGE, DifficultyFilter::All).len(), 6);
    let advanced = filter(KNOWLEDGE, DifficultyFilter::Only(Difficulty::Advanced));
    assert_eq!(
        advanced.iter().map(|k| k.id).collect::<Vec<_>>(),
        vec!["1", "4", "6"]
    );
    assert_eq!(
        filter(KNOWLEDGE, DifficultyFilter::Only(Difficulty::Basic)).len(),
        1
    );
}

#[test]
fn difficulty_parsing() {
    assert_eq!("Intermediate".parse::<Difficulty>(), Ok(Difficulty::Intermediate));
    assert_eq!(" basic ".parse::<Difficulty>(), Ok(Difficulty::Basic));
    assert_eq!(
        "Expert".parse::<Difficulty>(),
        Err(KineticError::UnknownDifficulty("Expert".into()))
    );
    assert_eq!("All".parse::<DifficultyFilter>(), Ok(DifficultyFilter::All));
    assert_eq!(
        "advanced".parse::<DifficultyFilter>(),
        Ok(DifficultyFilter::Only(Difficulty::Advanced))
    );
    assert_eq!(Difficulty::Advanced.to_string(), "Advanced");
}

#[test]
fn tag_index_groups_ids() {
    let idx = tag_index(KNOWLEDGE);
    assert_eq!(idx.get("步法"), Some(&vec!["2", "3"]));
    assert_eq!(idx.get("微操"), Some(&vec!["6"]));
    assert!(idx.get("missing").is_none());
}
