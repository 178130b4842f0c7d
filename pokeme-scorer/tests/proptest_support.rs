//! Proptest strategies for compatibility scoring property tests.
//!
//! Profiles are drawn from small vocabularies so that generated pairs share
//! sports, windows, and words often enough to exercise every factor.

use pokeme_core::{Availability, Candidate, Profile, SkillLevel, SportEntry};
use proptest::prelude::*;

const SPORTS: [&str; 6] = ["Tennis", "soccer", "BASKETBALL", "Golf", "yoga", " "];
const DAYS: [&str; 4] = ["monday", "Wednesday", "saturday", ""];
const SLOTS: [&str; 3] = ["morning", "Evening", "night"];
const YEARS: [&str; 7] = [
    "freshman",
    "Sophomore",
    "junior",
    "SENIOR",
    "graduate",
    "alumni",
    "",
];
const MAJORS: [&str; 4] = ["Economics", "economics ", "Computer Science", "Biology"];
const WORDS: [&str; 8] = [
    "pickup", "evenings", "the", "league", "casual", "a", "weekend", "runs",
];

fn skill_strategy() -> impl Strategy<Value = SkillLevel> {
    prop_oneof![
        Just(SkillLevel::Beginner),
        Just(SkillLevel::Intermediate),
        Just(SkillLevel::Advanced),
        Just(SkillLevel::Unknown),
    ]
}

fn sport_strategy() -> impl Strategy<Value = SportEntry> {
    (prop::sample::select(SPORTS.to_vec()), skill_strategy())
        .prop_map(|(sport, level)| SportEntry::new(sport, level))
}

/// Strategy for a sports list of up to five entries, duplicates allowed.
pub fn sports_strategy() -> impl Strategy<Value = Vec<SportEntry>> {
    prop::collection::vec(sport_strategy(), 0..=5)
}

/// Strategy for a weekly availability map with possibly blank days.
pub fn availability_strategy() -> impl Strategy<Value = Availability> {
    prop::collection::btree_map(
        prop::sample::select(DAYS.to_vec()).prop_map(str::to_owned),
        prop::collection::vec(
            prop::sample::select(SLOTS.to_vec()).prop_map(str::to_owned),
            0..=3,
        ),
        0..=3,
    )
}

fn optional_text(options: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(options.to_vec()).prop_map(str::to_owned))
}

fn bio_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(
        prop::collection::vec(prop::sample::select(WORDS.to_vec()), 0..=6)
            .prop_map(|words| words.join(" ")),
    )
}

/// Strategy for an arbitrary scoring profile.
pub fn profile_strategy() -> impl Strategy<Value = Profile> {
    (
        sports_strategy(),
        availability_strategy(),
        optional_text(&YEARS),
        optional_text(&MAJORS),
        bio_strategy(),
    )
        .prop_map(|(sports, availability, college_year, major, bio)| Profile {
            sports,
            availability,
            college_year,
            major,
            bio,
        })
}

/// Strategy for a candidate pool with unique ids.
pub fn pool_strategy(max_len: usize) -> impl Strategy<Value = Vec<Candidate>> {
    prop::collection::vec(profile_strategy(), 0..=max_len).prop_map(|profiles| {
        profiles
            .into_iter()
            .enumerate()
            .map(|(idx, profile)| {
                let id = format!("u-{idx}");
                Candidate::new(id.clone(), id, profile)
            })
            .collect()
    })
}
