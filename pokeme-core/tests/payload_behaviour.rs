#![expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]

//! Behavioural tests for decoding discovery payloads into candidates.

use std::cell::RefCell;

use pokeme_core::{Candidate, ProfileJsonError, SkillLevel, candidates_from_json};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const SPARSE_USER: &str = r#"[
  {
    "id": "u-7",
    "displayName": "Riley",
    "sports": [{ "sport": "Soccer", "skillLevel": "Beginner" }],
    "availability": null,
    "collegeYear": null
  }
]"#;

const MIXED_LEVELS: &str = r#"[
  {
    "id": "u-1",
    "sports": [
      { "sport": "Tennis", "skillLevel": " ADVANCED " },
      { "sport": "Golf", "skillLevel": "pro" }
    ]
  }
]"#;

const MISSING_ID: &str = r#"[{ "displayName": "Nobody", "sports": [] }]"#;

#[derive(Debug, Default)]
struct PayloadWorld {
    payload: RefCell<&'static str>,
    decoded: RefCell<Option<Result<Vec<Candidate>, ProfileJsonError>>>,
}

impl PayloadWorld {
    fn candidate<T>(&self, id: &str, inspect: impl FnOnce(&Candidate) -> T) -> T {
        let borrowed = self.decoded.borrow();
        let candidates = borrowed
            .as_ref()
            .expect("payload should be decoded")
            .as_ref()
            .expect("payload should decode successfully");
        let found = candidates
            .iter()
            .find(|candidate| candidate.id == id)
            .expect("candidate should be present");
        inspect(found)
    }
}

#[fixture]
fn world() -> PayloadWorld {
    PayloadWorld::default()
}

fn unquote(value: &str) -> &str {
    value.trim_matches('"')
}

#[given("the {name} candidate payload")]
fn given_payload(world: &PayloadWorld, name: String) {
    let payload = match unquote(&name) {
        "sparse_user" => SPARSE_USER,
        "mixed_levels" => MIXED_LEVELS,
        "missing_id" => MISSING_ID,
        other => panic!("unknown payload fixture: {other}"),
    };
    world.payload.replace(payload);
}

#[when("the candidate payload is decoded")]
fn when_decoded(world: &PayloadWorld) {
    let decoded = candidates_from_json(*world.payload.borrow());
    world.decoded.replace(Some(decoded));
}

#[then("{count} candidate is decoded")]
fn then_count(world: &PayloadWorld, count: usize) {
    let borrowed = world.decoded.borrow();
    let candidates = borrowed
        .as_ref()
        .expect("payload should be decoded")
        .as_ref()
        .expect("payload should decode successfully");
    assert_eq!(candidates.len(), count);
}

#[then("candidate {id} has no availability")]
fn then_no_availability(world: &PayloadWorld, id: String) {
    world.candidate(unquote(&id), |candidate| {
        assert!(candidate.profile.availability.is_empty());
        assert!(candidate.profile.college_year.is_none());
    });
}

#[then("candidate {id} has display name {name}")]
fn then_display_name(world: &PayloadWorld, id: String, name: String) {
    world.candidate(unquote(&id), |candidate| {
        assert_eq!(candidate.display_name, unquote(&name));
    });
}

#[then("candidate {id} plays {sport} at {level}")]
fn then_plays_at(world: &PayloadWorld, id: String, sport: String, level: String) {
    let expected = SkillLevel::from(unquote(&level));
    world.candidate(unquote(&id), |candidate| {
        let entry = candidate
            .profile
            .sports
            .iter()
            .find(|entry| entry.sport.eq_ignore_ascii_case(unquote(&sport)))
            .expect("sport should be listed");
        assert_eq!(entry.skill_level, expected);
    });
}

#[then("decoding fails for the candidate list")]
fn then_decoding_fails(world: &PayloadWorld) {
    let borrowed = world.decoded.borrow();
    let err = borrowed
        .as_ref()
        .expect("payload should be decoded")
        .as_ref()
        .expect_err("missing id should be rejected");
    assert!(matches!(
        err,
        ProfileJsonError::Decode {
            what: "candidate list",
            ..
        }
    ));
}

#[scenario(path = "tests/features/payload.feature", index = 0)]
fn sparse_user_decodes(world: PayloadWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/payload.feature", index = 1)]
fn skill_levels_are_lenient(world: PayloadWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/payload.feature", index = 2)]
fn missing_id_is_rejected(world: PayloadWorld) {
    let _ = world;
}
