//! Prompt selection tests.
//!
//! These tests verify the bounded dedup retry, the small-pool bypass,
//! category filtering and the make-your-own fallback.

use gamecircl_engine::content::{builtin, Prompt, PromptPool, MAKE_YOUR_OWN};
use gamecircl_engine::core::{
    Attribute, CountingUnit, GameVariant, Group, Session, SessionConfig, VariantConfig,
    DEDUP_MIN_POOL,
};

fn active_session(seed: u64) -> Session {
    let mut session = Session::new(VariantConfig::for_variant(GameVariant::WhoWouldRather), seed);
    session.add_participant("Ana", None).unwrap();
    session.add_participant("Ben", None).unwrap();
    session.start_session(SessionConfig::unbounded()).unwrap();
    session
}

fn numbered(size: usize) -> PromptPool {
    PromptPool::flat((0..size).map(|i| format!("Frage {}", i)))
}

fn consecutive_repeats(session: &mut Session, pool: &PromptPool, draws: usize) -> usize {
    let mut previous: Option<Prompt> = None;
    let mut repeats = 0;
    for _ in 0..draws {
        let prompt = session.select_prompt(pool, None).unwrap();
        if previous.as_ref() == Some(&prompt) {
            repeats += 1;
        }
        previous = Some(prompt);
    }
    repeats
}

// =============================================================================
// Dedup
// =============================================================================

/// Test that large pools repeat back-to-back in well under 1 of 6 draws.
#[test]
fn test_large_pool_repeat_rate() {
    let pool = numbered(DEDUP_MIN_POOL + 1);
    let mut session = active_session(7);

    let draws = 6000;
    let repeats = consecutive_repeats(&mut session, &pool, draws);
    assert!(repeats * 6 < draws, "repeats={}", repeats);
}

/// Test that the second draw of a fresh session almost never repeats the first.
#[test]
fn test_retry_avoids_early_repeats() {
    let pool = numbered(20);
    let mut repeats = 0;
    for seed in 0..500 {
        let mut session = active_session(seed);
        if consecutive_repeats(&mut session, &pool, 2) > 0 {
            repeats += 1;
        }
    }
    assert_eq!(repeats, 0);
}

/// Test that pools of ten or fewer skip the retry loop.
#[test]
fn test_small_pool_repeats_allowed() {
    let pool = numbered(DEDUP_MIN_POOL);
    let mut repeats = 0;
    for seed in 0..500 {
        let mut session = active_session(seed);
        if consecutive_repeats(&mut session, &pool, 2) > 0 {
            repeats += 1;
        }
    }
    // Roughly 1 in 10 without retries.
    assert!(repeats > 10, "repeats={}", repeats);

    let mut session = active_session(1);
    let single = PromptPool::flat(["Nur eine"]);
    assert_eq!(consecutive_repeats(&mut session, &single, 5), 4);
}

/// Test that every drawn prompt is recorded as seen.
#[test]
fn test_seen_prompts_recorded() {
    let pool = builtin::who_would_rather();
    let mut session = active_session(3);
    let mut drawn = Vec::new();
    for _ in 0..10 {
        drawn.push(session.select_prompt(&pool, None).unwrap());
    }
    for prompt in &drawn {
        assert!(session.state().seen_prompts.contains(prompt.text()));
    }
    assert_eq!(session.state().turns_completed, 0);
}

// =============================================================================
// Filtering and fallback
// =============================================================================

/// Test that a filter matching nothing returns the sentinel.
#[test]
fn test_empty_filter_returns_fallback() {
    let deck = builtin::truth_or_dare_deck();
    let mut session = active_session(1);

    let filter = vec!["Gibt es nicht".to_string()];
    let prompt = session.select_prompt(&deck.truth, Some(filter.as_slice())).unwrap();
    assert_eq!(prompt, Prompt::MakeYourOwn);
    assert_eq!(prompt.text(), MAKE_YOUR_OWN);

    let prompt = session.select_prompt(&deck.dare, Some(&[][..])).unwrap();
    assert!(prompt.is_fallback());

    let prompt = session.select_prompt(&PromptPool::default(), None).unwrap();
    assert!(prompt.is_fallback());
    assert!(session.state().seen_prompts.is_empty());
}

/// Test that draws stay inside the selected categories.
#[test]
fn test_draws_respect_categories() {
    let deck = builtin::truth_or_dare_deck();
    let filter = vec!["Mutprobe".to_string(), "Geheimnisse".to_string()];
    let allowed = deck.dare.candidates(Some(filter.as_slice()));

    let mut session = active_session(11);
    for _ in 0..50 {
        let prompt = session.select_prompt(&deck.dare, Some(filter.as_slice())).unwrap();
        assert!(allowed.contains(&prompt.text()));
    }
}

/// Test that a session started with categories uses them for its draws.
#[test]
fn test_session_categories_drive_draws() {
    let deck = builtin::truth_or_dare_deck();
    let mut session = Session::new(VariantConfig::for_variant(GameVariant::TruthOrDare), 5);
    session
        .add_participant("Ana", Some(Attribute::Group(Group::Any)))
        .unwrap();
    session
        .add_participant("Ben", Some(Attribute::Group(Group::Any)))
        .unwrap();
    session
        .start_session(SessionConfig::fixed(1, CountingUnit::Turns).with_categories(["Peinlich"]))
        .unwrap();

    let allowed = deck.truth.candidates(Some(&["Peinlich"][..]));
    for _ in 0..20 {
        let prompt = session.select_prompt_for_session(&deck.truth).unwrap();
        assert!(allowed.contains(&prompt.text()));
    }
}

/// Test that identical seeds draw identical prompts.
#[test]
fn test_draws_are_deterministic() {
    let pool = builtin::never_have_i_ever();
    let mut a = active_session(99);
    let mut b = active_session(99);
    for _ in 0..30 {
        assert_eq!(a.select_prompt(&pool, None).unwrap(), b.select_prompt(&pool, None).unwrap());
    }
}
