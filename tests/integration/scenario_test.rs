//! End-to-end transport scenarios through the library API.

use playstate::player::{Action, Clock, ManualClock, Precondition};
use playstate::{PlaybackState, Transport};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn assert_invariants(state: &PlaybackState) {
    if state.playing() {
        assert!(state.pause_time().is_none(), "playing with a pause anchor");
    }
    if !state.track_loaded() {
        assert!(!state.playing(), "playing without a track");
    } else {
        assert!((0.0..=state.track_duration()).contains(&state.offset()));
    }
}

// ============================================================================
// Reference Scenario
// ============================================================================

#[test]
fn load_play_pause_seek_resume() {
    let clock = ManualClock::new(0.0);
    let mut state = PlaybackState::new();

    state.load_track(0, 120.0).unwrap();
    state.play(clock.now()).unwrap();

    clock.set(30.0);
    assert_eq!(state.position(clock.now()), 30.0);

    state.pause(clock.now()).unwrap();
    assert_eq!(state.position(clock.now()), 30.0);

    state.seek(10.0, clock.now()).unwrap();
    assert_eq!(state.position(clock.now()), 10.0);

    clock.set(40.0);
    state.play(clock.now()).unwrap();

    clock.set(50.0);
    assert_eq!(state.position(clock.now()), 20.0);
    assert_invariants(&state);
}

#[test]
fn play_before_load_is_rejected() {
    let mut state = PlaybackState::new();
    let err = state.play(0.0).unwrap_err();

    assert_eq!(err.action(), Action::Play);
    assert_eq!(err.reason(), Precondition::TrackNotLoaded);
    assert_eq!(state.interactions(), 0);
}

// ============================================================================
// Properties Over Transition Sequences
// ============================================================================

/// Seeded transport sequence with non-decreasing times.
fn sequence(seed: u64, len: usize) -> Vec<(Transport, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut now = 0.0;
    let mut steps = Vec::with_capacity(len);
    for _ in 0..len {
        now += rng.random_range(0..7) as f64;
        let transport = match rng.random_range(0..6) {
            0 | 5 => Transport::Play,
            1 => Transport::Pause,
            2 => Transport::Seek {
                target: rng.random_range(0..150) as f64,
            },
            3 => Transport::LoadTrack {
                index: rng.random_range(0..4),
                duration: 60.0 + rng.random_range(0..90) as f64,
            },
            _ => Transport::Unload,
        };
        steps.push((transport, now));
    }
    steps
}

#[test]
fn interactions_equal_successful_transitions() {
    for seed in 1..=20u64 {
        let mut state = PlaybackState::new();
        let mut applied = 0u64;

        for (transport, now) in sequence(seed, 200) {
            let before = state.clone();
            match state.apply(transport, now) {
                Ok(()) => applied += 1,
                Err(_) => assert_eq!(state, before, "rejected transition mutated state"),
            }
            assert!(state.interactions() >= before.interactions());
            assert_invariants(&state);
        }

        assert_eq!(state.interactions(), applied);
    }
}

#[test]
fn resume_is_continuous() {
    for seed in 1..=20u64 {
        let mut state = PlaybackState::new();
        for (transport, now) in sequence(seed, 100) {
            if transport == Transport::Play && state.track_loaded() && state.pause_time().is_some() {
                let before = state.clamped_position(now);
                state.play(now).unwrap();
                assert_eq!(state.position(now), before);
            } else {
                let _ = state.apply(transport, now);
            }
        }
    }
}

#[test]
fn seek_while_playing_reads_back_target() {
    let mut state = PlaybackState::new();
    state.load_track(2, 300.0).unwrap();
    state.play(100.0).unwrap();

    for (i, target) in [0.0, 45.5, 299.0, 300.0].into_iter().enumerate() {
        let now = 110.0 + i as f64;
        state.seek(target, now).unwrap();
        assert_eq!(state.position(now), target);
    }
}
