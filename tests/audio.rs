use pacman_engine::audio::{AmbientMode, AudioBackend, AudioSync, SilentAudio, Sound};
use pacman_engine::events::GameEvent;
use pacman_engine::game::state::GameState;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;
use strum::IntoEnumIterator;

mod common;

#[derive(Default)]
struct RecordingAudio {
    played: Vec<Sound>,
    ambient: Vec<AmbientMode>,
}

impl AudioBackend for RecordingAudio {
    fn play(&mut self, sound: Sound) {
        self.played.push(sound);
    }

    fn set_ambient(&mut self, mode: AmbientMode) {
        self.ambient.push(mode);
    }
}

#[test]
fn test_every_sound_has_tones() {
    for sound in Sound::iter() {
        assert_that(&sound.tones().is_empty()).is_false();
        for tone in sound.tones() {
            assert_that(&tone.frequency).is_greater_than(0.0);
            assert_that(&tone.duration).is_greater_than(0.0);
        }
    }
    assert_that(&AmbientMode::Muted.pattern().is_empty()).is_true();
    assert_that(&AmbientMode::Chase.pattern().is_empty()).is_false();
    assert_that(&AmbientMode::Frightened.pattern().is_empty()).is_false();
}

#[test]
fn test_events_play_their_sounds() {
    let mut sync = AudioSync::new(RecordingAudio::default());
    sync.handle_events(&[GameEvent::PelletEaten, GameEvent::GhostEaten, GameEvent::GameOver]);

    assert_eq!(sync.backend().played, vec![Sound::Waka, Sound::GhostEaten, Sound::GameOver]);
}

#[test]
fn test_ambient_restarts_only_on_change() {
    let mut sync = AudioSync::new(RecordingAudio::default());
    let mut state = common::running_state(&["#.P.#"]);

    sync.resync(&state);
    sync.resync(&state);
    assert_eq!(sync.backend().ambient, vec![AmbientMode::Chase]);

    state.frightened_timer = 3.0;
    sync.resync(&state);
    sync.resync(&state);
    assert_eq!(sync.backend().ambient, vec![AmbientMode::Chase, AmbientMode::Frightened]);
    assert_that(&sync.mode()).is_equal_to(Some(AmbientMode::Frightened));
}

#[test]
fn test_ambient_is_silent_outside_play() {
    let sync = AudioSync::new(SilentAudio);
    let mut state = GameState::new(&["#.P.#"][..]);
    assert_that(&sync.derive_mode(&state)).is_equal_to(AmbientMode::Muted);

    state.start();
    assert_that(&sync.derive_mode(&state)).is_equal_to(AmbientMode::Muted);

    state.freeze_timer = 0.0;
    assert_that(&sync.derive_mode(&state)).is_equal_to(AmbientMode::Chase);

    state.toggle_pause();
    assert_that(&sync.derive_mode(&state)).is_equal_to(AmbientMode::Muted);
}

#[test]
fn test_mute_silences_everything() {
    let mut sync = AudioSync::new(RecordingAudio::default());
    let state = common::running_state(&["#.P.#"]);
    sync.resync(&state);

    assert_that(&sync.toggle_mute()).is_true();
    sync.handle_events(&[GameEvent::PelletEaten]);
    sync.resync(&state);

    assert_that(&sync.backend().played).is_empty();
    assert_eq!(sync.backend().ambient, vec![AmbientMode::Chase, AmbientMode::Muted]);

    assert_that(&sync.toggle_mute()).is_false();
    sync.resync(&state);
    assert_that(&sync.mode()).is_equal_to(Some(AmbientMode::Chase));
}
