//! This module describes the game's sound as synthesized tone sequences.
//!
//! Nothing here produces samples. Backends receive [`Sound`]s and [`AmbientMode`]s and
//! turn their tones into whatever the platform plays.

use strum_macros::{AsRefStr, EnumIter};

use crate::events::GameEvent;

pub mod sync;

pub use self::sync::AudioSync;

/// A single note: a frequency held for a duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Hertz.
    pub frequency: f32,
    /// Seconds.
    pub duration: f32,
}

impl Tone {
    pub const fn new(frequency: f32, duration: f32) -> Self {
        Self { frequency, duration }
    }
}

const WAKA: [Tone; 2] = [Tone::new(440.0, 0.04), Tone::new(330.0, 0.04)];
const POWER_UP: [Tone; 3] = [Tone::new(220.0, 0.06), Tone::new(330.0, 0.06), Tone::new(440.0, 0.08)];
const GHOST_EATEN: [Tone; 3] = [Tone::new(880.0, 0.05), Tone::new(1175.0, 0.05), Tone::new(1568.0, 0.1)];
const DEATH: [Tone; 4] = [
    Tone::new(494.0, 0.15),
    Tone::new(392.0, 0.15),
    Tone::new(330.0, 0.15),
    Tone::new(247.0, 0.3),
];
const LEVEL_UP: [Tone; 4] = [
    Tone::new(523.0, 0.1),
    Tone::new(659.0, 0.1),
    Tone::new(784.0, 0.1),
    Tone::new(1047.0, 0.2),
];
const BEGINNING: [Tone; 4] = [
    Tone::new(494.0, 0.12),
    Tone::new(988.0, 0.12),
    Tone::new(740.0, 0.12),
    Tone::new(622.0, 0.24),
];
const GAME_OVER: [Tone; 3] = [Tone::new(392.0, 0.25), Tone::new(311.0, 0.25), Tone::new(196.0, 0.5)];

const CHASE_PATTERN: [Tone; 2] = [Tone::new(180.0, 0.2), Tone::new(220.0, 0.2)];
const FRIGHTENED_PATTERN: [Tone; 2] = [Tone::new(600.0, 0.08), Tone::new(500.0, 0.08)];

/// One-shot sound effects, one per game event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Sound {
    Waka,
    PowerUp,
    GhostEaten,
    Death,
    LevelUp,
    Beginning,
    GameOver,
}

impl Sound {
    pub fn for_event(event: GameEvent) -> Self {
        match event {
            GameEvent::PelletEaten => Sound::Waka,
            GameEvent::PowerPelletEaten => Sound::PowerUp,
            GameEvent::GhostEaten => Sound::GhostEaten,
            GameEvent::LifeLost => Sound::Death,
            GameEvent::LevelUp => Sound::LevelUp,
            GameEvent::RunStarted => Sound::Beginning,
            GameEvent::GameOver => Sound::GameOver,
        }
    }

    pub fn tones(self) -> &'static [Tone] {
        match self {
            Sound::Waka => &WAKA,
            Sound::PowerUp => &POWER_UP,
            Sound::GhostEaten => &GHOST_EATEN,
            Sound::Death => &DEATH,
            Sound::LevelUp => &LEVEL_UP,
            Sound::Beginning => &BEGINNING,
            Sound::GameOver => &GAME_OVER,
        }
    }
}

/// The looping background sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum AmbientMode {
    Muted,
    Chase,
    Frightened,
}

impl AmbientMode {
    /// The tones repeated while this mode is active. Empty for [`AmbientMode::Muted`].
    pub fn pattern(self) -> &'static [Tone] {
        match self {
            AmbientMode::Muted => &[],
            AmbientMode::Chase => &CHASE_PATTERN,
            AmbientMode::Frightened => &FRIGHTENED_PATTERN,
        }
    }
}

/// Something that can actually make noise.
pub trait AudioBackend {
    /// Plays a one-shot effect over whatever is looping.
    fn play(&mut self, sound: Sound);

    /// Replaces the looping pattern with the one for `mode`, from its beginning.
    fn set_ambient(&mut self, mode: AmbientMode);
}

/// A backend that plays nothing, for headless runs and hosts without audio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioBackend for SilentAudio {
    fn play(&mut self, _sound: Sound) {}

    fn set_ambient(&mut self, _mode: AmbientMode) {}
}

impl<B: AudioBackend + ?Sized> AudioBackend for Box<B> {
    fn play(&mut self, sound: Sound) {
        (**self).play(sound);
    }

    fn set_ambient(&mut self, mode: AmbientMode) {
        (**self).set_ambient(mode);
    }
}
