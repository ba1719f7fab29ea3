use tracing::{debug, trace};

use crate::audio::{AmbientMode, AudioBackend, Sound};
use crate::events::GameEvent;
use crate::game::state::{GameState, Phase};

/// Keeps a backend in step with the game: effects for events, a loop for the current mode.
pub struct AudioSync<B> {
    backend: B,
    muted: bool,
    /// The mode last sent to the backend. `None` until the first resync.
    mode: Option<AmbientMode>,
}

impl<B: AudioBackend> AudioSync<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            muted: false,
            mode: None,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// The ambient mode the backend is currently looping, if any was set yet.
    pub fn mode(&self) -> Option<AmbientMode> {
        self.mode
    }

    /// Flips mute. Returns whether audio is now muted.
    ///
    /// The ambient loop follows on the next [`AudioSync::resync`].
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        debug!(muted = self.muted, "Audio mute toggled");
        self.muted
    }

    /// Plays the effect for every event, unless muted.
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        if self.muted {
            return;
        }

        for &event in events {
            let sound = Sound::for_event(event);
            trace!(sound = sound.as_ref(), "Playing sound");
            self.backend.play(sound);
        }
    }

    /// The loop the game calls for right now.
    ///
    /// Silent when muted, outside a running game and during the freeze window.
    pub fn derive_mode(&self, state: &GameState) -> AmbientMode {
        if self.muted || state.phase != Phase::Running || state.freeze_timer > 0.0 {
            AmbientMode::Muted
        } else if state.frightened_timer > 0.0 {
            AmbientMode::Frightened
        } else {
            AmbientMode::Chase
        }
    }

    /// Restarts the ambient loop only when the derived mode differs from the playing one.
    pub fn resync(&mut self, state: &GameState) {
        let mode = self.derive_mode(state);
        if self.mode == Some(mode) {
            return;
        }

        debug!(from = ?self.mode, to = mode.as_ref(), "Ambient mode changed");
        self.backend.set_ambient(mode);
        self.mode = Some(mode);
    }
}
