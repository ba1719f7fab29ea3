//! Glue between a host (window, terminal, browser canvas) and the engine.

use tracing::{debug, info};

use crate::audio::{AudioBackend, AudioSync};
use crate::error::{GameError, GameResult};
use crate::events::GameCommand;
use crate::game::Game;
use crate::input::{Bindings, TouchButtons, TouchPad};
use crate::render::hud::{hud_text, status_message};
use crate::render::{render, DrawCommand};
use crate::systems::{DecisionSource, RandomSource};

/// Whatever the host draws on.
pub trait Surface {
    /// Replays one frame of draw commands.
    fn draw(&mut self, commands: &[DrawCommand]);

    fn set_hud(&mut self, text: &str);

    /// Shows a status line, or clears it with `None`.
    fn set_status(&mut self, text: Option<&str>);
}

/// A mounted game: one surface, one audio backend, one engine.
///
/// Each [`App::frame`] runs simulation, then render, then audio resync, in that order.
pub struct App<S, A, D = RandomSource> {
    surface: S,
    audio: AudioSync<A>,
    game: Game<D>,
    bindings: Bindings,
    touch: TouchPad,
}

impl<S: Surface, A: AudioBackend, D: DecisionSource> App<S, A, D> {
    /// Attaches the game to a surface and draws the idle board.
    ///
    /// Fails with [`GameError::MountMissing`] when the host has no surface to offer.
    pub fn mount(surface: Option<S>, audio: A, game: Game<D>) -> GameResult<Self> {
        let surface = surface.ok_or_else(|| GameError::MountMissing("no drawing surface provided".to_string()))?;

        let mut app = Self {
            surface,
            audio: AudioSync::new(audio),
            game,
            bindings: Bindings::default(),
            touch: TouchPad::new(),
        };
        app.present();
        app.audio.resync(app.game.state());

        let size = app.game.state().canvas_size();
        info!(width = size.x, height = size.y, "Game mounted");
        Ok(app)
    }

    pub fn game(&self) -> &Game<D> {
        &self.game
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn audio(&self) -> &AudioSync<A> {
        &self.audio
    }

    /// Handles a key press by name. Returns whether the key was bound.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match self.bindings.command_for_key(key) {
            Some(command) => {
                self.command(command);
                true
            }
            None => false,
        }
    }

    pub fn touch_start(&mut self, button: TouchButtons) {
        if let Some(command) = self.touch.press(button) {
            self.command(command);
        }
    }

    pub fn touch_end(&mut self, button: TouchButtons) {
        self.touch.release(button);
    }

    /// Applies a command immediately.
    pub fn command(&mut self, command: GameCommand) {
        debug!(?command, "Command received");
        match command {
            GameCommand::MovePlayer(direction) => self.game.set_pacman_direction(direction),
            GameCommand::TogglePause => {
                self.game.toggle_pause();
                self.present();
            }
            GameCommand::ToggleMute => {
                self.audio.toggle_mute();
            }
            GameCommand::Start => {
                let event = self.game.start();
                self.audio.handle_events(&[event]);
                self.present();
            }
        }
        self.audio.resync(self.game.state());
    }

    /// Runs one display frame. Returns whether the host should schedule another.
    ///
    /// Idle and finished games do nothing and return `false`.
    pub fn frame(&mut self, timestamp_ms: f64) -> bool {
        if !self.game.is_running() {
            return false;
        }

        let events = self.game.frame(timestamp_ms);
        self.present();
        self.audio.handle_events(&events);
        self.audio.resync(self.game.state());

        self.game.is_running()
    }

    fn present(&mut self) {
        let state = self.game.state();
        self.surface.draw(&render(state));
        self.surface.set_hud(&hud_text(state));
        self.surface.set_status(status_message(state));
    }
}
