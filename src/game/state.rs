use glam::{IVec2, UVec2};
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use crate::constants::{
    FREEZE_TIME, GHOST_BASE_SPEED, GHOST_RELEASE_INTERVAL, GHOST_SPEED_PER_LEVEL, STARTING_LIVES, TILE_SIZE,
};
use crate::entity::ghost::{Ghost, GhostType};
use crate::entity::pacman::Pacman;
use crate::events::{Events, GameEvent};
use crate::map::direction::Direction;
use crate::map::grid::Grid;
use crate::map::parser::BlueprintParser;
use crate::systems::{collision_system, ghost_movement_system, item_system, pacman_movement_system, DecisionSource};

/// Where the game is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Loaded but never started.
    Idle,
    Running,
    Paused,
    /// Terminal until the next `start`.
    GameOver,
}

/// Everything the simulation knows. Owned outright; render and audio only read it.
#[derive(Debug, Clone)]
pub struct GameState {
    blueprint: Vec<String>,
    pub grid: Grid,
    /// Pellets and power pellets left on the grid.
    pub pellets_left: u32,
    pub player_spawn: IVec2,
    pub ghost_spawns: Vec<IVec2>,
    pub pacman: Pacman,
    pub ghosts: SmallVec<[Ghost; 4]>,
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    /// Seconds of frightened mode left; 0 when inactive.
    pub frightened_timer: f32,
    /// Seconds before actors move again after a spawn, death or level-up.
    pub freeze_timer: f32,
    /// Ever-increasing clock driving the mouth animation.
    pub mouth_clock: f32,
    /// Ghost speed for the current level, in tiles per second.
    pub ghost_speed: f32,
    pub phase: Phase,
}

impl GameState {
    /// Loads the blueprint and places every actor, without starting play.
    pub fn new<S: AsRef<str>>(blueprint: &[S]) -> Self {
        let blueprint: Vec<String> = blueprint.iter().map(|row| row.as_ref().to_owned()).collect();
        let parsed = BlueprintParser::parse(blueprint.as_slice());

        let mut state = Self {
            blueprint,
            grid: parsed.grid,
            pellets_left: parsed.consumables,
            player_spawn: parsed.player_spawn,
            ghost_spawns: parsed.ghost_spawns,
            pacman: Pacman::new(parsed.player_spawn),
            ghosts: SmallVec::new(),
            score: 0,
            lives: STARTING_LIVES,
            level: 1,
            frightened_timer: 0.0,
            freeze_timer: 0.0,
            mouth_clock: 0.0,
            ghost_speed: GHOST_BASE_SPEED,
            phase: Phase::Idle,
        };
        state.spawn_actors();
        state
    }

    /// Size of the canvas needed to draw this level, in pixels.
    pub fn canvas_size(&self) -> UVec2 {
        UVec2::new(self.grid.width() as u32, self.grid.height() as u32) * TILE_SIZE
    }

    /// Resets score, lives and level, reloads the grid and begins a run behind the freeze window.
    pub fn start(&mut self) -> GameEvent {
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.level = 1;
        self.ghost_speed = GHOST_BASE_SPEED;
        self.mouth_clock = 0.0;
        self.load_level();
        self.phase = Phase::Running;
        info!(pellets = self.pellets_left, ghosts = self.ghosts.len(), "Run started");
        GameEvent::RunStarted
    }

    /// Flips between running and paused. Returns whether the game is now paused.
    ///
    /// Does nothing before the first start or after game over.
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            other => other,
        };
        debug!(phase = ?self.phase, "Pause toggled");
        self.phase == Phase::Paused
    }

    /// Whether the frame loop should keep going: true while running or paused.
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running | Phase::Paused)
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Queues a direction for Pac-Man. Ignored unless the game is running.
    pub fn set_pacman_direction(&mut self, direction: Direction) {
        if self.phase == Phase::Running {
            self.pacman.set_direction(direction);
        }
    }

    /// Advances the simulation by `delta` seconds and reports what happened.
    ///
    /// Idle and finished games do not change. While paused or inside the freeze window only
    /// the freeze timer runs down. Otherwise Pac-Man moves and eats, then the ghosts move,
    /// then contacts are resolved.
    pub fn tick<D: DecisionSource + ?Sized>(&mut self, delta: f32, source: &mut D) -> Events {
        let mut events = Events::new();

        if !self.is_running() {
            return events;
        }

        if self.phase == Phase::Paused || self.freeze_timer > 0.0 {
            self.freeze_timer = (self.freeze_timer - delta).max(0.0);
            return events;
        }

        self.tick_frightened(delta);
        self.mouth_clock += delta;

        if let Some(cell) = pacman_movement_system(self, delta) {
            item_system(self, cell, &mut events);
            // A cleared level reloads everything behind a fresh freeze window
            if self.freeze_timer > 0.0 {
                return events;
            }
        }

        ghost_movement_system(self, delta, source);
        collision_system(self, &mut events);

        if !events.is_empty() {
            trace!(?events, score = self.score, "Tick events");
        }
        events
    }

    fn tick_frightened(&mut self, delta: f32) {
        if self.frightened_timer <= 0.0 {
            return;
        }

        self.frightened_timer = (self.frightened_timer - delta).max(0.0);
        if self.frightened_timer == 0.0 {
            for ghost in self.ghosts.iter_mut() {
                ghost.frightened = false;
            }
            debug!("Frightened mode ended");
        }
    }

    /// Takes a life. Ends the game at zero, otherwise puts every actor back on its spawn.
    pub fn lose_life(&mut self) -> GameEvent {
        self.lives = self.lives.saturating_sub(1);

        if self.lives == 0 {
            self.phase = Phase::GameOver;
            info!(score = self.score, level = self.level, "Game over");
            return GameEvent::GameOver;
        }

        debug!(lives = self.lives, "Life lost");
        self.spawn_actors();
        GameEvent::LifeLost
    }

    /// Moves to the next level: fresh grid, respawned actors and faster ghosts.
    pub fn next_level(&mut self) {
        self.level += 1;
        self.ghost_speed += GHOST_SPEED_PER_LEVEL;
        self.load_level();
        info!(level = self.level, ghost_speed = self.ghost_speed, "Level up");
    }

    fn load_level(&mut self) {
        let parsed = BlueprintParser::parse(self.blueprint.as_slice());
        self.grid = parsed.grid;
        self.pellets_left = parsed.consumables;
        self.player_spawn = parsed.player_spawn;
        self.ghost_spawns = parsed.ghost_spawns;
        self.spawn_actors();
    }

    /// Puts Pac-Man and the ghosts on their spawns, calms the ghosts and starts the freeze window.
    fn spawn_actors(&mut self) {
        self.pacman = Pacman::new(self.player_spawn);
        self.ghosts = self
            .ghost_spawns
            .iter()
            .enumerate()
            .map(|(index, &spawn)| {
                Ghost::new(
                    GhostType::for_index(index),
                    spawn,
                    self.ghost_speed,
                    index as f32 * GHOST_RELEASE_INTERVAL,
                )
            })
            .collect();
        self.frightened_timer = 0.0;
        self.freeze_timer = FREEZE_TIME;
    }
}
