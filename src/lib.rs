//! Pac-Man game engine library crate.

pub mod app;
pub mod audio;
pub mod autopilot;
pub mod constants;
pub mod entity;
pub mod error;
pub mod events;
pub mod formatter;
pub mod game;
pub mod input;
pub mod logging;
pub mod map;
pub mod render;
pub mod systems;
