//! This module defines the level grid and the blueprint it is loaded from.

pub mod direction;
pub mod grid;
pub mod parser;
