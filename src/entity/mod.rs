pub mod actor;
pub mod ghost;
pub mod pacman;
