pub mod types;
pub mod game;
pub mod state;
pub mod runner;
