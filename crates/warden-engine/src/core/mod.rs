pub mod geometry;
pub mod events;
pub mod world;
pub mod player;
pub mod collision;
pub mod scene;
