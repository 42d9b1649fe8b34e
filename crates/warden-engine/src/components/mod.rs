pub mod entity;
pub mod position;
pub mod collision;
pub mod render;
pub mod interaction;
pub mod behavior;
pub mod door;
