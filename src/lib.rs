pub mod arena;
pub mod command;
pub mod config;
pub mod error;
pub mod game;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod orientation;
pub mod render;
pub mod robot;
