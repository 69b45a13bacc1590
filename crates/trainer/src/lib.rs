pub use chess_core;

pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod puzzle;
pub mod render;
pub mod session;
