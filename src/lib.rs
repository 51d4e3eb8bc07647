pub mod apple;
pub mod board_info;
pub mod config;
pub mod error;
pub mod game;
pub mod game_loop;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
