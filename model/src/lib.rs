//! Sliding-tile (2048) game model: the board, the swipe algorithm, tile
//! spawning, terminal checks and a game session built on top of them.

pub mod config;
pub mod field;
pub mod game;

pub use config::{ConfigError, GameConfig};
pub use field::{Field, Side, Swipe, Tile, TileId};
pub use game::{Game, Turn};
