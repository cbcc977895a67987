/// Offscreen render target management

pub mod offscreen;
pub mod ping_pong;

pub use offscreen::*;
pub use ping_pong::*;
