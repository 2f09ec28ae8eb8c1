//! HTTP Handlers

mod audio;
mod chat;
mod ping;

pub use audio::*;
pub use chat::*;
pub use ping::*;
