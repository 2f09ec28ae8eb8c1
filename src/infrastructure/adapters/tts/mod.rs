//! TTS Adapter - Kakao TTS 客户端实现

mod fake_tts_client;
mod kakao_tts_client;

pub use fake_tts_client::{FakeTtsClient, FakeTtsClientConfig};
pub use kakao_tts_client::*;
