//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：读取已生成的音频

mod audio_queries;

pub mod handlers;

pub use audio_queries::*;
