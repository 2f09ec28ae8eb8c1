//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：聊天请求会调用外部服务并可能写入音频文件

mod chat_commands;

pub mod handlers;

pub use chat_commands::*;
