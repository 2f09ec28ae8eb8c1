//! Fake Chat Client - 用于测试的聊天模型
//!
//! 始终返回固定回复，不实际调用外部服务

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::application::ports::{ChatCompletionPort, ChatError, ChatMessage};

/// Fake Chat Client
///
/// 记录调用次数和最后一次发送的消息
pub struct FakeChatClient {
    reply: Result<String, String>,
    calls: AtomicUsize,
    last_messages: Mutex<Vec<ChatMessage>>,
}

impl FakeChatClient {
    /// 总是返回 `reply`
    pub fn replying(reply: impl Into<String>) -> Self {
        Self::with_reply(Ok(reply.into()))
    }

    /// 总是返回 ServiceError
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_reply(Err(message.into()))
    }

    fn with_reply(reply: Result<String, String>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_messages: Mutex::new(Vec::new()),
        }
    }

    /// 已调用次数
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// 最后一次发送的消息
    pub fn last_messages(&self) -> Vec<ChatMessage> {
        self.last_messages
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ChatCompletionPort for FakeChatClient {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, ChatError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_messages.lock() {
            *last = messages;
        }

        self.reply.clone().map_err(ChatError::ServiceError)
    }
}
