//! 会话存储
//!
//! 每个标签页最多持有一个已登录用户。会话序列化为 JSON 存在单一的键下，
//! 进程启动时尝试恢复；存储缺失或损坏时以未认证状态启动。

use gamepass_shared::Session;

use crate::config::SESSION_STORAGE_KEY;

/// 标签页级键值存储（浏览器中是 sessionStorage）
pub trait SessionBackend {
    fn load(&self, key: &str) -> Option<String>;
    /// 返回是否写入成功
    fn save(&self, key: &str, value: &str) -> bool;
    /// 返回是否删除成功
    fn remove(&self, key: &str) -> bool;
}

#[derive(Debug, Clone)]
pub struct SessionStore<B> {
    backend: B,
    key: String,
    current: Option<Session>,
}

impl<B: SessionBackend> SessionStore<B> {
    /// 从存储中恢复上次的会话
    pub fn restore(backend: B) -> Self {
        Self::restore_with_key(backend, SESSION_STORAGE_KEY)
    }

    pub fn restore_with_key(backend: B, key: &str) -> Self {
        let current = backend.load(key).and_then(|raw| {
            serde_json::from_str::<Session>(&raw)
                .inspect_err(|e| log_error!("[Session] Ignoring unreadable stored session: {}", e))
                .ok()
        });

        Self {
            backend,
            key: key.to_string(),
            current,
        }
    }

    /// 替换当前会话并持久化
    pub fn login(&mut self, session: Session) {
        match serde_json::to_string(&session) {
            Ok(raw) => {
                if !self.backend.save(&self.key, &raw) {
                    log_error!("[Session] Failed to persist session, keeping it in memory only");
                }
            }
            Err(e) => log_error!("[Session] Failed to serialize session: {}", e),
        }
        self.current = Some(session);
    }

    /// 清除会话和存储
    pub fn logout(&mut self) {
        self.current = None;
        if !self.backend.remove(&self.key) {
            log_error!("[Session] Failed to clear stored session");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}

// =========================================================
// 测试工具: MemoryBackend
// =========================================================

#[cfg(test)]
pub use memory::MemoryBackend;
