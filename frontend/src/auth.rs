//! 认证模块
//!
//! 管理用户认证状态，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。

use gamepass::SessionStore;
use gamepass_shared::Session;
use leptos::prelude::*;

use crate::web::SessionStorage;

/// 认证上下文
///
/// 包装会话存储的读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    store: RwSignal<SessionStore<SessionStorage>>,
}

impl AuthContext {
    /// 从 sessionStorage 恢复上次的会话
    pub fn new() -> Self {
        Self {
            store: RwSignal::new(SessionStore::restore(SessionStorage)),
        }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let store = self.store;
        Signal::derive(move || store.with(|s| s.is_authenticated()))
    }

    /// 当前用户（响应式）
    pub fn session(&self) -> Option<Session> {
        self.store.with(|s| s.session().cloned())
    }

    /// 当前 token（响应式）
    pub fn token(&self) -> Option<String> {
        self.store.with(|s| s.token().map(str::to_string))
    }

    /// 登录并持久化
    pub fn login(&self, session: Session) {
        self.store.update(|s| s.login(session));
    }

    /// 注销并清除状态
    ///
    /// 导航将由路由服务的认证状态监听自动处理。
    pub fn logout(&self) {
        self.store.update(|s| s.logout());
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
