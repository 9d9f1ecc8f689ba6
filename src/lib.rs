//! GamePass 客户端核心
//!
//! 与渲染技术无关的部分都在这里，可以在原生目标上直接测试：
//! - `request`: HTTP 传输抽象 (`HttpClient`) 与统一错误 `RequestError`
//! - `api`: 带 Bearer Token 的 JSON 请求封装与各个端点
//! - `session`: 标签页级会话存储
//! - `route`: 路由表与守卫
//! - `fetch`: 视图的 加载/成功/失败 状态机
//! - `leaderboard` / `activity` / `pass`: 展示层的派生数据
//! - `auth`: 登录、注册表单流程
//! - `profile`: 个人资料页显示的字段

// =========================================================
// 跨平台日志宏
// =========================================================

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub use web_sys as __web_sys;

#[cfg(target_arch = "wasm32")]
#[macro_export]
macro_rules! log_info {
    ($($t:tt)*) => ($crate::__web_sys::console::log_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
#[macro_export]
macro_rules! log_info {
    ($($t:tt)*) => (println!($($t)*))
}

#[cfg(target_arch = "wasm32")]
#[macro_export]
macro_rules! log_error {
    ($($t:tt)*) => ($crate::__web_sys::console::error_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
#[macro_export]
macro_rules! log_error {
    ($($t:tt)*) => (eprintln!($($t)*))
}

pub mod activity;
pub mod api;
pub mod auth;
pub mod config;
pub mod fetch;
pub mod leaderboard;
pub mod pass;
pub mod profile;
pub mod request;
pub mod route;
pub mod session;

pub use api::GamePassApi;
pub use config::ApiConfig;
pub use gamepass_shared as shared;
pub use request::{HttpClient, RequestError};
pub use session::{SessionBackend, SessionStore};
