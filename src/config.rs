//! 运行时配置
//!
//! WASM 中没有进程环境变量，API 地址在编译期通过 `GAMEPASS_API_HOST` 注入，
//! 未设置时使用默认值。

/// 默认 API 地址
pub const DEFAULT_HOST_URL: &str = "https://colgate.onrender.com";

/// 会话在 sessionStorage 中的唯一键
pub const SESSION_STORAGE_KEY: &str = "user";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host_url: String,
}

impl ApiConfig {
    pub fn new(host_url: impl Into<String>) -> Self {
        let host_url = host_url.into().trim_end_matches('/').to_string();
        Self { host_url }
    }

    /// 读取编译期的 `GAMEPASS_API_HOST`，读不到就用默认值
    pub fn from_env() -> Self {
        Self::new(option_env!("GAMEPASS_API_HOST").unwrap_or(DEFAULT_HOST_URL))
    }

    /// Joins the host with an endpoint that may or may not start with `/`.
    pub fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.host_url, endpoint)
        } else {
            format!("{}/{}", self.host_url, endpoint)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slashes_and_joins() {
        let config = ApiConfig::new("http://localhost:4000//");
        assert_eq!(config.host_url, "http://localhost:4000");
        assert_eq!(config.url("/api/auth/login"), "http://localhost:4000/api/auth/login");
        assert_eq!(config.url("api/auth/login"), "http://localhost:4000/api/auth/login");
    }

    #[test]
    fn falls_back_to_default_host() {
        if option_env!("GAMEPASS_API_HOST").is_none() {
            assert_eq!(ApiConfig::default().host_url, DEFAULT_HOST_URL);
        }
    }
}
