use gamepass_shared::protocol::{
    ApiRequest, AuthResponse, GameActivitiesRequest, HttpMethod, LeaderboardRequest, LoginRequest,
    OverallLeaderboardRequest, OverallLeaderboardResponse, RegisterRequest,
};
use gamepass_shared::{ActivityRecord, GameSlug, LeaderboardEntry};
use serde_json::Value;

use crate::config::ApiConfig;
use crate::request::{HttpClient, HttpRequest, RequestError};

const FALLBACK_ERROR_MESSAGE: &str = "Request failed";

/// JSON-over-HTTP client for the game service.
///
/// Tokens are always passed in per call; the client itself holds no session.
#[derive(Clone, Debug, PartialEq)]
pub struct GamePassApi<C> {
    config: ApiConfig,
    client: C,
}

impl<C: HttpClient> GamePassApi<C> {
    pub fn new(config: ApiConfig, client: C) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// 发送一次请求并解析 JSON 响应体
    ///
    /// 总是带 `Content-Type: application/json`，只有提供 token 时才带 `Authorization`。
    /// 非 2xx 时用响应体中的 `message` 作为错误信息。
    pub async fn request(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Result<Value, RequestError> {
        log_info!("API Request: {} {}", method.as_str(), endpoint);

        let mut req = HttpRequest::new(&self.config.url(endpoint), method)
            .with_header("Content-Type", "application/json");

        if let Some(token) = token.filter(|t| !t.is_empty()) {
            req = req.with_header("Authorization", &format!("Bearer {}", token));
        }

        if let Some(body) = body {
            req = req.with_body(body);
        }

        let resp = self.client.send(req).await.inspect_err(|e| {
            log_error!("API Transport Error: {} {}: {}", method.as_str(), endpoint, e);
        })?;

        let parsed = serde_json::from_str::<Value>(&resp.body);

        if !resp.is_success() {
            let message = parsed
                .ok()
                .as_ref()
                .and_then(|v| v.get("message"))
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .unwrap_or(FALLBACK_ERROR_MESSAGE)
                .to_string();
            log_error!("API Error: {} {} -> {}: {}", method.as_str(), endpoint, resp.status, message);
            return Err(RequestError::Status {
                status: resp.status,
                message,
            });
        }

        parsed.map_err(|e| RequestError::Decode(e.to_string()))
    }

    /// 发送类型化的请求
    pub async fn send<R: ApiRequest>(
        &self,
        req: &R,
        token: Option<&str>,
    ) -> Result<R::Response, RequestError> {
        let body = if R::METHOD.carries_body() {
            Some(serde_json::to_value(req).map_err(|e| RequestError::Encode(e.to_string()))?)
        } else {
            None
        };

        let value = self
            .request(&req.endpoint(), R::METHOD, body.as_ref(), token)
            .await?;

        serde_json::from_value(value).map_err(|e| RequestError::Decode(e.to_string()))
    }

    // =========================================================
    // Endpoints
    // =========================================================

    pub async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, RequestError> {
        self.send(req, None).await
    }

    pub async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, RequestError> {
        self.send(req, None).await
    }

    pub async fn game_activities(
        &self,
        game: GameSlug,
        token: &str,
    ) -> Result<Vec<ActivityRecord>, RequestError> {
        let resp = self.send(&GameActivitiesRequest { game }, Some(token)).await?;
        Ok(resp.data)
    }

    pub async fn leaderboard(
        &self,
        game: GameSlug,
        token: &str,
    ) -> Result<Vec<LeaderboardEntry>, RequestError> {
        let resp = self.send(&LeaderboardRequest { game }, Some(token)).await?;
        Ok(resp.into_entries())
    }

    pub async fn overall_leaderboard(
        &self,
        token: &str,
    ) -> Result<OverallLeaderboardResponse, RequestError> {
        self.send(&OverallLeaderboardRequest, Some(token)).await
    }
}

#[cfg(test)]
mod tests;
