use crate::{ActivityRecord, GameSlug, LeaderboardEntry, OverallLeaderboardEntry};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }

    /// Whether the request serializes itself as the JSON body.
    pub fn carries_body(&self) -> bool {
        !matches!(self, HttpMethod::Get)
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path (without query string).
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;

    /// Full endpoint including any query string.
    fn endpoint(&self) -> String {
        Self::PATH.to_string()
    }
}

// =========================================================
// Auth
// =========================================================

/// `user` object returned by both auth endpoints; only `id` is guaranteed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: AuthUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for LoginRequest {
    type Response = AuthResponse;
    const PATH: &'static str = "/api/auth/login";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub age: u32,
    pub gender: String,
    pub phone: String,
}

impl ApiRequest for RegisterRequest {
    type Response = AuthResponse;
    const PATH: &'static str = "/api/auth/register";
    const METHOD: HttpMethod = HttpMethod::Post;
}

// =========================================================
// Game activities & leaderboards
// =========================================================

/// Activity records of the signed-in user for one game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameActivitiesRequest {
    pub game: GameSlug,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameActivitiesResponse {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub data: Vec<ActivityRecord>,
}

impl ApiRequest for GameActivitiesRequest {
    type Response = GameActivitiesResponse;
    const PATH: &'static str = "/api/game-activities";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn endpoint(&self) -> String {
        format!("{}?game={}", Self::PATH, self.game)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardRequest {
    pub game: GameSlug,
}

/// Leaderboard endpoints report their own `success` flag alongside the status code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub leaderboard: Option<Vec<LeaderboardEntry>>,
}

impl LeaderboardResponse {
    /// Entries when the server flagged success, otherwise an empty board.
    pub fn into_entries(self) -> Vec<LeaderboardEntry> {
        match (self.success, self.leaderboard) {
            (true, Some(entries)) => entries,
            _ => Vec::new(),
        }
    }
}

impl ApiRequest for LeaderboardRequest {
    type Response = LeaderboardResponse;
    const PATH: &'static str = "/api/game-activities/leaderboard";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn endpoint(&self) -> String {
        format!("{}?game={}", Self::PATH, self.game)
    }
}

pub const DEFAULT_MAX_OVERALL_SCORE: f64 = 500.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallLeaderboardRequest;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallLeaderboardResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub leaderboard: Option<Vec<OverallLeaderboardEntry>>,
    #[serde(default)]
    pub max_overall_score: Option<f64>,
}

impl OverallLeaderboardResponse {
    /// `maxOverallScore` when the server sent a non-zero one.
    pub fn max_score(&self) -> Option<f64> {
        self.max_overall_score.filter(|m| *m != 0.0)
    }

    pub fn into_entries(self) -> Vec<OverallLeaderboardEntry> {
        match (self.success, self.leaderboard) {
            (true, Some(entries)) => entries,
            _ => Vec::new(),
        }
    }
}

impl ApiRequest for OverallLeaderboardRequest {
    type Response = OverallLeaderboardResponse;
    const PATH: &'static str = "/api/game-activities/leaderboard/overall";
    const METHOD: HttpMethod = HttpMethod::Get;
}
