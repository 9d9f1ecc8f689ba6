use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

pub mod catalog;
pub mod date;
pub mod protocol;

pub use catalog::GameSlug;

/// 显式 `null` 与缺失字段一样取默认值
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// =========================================================
// 会话 (Session)
// =========================================================

/// 当前标签页内唯一的已登录用户记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl Session {
    /// First character of the display name, used for the profile avatar.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

// =========================================================
// 排行榜 (Leaderboards)
// =========================================================

/// Per-game leaderboard row, already rank-ordered by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub score: Option<Number>,
    #[serde(default)]
    pub button_hits: Option<Number>,
    #[serde(default)]
    pub attempts: Option<Number>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

/// Aggregate leaderboard row. `rank` and `overall_score` are authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallLeaderboardEntry {
    pub rank: u32,
    pub user_id: String,
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_email: String,
    /// slug -> score, in the order the server sent them
    #[serde(default, deserialize_with = "null_as_default")]
    pub games: Map<String, Value>,
    pub overall_score: f64,
}

impl OverallLeaderboardEntry {
    /// Number of games this player has a score for.
    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    /// Score for one game, `0` when the player never played it.
    pub fn game_score(&self, slug: GameSlug) -> f64 {
        self.games
            .get(slug.as_str())
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }
}

// =========================================================
// 游戏活动记录 (Game Activity)
// =========================================================

/// One play session. The shape varies by game, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    #[serde(default)]
    pub score: Option<Number>,
    #[serde(default)]
    pub button_hits: Option<Number>,
    #[serde(default)]
    pub session_time_seconds: Option<Number>,
    #[serde(default)]
    pub attempts: Option<Number>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: Map<String, Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

impl ActivityRecord {
    pub fn metadata_field(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }
}

// =========================================================
// JS 风格的取值辅助 (`value || fallback`)
// =========================================================

/// Truthiness as the API's JSON consumers understand it.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Renders a number, or `fallback` when it is absent or zero.
pub fn number_or(value: Option<&Number>, fallback: &str) -> String {
    match value {
        Some(n) if n.as_f64().is_some_and(|f| f != 0.0) => n.to_string(),
        _ => fallback.to_string(),
    }
}

/// Renders an arbitrary JSON value, or `fallback` when it is falsy.
pub fn value_or(value: Option<&Value>, fallback: &str) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(v) if is_truthy(v) => v.to_string(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn session_round_trips_with_camel_case_keys() {
        let raw = json!({
            "id": "u1",
            "name": "Ada",
            "username": "ada",
            "email": "ada@example.com",
            "token": "t0k",
            "photoUrl": "https://cdn/ada.png"
        });
        let session: Session = serde_json::from_value(raw).unwrap();
        assert_eq!(session.photo_url.as_deref(), Some("https://cdn/ada.png"));
        assert_eq!(session.age, None);

        let back = serde_json::to_value(&session).unwrap();
        assert!(back.get("age").is_none());
        assert_eq!(back["photoUrl"], "https://cdn/ada.png");
    }

    #[test]
    fn overall_entry_keeps_server_game_order() {
        let raw = json!({
            "rank": 4,
            "userId": "u4",
            "username": "dan",
            "userEmail": "dan@example.com",
            "games": { "purple-game": 3, "arrow-game": 9.5, "batak-pro": 12 },
            "overallScore": 24.5
        });
        let entry: OverallLeaderboardEntry = serde_json::from_value(raw).unwrap();
        let slugs: Vec<&str> = entry.games.keys().map(String::as_str).collect();
        assert_eq!(slugs, ["purple-game", "arrow-game", "batak-pro"]);
        assert_eq!(entry.game_count(), 3);
        assert_eq!(entry.game_score(GameSlug::ArrowGame), 9.5);
        assert_eq!(entry.game_score(GameSlug::PlanogramGame), 0.0);
    }

    #[test]
    fn fallbacks_follow_falsy_semantics() {
        let zero = Number::from(0);
        let seven = Number::from(7);
        assert_eq!(number_or(None, "0"), "0");
        assert_eq!(number_or(Some(&zero), "N/A"), "N/A");
        assert_eq!(number_or(Some(&seven), "0"), "7");

        assert_eq!(value_or(Some(&json!("")), "N/A"), "N/A");
        assert_eq!(value_or(Some(&json!("42s")), "N/A"), "42s");
        assert_eq!(value_or(Some(&json!(31)), "N/A"), "31");
        assert!(!is_truthy(&json!(false)));
        assert!(is_truthy(&json!({})));
    }
}
