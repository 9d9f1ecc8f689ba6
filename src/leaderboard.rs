//! 排行榜展示逻辑
//!
//! 排名与总分都由服务端计算，这里只负责分组（领奖台 / 表格）、徽章和数字格式。

use std::collections::HashSet;

use crate::fetch::FetchPhase;
use gamepass_shared::protocol::DEFAULT_MAX_OVERALL_SCORE;
use gamepass_shared::{GameSlug, LeaderboardEntry, OverallLeaderboardEntry, number_or};
use serde_json::Value;

pub const LOADING_SCORES: &str = "Loading scores...";
pub const LEADERBOARD_FAILED: &str = "Failed to load leaderboard";
pub const LEADERBOARD_EMPTY: &str = "No scores yet. Be the first!";

pub const LOADING_OVERALL: &str = "Loading overall scores...";
pub const OVERALL_FAILED: &str = "Failed to load overall leaderboard";
pub const OVERALL_EMPTY: &str = "No overall scores yet. Start playing!";
pub const NO_OTHER_PLAYERS: &str = "No other players found.";

/// 领奖台从左到右的名次
pub const PODIUM_ORDER: [u32; 3] = [2, 1, 3];

/// 领奖台卡片上分数列表的顺序
pub const PODIUM_GAMES: [GameSlug; 5] = [
    GameSlug::BatakPro,
    GameSlug::ArrowGame,
    GameSlug::PowerPunchMaxFresh,
    GameSlug::PlanogramGame,
    GameSlug::PurpleGame,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBadge {
    Gold,
    Silver,
    Bronze,
    Plain,
}

impl RankBadge {
    /// 1-based 名次
    pub fn for_rank(rank: u32) -> Self {
        match rank {
            1 => RankBadge::Gold,
            2 => RankBadge::Silver,
            3 => RankBadge::Bronze,
            _ => RankBadge::Plain,
        }
    }

    /// 0-based 列表下标（单个游戏排行榜按返回顺序编号）
    pub fn for_position(index: usize) -> Self {
        match u32::try_from(index) {
            Ok(i) if i < 3 => Self::for_rank(i + 1),
            _ => RankBadge::Plain,
        }
    }

    pub fn is_podium(&self) -> bool {
        !matches!(self, RankBadge::Plain)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            RankBadge::Gold => "bg-yellow-400 text-white",
            RankBadge::Silver => "bg-gray-400 text-white",
            RankBadge::Bronze => "bg-orange-400 text-white",
            RankBadge::Plain => "bg-gray-200 text-gray-600",
        }
    }

    pub fn row_class(&self) -> &'static str {
        if self.is_podium() {
            "bg-yellow-50 border-yellow-200"
        } else {
            "bg-gray-50 border-gray-100"
        }
    }
}

/// 单个游戏排行榜的分数文本：Batak Pro 按命中数，其余按分数
pub fn score_label(game: Option<GameSlug>, entry: &LeaderboardEntry) -> String {
    match game {
        Some(GameSlug::BatakPro) => format!("{} Hits", number_or(entry.button_hits.as_ref(), "0")),
        _ => format!("{} Pts", number_or(entry.score.as_ref(), "0")),
    }
}

// =========================================================
// 总排行榜页面: 领奖台 + 表格
// =========================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Standings {
    /// 按 `PODIUM_ORDER` 排列，缺失的名次保留空位
    pub podium: [Option<OverallLeaderboardEntry>; 3],
    /// 名次大于 3 的玩家，保持服务端顺序
    pub rest: Vec<OverallLeaderboardEntry>,
}

pub fn standings(entries: &[OverallLeaderboardEntry]) -> Standings {
    let podium = PODIUM_ORDER.map(|rank| entries.iter().find(|e| e.rank == rank).cloned());
    let rest = entries.iter().filter(|e| e.rank > 3).cloned().collect();
    Standings { podium, rest }
}

/// 排行榜页面在领奖台上方显示的提示；失败时仍保留上一次的排名
pub fn standings_notice(phase: &FetchPhase) -> Option<&'static str> {
    match phase {
        FetchPhase::Failed(_) => Some(OVERALL_FAILED),
        _ => None,
    }
}

/// 领奖台卡片上的每游戏分数，缺失记为 0
pub fn podium_scores(entry: &OverallLeaderboardEntry) -> Vec<(&'static str, String)> {
    PODIUM_GAMES
        .iter()
        .map(|game| (game.podium_label(), format_number(entry.game_score(*game))))
        .collect()
}

// =========================================================
// 总排行榜弹窗: 可展开行
// =========================================================

/// 已展开的 user id 集合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedRows(HashSet<String>);

impl ExpandedRows {
    pub fn toggle(&mut self, user_id: &str) {
        if !self.0.remove(user_id) {
            self.0.insert(user_id.to_string());
        }
    }

    pub fn is_expanded(&self, user_id: &str) -> bool {
        self.0.contains(user_id)
    }
}

/// 展开行里的 (游戏名, 分数)，按服务端给出的顺序
pub fn game_breakdown(entry: &OverallLeaderboardEntry) -> Vec<(String, String)> {
    entry
        .games
        .iter()
        .map(|(slug, score)| {
            let name = GameSlug::from_slug(slug)
                .map(|g| g.short_name().to_string())
                .unwrap_or_else(|| slug.clone());
            let score = match score {
                Value::Number(n) => n.as_f64().map(format_number).unwrap_or_else(|| n.to_string()),
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (name, score)
        })
        .collect()
}

pub fn games_played_label(count: usize) -> String {
    if count == 1 {
        "1 game".to_string()
    } else {
        format!("{} games", count)
    }
}

pub fn max_score_label(max: Option<f64>) -> String {
    format!(
        "Max Score: {}",
        format_number(max.unwrap_or(DEFAULT_MAX_OVERALL_SCORE))
    )
}

// =========================================================
// 数字格式
// =========================================================

/// 四舍五入到整数，.5 向上取
pub fn rounded_points(score: f64) -> i64 {
    (score + 0.5).floor() as i64
}

pub fn two_decimals(score: f64) -> String {
    format!("{:.2}", score)
}

/// 整数值不带小数点，其余按最短表示
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn overall(rank: u32, user_id: &str, score: f64) -> OverallLeaderboardEntry {
        serde_json::from_value(json!({
            "rank": rank,
            "userId": user_id,
            "username": user_id,
            "userEmail": format!("{}@example.com", user_id),
            "games": {},
            "overallScore": score
        }))
        .unwrap()
    }

    fn entry(value: serde_json::Value) -> LeaderboardEntry {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_podium_is_second_first_third() {
        let entries = vec![
            overall(1, "a", 300.0),
            overall(2, "b", 200.0),
            overall(3, "c", 100.0),
            overall(4, "d", 50.0),
        ];
        let standings = standings(&entries);

        let ranks: Vec<_> = standings
            .podium
            .iter()
            .map(|p| p.as_ref().map(|e| e.rank))
            .collect();
        assert_eq!(ranks, vec![Some(2), Some(1), Some(3)]);
        assert_eq!(standings.rest.len(), 1);
        assert_eq!(standings.rest[0].user_id, "d");
    }

    #[test]
    fn test_missing_rank_leaves_empty_slot() {
        let entries = vec![overall(1, "a", 10.0), overall(3, "c", 5.0)];
        let standings = standings(&entries);

        assert!(standings.podium[0].is_none());
        assert_eq!(standings.podium[1].as_ref().map(|e| e.rank), Some(1));
        assert_eq!(standings.podium[2].as_ref().map(|e| e.rank), Some(3));
        assert!(standings.rest.is_empty());
    }

    #[test]
    fn test_rest_keeps_server_order() {
        let entries = vec![overall(6, "f", 1.0), overall(4, "d", 3.0), overall(5, "e", 2.0)];
        let ids: Vec<_> = standings(&entries)
            .rest
            .into_iter()
            .map(|e| e.user_id)
            .collect();
        assert_eq!(ids, vec!["f", "d", "e"]);
    }

    #[test]
    fn test_score_label_depends_on_game() {
        let e = entry(json!({"id": "1", "username": "ada", "score": 42, "buttonHits": 17}));
        assert_eq!(score_label(Some(GameSlug::BatakPro), &e), "17 Hits");
        assert_eq!(score_label(Some(GameSlug::ArrowGame), &e), "42 Pts");

        let bare = entry(json!({"id": "2", "username": "bob"}));
        assert_eq!(score_label(Some(GameSlug::BatakPro), &bare), "0 Hits");
        assert_eq!(score_label(None, &bare), "0 Pts");
    }

    #[test]
    fn test_badges_by_position() {
        assert_eq!(RankBadge::for_position(0), RankBadge::Gold);
        assert_eq!(RankBadge::for_position(1), RankBadge::Silver);
        assert_eq!(RankBadge::for_position(2), RankBadge::Bronze);
        assert_eq!(RankBadge::for_position(3), RankBadge::Plain);
        assert!(!RankBadge::for_rank(4).is_podium());
    }

    #[test]
    fn test_expanded_rows_toggle() {
        let mut rows = ExpandedRows::default();
        rows.toggle("u1");
        rows.toggle("u2");
        assert!(rows.is_expanded("u1"));

        rows.toggle("u1");
        assert!(!rows.is_expanded("u1"));
        assert!(rows.is_expanded("u2"));
    }

    #[test]
    fn test_breakdown_uses_short_names_in_server_order() {
        let e: OverallLeaderboardEntry = serde_json::from_value(json!({
            "rank": 1,
            "userId": "u1",
            "username": "ada",
            "games": {"purple-game": 12.5, "power-punch-max-fresh": 80, "mystery": 3},
            "overallScore": 95.5
        }))
        .unwrap();

        assert_eq!(
            game_breakdown(&e),
            vec![
                ("Purple Game".to_string(), "12.5".to_string()),
                ("Power Punch".to_string(), "80".to_string()),
                ("mystery".to_string(), "3".to_string()),
            ]
        );
        assert_eq!(games_played_label(e.game_count()), "3 games");
        assert_eq!(games_played_label(1), "1 game");
    }

    #[test]
    fn test_podium_scores_default_to_zero() {
        let mut e = overall(1, "a", 0.0);
        e.games.insert("arrow-game".into(), json!(40));

        let scores = podium_scores(&e);
        assert_eq!(scores[0], ("Batak", "0".to_string()));
        assert_eq!(scores[1], ("Archery", "40".to_string()));
        assert_eq!(scores.len(), 5);
    }

    #[test]
    fn test_number_formats() {
        assert_eq!(rounded_points(123.5), 124);
        assert_eq!(rounded_points(123.49), 123);
        assert_eq!(two_decimals(87.456), "87.46");
        assert_eq!(two_decimals(10.0), "10.00");
        assert_eq!(max_score_label(None), "Max Score: 500");
        assert_eq!(max_score_label(Some(750.0)), "Max Score: 750");
    }

    #[test]
    fn test_failed_page_keeps_standings_and_shows_notice() {
        let mut state = crate::fetch::FetchState::new();
        let first = state.begin();
        assert!(state.resolve(first, vec![overall(1, "a", 300.0), overall(4, "d", 90.0)]));
        assert_eq!(standings_notice(state.phase()), None);

        let retry = state.begin();
        assert!(state.reject(retry, "Request failed"));
        assert_eq!(standings_notice(state.phase()), Some(OVERALL_FAILED));

        let kept = standings(state.data());
        assert_eq!(kept.podium[1].as_ref().map(|e| e.rank), Some(1));
        assert_eq!(kept.rest.len(), 1);
    }
}
