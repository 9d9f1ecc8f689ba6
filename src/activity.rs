//! 游戏详情页的活动卡片
//!
//! 每个游戏在卡片上展示的两个指标是固定的查找表，字段缺失时退回到 `0` 或 `N/A`。

use gamepass_shared::date::display_date;
use gamepass_shared::{ActivityRecord, GameSlug, is_truthy, number_or, value_or};

pub const LOADING_ACTIVITY: &str = "Loading activity data...";
pub const ACTIVITY_FAILED: &str = "Failed to load game data";
pub const ACTIVITY_EMPTY: &str = "No data available yet.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
}

impl StatCard {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub date: String,
    pub primary: StatCard,
    pub secondary: Option<StatCard>,
}

/// 按游戏挑选主/次指标；`None` 表示路由参数不是已知游戏
pub fn activity_card(game: Option<GameSlug>, record: &ActivityRecord) -> ActivityCard {
    let (primary, secondary) = stats_for(game, record);
    ActivityCard {
        date: display_date(&record.created_at),
        primary,
        secondary,
    }
}

fn stats_for(game: Option<GameSlug>, record: &ActivityRecord) -> (StatCard, Option<StatCard>) {
    let score = || StatCard::new("Score", number_or(record.score.as_ref(), "0"));

    match game {
        Some(GameSlug::BatakPro) => (
            StatCard::new("Button Hits", number_or(record.button_hits.as_ref(), "0")),
            Some(StatCard::new(
                "Session Time",
                format!("{}s", number_or(record.session_time_seconds.as_ref(), "0")),
            )),
        ),
        Some(GameSlug::PowerPunchMaxFresh | GameSlug::ArrowGame) => (
            score(),
            Some(StatCard::new(
                "Attempts",
                number_or(record.attempts.as_ref(), "0"),
            )),
        ),
        Some(GameSlug::PlanogramGame) => (
            score(),
            Some(StatCard::new(
                "Time Taken",
                value_or(record.metadata_field("timeTaken"), "N/A"),
            )),
        ),
        Some(GameSlug::PurpleGame) => {
            let bonus = record.metadata_field("bonus").is_some_and(is_truthy);
            (
                score(),
                Some(StatCard::new(
                    "Bonus",
                    if bonus { "Yes" } else { "No" }.to_string(),
                )),
            )
        }
        None => (
            StatCard::new("Score", number_or(record.score.as_ref(), "N/A")),
            None,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> ActivityRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_batak_shows_hits_and_session_time() {
        let r = record(json!({"buttonHits": 31, "sessionTimeSeconds": 60, "createdAt": "bad-date"}));
        let card = activity_card(Some(GameSlug::BatakPro), &r);

        assert_eq!(card.primary, StatCard::new("Button Hits", "31".into()));
        assert_eq!(card.secondary, Some(StatCard::new("Session Time", "60s".into())));
        assert_eq!(card.date, "bad-date");
    }

    #[test]
    fn test_missing_fields_fall_back_to_zero() {
        let card = activity_card(Some(GameSlug::BatakPro), &ActivityRecord::default());
        assert_eq!(card.primary.value, "0");
        assert_eq!(card.secondary.unwrap().value, "0s");

        let card = activity_card(Some(GameSlug::ArrowGame), &record(json!({"score": 7})));
        assert_eq!(card.primary, StatCard::new("Score", "7".into()));
        assert_eq!(card.secondary, Some(StatCard::new("Attempts", "0".into())));
    }

    #[test]
    fn test_planogram_time_taken_from_metadata() {
        let r = record(json!({"score": 90, "metadata": {"timeTaken": "45s"}}));
        let card = activity_card(Some(GameSlug::PlanogramGame), &r);
        assert_eq!(card.secondary.unwrap().value, "45s");

        let card = activity_card(Some(GameSlug::PlanogramGame), &ActivityRecord::default());
        assert_eq!(card.secondary.unwrap().value, "N/A");
    }

    #[test]
    fn test_purple_bonus_is_yes_or_no() {
        let yes = record(json!({"score": 5, "metadata": {"bonus": true}}));
        let no = record(json!({"score": 5, "metadata": {"bonus": 0}}));

        let label = |r: &ActivityRecord| activity_card(Some(GameSlug::PurpleGame), r).secondary.unwrap().value;
        assert_eq!(label(&yes), "Yes");
        assert_eq!(label(&no), "No");
    }

    #[test]
    fn test_unknown_game_shows_single_score() {
        let card = activity_card(None, &ActivityRecord::default());
        assert_eq!(card.primary, StatCard::new("Score", "N/A".into()));
        assert_eq!(card.secondary, None);
    }
}
