//! 游戏目录
//!
//! 五个固定的游戏 slug 及其展示信息，编译进客户端，从不从服务端获取。

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameSlug {
    BatakPro,
    PowerPunchMaxFresh,
    ArrowGame,
    PlanogramGame,
    PurpleGame,
}

impl GameSlug {
    /// Dashboard order.
    pub const ALL: [GameSlug; 5] = [
        GameSlug::BatakPro,
        GameSlug::PowerPunchMaxFresh,
        GameSlug::ArrowGame,
        GameSlug::PlanogramGame,
        GameSlug::PurpleGame,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameSlug::BatakPro => "batak-pro",
            GameSlug::PowerPunchMaxFresh => "power-punch-max-fresh",
            GameSlug::ArrowGame => "arrow-game",
            GameSlug::PlanogramGame => "planogram-game",
            GameSlug::PurpleGame => "purple-game",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == slug)
    }

    pub fn title(&self) -> &'static str {
        match self {
            GameSlug::BatakPro => "Batak Pro",
            GameSlug::PowerPunchMaxFresh => "Power Punch Max Fresh",
            GameSlug::ArrowGame => "Arrow Game",
            GameSlug::PlanogramGame => "Planogram Game",
            GameSlug::PurpleGame => "Purple Game",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GameSlug::BatakPro => "Test your reaction speed!",
            GameSlug::PowerPunchMaxFresh => "Show your strength!",
            GameSlug::ArrowGame => "Hit the target!",
            GameSlug::PlanogramGame => "Arrange items correctly.",
            GameSlug::PurpleGame => "Collect the purple items.",
        }
    }

    /// 总排行榜弹窗中展开明细时使用的名称
    pub fn short_name(&self) -> &'static str {
        match self {
            GameSlug::BatakPro => "Batak Pro",
            GameSlug::PowerPunchMaxFresh => "Power Punch",
            GameSlug::ArrowGame => "Arrow Game",
            GameSlug::PlanogramGame => "Planogram",
            GameSlug::PurpleGame => "Purple Game",
        }
    }

    /// 领奖台卡片上的简短标签
    pub fn podium_label(&self) -> &'static str {
        match self {
            GameSlug::BatakPro => "Batak",
            GameSlug::PowerPunchMaxFresh => "Punch",
            GameSlug::ArrowGame => "Archery",
            GameSlug::PlanogramGame => "Planogram",
            GameSlug::PurpleGame => "Purple",
        }
    }

    pub fn route(&self) -> String {
        format!("/game/{}", self.as_str())
    }
}

impl Display for GameSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameSlug {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s).ok_or_else(|| format!("unknown game slug: {}", s))
    }
}

/// Title/description pair shown on the game page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameInfo {
    pub slug: Option<GameSlug>,
    pub title: &'static str,
    pub description: &'static str,
}

impl GameInfo {
    /// Looks up the route parameter; unknown ids get the generic card and no slug.
    pub fn lookup(game_id: &str) -> Self {
        match GameSlug::from_slug(game_id) {
            Some(slug) => Self {
                slug: Some(slug),
                title: slug.title(),
                description: slug.description(),
            },
            None => Self {
                slug: None,
                title: "Game Activity",
                description: "Activity details...",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_parse_back_to_themselves() {
        for game in GameSlug::ALL {
            assert_eq!(game.as_str().parse::<GameSlug>(), Ok(game));
            assert_eq!(game.route(), format!("/game/{}", game));
        }
        assert!("power-punch".parse::<GameSlug>().is_err());
    }

    #[test]
    fn serde_uses_the_wire_slug() {
        let json = serde_json::to_string(&GameSlug::PowerPunchMaxFresh).unwrap();
        assert_eq!(json, "\"power-punch-max-fresh\"");
    }

    #[test]
    fn unknown_game_gets_generic_info() {
        let info = GameInfo::lookup("chess");
        assert_eq!(info.slug, None);
        assert_eq!(info.title, "Game Activity");

        let info = GameInfo::lookup("arrow-game");
        assert_eq!(info.slug, Some(GameSlug::ArrowGame));
        assert_eq!(info.description, "Hit the target!");
    }
}
