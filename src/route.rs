//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、哪些需要认证，以及守卫的判定。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 落地页 (默认路由)
    #[default]
    Landing,
    Login,
    Register,
    /// 游戏面板 (需要认证)
    Dashboard,
    /// 个人资料 (需要认证)
    Profile,
    /// 二维码通行证 (需要认证)
    QrCode,
    /// 总排行榜页面 (需要认证)
    Leaderboard,
    /// 单个游戏的活动详情 (需要认证)，参数是路由里的 gameId
    Game(String),
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Landing,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/dashboard" => Self::Dashboard,
            "/profile" => Self::Profile,
            "/qr-code" => Self::QrCode,
            "/leaderboard" => Self::Leaderboard,
            other => match other.strip_prefix("/game/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Self::Game(id.to_string()),
                _ => Self::NotFound,
            },
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Landing => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::Profile => "/profile".to_string(),
            Self::QrCode => "/qr-code".to_string(),
            Self::Leaderboard => "/leaderboard".to_string(),
            Self::Game(id) => format!("/game/{}", id),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Dashboard | Self::Profile | Self::QrCode | Self::Leaderboard | Self::Game(_)
        )
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 登录/注册成功后的固定落点（不保留原始请求路径）
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// 守卫判定结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// 直接渲染目标路由
    Render(AppRoute),
    /// 替换为另一个路由（受保护页面 -> 登录页）
    Redirect(AppRoute),
}

impl GuardDecision {
    pub fn route(&self) -> &AppRoute {
        match self {
            GuardDecision::Render(r) | GuardDecision::Redirect(r) => r,
        }
    }

    pub fn into_route(self) -> AppRoute {
        match self {
            GuardDecision::Render(r) | GuardDecision::Redirect(r) => r,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, GuardDecision::Redirect(_))
    }

    /// 被拦截的地址不进入历史记录，后退时不会再次落到受保护页面
    pub fn history_update(&self) -> HistoryUpdate {
        match self {
            GuardDecision::Render(_) => HistoryUpdate::Push,
            GuardDecision::Redirect(_) => HistoryUpdate::Replace,
        }
    }
}

/// 导航写入浏览器历史的方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryUpdate {
    Push,
    Replace,
}

/// 导航前的守卫：未认证访问受保护路由时改为登录页
pub fn guard(target: AppRoute, is_authenticated: bool) -> GuardDecision {
    if target.requires_auth() && !is_authenticated {
        GuardDecision::Redirect(AppRoute::auth_failure_redirect())
    } else {
        GuardDecision::Render(target)
    }
}

/// 会话变化时当前页面是否需要离开（注销后停留在受保护页面）
pub fn redirect_on_session_change(current: &AppRoute, is_authenticated: bool) -> Option<AppRoute> {
    if !is_authenticated && current.requires_auth() {
        Some(AppRoute::auth_failure_redirect())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROTECTED: [&str; 5] = [
        "/dashboard",
        "/profile",
        "/qr-code",
        "/leaderboard",
        "/game/batak-pro",
    ];

    #[test]
    fn test_paths_round_trip() {
        for path in ["/", "/login", "/register"]
            .into_iter()
            .chain(PROTECTED)
        {
            assert_eq!(AppRoute::from_path(path).to_path(), path);
        }
    }

    #[test]
    fn test_trailing_slash_and_unknown_paths() {
        assert_eq!(AppRoute::from_path("/dashboard/"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/game/"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/game/a/b"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/settings"), AppRoute::NotFound);
        assert_eq!(
            AppRoute::from_path("/game/anything"),
            AppRoute::Game("anything".into())
        );
    }

    #[test]
    fn test_unauthenticated_protected_access_redirects_to_login() {
        for path in PROTECTED {
            let decision = guard(AppRoute::from_path(path), false);
            assert_eq!(decision, GuardDecision::Redirect(AppRoute::Login), "{}", path);
        }
    }

    #[test]
    fn test_authenticated_access_renders_target() {
        for path in PROTECTED {
            let target = AppRoute::from_path(path);
            assert_eq!(guard(target.clone(), true), GuardDecision::Render(target));
        }
    }

    #[test]
    fn test_public_routes_never_redirect() {
        for route in [AppRoute::Landing, AppRoute::Login, AppRoute::Register, AppRoute::NotFound] {
            assert!(!guard(route.clone(), false).is_redirect());
            assert!(!guard(route, true).is_redirect());
        }
    }

    #[test]
    fn test_logout_on_protected_page_leaves_it() {
        assert_eq!(
            redirect_on_session_change(&AppRoute::Profile, false),
            Some(AppRoute::Login)
        );
        assert_eq!(redirect_on_session_change(&AppRoute::Profile, true), None);
        assert_eq!(redirect_on_session_change(&AppRoute::Landing, false), None);
    }

    #[test]
    fn test_guarded_redirect_replaces_history_entry() {
        assert_eq!(
            guard(AppRoute::Dashboard, false).history_update(),
            HistoryUpdate::Replace
        );
        assert_eq!(
            guard(AppRoute::Dashboard, true).history_update(),
            HistoryUpdate::Push
        );
        assert_eq!(guard(AppRoute::Login, false).history_update(), HistoryUpdate::Push);
    }
}
