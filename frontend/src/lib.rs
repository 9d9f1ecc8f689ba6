//! GamePass 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `gamepass::route`: 路由定义与守卫（领域模型，位于核心库）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 认证状态管理
//! - `api`: 注入到 Context 的 API 客户端
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod dashboard;
    pub mod game_detail;
    mod icons;
    pub mod landing;
    mod leaderboard_modal;
    pub mod leaderboard_page;
    pub mod login;
    mod overall_leaderboard_modal;
    pub mod profile;
    pub mod qr_code;
    pub mod register;
}

use crate::api::provide_api;
use crate::auth::AuthContext;
use crate::components::dashboard::DashboardPage;
use crate::components::game_detail::GameDetailPage;
use crate::components::landing::LandingPage;
use crate::components::leaderboard_page::LeaderboardPage;
use crate::components::login::LoginPage;
use crate::components::profile::ProfilePage;
use crate::components::qr_code::QrCodePage;
use crate::components::register::RegisterPage;

use gamepass::route::AppRoute;
use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web;

use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Landing => view! { <LandingPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::QrCode => view! { <QrCodePage /> }.into_any(),
        AppRoute::Leaderboard => view! { <LeaderboardPage /> }.into_any(),
        AppRoute::Game(game_id) => view! { <GameDetailPage game_id=game_id /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-gray-900 text-white">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-red-500">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文（从 sessionStorage 恢复会话）
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. API 客户端
    provide_api();

    // 3. 获取认证状态信号，用于注入路由服务（解耦！）
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 4. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
