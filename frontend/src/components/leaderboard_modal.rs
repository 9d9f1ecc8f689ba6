use crate::api::use_api;
use crate::auth::use_auth;
use crate::components::icons::{Loader, Trophy, X};
use gamepass::fetch::{FetchState, FetchView};
use gamepass::leaderboard::{
    LEADERBOARD_EMPTY, LEADERBOARD_FAILED, LOADING_SCORES, RankBadge, score_label,
};
use gamepass::log_error;
use gamepass_shared::date::display_date;
use gamepass_shared::{GameSlug, LeaderboardEntry};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn entry_row(game: Option<GameSlug>, index: usize, entry: &LeaderboardEntry) -> impl IntoView {
    let badge = RankBadge::for_position(index);

    view! {
        <div class=format!("flex items-center p-3 rounded-xl border {}", badge.row_class())>
            <div class=format!(
                "w-6 h-6 flex items-center justify-center rounded-full font-bold text-sm mr-3 {}",
                badge.css_class(),
            )>{index + 1}</div>
            <div class="flex-1">
                <div class="font-bold text-gray-800 text-sm">{entry.username.clone()}</div>
                <div class="text-[10px] text-gray-500">{display_date(&entry.created_at)}</div>
            </div>
            <div class="font-bold text-red-600 text-base">{score_label(game, entry)}</div>
        </div>
    }
}

/// 单个游戏的排行榜弹窗；`game` 为空时不发请求
#[component]
pub fn LeaderboardModal(
    open: ReadSignal<bool>,
    #[prop(into)] on_close: Callback<()>,
    game: Option<GameSlug>,
    game_title: &'static str,
) -> impl IntoView {
    let auth_ctx = use_auth();
    let api = use_api();

    let state = RwSignal::new(FetchState::<LeaderboardEntry>::new());

    Effect::new(move |_| {
        if !open.get() {
            state.update(|s| s.cancel());
            return;
        }
        let (Some(game), Some(token)) = (game, auth_ctx.token()) else {
            return;
        };
        let Some(ticket) = state.try_update(|s| s.begin()) else {
            return;
        };

        let api = api.clone();
        spawn_local(async move {
            match api.leaderboard(game, &token).await {
                Ok(entries) => {
                    state.try_update(|s| s.resolve(ticket, entries));
                }
                Err(e) => {
                    log_error!("Error fetching leaderboard: {}", e);
                    state.try_update(|s| s.reject(ticket, LEADERBOARD_FAILED));
                }
            }
        });
    });

    let body = move || {
        state.with(|s| match s.view() {
            FetchView::Loading => view! {
                <div class="flex flex-col items-center justify-center py-8 text-gray-500">
                    <Loader attr:class="w-6 h-6 animate-spin mb-2" />
                    <p class="text-sm">{LOADING_SCORES}</p>
                </div>
            }
            .into_any(),
            FetchView::Failed(msg) => view! {
                <div class="text-center py-6 text-red-500 text-sm">{msg.to_string()}</div>
            }
            .into_any(),
            FetchView::Idle | FetchView::Empty => view! {
                <div class="text-center py-12 text-gray-500">{LEADERBOARD_EMPTY}</div>
            }
            .into_any(),
            FetchView::Entries(entries) => view! {
                <div class="space-y-2">
                    {entries
                        .iter()
                        .enumerate()
                        .map(|(i, entry)| entry_row(game, i, entry))
                        .collect_view()}
                </div>
            }
            .into_any(),
        })
    };

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 bg-black/60 backdrop-blur-sm z-50" on:click=move |_| on_close.run(())></div>
            <div class="fixed left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2 w-[90%] max-w-sm bg-white rounded-2xl shadow-2xl z-50 overflow-hidden">
                <div class="bg-red-600 p-4 flex justify-between items-center text-white">
                    <div class="flex items-center gap-3">
                        <Trophy attr:class="w-5 h-5 text-yellow-300" />
                        <h2 class="text-lg font-bold">{format!("{} Leaderboard", game_title)}</h2>
                    </div>
                    <button
                        class="p-1 hover:bg-white/20 rounded-full transition-colors"
                        on:click=move |_| on_close.run(())
                    >
                        <X attr:class="h-[18px] w-[18px]" />
                    </button>
                </div>
                <div class="p-4 max-h-[60vh] overflow-y-auto">{body}</div>
            </div>
        </Show>
    }
}
