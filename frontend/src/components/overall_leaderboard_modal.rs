use crate::api::use_api;
use crate::auth::use_auth;
use crate::components::icons::{ChevronDown, ChevronUp, Loader, Trophy, X};
use gamepass::fetch::{FetchState, FetchView};
use gamepass::leaderboard::{
    ExpandedRows, LOADING_OVERALL, OVERALL_EMPTY, OVERALL_FAILED, RankBadge, game_breakdown,
    games_played_label, max_score_label, two_decimals,
};
use gamepass::log_error;
use gamepass_shared::OverallLeaderboardEntry;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
fn OverallRow(entry: OverallLeaderboardEntry, expanded: RwSignal<ExpandedRows>) -> impl IntoView {
    let badge = RankBadge::for_rank(entry.rank);
    let user_id = entry.user_id.clone();
    let is_open = {
        let user_id = user_id.clone();
        move || expanded.with(|rows| rows.is_expanded(&user_id))
    };
    let breakdown = game_breakdown(&entry);

    view! {
        <div class=format!("rounded-xl border overflow-hidden {}", badge.row_class())>
            <div
                class="flex items-center p-3 cursor-pointer hover:bg-white/50 transition-colors"
                on:click=move |_| expanded.update(|rows| rows.toggle(&user_id))
            >
                <div class=format!(
                    "w-6 h-6 flex items-center justify-center rounded-full font-bold text-sm mr-3 flex-shrink-0 {}",
                    badge.css_class(),
                )>{entry.rank}</div>
                <div class="flex-1 min-w-0">
                    <div class="font-bold text-gray-800 text-sm truncate">{entry.username.clone()}</div>
                    <div class="text-[10px] text-gray-500">{games_played_label(entry.game_count())}</div>
                </div>
                <div class="font-bold text-red-600 text-base mr-2">{two_decimals(entry.overall_score)}</div>
                <Show
                    when=is_open.clone()
                    fallback=|| view! { <ChevronDown attr:class="w-4 h-4 text-gray-400" /> }
                >
                    <ChevronUp attr:class="w-4 h-4 text-gray-400" />
                </Show>
            </div>

            <Show when=is_open>
                <div class="px-3 pb-3 pt-1 border-t border-gray-200/50 bg-white/30">
                    <div class="text-[10px] text-gray-500 mb-2 font-semibold">"Game Scores:"</div>
                    <div class="grid grid-cols-2 gap-2">
                        {breakdown
                            .clone()
                            .into_iter()
                            .map(|(name, score)| view! {
                                <div class="flex justify-between items-center bg-white rounded px-2 py-1">
                                    <span class="text-[10px] text-gray-600">{name}</span>
                                    <span class="text-xs font-bold text-gray-800">{score}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// 总排行榜弹窗，每次打开重新拉取
#[component]
pub fn OverallLeaderboardModal(
    open: ReadSignal<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let auth_ctx = use_auth();
    let api = use_api();

    let state = RwSignal::new(FetchState::<OverallLeaderboardEntry>::new());
    let max_score = RwSignal::new(Option::<f64>::None);
    let expanded = RwSignal::new(ExpandedRows::default());

    Effect::new(move |_| {
        if !open.get() {
            state.update(|s| s.cancel());
            return;
        }
        let Some(token) = auth_ctx.token() else {
            return;
        };
        let Some(ticket) = state.try_update(|s| s.begin()) else {
            return;
        };

        let api = api.clone();
        spawn_local(async move {
            match api.overall_leaderboard(&token).await {
                Ok(resp) => {
                    let max = resp.max_score();
                    let accepted = state.try_update(|s| s.resolve(ticket, resp.into_entries()));
                    if accepted == Some(true) && max.is_some() {
                        max_score.set(max);
                    }
                }
                Err(e) => {
                    log_error!("Error fetching overall leaderboard: {}", e);
                    state.try_update(|s| s.reject(ticket, OVERALL_FAILED));
                }
            }
        });
    });

    let body = move || {
        state.with(|s| match s.view() {
            FetchView::Loading => view! {
                <div class="flex flex-col items-center justify-center py-8 text-gray-500">
                    <Loader attr:class="w-6 h-6 animate-spin mb-2" />
                    <p class="text-sm">{LOADING_OVERALL}</p>
                </div>
            }
            .into_any(),
            FetchView::Failed(msg) => view! {
                <div class="text-center py-6 text-red-500 text-sm">{msg.to_string()}</div>
            }
            .into_any(),
            FetchView::Idle | FetchView::Empty => view! {
                <div class="text-center py-12 text-gray-500">{OVERALL_EMPTY}</div>
            }
            .into_any(),
            FetchView::Entries(entries) => view! {
                <div class="space-y-2">
                    {entries
                        .iter()
                        .cloned()
                        .map(|entry| view! { <OverallRow entry=entry expanded=expanded /> })
                        .collect_view()}
                </div>
            }
            .into_any(),
        })
    };

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 bg-black/60 backdrop-blur-sm z-50" on:click=move |_| on_close.run(())></div>
            <div class="fixed left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2 w-[95%] max-w-2xl bg-white rounded-2xl shadow-2xl z-50 overflow-hidden">
                <div class="bg-red-600 p-4 flex justify-between items-center text-white">
                    <div class="flex items-center gap-3">
                        <Trophy attr:class="w-5 h-5 text-yellow-300" />
                        <div>
                            <h2 class="text-lg font-bold">"Overall Leaderboard"</h2>
                            <p class="text-xs text-red-100">{move || max_score_label(max_score.get())}</p>
                        </div>
                    </div>
                    <button
                        class="p-1 hover:bg-white/20 rounded-full transition-colors"
                        on:click=move |_| on_close.run(())
                    >
                        <X attr:class="h-[18px] w-[18px]" />
                    </button>
                </div>
                <div class="p-4 max-h-[70vh] overflow-y-auto">{body}</div>
            </div>
        </Show>
    }
}
