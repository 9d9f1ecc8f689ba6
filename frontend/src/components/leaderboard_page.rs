use crate::api::use_api;
use crate::auth::use_auth;
use crate::components::icons::{ArrowLeft, Medal};
use crate::web::router::use_navigate;
use gamepass::fetch::{FetchPhase, FetchState};
use gamepass::leaderboard::{
    NO_OTHER_PLAYERS, podium_scores, rounded_points, standings, standings_notice,
};
use gamepass::log_error;
use gamepass_shared::OverallLeaderboardEntry;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn podium_card(slot: Option<OverallLeaderboardEntry>) -> AnyView {
    let Some(player) = slot else {
        // 名次缺失时保留空位，不让其他卡片移位
        return view! { <div class="w-64"></div> }.into_any();
    };

    let is_first = player.rank == 1;
    let card_height = if is_first { "h-[420px]" } else { "h-[380px]" };
    let top_bg = if is_first { "bg-blue-500/30" } else { "bg-blue-400/20" };
    let medal = if is_first {
        "h-16 w-16 text-yellow-400 drop-shadow-lg"
    } else {
        "h-12 w-12 text-gray-300 drop-shadow-lg"
    };

    view! {
        <div class=format!(
            "relative w-64 rounded-3xl overflow-hidden shadow-2xl {card_height} flex flex-col border border-white/30 backdrop-blur-md",
        )>
            <div class=format!("flex-1 {top_bg} p-4 flex flex-col items-center justify-center relative")>
                <div class="mb-2 relative">
                    <Medal attr:class=medal />
                    <div class="absolute inset-0 flex items-center justify-center text-white font-bold text-xs pt-1">
                        "★"
                    </div>
                </div>
                <h3 class="text-xl font-bold text-white mb-2 truncate max-w-full px-2 drop-shadow-md">
                    {player.username.clone()}
                </h3>
                <div class="bg-red-600 text-white px-4 py-1 rounded-full font-bold text-sm mb-4 shadow-md">
                    {format!("{} pts", rounded_points(player.overall_score))}
                </div>
                <div class="bg-red-600 text-white w-full py-2 text-center font-black text-2xl absolute bottom-0">
                    {player.rank}
                </div>
            </div>

            <div class="bg-black/20 p-4 pt-6 space-y-1">
                <div class="grid grid-cols-2 gap-x-4 gap-y-1">
                    {podium_scores(&player)
                        .into_iter()
                        .map(|(label, score)| view! {
                            <div class="flex justify-between items-center text-[10px] font-bold text-white">
                                <span>{label}</span>
                                <span>{score}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
    .into_any()
}

fn table_row(player: &OverallLeaderboardEntry) -> impl IntoView {
    view! {
        <div class="grid grid-cols-12 px-6 py-4 items-center hover:bg-gray-50 transition-colors">
            <div class="col-span-1 font-bold text-red-600">{player.rank}</div>
            <div class="col-span-4 font-semibold text-gray-800">{player.username.clone()}</div>
            <div class="col-span-5 text-gray-600 text-sm">{player.user_email.clone()}</div>
            <div class="col-span-2 text-right font-bold text-red-600">
                {rounded_points(player.overall_score)}
            </div>
        </div>
    }
}

/// 总排行榜页面：前三名领奖台 + 其余玩家表格
#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let api = use_api();
    let navigate = use_navigate();

    let state = RwSignal::new(FetchState::<OverallLeaderboardEntry>::new());

    Effect::new(move |_| {
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
                    state.try_update(|s| s.resolve(ticket, resp.into_entries()));
                }
                Err(e) => {
                    log_error!("Error fetching leaderboard: {}", e);
                    state.try_update(|s| s.reject(ticket, e.to_string()));
                }
            }
        });
    });

    let content = move || {
        state.with(|s| match s.phase() {
            FetchPhase::Idle | FetchPhase::Loading => view! {
                <div class="flex justify-center items-center h-64">
                    <div class="animate-spin rounded-full h-16 w-16 border-t-4 border-b-4 border-white"></div>
                </div>
            }
            .into_any(),
            FetchPhase::Ready | FetchPhase::Failed(_) => {
                let standings = standings(s.data());
                let rest_empty = standings.rest.is_empty();
                let notice = standings_notice(s.phase());

                view! {
                    {notice.map(|msg| view! {
                        <div class="max-w-5xl mx-auto mb-8 bg-white/90 rounded-xl p-4 text-center text-red-600 font-semibold">
                            {msg}
                        </div>
                    })}

                    <div class="flex justify-center items-end gap-4 mb-16 px-4">
                        {standings.podium.into_iter().map(podium_card).collect_view()}
                    </div>

                    <div class="bg-white/90 backdrop-blur-sm rounded-xl overflow-hidden shadow-2xl max-w-5xl mx-auto">
                        <div class="bg-[#ff3d00] text-white font-bold grid grid-cols-12 px-6 py-4 text-sm uppercase tracking-wider">
                            <div class="col-span-1">"Rank"</div>
                            <div class="col-span-4">"User"</div>
                            <div class="col-span-5">"Email"</div>
                            <div class="col-span-2 text-right">"Score"</div>
                        </div>
                        <div class="divide-y divide-gray-200">
                            {standings.rest.iter().map(table_row).collect_view()}
                            {rest_empty.then(|| view! {
                                <div class="p-8 text-center text-gray-500">{NO_OTHER_PLAYERS}</div>
                            })}
                        </div>
                    </div>
                }
                .into_any()
            }
        })
    };

    view! {
        <div class="min-h-screen p-6 relative overflow-hidden font-sans">
            <button
                on:click=move |_| navigate("/dashboard")
                class="absolute top-6 left-6 text-white hover:text-gray-200 transition-colors z-10"
            >
                <ArrowLeft attr:class="h-8 w-8" />
            </button>

            <div class="max-w-6xl mx-auto relative z-10">
                <h1 class="text-5xl font-black text-center text-white mb-12 uppercase tracking-wide drop-shadow-md">
                    "Leaderboard"
                </h1>
                {content}
            </div>
        </div>
    }
}
