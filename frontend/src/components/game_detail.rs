use crate::api::use_api;
use crate::auth::use_auth;
use crate::components::icons::{ArrowLeft, Loader, Trophy};
use crate::components::leaderboard_modal::LeaderboardModal;
use crate::web::router::use_navigate;
use gamepass::activity::{
    ACTIVITY_EMPTY, ACTIVITY_FAILED, ActivityCard, LOADING_ACTIVITY, activity_card,
};
use gamepass::fetch::{FetchState, FetchView};
use gamepass::log_error;
use gamepass_shared::ActivityRecord;
use gamepass_shared::catalog::GameInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn card_view(card: ActivityCard) -> impl IntoView {
    view! {
        <div class="bg-white p-6 rounded-xl shadow-md border border-gray-200 flex flex-col items-center hover:shadow-lg transition-shadow w-full max-w-xs">
            <div class="text-xs text-gray-400 self-end mb-2">{card.date}</div>
            <div class="text-4xl font-bold text-red-600 mb-2">{card.primary.value}</div>
            <div class="text-xs uppercase tracking-wider font-semibold mb-4 text-gray-500">
                {card.primary.label}
            </div>
            {card.secondary.map(|stat| view! {
                <div class="w-full pt-4 border-t border-gray-100">
                    <div class="text-2xl font-bold text-gray-800">{stat.value}</div>
                    <div class="text-xs uppercase tracking-wider font-semibold text-gray-500">
                        {stat.label}
                    </div>
                </div>
            })}
        </div>
    }
}

#[component]
pub fn GameDetailPage(game_id: String) -> impl IntoView {
    let auth_ctx = use_auth();
    let api = use_api();
    let navigate = use_navigate();

    let info = GameInfo::lookup(&game_id);
    let state = RwSignal::new(FetchState::<ActivityRecord>::new());
    let (show_leaderboard, set_show_leaderboard) = signal(false);

    // 未知游戏不发请求，直接显示空状态
    Effect::new(move |_| {
        let (Some(game), Some(token)) = (info.slug, auth_ctx.token()) else {
            return;
        };
        let Some(ticket) = state.try_update(|s| s.begin()) else {
            return;
        };

        let api = api.clone();
        spawn_local(async move {
            match api.game_activities(game, &token).await {
                Ok(records) => {
                    state.try_update(|s| s.resolve(ticket, records));
                }
                Err(e) => {
                    log_error!("Error fetching game data: {}", e);
                    state.try_update(|s| s.reject(ticket, ACTIVITY_FAILED));
                }
            }
        });
    });

    let body = move || {
        state.with(|s| match s.view() {
            FetchView::Loading => view! {
                <div class="flex flex-col items-center justify-center h-full gap-3 text-gray-500">
                    <Loader attr:class="animate-spin h-8 w-8" />
                    <p>{LOADING_ACTIVITY}</p>
                </div>
            }
            .into_any(),
            FetchView::Failed(msg) => view! { <p class="text-red-500">{msg.to_string()}</p> }.into_any(),
            FetchView::Idle | FetchView::Empty => view! {
                <div class="flex flex-col items-center justify-center h-full text-gray-400">
                    <p>{ACTIVITY_EMPTY}</p>
                </div>
            }
            .into_any(),
            FetchView::Entries(records) => view! {
                <div class="flex flex-wrap justify-center gap-6">
                    {records
                        .iter()
                        .map(|r| card_view(activity_card(info.slug, r)))
                        .collect_view()}
                </div>
            }
            .into_any(),
        })
    };

    view! {
        <div class="min-h-screen bg-gray-900 text-white p-6">
            <div class="flex justify-between items-center mb-8">
                <button
                    on:click=move |_| navigate("/dashboard")
                    class="flex items-center gap-2 text-white hover:text-gray-300 transition-colors font-semibold"
                >
                    <ArrowLeft attr:class="h-5 w-5" />
                    "Back"
                </button>

                <button
                    on:click=move |_| set_show_leaderboard.set(true)
                    class="flex items-center gap-2 bg-red-600 hover:bg-red-700 text-white px-4 py-2 rounded-lg transition-colors font-semibold shadow-lg"
                >
                    <Trophy attr:class="h-5 w-5" />
                    "Leaderboard"
                </button>
            </div>

            <div class="flex items-center justify-center min-h-[70vh]">
                <div class="bg-white text-gray-900 rounded-xl p-12 max-w-4xl w-full shadow-2xl text-center">
                    <h1 class="text-3xl font-bold text-red-600 mb-4">{info.title}</h1>
                    <p class="text-gray-600 font-medium mb-8">{info.description}</p>

                    <div class="mt-8 p-8 bg-gray-100 rounded-lg border-2 border-dashed border-gray-300 min-h-[200px]">
                        {body}
                    </div>
                </div>
            </div>

            <LeaderboardModal
                open=show_leaderboard
                on_close=Callback::new(move |_| set_show_leaderboard.set(false))
                game=info.slug
                game_title=info.title
            />
        </div>
    }
}
