use crate::components::icons::*;
use crate::components::overall_leaderboard_modal::OverallLeaderboardModal;
use crate::web::router::use_navigate;
use gamepass_shared::GameSlug;
use leptos::prelude::*;

fn game_icon(game: GameSlug) -> AnyView {
    let class = "text-red-500 group-hover:scale-110 transition-transform h-8 w-8";
    match game {
        GameSlug::BatakPro => view! { <Zap attr:class=class /> }.into_any(),
        GameSlug::PowerPunchMaxFresh => view! { <Dumbbell attr:class=class /> }.into_any(),
        GameSlug::ArrowGame => view! { <Target attr:class=class /> }.into_any(),
        GameSlug::PlanogramGame => view! { <Grid attr:class=class /> }.into_any(),
        GameSlug::PurpleGame => view! { <Gamepad attr:class=class /> }.into_any(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let navigate = use_navigate();
    let (show_overall, set_show_overall) = signal(false);

    let round_button = "w-10 h-10 rounded-full flex items-center justify-center transition-colors";

    view! {
        <div class="min-h-screen bg-gray-900 text-white p-6">
            <div class="flex justify-between items-center mb-12 relative">
                <div class="text-red-500 z-10">
                    <Grid attr:class="h-6 w-6" />
                </div>

                <div class="absolute left-1/2 transform -translate-x-1/2">
                    <img src="/Colgate-Logo.png" alt="Colgate Logo" class="h-32 object-contain" />
                </div>

                <div class="flex items-center gap-4 z-10">
                    <button
                        on:click=move |_| set_show_overall.set(true)
                        class=format!("{round_button} bg-yellow-400 text-gray-900 hover:bg-yellow-300")
                        title="Overall Leaderboard"
                    >
                        <Trophy attr:class="h-5 w-5" />
                    </button>
                    <button
                        on:click=move |_| navigate("/leaderboard")
                        class=format!("{round_button} bg-blue-500 hover:bg-blue-600")
                        title="Leaderboard"
                    >
                        <Medal attr:class="h-5 w-5" />
                    </button>
                    <button
                        on:click=move |_| navigate("/qr-code")
                        class=format!("{round_button} bg-white text-gray-900 hover:bg-gray-200")
                        title="Show QR Code"
                    >
                        <QrCode attr:class="h-5 w-5" />
                    </button>
                    <button
                        on:click=move |_| navigate("/profile")
                        class=format!("{round_button} bg-red-600 hover:bg-red-700")
                        title="My Profile"
                    >
                        <User attr:class="h-5 w-5" />
                    </button>
                </div>
            </div>

            <div class="max-w-6xl mx-auto grid md:grid-cols-2 gap-6">
                {GameSlug::ALL
                    .into_iter()
                    .map(|game| {
                        view! {
                            <button
                                on:click=move |_| navigate(&game.route())
                                class="bg-white hover:bg-gray-50 text-gray-900 rounded-xl p-8 h-32 flex flex-col items-center justify-center gap-4 shadow-lg transform hover:scale-[1.02] transition-all group"
                                style="clip-path: polygon(0 0, 100% 0, 100% 85%, 95% 100%, 0 100%)"
                            >
                                {game_icon(game)}
                                <span class="font-bold text-lg uppercase tracking-wide">{game.title()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <OverallLeaderboardModal
                open=show_overall
                on_close=Callback::new(move |_| set_show_overall.set(false))
            />
        </div>
    }
}
