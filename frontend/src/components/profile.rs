use crate::auth::use_auth;
use crate::components::icons::{ArrowLeft, Calendar, LogOut, Mail, Phone, User};
use crate::web::router::use_navigate;
use gamepass::profile::{DetailKind, ProfileDetail, profile_details};
use leptos::prelude::*;

fn detail_card(detail: ProfileDetail) -> impl IntoView {
    let icon_class = "text-red-500 h-5 w-5";
    let icon = match detail.kind {
        DetailKind::Email => view! { <Mail attr:class=icon_class /> }.into_any(),
        DetailKind::Phone => view! { <Phone attr:class=icon_class /> }.into_any(),
        DetailKind::Age => view! { <Calendar attr:class=icon_class /> }.into_any(),
        DetailKind::Gender => view! { <User attr:class=icon_class /> }.into_any(),
    };
    let value_class = if detail.kind == DetailKind::Gender {
        "font-medium capitalize"
    } else {
        "font-medium"
    };

    view! {
        <div class="flex items-center gap-3 text-gray-600 p-4 bg-gray-50 rounded-lg">
            {icon}
            <div class="flex flex-col">
                <span class="text-xs text-gray-400 uppercase">{detail.kind.label()}</span>
                <span class=value_class>{detail.value}</span>
            </div>
        </div>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth_ctx = use_auth();
    let navigate = use_navigate();

    let on_logout = move |_: leptos::ev::MouseEvent| {
        auth_ctx.logout();
        navigate("/login");
    };

    move || {
        auth_ctx.session().map(|user| {
            view! {
                <div class="min-h-screen text-white p-6 relative">
                    <div class="flex justify-between items-center mb-8">
                        <button
                            on:click=move |_| navigate("/dashboard")
                            class="flex items-center gap-2 text-white hover:text-gray-300 transition-colors font-semibold"
                        >
                            <ArrowLeft attr:class="h-5 w-5" />
                            "Back"
                        </button>
                        <button
                            on:click=on_logout
                            class="flex items-center gap-2 text-red-500 hover:text-red-400 transition-colors font-semibold"
                        >
                            <LogOut attr:class="h-5 w-5" />
                            "Logout"
                        </button>
                    </div>

                    <div class="flex items-center justify-center min-h-[80vh]">
                        <div class="bg-white text-gray-900 rounded-xl p-8 max-w-2xl w-full shadow-2xl">
                            <h1 class="text-3xl font-bold text-center mb-8">"My Profile"</h1>
                            <div class="space-y-6">
                                <div class="text-center">
                                    <div class="w-24 h-24 bg-red-100 rounded-full mx-auto flex items-center justify-center mb-4">
                                        <span class="text-3xl font-bold text-red-600">{user.initial()}</span>
                                    </div>
                                    <h2 class="text-2xl font-bold text-gray-800">{user.name.clone()}</h2>
                                    <p class="text-gray-500">{format!("@{}", user.username)}</p>
                                </div>
                                <div class="grid md:grid-cols-2 gap-6 mt-8">
                                    {profile_details(&user).into_iter().map(detail_card).collect_view()}
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
