use crate::api::use_api;
use crate::auth::use_auth;
use crate::components::icons::{AlertCircle, ArrowRight, Lock, Mail};
use crate::web::router::use_navigate;
use gamepass::auth::{LOGIN_FAILED, LoginForm, login};
use gamepass::route::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let api = use_api();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);
        set_is_submitting.set(true);

        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let api = api.clone();
        spawn_local(async move {
            match login(&api, &form).await {
                Ok(session) => {
                    auth_ctx.login(session);
                    navigate(&AppRoute::auth_success_redirect().to_path());
                }
                Err(e) => {
                    set_error_msg.set(Some(e.message_or(LOGIN_FAILED)));
                    set_is_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-gray-900 via-gray-800 to-black text-white p-4">
            <div class="w-full max-w-md bg-gray-800/50 backdrop-blur-xl rounded-2xl shadow-2xl border border-gray-700 p-8">
                <div class="text-center mb-8">
                    <h2 class="text-3xl font-bold bg-gradient-to-r from-blue-400 to-purple-500 bg-clip-text text-transparent">
                        "Welcome Back"
                    </h2>
                    <p class="text-gray-400 mt-2">"Sign in to your account"</p>
                </div>

                <Show when=move || error_msg.get().is_some()>
                    <div role="alert" class="mb-6 p-4 bg-red-500/10 border border-red-500/20 rounded-lg flex items-center gap-3 text-red-400">
                        <AlertCircle attr:class="h-5 w-5" />
                        <span class="text-sm">{move || error_msg.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <form class="space-y-6" on:submit=on_submit>
                    <div>
                        <label class="block text-sm font-medium text-gray-300 mb-2" for="email">
                            "Email Address"
                        </label>
                        <div class="relative">
                            <Mail attr:class="absolute left-3 top-1/2 transform -translate-y-1/2 text-gray-400 h-5 w-5" />
                            <input
                                id="email"
                                type="email"
                                placeholder="you@example.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="w-full pl-10 pr-4 py-3 bg-gray-900/50 border border-gray-700 rounded-lg focus:ring-2 focus:ring-blue-500"
                                required
                            />
                        </div>
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-300 mb-2" for="password">
                            "Password"
                        </label>
                        <div class="relative">
                            <Lock attr:class="absolute left-3 top-1/2 transform -translate-y-1/2 text-gray-400 h-5 w-5" />
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="w-full pl-10 pr-4 py-3 bg-gray-900/50 border border-gray-700 rounded-lg focus:ring-2 focus:ring-blue-500"
                                required
                            />
                        </div>
                    </div>
                    <button
                        type="submit"
                        class="w-full py-3 px-4 bg-gradient-to-r from-blue-500 to-purple-600 rounded-lg font-semibold flex items-center justify-center gap-2 disabled:opacity-50"
                        disabled=move || is_submitting.get()
                    >
                        {move || if is_submitting.get() {
                            "Signing In...".into_any()
                        } else {
                            view! { "Sign In" <ArrowRight attr:class="h-5 w-5" /> }.into_any()
                        }}
                    </button>
                </form>

                <p class="mt-8 text-center text-gray-400">
                    "Don't have an account? "
                    <a
                        href="/register"
                        class="text-blue-400 hover:text-blue-300 font-semibold"
                        on:click=move |ev| {
                            ev.prevent_default();
                            navigate("/register");
                        }
                    >
                        "Create one"
                    </a>
                </p>
            </div>
        </div>
    }
}
