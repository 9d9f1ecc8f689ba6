mod form_state;

use crate::api::use_api;
use crate::auth::use_auth;
use crate::components::icons::{AlertCircle, ArrowRight, Calendar, Lock, Mail, Phone, User};
use crate::web::router::use_navigate;
use form_state::FormState;
use gamepass::auth::{Gender, REGISTRATION_FAILED, register};
use gamepass::route::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;

const INPUT_CLASS: &str = "w-full bg-gray-50 border border-gray-200 rounded-lg py-3 pl-10 pr-4 text-gray-900 placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-red-500 focus:border-transparent transition-all";
const ICON_CLASS: &str = "absolute left-3 top-1/2 transform -translate-y-1/2 text-gray-400 h-5 w-5";

/// 带左侧图标的输入框，图标作为 children 传入
#[component]
fn Field(
    label: &'static str,
    name: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-2" for=name>{label}</label>
            <div class="relative">
                {children()}
                <input
                    id=name
                    name=name
                    type=input_type
                    placeholder=placeholder
                    on:input=move |ev| value.set(event_target_value(&ev))
                    prop:value=value
                    class=INPUT_CLASS
                    required
                />
            </div>
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let api = use_api();
    let navigate = use_navigate();

    let fs = FormState::new();
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        let form = fs.to_form();
        // 密码不一致时不发请求
        if let Err(e) = form.validate() {
            set_error_msg.set(Some(e.to_string()));
            return;
        }

        set_is_submitting.set(true);
        let api = api.clone();
        spawn_local(async move {
            match register(&api, &form).await {
                Ok(session) => {
                    auth_ctx.login(session);
                    navigate(&AppRoute::auth_success_redirect().to_path());
                }
                Err(e) => {
                    set_error_msg.set(Some(e.message_or(REGISTRATION_FAILED)));
                    set_is_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 text-gray-900 p-4 py-8">
            <div class="w-full max-w-md bg-white rounded-2xl shadow-xl border border-gray-100 p-8 my-8">
                <div class="text-center mb-8">
                    <h2 class="text-3xl font-bold text-gray-900">"Create Account"</h2>
                    <p class="text-gray-500 mt-2">"Join us today"</p>
                </div>

                <Show when=move || error_msg.get().is_some()>
                    <div role="alert" class="mb-6 p-4 bg-red-50 border border-red-100 rounded-lg flex items-center gap-3 text-red-600">
                        <AlertCircle attr:class="h-5 w-5" />
                        <span class="text-sm">{move || error_msg.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <form class="space-y-4" on:submit=on_submit>
                    <Field label="Full Name" name="name" input_type="text" placeholder="John Doe" value=fs.name>
                        <User attr:class=ICON_CLASS />
                    </Field>
                    <Field label="Username" name="username" input_type="text" placeholder="johndoe123" value=fs.username>
                        <User attr:class=ICON_CLASS />
                    </Field>
                    <Field label="Email Address" name="email" input_type="email" placeholder="you@example.com" value=fs.email>
                        <Mail attr:class=ICON_CLASS />
                    </Field>

                    <div class="grid grid-cols-2 gap-4">
                        <Field label="Age" name="age" input_type="number" placeholder="25" value=fs.age>
                            <Calendar attr:class=ICON_CLASS />
                        </Field>
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-2" for="gender">"Gender"</label>
                            <select
                                id="gender"
                                name="gender"
                                class="w-full bg-gray-50 border border-gray-200 rounded-lg py-3 px-4 text-gray-900 focus:outline-none focus:ring-2 focus:ring-red-500 appearance-none"
                                on:change=move |ev| {
                                    fs.gender.set(event_target_value(&ev).parse().unwrap_or_default())
                                }
                            >
                                {Gender::ALL
                                    .into_iter()
                                    .map(|g| view! {
                                        <option value={g.as_str()} selected={move || fs.gender.get() == g}>
                                            {g.label()}
                                        </option>
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                    </div>

                    <Field label="Phone Number" name="phone" input_type="tel" placeholder="+1 234 567 8900" value=fs.phone>
                        <Phone attr:class=ICON_CLASS />
                    </Field>
                    <Field label="Password" name="password" input_type="password" placeholder="••••••••" value=fs.password>
                        <Lock attr:class=ICON_CLASS />
                    </Field>
                    <Field label="Confirm Password" name="confirmPassword" input_type="password" placeholder="••••••••" value=fs.confirm_password>
                        <Lock attr:class=ICON_CLASS />
                    </Field>

                    <button
                        type="submit"
                        class="w-full bg-red-600 hover:bg-red-700 text-white font-bold py-3 rounded-lg shadow-lg flex items-center justify-center gap-2 disabled:opacity-50"
                        disabled=move || is_submitting.get()
                    >
                        {move || if is_submitting.get() {
                            "Creating Account...".into_any()
                        } else {
                            view! { "Sign Up" <ArrowRight attr:class="h-5 w-5" /> }.into_any()
                        }}
                    </button>
                </form>

                <p class="mt-8 text-center text-gray-600">
                    "Already have an account? "
                    <a
                        href="/login"
                        class="text-red-600 hover:text-red-700 font-bold transition-colors"
                        on:click=move |ev| {
                            ev.prevent_default();
                            navigate("/login");
                        }
                    >
                        "Sign In"
                    </a>
                </p>
            </div>
        </div>
    }
}
