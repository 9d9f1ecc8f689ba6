use crate::auth::use_auth;
use crate::components::icons::ArrowLeft;
use crate::web::router::use_navigate;
use gamepass::log_error;
use gamepass::pass::{PASS_CAPTION, render_pass_svg};
use leptos::prelude::*;

#[component]
pub fn QrCodePage() -> impl IntoView {
    let auth_ctx = use_auth();
    let navigate = use_navigate();

    move || {
        auth_ctx.session().map(|user| {
            let code = match render_pass_svg(&user) {
                Ok(svg) => view! { <div inner_html=svg></div> }.into_any(),
                Err(e) => {
                    log_error!("[Pass] {}", e);
                    view! { <p class="text-red-500 text-sm">{e.to_string()}</p> }.into_any()
                }
            };

            view! {
                <div class="min-h-screen bg-gray-900 text-white p-6 relative">
                    <div class="flex justify-between items-center mb-8">
                        <button
                            on:click=move |_| navigate("/dashboard")
                            class="flex items-center gap-2 text-white hover:text-gray-300 transition-colors font-semibold"
                        >
                            <ArrowLeft attr:class="h-5 w-5" />
                            "Back"
                        </button>
                    </div>

                    <div class="flex items-center justify-center min-h-[80vh]">
                        <div class="bg-white text-gray-900 rounded-xl p-8 max-w-md w-full shadow-2xl flex flex-col items-center">
                            <h1 class="text-3xl font-bold text-center mb-8">"Your Game Pass"</h1>
                            <div class="bg-gray-50 p-6 rounded-xl border border-gray-100 mb-6">{code}</div>
                            <p class="text-gray-500 text-center">{PASS_CAPTION}</p>
                            <div class="mt-8 text-center">
                                <h2 class="text-xl font-bold text-gray-800">{user.name.clone()}</h2>
                                <p class="text-gray-500">{format!("@{}", user.username)}</p>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
