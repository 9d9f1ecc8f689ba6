use crate::web::router::use_navigate;
use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    let navigate = use_navigate();

    let button_class = "bg-white text-black font-bold py-4 rounded-xl shadow-lg hover:bg-gray-50 transform hover:scale-105 transition-all uppercase tracking-wider text-lg";

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center p-4 relative overflow-hidden">
            <div class="relative z-10 flex flex-col items-center gap-8 w-full max-w-md">
                <div class="mb-8">
                    <img src="/Colgate-Logo.png" alt="Colgate Logo" class="h-32 object-contain drop-shadow-xl" />
                </div>

                <div class="flex flex-col gap-4 w-full px-8">
                    <button class=button_class on:click=move |_| navigate("/login")>
                        "Login"
                    </button>
                    <button class=button_class on:click=move |_| navigate("/register")>
                        "Register"
                    </button>
                </div>
            </div>
        </div>
    }
}
