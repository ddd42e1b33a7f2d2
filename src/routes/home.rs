//! Public landing page with sign-in and sign-up entry points.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex min-h-[50vh] flex-col items-center justify-center gap-6 text-center">
                <div>
                    <h1 class="text-4xl font-bold text-gray-900">"Welcome"</h1>
                    <p class="mt-2 text-lg text-gray-500">
                        "Your app is running. Get started below."
                    </p>
                </div>

                <div class="flex gap-3">
                    <A
                        href="/login"
                        {..}
                        class="rounded-lg bg-blue-600 px-5 py-2.5 text-sm font-medium text-white hover:bg-blue-700 focus:outline-none focus:ring-4 focus:ring-blue-300"
                    >
                        "Sign in"
                    </A>
                    <A
                        href="/register"
                        {..}
                        class="rounded-lg border border-gray-300 bg-white px-5 py-2.5 text-sm font-medium text-gray-700 hover:bg-gray-100 focus:outline-none focus:ring-4 focus:ring-gray-200"
                    >
                        "Create account"
                    </A>
                </div>
            </div>
        </AppShell>
    }
}
