//! Minimalistic 404 page for unknown routes.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex min-h-[50vh] flex-col items-center justify-center px-4 text-center">
                <div class="relative">
                    <h1 class="select-none text-9xl font-black text-gray-100">"404"</h1>
                    <p class="absolute left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2 whitespace-nowrap text-2xl font-bold text-gray-900">
                        "Page not found"
                    </p>
                </div>

                <div class="mt-4 space-y-6">
                    <p class="mx-auto max-w-sm text-gray-500">
                        "The page you requested does not exist or has moved."
                    </p>
                    <A
                        href="/"
                        {..}
                        class="inline-flex items-center rounded-lg bg-blue-600 px-5 py-2.5 text-sm font-medium text-white hover:bg-blue-700 focus:outline-none focus:ring-4 focus:ring-blue-300"
                    >
                        "Go Home"
                    </A>
                </div>
            </div>
        </AppShell>
    }
}
