//! Shared layout wrapper with navigation and content container. It
//! centralizes header markup so routes can focus on content. Navigation
//! remains client-side; the API must enforce real access control.

use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 bg-white">
                <div class="mx-auto flex max-w-screen-xl items-center justify-between p-4">
                    <A href="/" {..} class="text-lg font-semibold text-gray-900">
                        "Limen"
                    </A>
                    <nav class="flex items-center gap-4 text-sm font-medium">
                        <Show
                            when=move || is_authenticated.get()
                            fallback=move || {
                                view! {
                                    <A href="/login" {..} class="text-gray-700 hover:text-blue-600">
                                        "Sign in"
                                    </A>
                                    <A
                                        href="/register"
                                        {..}
                                        class="text-gray-700 hover:text-blue-600"
                                    >
                                        "Sign up"
                                    </A>
                                }
                            }
                        >
                            <A href="/dashboard" {..} class="text-gray-700 hover:text-blue-600">
                                "Dashboard"
                            </A>
                        </Show>
                    </nav>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto mt-6 p-4">{children()}</div>
            </main>
        </div>
    }
}
