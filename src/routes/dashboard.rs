//! Signed-in landing page showing the account profile. It waits for the
//! session to resolve and bounces anonymous visitors back to sign-in.

use crate::components::{AppShell, Spinner};
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let navigate_for_guard = navigate.clone();
    Effect::new(move |_| {
        if !auth.is_loading.get() && !auth.is_authenticated.get() {
            navigate_for_guard("/login", Default::default());
        }
    });

    view! {
        <AppShell>
            {move || {
                if auth.is_loading.get() {
                    return view! {
                        <div class="flex justify-center py-16">
                            <Spinner />
                        </div>
                    }
                        .into_any();
                }
                match auth.user.get() {
                    Some(user) => {
                        let navigate = navigate.clone();
                        view! {
                            <div class="mx-auto max-w-2xl">
                                <div class="flex items-center justify-between">
                                    <h1 class="text-2xl font-bold text-gray-900">"Dashboard"</h1>
                                    <button
                                        type="button"
                                        class="rounded-lg border border-gray-300 bg-white px-4 py-2 text-sm font-medium text-gray-700 hover:bg-gray-100 hover:text-blue-700 focus:outline-none focus:ring-4 focus:ring-gray-100"
                                        on:click=move |_| {
                                            auth.logout();
                                            navigate("/login", Default::default());
                                        }
                                    >
                                        "Sign out"
                                    </button>
                                </div>

                                <div class="mt-8 rounded-lg border border-gray-200 bg-white p-6 shadow-sm">
                                    <h2 class="text-lg font-semibold text-gray-900">"Profile"</h2>
                                    <p class="mt-1 text-sm text-gray-500">"Your account details"</p>
                                    <dl class="mt-4 space-y-3 text-sm">
                                        <div>
                                            <dt class="text-gray-500">"Email"</dt>
                                            <dd class="font-medium text-gray-900">{user.email}</dd>
                                        </div>
                                        {user
                                            .full_name
                                            .map(|name| {
                                                view! {
                                                    <div>
                                                        <dt class="text-gray-500">"Name"</dt>
                                                        <dd class="font-medium text-gray-900">{name}</dd>
                                                    </div>
                                                }
                                            })}
                                        <div>
                                            <dt class="text-gray-500">"User ID"</dt>
                                            <dd class="font-mono text-xs text-gray-900">{user.id}</dd>
                                        </div>
                                    </dl>
                                </div>

                                <p class="mt-6 text-sm text-gray-500">
                                    "This is a protected page. Replace this with your application content."
                                </p>
                            </div>
                        }
                            .into_any()
                    }
                    None => ().into_any(),
                }
            }}
        </AppShell>
    }
}
