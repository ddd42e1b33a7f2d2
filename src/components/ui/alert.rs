//! Error banner for form and page failures. Messages must be safe to render
//! and should never include secrets or tokens.

use leptos::prelude::*;

/// Renders a red alert banner with a user-facing error message.
#[component]
pub fn Alert(message: String) -> impl IntoView {
    view! {
        <div
            class="rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700"
            role="alert"
        >
            {message}
        </div>
    }
}
