use crate::app_lib::ApiError;
use crate::components::{Alert, AppShell, Button, Spinner};
use crate::features::auth::state::use_auth;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[derive(Clone)]
struct LoginInput {
    email: String,
    password: String,
}

/// Copy shown under the form on failure. API details are rendered verbatim;
/// anything else gets a generic message.
fn form_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Http { detail, .. } => detail.clone(),
        _ => "Something went wrong".to_string(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<ApiError>>(None);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let input = input.clone();
        async move { auth.login(input.email, input.password).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => navigate("/dashboard", Default::default()),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        login_action.dispatch(LoginInput {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        });
    };

    view! {
        <AppShell>
            <div class="flex justify-center">
                <div class="w-full max-w-sm rounded-lg border border-gray-200 bg-white p-6 shadow-sm">
                    <h1 class="text-2xl font-bold text-gray-900">"Sign in"</h1>
                    <p class="mt-1 text-sm text-gray-500">"Enter your credentials to continue"</p>

                    <form class="mt-6 space-y-4" on:submit=on_submit>
                        {move || {
                            error
                                .get()
                                .map(|err| view! { <Alert message=form_error_message(&err) /> })
                        }}

                        <div>
                            <label
                                class="mb-2 block text-sm font-medium text-gray-900"
                                for="email"
                            >
                                "Email"
                            </label>
                            <input
                                id="email"
                                type="email"
                                class="block w-full rounded-lg border border-gray-300 bg-gray-50 p-2.5 text-sm text-gray-900 focus:border-blue-500 focus:ring-blue-500"
                                autocomplete="email"
                                placeholder="you@example.com"
                                required
                                on:input=move |event| set_email.set(event_target_value(&event))
                            />
                        </div>

                        <div>
                            <label
                                class="mb-2 block text-sm font-medium text-gray-900"
                                for="password"
                            >
                                "Password"
                            </label>
                            <input
                                id="password"
                                type="password"
                                class="block w-full rounded-lg border border-gray-300 bg-gray-50 p-2.5 text-sm text-gray-900 focus:border-blue-500 focus:ring-blue-500"
                                autocomplete="current-password"
                                required
                                on:input=move |event| set_password.set(event_target_value(&event))
                            />
                        </div>

                        <Button button_type="submit" disabled=login_action.pending()>
                            "Sign in"
                        </Button>
                        {move || {
                            login_action
                                .pending()
                                .get()
                                .then_some(
                                    view! {
                                        <div class="flex justify-center">
                                            <Spinner />
                                        </div>
                                    },
                                )
                        }}
                        <p class="text-center text-sm text-gray-500">
                            "Don't have an account? "
                            <A
                                href="/register"
                                {..}
                                class="text-blue-600 underline underline-offset-4 hover:opacity-80"
                            >
                                "Create one"
                            </A>
                        </p>
                    </form>
                </div>
            </div>
        </AppShell>
    }
}
