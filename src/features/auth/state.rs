//! Auth session state and context for the frontend. The provider hydrates
//! the session once on mount from the stored access token and exposes
//! derived auth signals for guards and routes. Only profile metadata is
//! kept in memory; tokens stay in the token store.

use crate::app_lib::{ApiError, tokens};
use crate::features::auth::{
    client,
    types::{LoginRequest, RegisterRequest, UserProfile},
};
use leptos::{logging, prelude::*, task::spawn_local};

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub user: RwSignal<Option<UserProfile>>,
    pub is_loading: RwSignal<bool>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    fn new() -> Self {
        let user = RwSignal::new(None);
        let is_loading = RwSignal::new(true);
        let is_authenticated = Signal::derive(move || user.get().is_some());
        Self {
            user,
            is_loading,
            is_authenticated,
        }
    }

    /// Resolves the session from the token store: anonymous without a stored
    /// access token, otherwise whatever the profile endpoint says. A failed
    /// lookup clears the stored tokens so the next visit starts clean.
    pub async fn load_user(&self) {
        if tokens::access_token().is_none() {
            self.user.set(None);
            self.is_loading.set(false);
            return;
        }

        match client::fetch_me().await {
            Ok(profile) => self.user.set(Some(profile)),
            Err(err) => {
                logging::warn!("Session hydration failed, signing out: {err}");
                tokens::clear_tokens();
                self.user.set(None);
            }
        }
        self.is_loading.set(false);
    }

    /// Signs in, stores the issued tokens, and re-resolves the profile.
    pub async fn login(&self, email: String, password: String) -> Result<(), ApiError> {
        let pair = client::login(&LoginRequest { email, password }).await?;
        tokens::set_tokens(&pair.access_token, &pair.refresh_token);
        self.load_user().await;
        Ok(())
    }

    /// Creates the account, then signs in with the same credentials.
    pub async fn register(
        &self,
        email: String,
        password: String,
        full_name: Option<String>,
    ) -> Result<(), ApiError> {
        client::register(&RegisterRequest {
            email: email.clone(),
            password: password.clone(),
            full_name,
        })
        .await?;
        self.login(email, password).await
    }

    /// Drops the session locally: tokens, mirror cookie, and profile.
    /// No network call is made; the API session expires on its own.
    pub fn logout(&self) {
        tokens::clear_tokens();
        self.user.set(None);
    }
}

/// Provides auth context and hydrates the session once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new();
    provide_context(auth);

    spawn_local(async move {
        auth.load_user().await;
    });

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(AuthContext::new)
}
