//! Login page: pick a role, then sign in with identifier and password.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful `POST /{role}/login` becomes a [`session::Session`] handed to
//! the auth context. Navigation to the role's landing page is driven by the
//! session signal, so an already signed-in visitor is forwarded the same way.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::{Role, Session};

use crate::config::ClientConfig;
use crate::state::auth::use_auth;

pub(crate) fn validate_login_input(identifier: &str, password: &str) -> Result<(String, String), &'static str> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err("Enter your ID, email or mobile number.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((identifier.to_owned(), password.to_owned()))
}

pub(crate) fn login_redirect_target(session: &Session) -> &'static str {
    session.role().landing_path()
}

/// Role picked from the select box; unknown values keep the current choice.
pub(crate) fn parse_role_choice(value: &str, current: Role) -> Role {
    value.parse().unwrap_or(current)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let role = RwSignal::new(Role::Customer);
    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        if let Some(session) = auth.session() {
            navigate(login_redirect_target(&session), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (identifier_value, password_value) =
            match validate_login_input(&identifier.get_untracked(), &password.get_untracked()) {
                Ok(values) => values,
                Err(msg) => {
                    info.set(msg.to_owned());
                    return;
                }
            };
        let role_value = role.get_untracked();
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&config, role_value, &identifier_value, &password_value).await {
                    Ok(session) => {
                        password.set(String::new());
                        info.set(String::new());
                        auth.login(session);
                    }
                    Err(e) => {
                        log::warn!("login as {role_value} failed: {e}");
                        info.set(e.user_message());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, role_value, identifier_value, password_value);
        }
    };

    let role_options = Role::ALL
        .into_iter()
        .map(|r| {
            view! {
                <option value=r.as_str() selected=move || role.get() == r>
                    {r.label()}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Marketplace"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <select
                        class="login-input"
                        on:change=move |ev| {
                            role.set(parse_role_choice(&event_target_value(&ev), role.get_untracked()));
                        }
                    >
                        {role_options}
                    </select>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="ID, email or mobile"
                        prop:value=move || identifier.get()
                        on:input=move |ev| identifier.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
