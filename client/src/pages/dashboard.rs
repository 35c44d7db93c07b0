//! Per-role dashboards behind the route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each role page wraps the shared [`Dashboard`] in [`RequireRole`]. The
//! dashboard shows what the session scopes ("my data"): the principal, its
//! profile fetched with the bearer token, and a manual token refresh.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use session::{RefreshError, Role};

use crate::components::nav_bar::NavBar;
use crate::components::route_guard::RequireRole;
use crate::config::ClientConfig;
use crate::net::types::Profile;
use crate::state::auth::use_auth;

pub(crate) fn dashboard_title(role: Role) -> String {
    format!("{} dashboard", role.label())
}

pub(crate) fn refresh_failure_message(err: &RefreshError) -> String {
    match err {
        RefreshError::Network(_) => {
            "Could not reach the server to renew your session. Sign in again once you are back online."
                .to_owned()
        }
        RefreshError::Superseded => "Your session changed while renewing. Nothing to do.".to_owned(),
        RefreshError::NoSession => "You are not signed in.".to_owned(),
        RefreshError::Rejected { .. } | RefreshError::Malformed(_) => {
            "Your session has expired. Please sign in again.".to_owned()
        }
    }
}

#[component]
fn Dashboard(role: Role) -> impl IntoView {
    let auth = use_auth();
    let config = expect_context::<ClientConfig>();
    let profile = RwSignal::new(None::<Profile>);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_profile(&auth, &config).await {
            Ok(p) => profile.set(Some(p)),
            Err(e) => {
                log::warn!("profile fetch failed: {e}");
                info.set(e.user_message());
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    let subject = move || auth.session().map(|s| s.subject_id().to_owned()).unwrap_or_default();
    let greeting = move || {
        let fallback = subject();
        profile.with(|p| p.as_ref().map_or_else(|| fallback.clone(), |p| p.display_name(&fallback).to_owned()))
    };

    let on_refresh = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        info.set("Renewing session...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match auth.refresh_access_token().await {
                Ok(_) => info.set("Session renewed.".to_owned()),
                Err(e) => info.set(refresh_failure_message(&e)),
            }
            busy.set(false);
        });
    };

    view! {
        <NavBar />
        <main class="dashboard">
            <h1>{dashboard_title(role)}</h1>
            <p class="dashboard__greeting">"Welcome, " {greeting}</p>
            <dl class="dashboard__summary">
                <dt>"Role"</dt>
                <dd>{role.label()}</dd>
                <dt>"ID"</dt>
                <dd>{subject}</dd>
                <dt>"Email"</dt>
                <dd>{move || profile.with(|p| p.as_ref().and_then(|p| p.email.clone()).unwrap_or_default())}</dd>
                <dt>"Mobile"</dt>
                <dd>{move || profile.with(|p| p.as_ref().and_then(|p| p.mobile.clone()).unwrap_or_default())}</dd>
            </dl>
            <button class="dashboard__refresh" disabled=move || busy.get() on:click=on_refresh>
                "Renew session"
            </button>
            <Show when=move || !info.get().is_empty()>
                <p class="dashboard__message">{move || info.get()}</p>
            </Show>
        </main>
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <RequireRole roles=Role::Admin>
            <Dashboard role=Role::Admin />
        </RequireRole>
    }
}

#[component]
pub fn StaffAdminPage() -> impl IntoView {
    view! {
        <RequireRole roles=Role::StaffAdmin>
            <Dashboard role=Role::StaffAdmin />
        </RequireRole>
    }
}

#[component]
pub fn VendorPage() -> impl IntoView {
    view! {
        <RequireRole roles=Role::Vendor>
            <Dashboard role=Role::Vendor />
        </RequireRole>
    }
}

#[component]
pub fn CustomerPage() -> impl IntoView {
    view! {
        <RequireRole roles=Role::Customer>
            <Dashboard role=Role::Customer />
        </RequireRole>
    }
}
