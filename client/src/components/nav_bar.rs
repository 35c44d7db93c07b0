//! Top bar with the signed-in principal and a logout button.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::LOGIN_PATH;

use crate::state::auth::use_auth;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let signed_in = move || auth.session().is_some();
    let who = move || {
        auth.session()
            .map(|s| format!("{} {}", s.role().label(), s.subject_id()))
            .unwrap_or_default()
    };
    let home = move || auth.session().map_or("/", |s| s.role().landing_path());

    let on_logout = move |_| {
        auth.logout();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href=home>"Marketplace"</a>
            <span class="nav-bar__who">{who}</span>
            <a class="nav-bar__link" href=LOGIN_PATH hidden=signed_in>"Sign in"</a>
            <button class="nav-bar__logout" hidden=move || !signed_in() on:click=on_logout>
                "Log out"
            </button>
        </header>
    }
}
