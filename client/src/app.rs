//! Root component, HTML shell, and route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides [`ClientConfig`] and the auth context to every page, then
//! publishes the persisted session in the first client-side effect. The
//! server calls [`shell`] to render the document around it.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::config::ClientConfig;
use crate::pages::dashboard::{AdminPage, CustomerPage, StaffAdminPage, VendorPage};
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::state::auth::provide_auth_context;

/// Full HTML document used by the SSR handler.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let auth = provide_auth_context(&config);
    provide_context(config);

    // Effects never run during SSR, so this is the first client tick.
    Effect::new(move || auth.hydrate());

    view! {
        <Stylesheet id="leptos" href="/pkg/client.css" />
        <Title text="Marketplace" />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage />
                <Route path=StaticSegment("login") view=LoginPage />
                <Route path=StaticSegment("admin") view=AdminPage />
                <Route path=StaticSegment("staffadmin") view=StaffAdminPage />
                <Route path=StaticSegment("vendor") view=VendorPage />
                <Route path=StaticSegment("customer") view=CustomerPage />
            </Routes>
        </Router>
    }
}
