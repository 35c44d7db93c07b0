//! Role-gated wrapper for protected routes.
//!
//! DESIGN
//! ======
//! The decision itself is [`RouteGuard::evaluate`] from the core crate; this
//! component only adds the hydration gate and maps the decision onto the
//! router. It re-evaluates whenever the session signal changes, so a logout
//! while the page is mounted redirects on the next render.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use session::{AllowedRoles, GuardDecision, RouteGuard, Session};

use crate::state::auth::use_auth;

/// What a guarded route shows right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardView {
    /// Persisted session not yet published to views.
    Pending,
    Decided(GuardDecision),
}

pub fn guard_view(ready: bool, session: Option<&Session>, guard: &RouteGuard) -> GuardView {
    if !ready {
        return GuardView::Pending;
    }
    GuardView::Decided(guard.evaluate(session))
}

/// Render `children` only for a session whose role is in `roles`.
#[component]
pub fn RequireRole(#[prop(into)] roles: AllowedRoles, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let session = auth.session_signal();
    let ready = auth.ready_signal();
    let guard = RouteGuard::new(roles);

    let decision = Memo::new(move |_| session.with(|s| guard_view(ready.get(), s.as_ref(), &guard)));

    move || match decision.get() {
        GuardView::Pending => view! { <p class="guard-pending">"Checking session..."</p> }.into_any(),
        GuardView::Decided(GuardDecision::Render) => children().into_any(),
        GuardView::Decided(GuardDecision::RedirectTo(path)) => view! { <Redirect path=path /> }.into_any(),
    }
}
