//! Public landing page.

use leptos::prelude::*;
use session::Role;

use crate::components::nav_bar::NavBar;

#[component]
pub fn HomePage() -> impl IntoView {
    let portals = Role::ALL
        .into_iter()
        .map(|r| {
            view! {
                <li>
                    <a href=r.landing_path()>{r.label()}</a>
                </li>
            }
        })
        .collect_view();

    view! {
        <NavBar />
        <main class="home">
            <h1>"Service Marketplace"</h1>
            <p>"Sign in to reach your portal."</p>
            <ul class="home__portals">{portals}</ul>
        </main>
    }
}
