//! Rio CRM Frontend App
//!
//! Sidebar plus routed page area.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::{PageHeader, Sidebar};
use crate::config::BackendConfig;
use crate::context::AppContext;
use crate::pages::{CallsPage, DashboardPage, LeadsPage, SettingsPage};

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::new(BackendConfig::default()));

    view! {
        <Router>
            <div class="app-layout">
                <Sidebar />
                <main class="main-content">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=DashboardPage />
                        <Route path=path!("/leads") view=LeadsPage />
                        <Route path=path!("/calls") view=CallsPage />
                        <Route path=path!("/settings") view=SettingsPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title="Page not found" subtitle="Pick a section from the sidebar." />
        </div>
    }
}
