//! Lead Management Page
//!
//! Fetches the lead list once on mount and renders it. Each row's call action
//! asks the backend to dial that lead and reports back with a blocking alert.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{LeadTable, PageHeader};
use crate::context::use_app_context;
use crate::lead_list::{load_leads, place_call, LeadListState};
use crate::models::Lead;

#[component]
pub fn LeadsPage() -> impl IntoView {
    let ctx = use_app_context();
    let (state, set_state) = signal(LeadListState::Loading);

    // Load once on mount; no refresh without remounting
    let load_ctx = ctx.clone();
    Effect::new(move |_| {
        let client = load_ctx.client();
        spawn_local(async move {
            let loaded = load_leads(&client).await;
            set_state.set(loaded);
        });
    });

    let on_call = Callback::new(move |lead: Lead| {
        let client = ctx.client();
        spawn_local(async move {
            let outcome = place_call(&client, &lead).await;
            alert(&outcome.message());
        });
    });

    view! {
        <div class="page">
            <PageHeader title="Lead Management" subtitle="View and manage your potential customers.">
                <button class="primary-btn">
                    <span>"+"</span>
                    <span>"Add Lead"</span>
                </button>
            </PageHeader>

            // Not wired to filtering; rows always show in backend order
            <div class="search-bar">
                <span class="search-icon">"🔍"</span>
                <input type="text" placeholder="Search leads..." />
            </div>

            <LeadTable state=state on_call=on_call />
        </div>
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
