use leptos::prelude::*;

use crate::components::PageHeader;

/// Call history placeholder; nothing is recorded client-side
#[component]
pub fn CallsPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title="Call History" subtitle="Recent voice interactions with the AI agent." />

            <div class="table-card">
                <div class="empty-state">
                    <div class="empty-icon">"📞"</div>
                    <h3>"No calls recorded yet"</h3>
                    <p>"Initiate a call from the Leads page to see history here."</p>
                </div>
            </div>
        </div>
    }
}
