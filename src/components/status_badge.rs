use leptos::prelude::*;

/// Rounded pill for a free-text status label
#[component]
pub fn StatusBadge(
    #[prop(into)] label: String,
    #[prop(default = "badge-blue")] tone: &'static str,
) -> impl IntoView {
    view! {
        <span class=format!("status-badge {}", tone)>{label}</span>
    }
}
