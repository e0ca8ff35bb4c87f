//! Sidebar Component
//!
//! Brand header plus one link per route; the entry whose href equals the
//! current path is marked active.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::nav::{active_item, NAV_ITEMS};

#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;
    let active_href = Memo::new(move |_| active_item(&pathname.get()).map(|item| item.href));

    view! {
        <div class="sidebar">
            <div class="sidebar-brand">
                <h1>"Rio"<span class="brand-accent">"CRM"</span></h1>
            </div>
            <nav class="sidebar-nav">
                {NAV_ITEMS.iter().map(|item| {
                    let href = item.href;
                    let active = move || active_href.get() == Some(href);
                    view! {
                        <a
                            href=href
                            class=move || if active() { "nav-link active" } else { "nav-link" }
                            aria-current=move || active().then_some("page")
                        >
                            <span class="nav-icon">{item.icon}</span>
                            <span>{item.name}</span>
                        </a>
                    }
                }).collect_view()}
            </nav>
        </div>
    }
}
