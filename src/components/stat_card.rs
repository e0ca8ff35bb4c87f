//! Stat Card Component

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub name: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
    /// CSS tone class for the icon tile
    pub tone: &'static str,
}

/// Single dashboard figure with its icon tile
#[component]
pub fn StatCard(stat: Stat) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div>
                <p class="stat-name">{stat.name}</p>
                <p class="stat-value">{stat.value}</p>
            </div>
            <div class=format!("stat-icon {}", stat.tone)>{stat.icon}</div>
        </div>
    }
}
