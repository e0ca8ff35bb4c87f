//! Dashboard Overview Page
//!
//! Fixed headline figures and a short activity feed. Nothing here talks to the
//! backend.

use leptos::prelude::*;

use crate::components::{PageHeader, Stat, StatCard};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Activity {
    pub title: &'static str,
    pub detail: &'static str,
    pub ago: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { name: "Total Leads", value: "24", icon: "👥", tone: "tone-blue" },
    Stat { name: "Calls Today", value: "12", icon: "📞", tone: "tone-green" },
    Stat { name: "Converted", value: "5", icon: "✔", tone: "tone-purple" },
    Stat { name: "Follow-up", value: "3", icon: "⚠", tone: "tone-orange" },
];

pub const RECENT_ACTIVITY: &[Activity] = &[
    Activity { title: "Call with Alice Johnson", detail: "Interested in 55 TV", ago: "2m ago" },
    Activity { title: "Lead Created: Bob Smith", detail: "Budget $500", ago: "1h ago" },
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="page page-wide">
            <PageHeader
                title="Dashboard Overview"
                subtitle="Welcome back, verified stats for Yexis Electronics."
            />

            <div class="stat-grid">
                {STATS.iter().map(|stat| view! { <StatCard stat=*stat /> }).collect_view()}
            </div>

            <div class="activity-card">
                <h2>"Recent Activity"</h2>
                <div class="activity-list">
                    {RECENT_ACTIVITY.iter().map(|entry| view! {
                        <div class="activity-entry">
                            <div>
                                <p class="activity-title">{entry.title}</p>
                                <p class="activity-detail">{entry.detail}</p>
                            </div>
                            <span class="activity-ago">{entry.ago}</span>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
