//! Settings Page
//!
//! Integration status labels and a notifications toggle. Saving is not
//! persisted anywhere.

use leptos::prelude::*;

use crate::components::{PageHeader, StatusBadge};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingValue {
    /// Toggle switch shown in the given position
    Toggle(bool),
    /// Green status pill
    Status(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettingEntry {
    pub label: &'static str,
    pub description: &'static str,
    pub value: SettingValue,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettingsSection {
    pub title: &'static str,
    pub entries: &'static [SettingEntry],
}

pub const SETTINGS: &[SettingsSection] = &[
    SettingsSection {
        title: "General",
        entries: &[SettingEntry {
            label: "Notifications",
            description: "Receive alerts for new leads",
            value: SettingValue::Toggle(true),
        }],
    },
    SettingsSection {
        title: "Integrations",
        entries: &[
            SettingEntry {
                label: "Twilio Status",
                description: "Voice & SMS Relay",
                value: SettingValue::Status("Connected"),
            },
            SettingEntry {
                label: "Gemini AI",
                description: "Language Model",
                value: SettingValue::Status("Active"),
            },
        ],
    },
];

#[component]
pub fn SettingsPage() -> impl IntoView {
    let on_save = move |_| {
        log::info!("[Settings] Save requested; settings are not persisted");
    };

    view! {
        <div class="page page-narrow">
            <PageHeader title="Settings" subtitle="Manage your CRM preferences and integrations." />

            <div class="settings-card">
                {SETTINGS.iter().map(|section| view! {
                    <div class="settings-section">
                        <h3>{section.title}</h3>
                        <div class="settings-entries">
                            {section.entries.iter().map(|entry| view! { <SettingRow entry=*entry /> }).collect_view()}
                        </div>
                    </div>
                }).collect_view()}

                <div class="settings-actions">
                    <button class="dark-btn" on:click=on_save>
                        <span>"💾"</span>
                        <span>"Save Changes"</span>
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SettingRow(entry: SettingEntry) -> impl IntoView {
    let control = match entry.value {
        SettingValue::Toggle(on) => view! {
            <div class={if on { "toggle on" } else { "toggle" }}></div>
        }.into_any(),
        SettingValue::Status(label) => view! {
            <StatusBadge label=label tone="badge-green" />
        }.into_any(),
    };

    view! {
        <div class="setting-row">
            <div>
                <p class="setting-label">{entry.label}</p>
                <p class="setting-description">{entry.description}</p>
            </div>
            {control}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections() {
        let titles: Vec<&str> = SETTINGS.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["General", "Integrations"]);
    }

    #[test]
    fn test_integration_status() {
        let integrations = SETTINGS[1].entries;
        assert_eq!(integrations[0].value, SettingValue::Status("Connected"));
        assert_eq!(integrations[1].label, "Gemini AI");
        assert_eq!(integrations[1].value, SettingValue::Status("Active"));
    }

    #[test]
    fn test_notifications_toggle_on() {
        assert_eq!(SETTINGS[0].entries[0].value, SettingValue::Toggle(true));
    }
}
