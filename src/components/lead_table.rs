//! Lead Table Component
//!
//! Renders the lead list in one of its three states: loading, empty or
//! populated. Rows keep the order the backend returned them in.

use leptos::prelude::*;

use crate::components::StatusBadge;
use crate::lead_list::LeadListState;
use crate::models::Lead;

#[component]
pub fn LeadTable(
    state: ReadSignal<LeadListState>,
    #[prop(into)] on_call: Callback<Lead>,
) -> impl IntoView {
    view! {
        <div class="table-card">
            <table class="lead-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Phone"</th>
                        <th>"Status"</th>
                        <th>"Notes"</th>
                        <th class="align-right">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || match state.get() {
                        LeadListState::Loading => view! {
                            <tr><td colspan="5" class="table-message">"Loading leads..."</td></tr>
                        }.into_any(),
                        LeadListState::Empty => view! {
                            <tr><td colspan="5" class="table-message">"No leads found."</td></tr>
                        }.into_any(),
                        LeadListState::Populated(leads) => view! {
                            <For
                                each=move || leads.clone()
                                key=|lead| lead.id
                                children=move |lead| view! { <LeadRow lead=lead on_call=on_call /> }
                            />
                        }.into_any(),
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn LeadRow(lead: Lead, on_call: Callback<Lead>) -> impl IntoView {
    let name = lead.name.clone();
    let phone = lead.phone.clone();
    let status = lead.status.clone();
    let notes = lead.notes.clone();
    let notes_title = notes.clone();
    let email = lead.email.clone();

    view! {
        <tr class="lead-row">
            <td class="lead-name">
                {name}
                {email.map(|e| view! { <div class="lead-email">{e}</div> })}
            </td>
            <td class="lead-phone">{phone}</td>
            <td><StatusBadge label=status /></td>
            <td class="lead-notes" title=notes_title>{notes}</td>
            <td class="align-right">
                <div class="row-actions">
                    <button
                        class="call-btn"
                        title="Call with AI"
                        on:click=move |_| on_call.run(lead.clone())
                    >
                        "📞"
                    </button>
                    <button class="more-btn" title="More">"⋯"</button>
                </div>
            </td>
        </tr>
    }
}
