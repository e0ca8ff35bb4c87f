//! Lead List Flow
//!
//! Fetch-on-mount state machine and the row call action, independent of rendering.

use crate::api::{ApiError, Backend};
use crate::models::Lead;

/// Lead table state. `Loading` is left exactly once per mount.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LeadListState {
    #[default]
    Loading,
    Empty,
    Populated(Vec<Lead>),
}

impl LeadListState {
    /// Map a fetch result to its terminal state; every failure renders as empty
    pub fn from_fetch(result: Result<Vec<Lead>, ApiError>) -> Self {
        match result {
            Ok(leads) if leads.is_empty() => LeadListState::Empty,
            Ok(leads) => LeadListState::Populated(leads),
            Err(_) => LeadListState::Empty,
        }
    }
}

/// Result of a row's call action, shown to the user as a blocking alert
#[derive(Debug, Clone, PartialEq)]
pub enum CallOutcome {
    Placed { phone: String },
    Failed,
}

impl CallOutcome {
    pub fn message(&self) -> String {
        match self {
            CallOutcome::Placed { phone } => format!("Calling {}...", phone),
            CallOutcome::Failed => "Failed to initiate call".to_string(),
        }
    }
}

/// Fetch leads once and settle the table state
pub async fn load_leads<B: Backend>(backend: &B) -> LeadListState {
    let result = backend.list_leads().await;
    match &result {
        Ok(leads) => log::info!("[Leads] Loaded {} leads", leads.len()),
        Err(e) => log::error!("[Leads] Failed to fetch leads: {}", e),
    }
    LeadListState::from_fetch(result)
}

/// Ask the backend to call this lead. No retry.
pub async fn place_call<B: Backend>(backend: &B, lead: &Lead) -> CallOutcome {
    match backend.initiate_call(&lead.phone, lead.id).await {
        Ok(()) => {
            log::info!("[Leads] Call initiated for lead {}", lead.id);
            CallOutcome::Placed { phone: lead.phone.clone() }
        }
        Err(e) => {
            log::warn!("[Leads] Call to lead {} failed: {}", lead.id, e);
            CallOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CallRequest;
    use std::cell::{Cell, RefCell};

    struct FakeBackend {
        leads: Result<Vec<Lead>, ApiError>,
        call_result: Result<(), ApiError>,
        list_calls: Cell<usize>,
        calls: RefCell<Vec<CallRequest>>,
    }

    impl FakeBackend {
        fn with_leads(leads: Result<Vec<Lead>, ApiError>) -> Self {
            Self {
                leads,
                call_result: Ok(()),
                list_calls: Cell::new(0),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Backend for FakeBackend {
        async fn list_leads(&self) -> Result<Vec<Lead>, ApiError> {
            self.list_calls.set(self.list_calls.get() + 1);
            self.leads.clone()
        }

        async fn initiate_call(&self, phone: &str, lead_id: i64) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(CallRequest { to: phone.to_string(), lead_id });
            self.call_result.clone()
        }
    }

    fn make_lead(id: i64, name: &str, phone: &str) -> Lead {
        Lead {
            id,
            name: name.to_string(),
            phone: phone.to_string(),
            status: "New".to_string(),
            notes: String::new(),
            email: None,
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        assert_eq!(LeadListState::default(), LeadListState::Loading);
    }

    #[tokio::test]
    async fn test_load_keeps_response_order() {
        let leads = vec![
            make_lead(3, "Charlie Brown", "+918148749703"),
            make_lead(1, "Alice Johnson", "+15550101"),
            make_lead(2, "Bob Smith", "+15550102"),
        ];
        let backend = FakeBackend::with_leads(Ok(leads.clone()));

        let state = load_leads(&backend).await;

        assert_eq!(backend.list_calls.get(), 1);
        let LeadListState::Populated(rows) = &state else {
            panic!("expected populated state, got {:?}", state);
        };
        assert_eq!(rows.len(), 3);
        let ids: Vec<i64> = rows.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(state, LeadListState::Populated(leads));
    }

    #[tokio::test]
    async fn test_load_empty_list() {
        let backend = FakeBackend::with_leads(Ok(Vec::new()));
        assert_eq!(load_leads(&backend).await, LeadListState::Empty);
    }

    #[tokio::test]
    async fn test_load_failures_degrade_to_empty() {
        let failures = vec![
            ApiError::Transport("connection refused".to_string()),
            ApiError::Status(500),
            ApiError::Status(404),
            ApiError::Decode("expected a sequence".to_string()),
        ];

        for err in failures {
            let backend = FakeBackend::with_leads(Err(err));
            let state = load_leads(&backend).await;
            assert_eq!(state, LeadListState::Empty);
        }
    }

    #[tokio::test]
    async fn test_place_call_sends_one_request() {
        let backend = FakeBackend::with_leads(Ok(Vec::new()));
        let lead = make_lead(2, "Bob Smith", "+15550102");

        let outcome = place_call(&backend, &lead).await;

        assert_eq!(outcome, CallOutcome::Placed { phone: "+15550102".to_string() });
        assert_eq!(outcome.message(), "Calling +15550102...");
        assert_eq!(*backend.calls.borrow(), vec![CallRequest { to: "+15550102".to_string(), lead_id: 2 }]);
    }

    #[tokio::test]
    async fn test_place_call_failure() {
        let mut backend = FakeBackend::with_leads(Ok(Vec::new()));
        backend.call_result = Err(ApiError::Transport("offline".to_string()));
        let lead = make_lead(1, "Alice Johnson", "+15550101");

        let outcome = place_call(&backend, &lead).await;

        assert_eq!(outcome, CallOutcome::Failed);
        assert_eq!(outcome.message(), "Failed to initiate call");
        assert_eq!(backend.calls.borrow().len(), 1);
    }
}
