use async_trait::async_trait;
use gloo_net::http::Request;
use luckydraw_shared::constants::PARTICIPATION_FLAG_VALUE;
use luckydraw_shared::submission::{check_status, ParticipationStore, PrizeRecorder, SubmissionPayload};
use luckydraw_shared::{DrawError, Fingerprint};
use web_sys::{window, Storage};

// Derive the visitor fingerprint from the user agent and screen width
pub fn browser_fingerprint() -> Fingerprint {
    let Some(window) = window() else {
        return Fingerprint::derive("", 0);
    };
    let user_agent = window.navigator().user_agent().unwrap_or_default();
    let screen_width = window
        .screen()
        .ok()
        .and_then(|screen| screen.width().ok())
        .unwrap_or_default();
    Fingerprint::derive(&user_agent, screen_width)
}

/// Blocking browser alert
pub fn alert(message: &str) {
    gloo::dialogs::alert(message);
}

/// Participation flags kept in `window.localStorage`
pub struct LocalParticipationStore {
    storage: Option<Storage>,
}

impl LocalParticipationStore {
    pub fn open() -> Self {
        Self {
            storage: window().and_then(|w| w.local_storage().ok().flatten()),
        }
    }

    fn storage(&self) -> Result<&Storage, DrawError> {
        self.storage
            .as_ref()
            .ok_or_else(|| DrawError::Storage("localStorage is not available".to_string()))
    }
}

impl ParticipationStore for LocalParticipationStore {
    fn has_participated(&self, fingerprint: &Fingerprint) -> Result<bool, DrawError> {
        self.storage()?
            .get_item(&fingerprint.participation_key())
            .map(|value| value.is_some())
            .map_err(|e| DrawError::Storage(format!("{:?}", e)))
    }

    fn mark_participated(&mut self, fingerprint: &Fingerprint) -> Result<(), DrawError> {
        self.storage()?
            .set_item(&fingerprint.participation_key(), PARTICIPATION_FLAG_VALUE)
            .map_err(|e| DrawError::Storage(format!("{:?}", e)))
    }
}

/// Posts results to the hosted form endpoint
pub struct FormRecorder {
    endpoint: String,
}

impl FormRecorder {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl PrizeRecorder for FormRecorder {
    async fn record(&self, payload: &SubmissionPayload) -> Result<(), DrawError> {
        let request = Request::post(&self.endpoint)
            .header("Accept", "application/json")
            .json(payload)
            .map_err(|e| DrawError::SubmissionFailed(format!("Failed to build request: {:?}", e)))?;

        match request.send().await {
            Ok(response) => check_status(response.status()),
            Err(e) => Err(DrawError::SubmissionFailed(format!("Network error: {:?}", e))),
        }
    }
}
