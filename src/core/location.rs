use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Coordinates;

/// The user's durable decision about sharing device location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentState {
    Granted,
    Denied,
    Undecided,
}

/// Why a single-shot position request failed
///
/// Every variant collapses to a denied outcome; the reason only feeds logs.
#[derive(Debug, Error)]
pub enum PositionError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("location capability unavailable")]
    Unavailable,

    #[error("location request timed out")]
    Timeout,
}

/// Persisted consent flag
///
/// Injected rather than read ambiently so hosts decide where the flag lives
/// and tests can swap in a fake.
pub trait ConsentStore {
    /// Read the stored decision; `Undecided` when nothing is stored
    fn load(&self) -> ConsentState;
    /// Persist a decision
    fn save(&mut self, decision: ConsentState);
    /// Forget the stored decision
    fn clear(&mut self);
}

/// Consent store backed by process memory
#[derive(Debug, Default)]
pub struct MemoryConsentStore {
    decision: Option<ConsentState>,
}

impl MemoryConsentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decision(decision: ConsentState) -> Self {
        Self {
            decision: Some(decision),
        }
    }
}

impl ConsentStore for MemoryConsentStore {
    fn load(&self) -> ConsentState {
        self.decision.unwrap_or(ConsentState::Undecided)
    }

    fn save(&mut self, decision: ConsentState) {
        self.decision = Some(decision);
    }

    fn clear(&mut self) {
        self.decision = None;
    }
}

/// Single-shot device position request, not continuous tracking
pub trait PositionSource {
    fn current_position(
        &mut self,
    ) -> impl std::future::Future<Output = Result<Coordinates, PositionError>> + Send;
}

/// Resolves the user's position while honoring the persisted consent flag
///
/// One activation cycle performs one consent read, at most one position
/// request, and one consent write once the outcome settles. A late position
/// response landing after an explicit dismissal overwrites it: completion
/// order wins, and no stronger sequencing is provided.
pub struct LocationAcquirer<S: ConsentStore, P: PositionSource> {
    store: S,
    source: P,
    position: Option<Coordinates>,
    consent: ConsentState,
    banner_visible: bool,
}

impl<S: ConsentStore, P: PositionSource> LocationAcquirer<S, P> {
    pub fn new(store: S, source: P) -> Self {
        Self {
            store,
            source,
            position: None,
            consent: ConsentState::Undecided,
            banner_visible: false,
        }
    }

    /// Run one activation cycle
    ///
    /// A previously persisted denial short-circuits: the device is not
    /// prompted again until `enable_location` clears the flag.
    pub async fn activate(&mut self) {
        if self.store.load() == ConsentState::Denied {
            self.consent = ConsentState::Denied;
            return;
        }

        self.request_position().await;
    }

    /// Explicit retry: forget the stored denial and prompt again
    pub async fn enable_location(&mut self) {
        self.store.clear();
        self.banner_visible = false;
        self.request_position().await;
    }

    /// Hide the retry banner and remember the denial
    pub fn dismiss_banner(&mut self) {
        self.banner_visible = false;
        self.store.save(ConsentState::Denied);
    }

    async fn request_position(&mut self) {
        match self.source.current_position().await {
            Ok(position) => {
                self.position = Some(position);
                self.consent = ConsentState::Granted;
                self.store.save(ConsentState::Granted);
                self.banner_visible = false;
            }
            Err(reason) => {
                tracing::warn!("Position request failed: {}", reason);
                self.consent = ConsentState::Denied;
                self.store.save(ConsentState::Denied);
                self.banner_visible = true;
            }
        }
    }

    pub fn position(&self) -> Option<Coordinates> {
        self.position
    }

    pub fn consent(&self) -> ConsentState {
        self.consent
    }

    pub fn banner_visible(&self) -> bool {
        self.banner_visible
    }
}
