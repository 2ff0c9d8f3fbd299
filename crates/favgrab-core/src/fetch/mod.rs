//! Fetch lifecycle: idle, fetching, succeeded, failed.
//!
//! Each submission bumps a generation counter and hands back a [`Ticket`].
//! The lookup runs wherever the caller likes; its outcome is fed back through
//! [`FetchController::settle`] with the ticket's generation. Outcomes from any
//! generation but the latest are dropped, so the last submission always wins.

mod error;

pub use error::{classify, RequestError, RequestErrorKind};

use crate::api::{ApiError, FaviconApi, ResponseInfo};
use crate::domain::Domain;

/// Monotonic submission counter. 0 means nothing was ever submitted.
pub type Generation = u64;

/// Current request state. Exactly one is active.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    #[default]
    Idle,
    Fetching,
    Succeeded(ResponseInfo),
    Failed(RequestError),
}

impl RequestState {
    pub fn is_fetching(&self) -> bool {
        matches!(self, RequestState::Fetching)
    }

    pub fn error(&self) -> Option<&RequestError> {
        match self {
            RequestState::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn info(&self) -> Option<&ResponseInfo> {
        match self {
            RequestState::Succeeded(info) => Some(info),
            _ => None,
        }
    }
}

/// Identifies one outbound lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub generation: Generation,
    pub domain: Domain,
}

/// Whether a settled outcome was applied or discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied,
    Stale,
}

/// Owns the request state and the confirmed domain.
#[derive(Debug, Default)]
pub struct FetchController {
    state: RequestState,
    confirmed: Option<Domain>,
    generation: Generation,
}

impl FetchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Domain of the latest submission; lags the input field until submit.
    pub fn confirmed_domain(&self) -> Option<&Domain> {
        self.confirmed.as_ref()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Start a new lookup, superseding whatever came before.
    pub fn submit(&mut self, domain: Domain) -> Ticket {
        self.generation += 1;
        self.state = RequestState::Fetching;
        self.confirmed = Some(domain.clone());
        tracing::info!(%domain, generation = self.generation, "lookup submitted");
        Ticket {
            generation: self.generation,
            domain,
        }
    }

    /// Apply the outcome of the lookup tagged `generation`.
    pub fn settle(
        &mut self,
        generation: Generation,
        outcome: Result<ResponseInfo, ApiError>,
    ) -> Settlement {
        if generation != self.generation || !self.state.is_fetching() {
            tracing::debug!(
                generation,
                current = self.generation,
                "discarding stale lookup result"
            );
            return Settlement::Stale;
        }
        self.state = match outcome {
            Ok(info) => {
                tracing::info!(generation, "lookup succeeded");
                RequestState::Succeeded(info)
            }
            Err(e) => {
                let err = RequestError::from(&e);
                tracing::warn!(generation, kind = ?err.kind, "lookup failed: {}", err);
                RequestState::Failed(err)
            }
        };
        Settlement::Applied
    }

    /// Submit, run the lookup on this thread, and settle. Never returns an error;
    /// failures end up in [`state`](Self::state).
    pub fn run(&mut self, api: &dyn FaviconApi, domain: Domain) -> &RequestState {
        let ticket = self.submit(domain);
        let outcome = api.lookup(&ticket.domain);
        self.settle(ticket.generation, outcome);
        &self.state
    }
}
