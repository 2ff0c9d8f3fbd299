//! One user session: the input field, the fetch controller, and the page origin.
//!
//! All state changes go through [`Session::apply`], one discrete event at a
//! time. Lookups themselves run elsewhere; the session only hands out tickets
//! and takes their outcomes back.

use crate::api::{ApiError, ResponseInfo};
use crate::domain::DomainError;
use crate::fetch::{FetchController, Generation, RequestState, Settlement, Ticket};
use crate::form::FormBinder;
use crate::i18n::Catalog;
use crate::origin::{Origin, OriginSlot};
use crate::preview::{build_previews, PreviewImage};
use crate::view::{compose, PageContent, Snapshot, View};

#[derive(Debug)]
pub enum Event {
    /// The user edited the field.
    FieldChanged(String),
    /// The user pressed submit.
    Submit,
    /// A lookup finished.
    Settled {
        generation: Generation,
        outcome: Result<ResponseInfo, ApiError>,
    },
    /// The one-time origin read completed.
    OriginResolved(Origin),
}

/// What the caller has to do after an event.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    Nothing,
    /// Run this lookup and report back with `Event::Settled`.
    Lookup(Ticket),
    /// Submission blocked by validation; no lookup.
    Rejected(DomainError),
    Settled(Settlement),
}

pub struct Session {
    form: FormBinder,
    controller: FetchController,
    origin: OriginSlot,
    catalog: Catalog,
    content: PageContent,
}

impl Session {
    pub fn new(form: FormBinder, catalog: Catalog, content: PageContent) -> Self {
        Self {
            form,
            controller: FetchController::new(),
            origin: OriginSlot::new(),
            catalog,
            content,
        }
    }

    /// Session with the builtin catalog and standard page content.
    pub fn with_defaults(initial_value: &str) -> Self {
        let catalog = Catalog::builtin();
        let content = PageContent::from_catalog(&catalog, None);
        Self::new(FormBinder::new(initial_value), catalog, content)
    }

    pub fn apply(&mut self, event: Event) -> Effect {
        match event {
            Event::FieldChanged(value) => {
                self.form.set_value(value);
                Effect::Nothing
            }
            // A submit while fetching supersedes the running lookup.
            Event::Submit => match self.form.submit_to(&mut self.controller) {
                Ok(ticket) => Effect::Lookup(ticket),
                Err(e) => Effect::Rejected(e),
            },
            Event::Settled {
                generation,
                outcome,
            } => Effect::Settled(self.controller.settle(generation, outcome)),
            Event::OriginResolved(origin) => {
                self.origin.resolve(origin);
                Effect::Nothing
            }
        }
    }

    pub fn form(&self) -> &FormBinder {
        &self.form
    }

    pub fn state(&self) -> &RequestState {
        self.controller.state()
    }

    pub fn controller(&self) -> &FetchController {
        &self.controller
    }

    pub fn origin(&self) -> Option<&Origin> {
        self.origin.get()
    }

    /// Previews for the confirmed domain; empty until origin and a domain are both known.
    pub fn previews(&self) -> Vec<PreviewImage> {
        match self.controller.confirmed_domain() {
            Some(domain) => build_previews(self.origin.get(), domain.as_str(), &self.catalog),
            None => Vec::new(),
        }
    }

    pub fn view(&self) -> View {
        let previews = self.previews();
        let snapshot = Snapshot {
            form: &self.form,
            state: self.controller.state(),
            previews: &previews,
        };
        compose(&snapshot, &self.content, &self.catalog)
    }
}
