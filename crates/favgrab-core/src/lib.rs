//! favgrab core: look up the favicons of a domain through a remote service.
//!
//! The input field gates submissions through the domain validator, the fetch
//! controller runs one lookup per submission (the latest one wins), preview
//! URLs are derived from the page origin, and the view module turns the
//! current state into something a frontend can render.

pub mod config;
pub mod logging;

pub mod api;
pub mod domain;
pub mod fetch;
pub mod form;
pub mod i18n;
pub mod origin;
pub mod preview;
pub mod save;
pub mod session;
pub mod view;
