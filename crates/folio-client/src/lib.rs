//! Folio review client.
//!
//! Drives one review submission end to end: validate the URL field, post
//! the request to a backend, and push the outcome onto whatever surface
//! hosts the client - a browser page, a terminal, or a test double. The
//! backend and the surface are both trait seams, so the submit flow is
//! testable without a network or a UI.

pub mod backend;
pub mod submit;
pub mod surface;

pub use backend::{BackendError, HttpBackend, ReviewBackend};
pub use submit::{ReviewClient, NETWORK_ERROR_MESSAGE};
pub use surface::ReviewSurface;
