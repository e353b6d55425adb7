//! Client for the parish backend.
//!
//! The server only ever talks to the backend through [`BackendApi`], so the
//! session layer can be exercised against in-memory fakes.

pub mod backend;

pub use backend::{
    BackendApi, BackendError, HttpBackend, PERMISSIONS_ENDPOINT, PROFILE_ENDPOINT,
};
