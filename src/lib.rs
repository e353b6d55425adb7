//! # Parishdesk API
//!
//! Permission-driven navigation for the parish dashboard. The server sits
//! between the dashboard and the parish REST API: it fetches the permission
//! catalog and the signed-in user's profile, derives which permission codes
//! unlock each sidebar section, and answers with the sections that user may
//! see.
//!
//! ## Overview
//!
//! - **Menu mapping**: a compiled-in table from menu key to backend module(s)
//! - **Derivation**: only `read`, `manage` and `view` permissions of a module
//!   unlock its menu entries
//! - **Evaluation**: any-match visibility, with all-match available for
//!   stricter checks
//! - **Fail-closed sessions**: until both the catalog and the profile are
//!   loaded, only public entries are shown
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── parishdesk-core/     # AppError, permission action and module names
//! ├── parishdesk-config/   # Environment-driven configuration
//! ├── parishdesk-models/   # Wire types shared with the parish backend
//! └── parishdesk-access/   # Mapping, derivation, evaluation, validation
//! src/
//! ├── cli/                 # Report builders for parishdesk-cli
//! ├── client/              # BackendApi trait and the reqwest implementation
//! ├── config/              # Re-exported config plus the default sidebar
//! ├── middleware/          # Token and session extractors
//! ├── modules/             # auth, roles, navigation HTTP modules
//! └── session/             # Per-token session state and loaders
//! ```
//!
//! ## Session Lifecycle
//!
//! ```text
//! first request ──► SessionStore::get_or_create(token)
//!                        │
//!                        ▼
//!                  ensure_loaded ──► catalog ─┐ (concurrent)
//!                                    profile ─┘
//!                        │
//!                        ▼
//!                  publish (dropped if the session was cleared meanwhile)
//!                        │
//! logout ──────────► SessionStore::end ──► clear + bump generation
//! ```
//!
//! ## Quick Start
//!
//! ### Environment Variables
//!
//! ```bash
//! PARISH_API_BASE_URL=http://localhost:8000/api
//! PARISH_API_TIMEOUT_SECS=15
//! ALLOWED_ORIGINS=http://localhost:3000
//! SERVER_PORT=3000
//! ```
//!
//! ### Checking the mapping
//!
//! ```bash
//! cargo run --bin parishdesk-cli -- validate
//! ```
//!
//! ### API Documentation
//!
//! - Swagger UI: `http://localhost:3000/swagger-ui`
//! - Scalar: `http://localhost:3000/scalar`
//!
//! ## Modules
//!
//! - [`cli`]: Mapping and menu reports
//! - [`client`]: Parish backend client
//! - [`config`]: Application configuration
//! - [`docs`]: OpenAPI documentation setup
//! - [`logging`]: Request logging and subscriber setup
//! - [`metrics`]: Prometheus metrics
//! - [`middleware`]: Token extraction
//! - [`modules`]: HTTP feature modules
//! - [`router`]: Main application router
//! - [`session`]: Session state and loaders
//! - [`state`]: Shared application state

pub mod cli;
pub mod client;
pub mod config;
pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod session;
pub mod state;

// Re-export workspace crates for convenience
pub use parishdesk_access;
pub use parishdesk_config;
pub use parishdesk_core;
pub use parishdesk_models;
