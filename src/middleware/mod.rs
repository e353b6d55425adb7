//! Request extractors for session handling.
//!
//! # Modules
//!
//! - [`auth`]: Token extraction and session lookup
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>` or a `token` cookie
//! 2. [`auth::SessionToken`] pulls the token out, rejecting with 401 if absent
//! 3. [`auth::CurrentSession`] resolves the token to its session state
//! 4. The token is forwarded unchanged to the parish backend, which is the
//!    only party that validates it
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::CurrentSession;
//!
//! async fn navigation(State(state): State<AppState>, session: CurrentSession) -> impl IntoResponse {
//!     let snapshot = session.context.snapshot().await;
//!     // ...
//! }
//! ```

pub mod auth;
