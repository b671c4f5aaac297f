//! Client-side data access for PrepMaster.
//!
//! [`ResilientDataClient`] wraps every call to the REST backend and degrades
//! to the bundled default dataset when the backend is unreachable, so screens
//! never hard-fail on a dead network. [`AuthSessionManager`] owns the locally
//! persisted session token and the derived authentication state.

pub mod api;
pub mod error;
pub mod sequence;
pub mod session;

pub use api::{ClientConfig, ResilientDataClient};
pub use error::ClientError;
pub use sequence::FetchSequencer;
pub use session::{AuthSessionManager, AuthState, SessionContext, TokenStore};
