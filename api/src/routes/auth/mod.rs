//! Authentication endpoints
//!
//! - `POST /signin`: credential check, returns a bearer token or opens a
//!   cookie session depending on the active strategy
//! - `POST /refresh`: exchanges a near-expiry bearer token for a fresh one
//! - `POST /signout`: clears the cookie session

pub mod refresh;
pub mod sign_in;
pub mod sign_out;

pub use refresh::refresh;
pub use sign_in::sign_in;
pub use sign_out::sign_out;
