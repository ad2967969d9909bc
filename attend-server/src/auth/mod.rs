//! Authentication and authorization
//!
//! - [`session`]: session tokens, cookies, sign-in bookkeeping
//! - [`extractor`]: `CurrentUser` / `CurrentEmployee` / `MaybeUser` extractors
//! - [`permissions`]: role-gated checks with security logging

pub mod extractor;
pub mod permissions;
pub mod session;

pub use extractor::{CurrentEmployee, CurrentUser, MaybeUser};
pub use permissions::Permission;
pub use session::{SESSION_COOKIE, token_from_headers};
