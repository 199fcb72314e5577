//! tmplc_checker: Template validation passes.
//!
//! Currently holds the check that rejects helper and modifier invocations
//! whose name is shadowed by an enclosing block param, together with the
//! scope tracking it relies on.

mod env;
mod error;
mod scope;
mod shadowing;

pub use env::PassEnvironment;
pub use error::{InvocationRole, ShadowedInvocationConflict};
pub use scope::ScopeTracker;
pub use shadowing::{check_shadowed_invocations, PASS_NAME};
