//! Small immutable value objects built from masked sub-ranges of a word.

/// Access permissions and the lock/key comparison pair.
pub mod access;
/// Designator register view.
pub mod designator;

pub use access::{AccessKey, AccessLock, AccessPermissions, ACCESS_COMPOSITE_BITS};
pub use designator::DesignatorRegister;
