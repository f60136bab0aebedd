//! UserId Value Object
//!
//! Typed ID for user accounts, backed by the kernel's generic ID wrapper.

use kernel::id::{Id, markers};

/// Internal account identifier (UUID v4)
pub type UserId = Id<markers::Account>;
