//! Auth (Identity Admission) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, signature verification, repository traits
//! - `application/` - Use cases and the admission facade
//! - `infra/` - Record store implementations (Postgres, in-memory)
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Account registration gated by proof-of-work redemption
//! - Identity proof via Ed25519 challenge-response sessions (npub keys)
//! - Password login issuing stateless bearer credentials (HS256)
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (NIST SP 800-63B compliant)
//! - Session challenge strings bind to the session id (no cross-session replay)
//! - `verified` is monotonic: it never reverts within a session's lifetime
//! - Credential signing secret is process-wide and never stored in any record

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::admission::AdmissionFacade;
pub use application::config::AuthConfig;
pub use application::credential::CredentialService;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthStore;
pub use presentation::router::admission_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
