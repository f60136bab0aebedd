//! Application Layer
//!
//! Use cases and the admission facade.

pub mod admission;
pub mod check_session;
pub mod config;
pub mod credential;
pub mod open_session;
pub mod register;
pub mod sign_in;
pub mod submit_proof;

// Re-exports
pub use admission::{AdmissionFacade, RegistrationCandidate};
pub use check_session::CheckSessionUseCase;
pub use config::AuthConfig;
pub use credential::{CredentialClaims, CredentialService};
pub use open_session::{OpenSessionOutput, OpenSessionUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use submit_proof::SubmitProofUseCase;
