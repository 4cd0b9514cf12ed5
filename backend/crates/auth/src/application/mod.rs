//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod login;
pub mod profile;
pub mod provision_admin;
pub mod register;
pub mod resolve_identity;
pub mod token;

// Re-exports
pub use config::AuthConfig;
pub use login::{LoginInput, LoginUseCase};
pub use profile::ProfileUseCase;
pub use provision_admin::{ProvisionAdminInput, ProvisionAdminUseCase, ProvisionOutcome};
pub use register::{AuthenticatedOutput, RegisterInput, RegisterUseCase};
pub use resolve_identity::ResolveIdentityUseCase;
pub use token::{IssuedToken, TokenClaims, issue_token, verify_token};
