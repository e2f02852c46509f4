pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::claim_outcome::ClaimOutcome;
pub use models::client_portal::ClientPortal;
pub use models::email_record::EmailRecord;
pub use models::email_status::EmailStatus;
pub use models::external_identity::ExternalIdentity;
pub use models::portal_context::PortalContext;
pub use models::portal_kind::PortalKind;
pub use models::session_user::SessionUser;
pub use models::studio_status::StudioStatus;
pub use models::user::User;
pub use models::verification_outcome::VerificationOutcome;
pub use models::virtual_studio::VirtualStudio;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
