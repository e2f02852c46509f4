pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::client_portal_repository::ClientPortalRepository;
pub use repositories::email_registry_repository::EmailRegistryRepository;
pub use repositories::user_repository::UserRepository;
pub use repositories::virtual_studio_repository::VirtualStudioRepository;
