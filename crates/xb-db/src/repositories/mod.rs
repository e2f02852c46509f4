pub mod client_portal_repository;
pub mod email_registry_repository;
pub mod user_repository;
pub mod virtual_studio_repository;
