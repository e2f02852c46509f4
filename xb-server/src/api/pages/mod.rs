pub mod dashboard_response;
pub mod page_context;
pub mod pages;
pub mod portal_grant_dto;
pub mod services_response;
pub mod studio_dto;
