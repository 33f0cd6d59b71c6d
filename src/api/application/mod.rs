pub mod dto;
pub mod handlers;
pub mod models;
pub mod service;

pub use models::ApplicationStatus;
pub use service::ApplicationService;
