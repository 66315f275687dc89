pub mod account_service;
pub mod auth_provider;

pub use account_service::AccountService;
pub use auth_provider::AuthProvider;
