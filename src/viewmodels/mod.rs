pub mod auth_viewmodel;
pub mod errores;

pub use auth_viewmodel::AuthViewModel;
pub use errores::manejar_error_api;
