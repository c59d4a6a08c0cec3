pub mod auth_api;
pub mod clientes_api;
pub mod empleados_api;
pub mod error;
pub mod http;
pub mod reservas_api;

pub use error::{clasificar_estado, ApiError};
