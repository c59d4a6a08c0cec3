pub mod auth;
pub mod cliente;
pub mod empleado;
pub mod reserva;
pub mod rol;
pub mod servicio;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest};
pub use cliente::Cliente;
pub use empleado::Empleado;
pub use reserva::{RefId, Reserva, ReservaPayload, ReservaResponse};
pub use rol::Rol;
pub use servicio::{CategoriaServicios, Servicio, CATALOGO};
