/// Claves de sesión en localStorage.
/// Tienen que coincidir con las que ya usa el resto del sistema.
pub const TOKEN_KEY: &str = "auth-token";
pub const USER_ID_KEY: &str = "user-id";
pub const ROL_KEY: &str = "rol";

/// Estado inicial de toda reserva creada desde el frontend
pub const ESTADO_PENDIENTE: &str = "PENDIENTE";

/// Estados que los paneles de recepción y gerencia pueden asignar
pub const ESTADOS_RESERVA: &[&str] = &["PENDIENTE", "CONFIRMADA", "CANCELADA"];

/// Rol preseleccionado en el alta de empleados
pub const ROL_EMPLEADO_DEFECTO: &str = "TERAPEUTA";

/// Duración de las notificaciones en pantalla
pub const TOAST_DURACION_MS: u32 = 4000;
