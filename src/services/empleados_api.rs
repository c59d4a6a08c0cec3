// ============================================================================
// EMPLEADOS API - CRUD de empleados y lista de roles
// ============================================================================

use crate::models::Empleado;
use crate::services::error::ApiError;
use crate::services::http;
use crate::state::SessionStore;

pub async fn listar(session: &SessionStore) -> Result<Vec<Empleado>, ApiError> {
    http::get_json(session, "/api/empleados").await
}

pub async fn obtener(session: &SessionStore, id: i64) -> Result<Empleado, ApiError> {
    http::get_json(session, &format!("/api/empleados/{}", id)).await
}

pub async fn crear(session: &SessionStore, empleado: &Empleado) -> Result<Empleado, ApiError> {
    http::post_json(session, "/api/empleados", empleado).await
}

pub async fn actualizar(
    session: &SessionStore,
    id: i64,
    empleado: &Empleado,
) -> Result<Empleado, ApiError> {
    http::put_json(session, &format!("/api/empleados/{}", id), empleado).await
}

pub async fn eliminar(session: &SessionStore, id: i64) -> Result<(), ApiError> {
    http::delete(session, &format!("/api/empleados/{}", id)).await
}

/// Tags de rol que entiende el backend, para el combo del alta
pub async fn roles(session: &SessionStore) -> Result<Vec<String>, ApiError> {
    http::get_json(session, "/api/empleados/roles").await
}
