// ============================================================================
// AUTH API - Login y registro contra /api/auth
// ============================================================================

use crate::models::{LoginRequest, LoginResponse, RegisterRequest};
use crate::services::error::ApiError;
use crate::services::http;
use crate::state::SessionStore;

pub async fn login(
    session: &SessionStore,
    email: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    let credenciales = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    http::post_json(session, "/api/auth/login", &credenciales).await
}

/// El cuerpo de la respuesta de registro no se usa: tras el alta se
/// redirige al login para que el usuario entre con sus credenciales.
pub async fn register(session: &SessionStore, datos: &RegisterRequest) -> Result<(), ApiError> {
    http::post_sin_respuesta(session, "/api/auth/register", datos).await
}
