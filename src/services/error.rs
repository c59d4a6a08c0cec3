// ============================================================================
// API ERROR - Clasificación compartida de errores HTTP
// ============================================================================
//
// Todos los clientes de recursos pasan por acá: un solo mapeo de
// status → variante, en vez de repetir el match en cada llamada.

use thiserror::Error;

/// Error clasificado de una llamada al backend.
///
/// El Display es el mensaje que ve el usuario en el toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 401: sin token o token vencido
    #[error("No estás autenticado. Por favor, inicia sesión nuevamente.")]
    NoAutenticado,

    /// 403: sesión válida pero rol insuficiente
    #[error("No tienes permiso para realizar esta acción.")]
    Prohibido,

    /// 404
    #[error("No se encontró el recurso solicitado.")]
    NoEncontrado,

    /// 400: el backend puede mandar su propio mensaje en el cuerpo
    #[error("{}", .0.as_deref().unwrap_or("Solicitud inválida. Revisa los datos ingresados."))]
    Validacion(Option<String>),

    /// 5xx
    #[error("Error en el servidor. Por favor, contacta al administrador.")]
    ErrorServidor,

    /// Falla de red o respuesta imposible de parsear
    #[error("No se pudo conectar con el servidor. Revisa tu conexión.")]
    Transporte(String),

    /// Cualquier otro status
    #[error("Ocurrió un error inesperado (código {0}).")]
    Inesperado(u16),
}

impl ApiError {
    /// Solo el 401 debe forzar el cierre de sesión; un 403 deja la
    /// sesión intacta (el usuario sigue logueado, solo le falta rol).
    pub fn requiere_relogin(&self) -> bool {
        matches!(self, ApiError::NoAutenticado)
    }
}

/// Mapea un status HTTP a su variante. `mensaje` es el `message` que
/// el backend adjunta en el cuerpo de los 400.
pub fn clasificar_estado(status: u16, mensaje: Option<String>) -> ApiError {
    match status {
        401 => ApiError::NoAutenticado,
        403 => ApiError::Prohibido,
        404 => ApiError::NoEncontrado,
        400 => ApiError::Validacion(mensaje),
        500..=599 => ApiError::ErrorServidor,
        otro => ApiError::Inesperado(otro),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cada_estado_conocido_tiene_su_variante() {
        assert_eq!(clasificar_estado(401, None), ApiError::NoAutenticado);
        assert_eq!(clasificar_estado(403, None), ApiError::Prohibido);
        assert_eq!(clasificar_estado(404, None), ApiError::NoEncontrado);
        assert_eq!(clasificar_estado(500, None), ApiError::ErrorServidor);
        assert_eq!(clasificar_estado(503, None), ApiError::ErrorServidor);
    }

    #[test]
    fn el_400_prefiere_el_mensaje_del_backend() {
        let error = clasificar_estado(400, Some("El DNI ya está registrado".to_string()));
        assert_eq!(
            error,
            ApiError::Validacion(Some("El DNI ya está registrado".to_string()))
        );
        assert_eq!(error.to_string(), "El DNI ya está registrado");
    }

    #[test]
    fn el_400_sin_mensaje_usa_el_texto_generico() {
        let error = clasificar_estado(400, None);
        assert_eq!(
            error.to_string(),
            "Solicitud inválida. Revisa los datos ingresados."
        );
    }

    #[test]
    fn los_estados_no_mapeados_caen_en_inesperado() {
        assert_eq!(clasificar_estado(418, None), ApiError::Inesperado(418));
        assert_eq!(clasificar_estado(302, None), ApiError::Inesperado(302));
    }

    #[test]
    fn solo_la_falta_de_autenticacion_fuerza_relogin() {
        assert!(ApiError::NoAutenticado.requiere_relogin());
        assert!(!ApiError::Prohibido.requiere_relogin());
        assert!(!ApiError::NoEncontrado.requiere_relogin());
        assert!(!ApiError::Validacion(None).requiere_relogin());
        assert!(!ApiError::ErrorServidor.requiere_relogin());
        assert!(!ApiError::Transporte("timeout".to_string()).requiere_relogin());
        assert!(!ApiError::Inesperado(418).requiere_relogin());
    }

    #[test]
    fn los_mensajes_al_usuario_no_filtran_detalles_internos() {
        let error = ApiError::Transporte("fetch failed: ERR_CONNECTION_REFUSED".to_string());
        assert_eq!(
            error.to_string(),
            "No se pudo conectar con el servidor. Revisa tu conexión."
        );
    }
}
