// ============================================================================
// ERRORES - Política única de las pantallas ante un fallo de API
// ============================================================================

use crate::router::{self, Route};
use crate::services::ApiError;
use crate::state::AppState;
use crate::utils::toast;

/// Muestra el aviso que corresponde y, solo si el backend rechazó el
/// token, cierra la sesión y vuelve al login. Un 403 no desloguea.
pub fn manejar_error_api(state: &AppState, contexto: &str, error: &ApiError) {
    toast::error(&mensaje_para(contexto, error));

    if error.requiere_relogin() {
        log::warn!("🔐 [AUTH] El backend rechazó el token, cerrando sesión");
        state.session.logout();
        router::navigate(state, Route::Login);
    }
}

/// Qué texto ve el usuario: el del backend si es un 400 con mensaje,
/// el clasificado para los estados con texto fijo, y el de la pantalla
/// para el resto (red caída, 404, etc).
fn mensaje_para(contexto: &str, error: &ApiError) -> String {
    match error {
        ApiError::Validacion(Some(mensaje)) => mensaje.clone(),
        ApiError::NoAutenticado | ApiError::Prohibido | ApiError::ErrorServidor => {
            error.to_string()
        }
        _ => contexto.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTEXTO: &str = "Error al cargar las reservas. Por favor, intenta de nuevo.";

    #[test]
    fn el_mensaje_del_backend_gana_en_los_400() {
        let error = ApiError::Validacion(Some("El DNI ya existe".to_string()));
        assert_eq!(mensaje_para(CONTEXTO, &error), "El DNI ya existe");
    }

    #[test]
    fn los_estados_clasificados_muestran_su_texto_fijo() {
        assert_eq!(
            mensaje_para(CONTEXTO, &ApiError::Prohibido),
            "No tienes permiso para realizar esta acción."
        );
        assert_eq!(
            mensaje_para(CONTEXTO, &ApiError::NoAutenticado),
            "No estás autenticado. Por favor, inicia sesión nuevamente."
        );
        assert_eq!(
            mensaje_para(CONTEXTO, &ApiError::ErrorServidor),
            "Error en el servidor. Por favor, contacta al administrador."
        );
    }

    #[test]
    fn el_resto_usa_el_texto_de_la_pantalla() {
        assert_eq!(
            mensaje_para(CONTEXTO, &ApiError::Transporte("timeout".to_string())),
            CONTEXTO
        );
        assert_eq!(mensaje_para(CONTEXTO, &ApiError::NoEncontrado), CONTEXTO);
        assert_eq!(mensaje_para(CONTEXTO, &ApiError::Inesperado(418)), CONTEXTO);
    }
}
