// ============================================================================
// AUTH VIEWMODEL - LÓGICA DE LOGIN / REGISTRO / LOGOUT
// ============================================================================
// Orquesta la API de auth y el SessionStore. Las vistas solo reciben
// la ruta de destino o un mensaje listo para mostrar.
// ============================================================================

use crate::models::{LoginResponse, RegisterRequest, Rol};
use crate::router::{self, Route};
use crate::services::{auth_api, ApiError};
use crate::state::AppState;

const MENSAJE_LOGIN_GENERICO: &str = "Error al iniciar sesión. Por favor, intenta de nuevo.";

pub struct AuthViewModel {
    state: AppState,
}

impl AuthViewModel {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Login completo: llama a la API, persiste la sesión y devuelve
    /// la ruta a la que corresponde entrar según el rol.
    pub async fn login(&self, email: &str, password: &str) -> Result<Route, String> {
        log::info!("🔐 [AUTH] Iniciando login de {}", email);

        let respuesta = auth_api::login(&self.state.session, email, password)
            .await
            .map_err(|error| Self::mensaje_error_login(&error))?;

        self.aplicar_respuesta_login(respuesta)
    }

    /// Aplica la respuesta del backend al SessionStore. Separado del
    /// request para poder probarlo sin red.
    fn aplicar_respuesta_login(&self, respuesta: LoginResponse) -> Result<Route, String> {
        let Some(jwt) = respuesta.jwt else {
            log::error!("🔐 [AUTH] La respuesta de login no trajo jwt");
            return Err(MENSAJE_LOGIN_GENERICO.to_string());
        };

        let user_id = respuesta.user_id.map(|id| id.to_string());
        self.state
            .session
            .save_login(&jwt, user_id.as_deref(), respuesta.rol.as_deref());

        log::info!("✅ [AUTH] Sesión iniciada, rol: {:?}", self.state.session.rol());
        Ok(Self::destino_post_login(self.state.session.rol()))
    }

    /// Cada rol entra por su panel; los clientes van al tablero común
    fn destino_post_login(rol: Option<Rol>) -> Route {
        match rol {
            Some(Rol::GerenteGeneral) => Route::DashboardAdmin,
            Some(Rol::Recepcionista) => Route::DashboardRecepcion,
            _ => Route::Dashboard,
        }
    }

    /// El login tiene sus propios textos: un 401 acá es contraseña
    /// incorrecta, no una sesión vencida.
    fn mensaje_error_login(error: &ApiError) -> String {
        match error {
            ApiError::NoAutenticado => "Correo o contraseña incorrectos.".to_string(),
            ApiError::NoEncontrado => "El correo no está registrado.".to_string(),
            ApiError::Validacion(Some(mensaje)) => mensaje.clone(),
            _ => MENSAJE_LOGIN_GENERICO.to_string(),
        }
    }

    pub async fn register(&self, datos: &RegisterRequest) -> Result<(), String> {
        log::info!("📝 [AUTH] Registrando cuenta de {}", datos.email);
        auth_api::register(&self.state.session, datos)
            .await
            .map_err(|error| error.to_string())
    }

    pub fn logout(&self) {
        log::info!("👋 [AUTH] Cerrando sesión");
        self.state.session.logout();
        router::navigate(&self.state, Route::Login);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;
    use std::rc::Rc;

    fn viewmodel() -> (AuthViewModel, AppState) {
        let state = AppState::with_storage(Rc::new(MemoryStorage::new()));
        (AuthViewModel::new(state.clone()), state)
    }

    fn respuesta(jwt: Option<&str>, user_id: Option<i64>, rol: Option<&str>) -> LoginResponse {
        LoginResponse {
            jwt: jwt.map(str::to_string),
            user_id,
            rol: rol.map(str::to_string),
        }
    }

    #[test]
    fn una_respuesta_completa_persiste_la_sesion_y_elige_destino() {
        let (vm, state) = viewmodel();

        let destino = vm
            .aplicar_respuesta_login(respuesta(Some("jwt-abc"), Some(7), Some("GERENTE_GENERAL")))
            .unwrap();

        assert_eq!(destino, Route::DashboardAdmin);
        assert_eq!(state.session.token().as_deref(), Some("jwt-abc"));
        assert_eq!(state.session.user_id().as_deref(), Some("7"));
        assert!(state.session.is_logged_in());
    }

    #[test]
    fn sin_jwt_el_login_falla_y_no_toca_la_sesion() {
        let (vm, state) = viewmodel();

        let resultado = vm.aplicar_respuesta_login(respuesta(None, Some(7), Some("CLIENTE")));

        assert_eq!(resultado.unwrap_err(), MENSAJE_LOGIN_GENERICO);
        assert!(!state.session.is_logged_in());
        assert!(state.session.token().is_none());
    }

    #[test]
    fn la_recepcionista_entra_por_su_panel_y_el_cliente_por_el_tablero() {
        let (vm, _) = viewmodel();
        assert_eq!(
            vm.aplicar_respuesta_login(respuesta(Some("j"), Some(1), Some("RECEPCIONISTA")))
                .unwrap(),
            Route::DashboardRecepcion
        );

        let (vm, _) = viewmodel();
        assert_eq!(
            vm.aplicar_respuesta_login(respuesta(Some("j"), Some(2), Some("CLIENTE")))
                .unwrap(),
            Route::Dashboard
        );
    }

    #[test]
    fn una_respuesta_sin_user_id_igual_guarda_el_token() {
        let (vm, state) = viewmodel();

        let destino = vm
            .aplicar_respuesta_login(respuesta(Some("jwt-abc"), None, None))
            .unwrap();

        assert_eq!(destino, Route::Dashboard);
        assert!(state.session.is_logged_in());
        assert!(state.session.user_id().is_none());
    }

    #[test]
    fn los_errores_de_login_tienen_textos_propios() {
        assert_eq!(
            AuthViewModel::mensaje_error_login(&ApiError::NoAutenticado),
            "Correo o contraseña incorrectos."
        );
        assert_eq!(
            AuthViewModel::mensaje_error_login(&ApiError::NoEncontrado),
            "El correo no está registrado."
        );
        assert_eq!(
            AuthViewModel::mensaje_error_login(&ApiError::Validacion(Some(
                "Falta el email".to_string()
            ))),
            "Falta el email"
        );
        assert_eq!(
            AuthViewModel::mensaje_error_login(&ApiError::ErrorServidor),
            MENSAJE_LOGIN_GENERICO
        );
    }
}
