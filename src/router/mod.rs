// ============================================================================
// ROUTER - Tabla de rutas, guards y navegación con History API
// ============================================================================

pub mod guard;
pub mod policy;
pub mod route;

pub use guard::{evaluar, Acceso, Decision};
pub use route::Route;

use wasm_bindgen::JsValue;

use crate::state::AppState;

/// Ruta actual según la barra de direcciones
pub fn current_route() -> Route {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    Route::parse(&path)
}

/// Navegación programática: pushState + re-render completo.
/// El guard corre al renderizar, no acá.
pub fn navigate(state: &AppState, route: Route) {
    log::info!("🧭 [ROUTER] Navegando a {}", route.path());
    state.set_route(route);
    push_history(route.path());
    crate::rerender_app();
}

/// Navegación con query string (p. ej. /reserva?servicio=YOGA)
pub fn navigate_con_query(state: &AppState, route: Route, query: &str) {
    log::info!("🧭 [ROUTER] Navegando a {}?{}", route.path(), query);
    state.set_route(route);
    push_history(&format!("{}?{}", route.path(), query));
    crate::rerender_app();
}

/// Reemplazar la entrada actual del historial. Se usa en las
/// redirecciones de guard para que el intento denegado no quede atrás.
pub fn replace_history(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn push_history(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Query param de la URL actual (p. ej. /reserva?servicio=YOGA)
pub fn query_param(nombre: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    if search.is_empty() {
        return None;
    }
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(nombre)
}
