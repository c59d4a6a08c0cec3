pub mod admin_clientes;
pub mod admin_empleados;
pub mod admin_reservas;
pub mod dashboard;
pub mod dashboard_admin;
pub mod dashboard_recepcion;
pub mod formularios;
pub mod home;
pub mod login;
pub mod navbar;
pub mod registro;
pub mod reserva;

pub use admin_clientes::render_admin_clientes;
pub use admin_empleados::render_admin_empleados;
pub use admin_reservas::render_admin_reservas;
pub use dashboard::render_dashboard;
pub use dashboard_admin::render_dashboard_admin;
pub use dashboard_recepcion::render_dashboard_recepcion;
pub use home::render_home;
pub use login::render_login;
pub use navbar::render_navbar;
pub use registro::render_registro;
pub use reserva::render_reserva;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::router::{self, Route};
use crate::state::AppState;

/// Navegar desde adentro de un render re-entraría al render,
/// así que la redirección se agenda para el próximo tick.
pub(crate) fn redirigir_luego(state: &AppState, destino: Route) {
    let state = state.clone();
    Timeout::new(0, move || {
        router::navigate(&state, destino);
    })
    .forget();
}

/// Contenedor vacío que una vista devuelve mientras espera su redirección.
pub(crate) fn contenedor_transitorio() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?.class("container").build())
}
