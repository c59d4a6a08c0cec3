// ============================================================================
// APP - Aplicación principal: despacho de rutas con guard adelante
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id};
use crate::router::{self, Decision};
use crate::state::AppState;
use crate::views;

/// Aplicación principal: estado global + elemento raíz.
/// Cada render es completo: navbar + pantalla según la ruta vigente.
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No se encontró el elemento #app"))?;

        let state = AppState::new();
        if state.session.is_logged_in() {
            log::info!("💾 [APP] Sesión previa encontrada en storage");
        }

        // La ruta inicial sale de la barra de direcciones
        state.set_route(router::current_route());

        Ok(Self { state, root })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Render completo. El guard corre antes de montar la vista: si la
    /// navegación se deniega, la vista destino nunca se inicializa y la
    /// entrada del historial se reemplaza por la del fallback.
    pub fn render(&mut self) -> Result<(), JsValue> {
        let ruta = self.resolver_ruta_permitida();

        self.root.set_inner_html("");
        append_child(&self.root, &views::render_navbar(&self.state)?)?;

        let pantalla = match ruta {
            router::Route::Home => views::render_home(&self.state)?,
            router::Route::Login => views::render_login(&self.state)?,
            router::Route::Registro => views::render_registro(&self.state)?,
            router::Route::Reserva => views::render_reserva(&self.state)?,
            router::Route::Dashboard => views::render_dashboard(&self.state)?,
            router::Route::DashboardAdmin => views::render_dashboard_admin(&self.state)?,
            router::Route::DashboardRecepcion => views::render_dashboard_recepcion(&self.state)?,
            router::Route::AdminClientes => views::render_admin_clientes(&self.state)?,
            router::Route::AdminEmpleados => views::render_admin_empleados(&self.state)?,
            router::Route::AdminReservas => views::render_admin_reservas(&self.state)?,
        };
        append_child(&self.root, &pantalla)?;

        Ok(())
    }

    /// Evalúa el guard de la ruta vigente y aplica las redirecciones que
    /// hagan falta. Los fallbacks (home y login) son públicos, así que
    /// esto converge en a lo sumo un salto.
    fn resolver_ruta_permitida(&self) -> router::Route {
        let mut ruta = self.state.current_route();
        while let Decision::Redirigir(destino) = router::evaluar(ruta.acceso(), &self.state.session)
        {
            log::warn!(
                "🚫 [GUARD] Acceso denegado a {}, redirigiendo a {}",
                ruta.path(),
                destino.path()
            );
            self.state.set_route(destino);
            router::replace_history(destino.path());
            ruta = destino;
        }
        ruta
    }
}
