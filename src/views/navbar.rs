// ============================================================================
// NAVBAR - Barra de navegación compartida por todas las pantallas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::Rol;
use crate::router::{self, Route};
use crate::state::AppState;
use crate::viewmodels::AuthViewModel;

pub fn render_navbar(state: &AppState) -> Result<Element, JsValue> {
    let nav = ElementBuilder::new("nav")?.class("navbar").build();

    let brand = enlace(state, "Spa Bienestar", Route::Home)?;
    brand.set_class_name("navbar-brand");
    append_child(&nav, &brand)?;

    let links = ElementBuilder::new("div")?.class("navbar-links").build();
    append_child(&links, &enlace(state, "Inicio", Route::Home)?)?;
    append_child(&links, &enlace(state, "Reservar", Route::Reserva)?)?;

    if state.session.is_logged_in() {
        match state.session.rol() {
            Some(Rol::GerenteGeneral) => {
                append_child(
                    &links,
                    &enlace(state, "Panel de gerencia", Route::DashboardAdmin)?,
                )?;
            }
            Some(Rol::Recepcionista) => {
                append_child(
                    &links,
                    &enlace(state, "Panel de recepción", Route::DashboardRecepcion)?,
                )?;
            }
            _ => {
                append_child(&links, &enlace(state, "Mis reservas", Route::Dashboard)?)?;
            }
        }

        let salir = ElementBuilder::new("button")?
            .class("btn-salir")
            .text("Cerrar sesión")
            .build();
        let state_clone = state.clone();
        on_click(&salir, move |_: MouseEvent| {
            AuthViewModel::new(state_clone.clone()).logout();
        })?;
        append_child(&links, &salir)?;
    } else {
        append_child(&links, &enlace(state, "Iniciar sesión", Route::Login)?)?;
        append_child(&links, &enlace(state, "Registrarse", Route::Registro)?)?;
    }

    append_child(&nav, &links)?;
    Ok(nav)
}

/// Enlace interno: href real para accesibilidad, navegación por pushState
fn enlace(state: &AppState, texto: &str, route: Route) -> Result<Element, JsValue> {
    let clase = if state.current_route() == route {
        "nav-link activo"
    } else {
        "nav-link"
    };

    let a = ElementBuilder::new("a")?
        .class(clase)
        .attr("href", route.path())?
        .text(texto)
        .build();

    let state = state.clone();
    on_click(&a, move |e: MouseEvent| {
        e.prevent_default();
        router::navigate(&state, route);
    })?;

    Ok(a)
}
