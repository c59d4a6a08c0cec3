// ============================================================================
// HOME - Portada con el catálogo de servicios
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::servicio::{Servicio, CATALOGO};
use crate::router::{self, Route};
use crate::state::AppState;

pub fn render_home(state: &AppState) -> Result<Element, JsValue> {
    let pantalla = ElementBuilder::new("div")?.class("pantalla-home").build();

    // Hero
    let hero = ElementBuilder::new("section")?.class("hero").build();
    let titulo = ElementBuilder::new("h1")?
        .text("Spa Bienestar")
        .build();
    let bajada = ElementBuilder::new("p")?
        .class("hero-bajada")
        .text("Masajes, belleza y tratamientos para cuidarte como te merecés.")
        .build();

    let cta = ElementBuilder::new("button")?
        .class("btn-principal")
        .text("Reservar un turno")
        .build();
    {
        let state = state.clone();
        on_click(&cta, move |_: MouseEvent| {
            router::navigate(&state, Route::Reserva);
        })?;
    }

    append_child(&hero, &titulo)?;
    append_child(&hero, &bajada)?;
    append_child(&hero, &cta)?;
    append_child(&pantalla, &hero)?;

    // Catálogo por categoría
    let catalogo = ElementBuilder::new("section")?.class("catalogo").build();
    for categoria in CATALOGO {
        let bloque = ElementBuilder::new("div")?.class("categoria").build();
        let nombre = ElementBuilder::new("h2")?.text(categoria.nombre).build();
        append_child(&bloque, &nombre)?;

        let grilla = ElementBuilder::new("div")?.class("grilla-servicios").build();
        for servicio in categoria.servicios {
            append_child(&grilla, &tarjeta_servicio(state, servicio)?)?;
        }
        append_child(&bloque, &grilla)?;
        append_child(&catalogo, &bloque)?;
    }
    append_child(&pantalla, &catalogo)?;

    Ok(pantalla)
}

/// Tarjeta de un servicio con su botón de reserva preseleccionada
fn tarjeta_servicio(state: &AppState, servicio: &Servicio) -> Result<Element, JsValue> {
    let tarjeta = ElementBuilder::new("div")?.class("tarjeta-servicio").build();

    let nombre = ElementBuilder::new("h3")?.text(servicio.nombre).build();
    let descripcion = ElementBuilder::new("p")?
        .class("descripcion")
        .text(servicio.descripcion)
        .build();
    let precio = ElementBuilder::new("span")?
        .class("precio")
        .text(&format!("${}", servicio.precio))
        .build();

    let reservar = ElementBuilder::new("button")?
        .class("btn-secundario")
        .text("Reservar")
        .build();
    {
        let state = state.clone();
        let tag = servicio.tag;
        on_click(&reservar, move |_: MouseEvent| {
            router::navigate_con_query(&state, Route::Reserva, &format!("servicio={}", tag));
        })?;
    }

    append_child(&tarjeta, &nombre)?;
    append_child(&tarjeta, &descripcion)?;
    append_child(&tarjeta, &precio)?;
    append_child(&tarjeta, &reservar)?;
    Ok(tarjeta)
}
