// ============================================================================
// DASHBOARD ADMIN - Panel de gerencia con contadores y accesos
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};

use crate::dom::{append_child, get_element_by_id, on_click, ElementBuilder};
use crate::router::{self, policy, Route};
use crate::services::{clientes_api, empleados_api, reservas_api};
use crate::state::AppState;
use crate::viewmodels::manejar_error_api;
use crate::views::{contenedor_transitorio, redirigir_luego};

pub fn render_dashboard_admin(state: &AppState) -> Result<Element, JsValue> {
    // Chequeo propio además del guard de ruta
    if !policy::puede_acceder_gerencia(state.session.rol()) {
        redirigir_luego(state, Route::Dashboard);
        return contenedor_transitorio();
    }

    let pantalla = ElementBuilder::new("div")?.class("pantalla-admin").build();

    let titulo = ElementBuilder::new("h1")?.text("Panel de gerencia").build();
    append_child(&pantalla, &titulo)?;
    let bajada = ElementBuilder::new("p")?
        .class("bajada")
        .text("Bienvenido. Desde acá se administra el spa.")
        .build();
    append_child(&pantalla, &bajada)?;

    let contadores = ElementBuilder::new("section")?.class("contadores").build();
    append_child(
        &contadores,
        &tarjeta_contador("contador-clientes", "Clientes")?,
    )?;
    append_child(
        &contadores,
        &tarjeta_contador("contador-empleados", "Empleados")?,
    )?;
    append_child(
        &contadores,
        &tarjeta_contador("contador-reservas", "Reservas")?,
    )?;
    append_child(&pantalla, &contadores)?;

    cargar_contadores(state);

    let accesos = ElementBuilder::new("section")?
        .class("accesos-admin")
        .build();
    append_child(
        &accesos,
        &tarjeta_nav(state, "Gestionar clientes", Route::AdminClientes)?,
    )?;
    append_child(
        &accesos,
        &tarjeta_nav(state, "Gestionar empleados", Route::AdminEmpleados)?,
    )?;
    append_child(
        &accesos,
        &tarjeta_nav(state, "Gestionar reservas", Route::AdminReservas)?,
    )?;
    append_child(&pantalla, &accesos)?;

    Ok(pantalla)
}

fn tarjeta_contador(id: &str, etiqueta: &str) -> Result<Element, JsValue> {
    let tarjeta = ElementBuilder::new("div")?
        .class("tarjeta-contador")
        .build();
    let valor = ElementBuilder::new("span")?
        .id(id)?
        .class("contador-valor")
        .text("...")
        .build();
    let texto = ElementBuilder::new("span")?
        .class("contador-etiqueta")
        .text(etiqueta)
        .build();
    append_child(&tarjeta, &valor)?;
    append_child(&tarjeta, &texto)?;
    Ok(tarjeta)
}

/// Tres cargas independientes; cada contador se pinta cuando llega la suya
fn cargar_contadores(state: &AppState) {
    {
        let state = state.clone();
        spawn_local(async move {
            let epoch = state.session.epoch();
            let resultado = clientes_api::listar(&state.session).await;
            if state.session.epoch() != epoch {
                return;
            }
            match resultado {
                Ok(clientes) => pintar_contador("contador-clientes", clientes.len()),
                Err(error) => manejar_error_api(&state, "Error al cargar los clientes.", &error),
            }
        });
    }
    {
        let state = state.clone();
        spawn_local(async move {
            let epoch = state.session.epoch();
            let resultado = empleados_api::listar(&state.session).await;
            if state.session.epoch() != epoch {
                return;
            }
            match resultado {
                Ok(empleados) => pintar_contador("contador-empleados", empleados.len()),
                Err(error) => manejar_error_api(&state, "Error al cargar los empleados.", &error),
            }
        });
    }
    {
        let state = state.clone();
        spawn_local(async move {
            let epoch = state.session.epoch();
            let resultado = reservas_api::listar_para_rol(&state.session).await;
            if state.session.epoch() != epoch {
                return;
            }
            match resultado {
                Ok(reservas) => pintar_contador("contador-reservas", reservas.len()),
                Err(error) => manejar_error_api(&state, "Error al cargar las reservas.", &error),
            }
        });
    }
}

fn pintar_contador(id: &str, cantidad: usize) {
    if let Some(el) = get_element_by_id(id) {
        el.set_text_content(Some(&cantidad.to_string()));
    }
}

fn tarjeta_nav(state: &AppState, texto: &str, destino: Route) -> Result<Element, JsValue> {
    let boton = ElementBuilder::new("button")?
        .class("tarjeta-nav")
        .text(texto)
        .build();
    let state = state.clone();
    on_click(&boton, move |_: MouseEvent| {
        router::navigate(&state, destino);
    })?;
    Ok(boton)
}
