// ============================================================================
// RESERVA - Formulario público de alta de turnos
// ============================================================================

use chrono::{Local, NaiveDateTime, TimeZone, Utc};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};

use crate::dom::{append_child, get_element_by_id, input_value, on_click, ElementBuilder};
use crate::models::{RefId, ReservaPayload};
use crate::router::{self, query_param, Route};
use crate::services::{clientes_api, empleados_api, reservas_api};
use crate::state::AppState;
use crate::utils::constants::ESTADO_PENDIENTE;
use crate::utils::toast;
use crate::viewmodels::manejar_error_api;
use crate::views::formularios::{campo_select, campo_texto, opciones_catalogo, poblar_select};
use crate::views::{contenedor_transitorio, redirigir_luego};

pub fn render_reserva(state: &AppState) -> Result<Element, JsValue> {
    // Sin sesión no hay turno: aviso y vuelta al inicio
    let cliente_id = state
        .session
        .user_id()
        .and_then(|id| id.parse::<i64>().ok())
        .filter(|_| state.session.is_logged_in());
    let Some(cliente_id) = cliente_id else {
        toast::advertencia("Debes iniciar sesión para hacer una reserva.");
        redirigir_luego(state, Route::Home);
        return contenedor_transitorio();
    };

    let pantalla = ElementBuilder::new("div")?.class("pantalla-reserva").build();
    let tarjeta = ElementBuilder::new("div")?.class("tarjeta-form").build();

    let titulo = ElementBuilder::new("h1")?.text("Reservar un turno").build();
    append_child(&tarjeta, &titulo)?;

    // Lo completa la carga del cliente actual
    let saludo = ElementBuilder::new("p")?
        .id("reserva-saludo")?
        .class("saludo-cliente")
        .build();
    append_child(&tarjeta, &saludo)?;

    let opciones_servicio = opciones_catalogo();
    let preseleccion = query_param("servicio");
    append_child(
        &tarjeta,
        &campo_select(
            "reserva-servicio",
            "Servicio",
            &opciones_servicio,
            preseleccion.as_deref(),
        )?,
    )?;

    append_child(
        &tarjeta,
        &campo_texto("reserva-fecha", "Fecha y hora", "datetime-local", "")?,
    )?;

    // Arranca vacío; las opciones llegan por API
    append_child(
        &tarjeta,
        &campo_select("reserva-empleado", "Profesional", &[], None)?,
    )?;

    cargar_empleados(state);
    cargar_cliente_actual(state);

    let confirmar = ElementBuilder::new("button")?
        .class("btn-principal")
        .text("Confirmar reserva")
        .build();
    {
        let state = state.clone();
        on_click(&confirmar, move |_: MouseEvent| {
            enviar_reserva(&state, cliente_id);
        })?;
    }
    append_child(&tarjeta, &confirmar)?;

    append_child(&pantalla, &tarjeta)?;
    Ok(pantalla)
}

fn cargar_empleados(state: &AppState) {
    let state = state.clone();
    spawn_local(async move {
        let epoch = state.session.epoch();
        let resultado = empleados_api::listar(&state.session).await;
        if state.session.epoch() != epoch {
            return;
        }

        match resultado {
            Ok(empleados) => {
                if empleados.is_empty() {
                    toast::info("No hay empleados disponibles en este momento.");
                } else {
                    toast::exito("Lista de empleados cargada correctamente.");
                }

                let opciones: Vec<(String, String)> = empleados
                    .iter()
                    .filter_map(|e| e.id.map(|id| (id.to_string(), e.nombre_completo())))
                    .collect();
                let _ = poblar_select("reserva-empleado", &opciones, None);
            }
            Err(error) => manejar_error_api(
                &state,
                "Error al cargar la lista de empleados. Por favor, intenta de nuevo.",
                &error,
            ),
        }
    });
}

/// El saludo es decorativo: si el backend no resuelve el cliente actual
/// el formulario sigue andando sin nombre.
fn cargar_cliente_actual(state: &AppState) {
    let state = state.clone();
    spawn_local(async move {
        let epoch = state.session.epoch();
        let resultado = clientes_api::actual(&state.session).await;
        if state.session.epoch() != epoch {
            return;
        }

        match resultado {
            Ok(cliente) => {
                if let Some(saludo) = get_element_by_id("reserva-saludo") {
                    saludo.set_text_content(Some(&format!(
                        "Reservando como {}",
                        cliente.nombre_completo()
                    )));
                }
            }
            Err(error) => {
                log::warn!("📅 [RESERVA] No se pudo obtener el cliente actual: {}", error)
            }
        }
    });
}

fn enviar_reserva(state: &AppState, cliente_id: i64) {
    let servicio = input_value("reserva-servicio").unwrap_or_default();
    let fecha = input_value("reserva-fecha").unwrap_or_default();
    let empleado_id = input_value("reserva-empleado")
        .and_then(|v| v.parse::<i64>().ok())
        .filter(|_| !servicio.is_empty() && !fecha.is_empty());

    let Some(empleado_id) = empleado_id else {
        toast::advertencia("Por favor, completa todos los campos requeridos.");
        return;
    };
    let Some(fecha_iso) = fecha_a_iso(&fecha) else {
        toast::advertencia("La fecha ingresada no es válida.");
        return;
    };

    let payload = ReservaPayload {
        id: None,
        cliente: RefId { id: cliente_id },
        empleado: RefId { id: empleado_id },
        fecha_reserva: fecha_iso,
        servicio,
        status: ESTADO_PENDIENTE.to_string(),
    };

    let state = state.clone();
    spawn_local(async move {
        let epoch = state.session.epoch();
        let resultado = reservas_api::crear(&state.session, &payload).await;
        if state.session.epoch() != epoch {
            return;
        }

        match resultado {
            Ok(respuesta) => {
                let mensaje = respuesta
                    .message
                    .unwrap_or_else(|| "Reserva creada exitosamente.".to_string());
                toast::exito(&mensaje);
                router::navigate(&state, Route::Home);
            }
            Err(error) => manejar_error_api(
                &state,
                "Error al crear la reserva. Por favor, intenta de nuevo.",
                &error,
            ),
        }
    });
}

/// El input datetime-local entrega "YYYY-MM-DDTHH:MM" en hora local;
/// el backend espera ISO-8601 UTC con milisegundos.
fn fecha_a_iso(valor: &str) -> Option<String> {
    let naive = NaiveDateTime::parse_from_str(valor, "%Y-%m-%dT%H:%M").ok()?;
    let local = Local.from_local_datetime(&naive).earliest()?;
    Some(
        local
            .with_timezone(&Utc)
            .format("%Y-%m-%dT%H:%M:%S%.3fZ")
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn la_fecha_del_input_se_convierte_a_utc_con_milisegundos() {
        let iso = fecha_a_iso("2026-03-15T14:30").unwrap();
        // El offset depende del huso de la máquina; la forma no
        assert_eq!(iso.len(), "2026-03-15T14:30:00.000Z".len());
        assert!(iso.ends_with("Z"));
        assert!(iso.contains(".000"));
    }

    #[test]
    fn una_fecha_invalida_no_produce_iso() {
        assert_eq!(fecha_a_iso(""), None);
        assert_eq!(fecha_a_iso("no-es-fecha"), None);
        assert_eq!(fecha_a_iso("2026-13-40T99:99"), None);
    }
}
