// ============================================================================
// DASHBOARD - Reservas propias con alta rápida (personal del spa)
// ============================================================================
// Los clientes comunes no ven esta pantalla: reservan desde /reserva y
// hacia ahí se los redirige.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};

use crate::dom::{append_child, input_value, on_click, set_input_value, ElementBuilder};
use crate::models::servicio::nombre_para_tag;
use crate::models::{Cliente, Empleado, RefId, Reserva, ReservaPayload, ReservaResponse, Rol};
use crate::router::Route;
use crate::services::{empleados_api, reservas_api};
use crate::state::AppState;
use crate::utils::constants::ESTADO_PENDIENTE;
use crate::utils::toast;
use crate::viewmodels::manejar_error_api;
use crate::views::formularios::{campo_select, campo_texto, poblar_select};
use crate::views::{contenedor_transitorio, redirigir_luego};

pub fn render_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let es_staff = state.session.is_in_role(Rol::GerenteGeneral)
        || state.session.is_in_role(Rol::Recepcionista);
    if !es_staff {
        redirigir_luego(state, Route::Reserva);
        return contenedor_transitorio();
    }

    let pantalla = ElementBuilder::new("div")?
        .class("pantalla-dashboard")
        .build();

    let titulo = ElementBuilder::new("h1")?.text("Mis reservas").build();
    append_child(&pantalla, &titulo)?;

    let lista = ElementBuilder::new("div")?
        .id("dash-reservas")?
        .class("lista-reservas")
        .build();
    append_child(&pantalla, &lista)?;

    let form = ElementBuilder::new("div")?.class("tarjeta-form").build();
    let subtitulo = ElementBuilder::new("h2")?.text("Nueva reserva").build();
    append_child(&form, &subtitulo)?;

    // Los tres selects arrancan vacíos; los llena cada carga
    append_child(&form, &campo_select("dash-servicio", "Servicio", &[], None)?)?;
    append_child(
        &form,
        &campo_texto("dash-fecha", "Fecha y hora", "datetime-local", "")?,
    )?;
    append_child(&form, &campo_select("dash-empleado", "Profesional", &[], None)?)?;

    let reservas: Rc<RefCell<Vec<Reserva>>> = Rc::new(RefCell::new(Vec::new()));
    let empleados: Rc<RefCell<Vec<Empleado>>> = Rc::new(RefCell::new(Vec::new()));

    cargar_reservas(state, &lista, &reservas);
    cargar_servicios(state);
    cargar_empleados(state, &empleados);

    let crear = ElementBuilder::new("button")?
        .class("btn-principal")
        .text("Crear reserva")
        .build();
    {
        let state = state.clone();
        let lista = lista.clone();
        let reservas = reservas.clone();
        let empleados = empleados.clone();
        on_click(&crear, move |_: MouseEvent| {
            crear_reserva_rapida(&state, &lista, &reservas, &empleados);
        })?;
    }
    append_child(&form, &crear)?;
    append_child(&pantalla, &form)?;

    Ok(pantalla)
}

fn cargar_reservas(state: &AppState, lista: &Element, reservas: &Rc<RefCell<Vec<Reserva>>>) {
    let state = state.clone();
    let lista = lista.clone();
    let reservas = reservas.clone();
    spawn_local(async move {
        let epoch = state.session.epoch();
        let resultado = reservas_api::de_cliente(&state.session).await;
        if state.session.epoch() != epoch {
            return;
        }

        match resultado {
            Ok(recibidas) => {
                if recibidas.is_empty() {
                    toast::info("No tienes reservas actualmente");
                } else {
                    toast::exito("Reservas cargadas correctamente");
                }
                *reservas.borrow_mut() = recibidas;
                let _ = pintar_reservas(&lista, &reservas.borrow());
            }
            Err(error) => manejar_error_api(
                &state,
                "Error al cargar tus reservas. Por favor, intenta de nuevo.",
                &error,
            ),
        }
    });
}

fn cargar_servicios(state: &AppState) {
    let state = state.clone();
    spawn_local(async move {
        let epoch = state.session.epoch();
        let resultado = reservas_api::servicios(&state.session).await;
        if state.session.epoch() != epoch {
            return;
        }

        match resultado {
            Ok(tags) => {
                let opciones: Vec<(String, String)> = tags
                    .iter()
                    .map(|tag| (tag.clone(), nombre_para_tag(tag).to_string()))
                    .collect();
                let _ = poblar_select("dash-servicio", &opciones, None);
            }
            Err(error) => manejar_error_api(
                &state,
                "Error al cargar los servicios. Por favor, intenta de nuevo.",
                &error,
            ),
        }
    });
}

fn cargar_empleados(state: &AppState, empleados: &Rc<RefCell<Vec<Empleado>>>) {
    let state = state.clone();
    let empleados = empleados.clone();
    spawn_local(async move {
        let epoch = state.session.epoch();
        let resultado = empleados_api::listar(&state.session).await;
        if state.session.epoch() != epoch {
            return;
        }

        match resultado {
            Ok(recibidos) => {
                let opciones: Vec<(String, String)> = recibidos
                    .iter()
                    .filter_map(|e| e.id.map(|id| (id.to_string(), e.nombre_completo())))
                    .collect();
                let _ = poblar_select("dash-empleado", &opciones, None);
                *empleados.borrow_mut() = recibidos;
            }
            Err(error) => manejar_error_api(
                &state,
                "Error al cargar la lista de empleados. Por favor, intenta de nuevo.",
                &error,
            ),
        }
    });
}

fn crear_reserva_rapida(
    state: &AppState,
    lista: &Element,
    reservas: &Rc<RefCell<Vec<Reserva>>>,
    empleados: &Rc<RefCell<Vec<Empleado>>>,
) {
    let Some(cliente_id) = state
        .session
        .user_id()
        .and_then(|id| id.parse::<i64>().ok())
    else {
        toast::advertencia("Debes iniciar sesión para crear una reserva.");
        return;
    };

    let servicio = input_value("dash-servicio").unwrap_or_default();
    let fecha = input_value("dash-fecha").unwrap_or_default();
    let empleado_id = input_value("dash-empleado")
        .and_then(|v| v.parse::<i64>().ok())
        .filter(|_| !servicio.is_empty() && !fecha.is_empty());
    let Some(empleado_id) = empleado_id else {
        toast::advertencia("Por favor, completa todos los campos requeridos.");
        return;
    };

    // El alta rápida manda la fecha tal como la entrega el input
    let payload = ReservaPayload {
        id: None,
        cliente: RefId { id: cliente_id },
        empleado: RefId { id: empleado_id },
        fecha_reserva: fecha.clone(),
        servicio: servicio.clone(),
        status: ESTADO_PENDIENTE.to_string(),
    };

    let state = state.clone();
    let lista = lista.clone();
    let reservas = reservas.clone();
    let empleados = empleados.clone();
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
                    .clone()
                    .unwrap_or_else(|| "Reserva creada exitosamente".to_string());
                toast::exito(&mensaje);

                // La lista se actualiza en el momento, sin esperar un refetch
                let nueva = reserva_local(
                    cliente_id,
                    empleado_id,
                    &fecha,
                    &servicio,
                    respuesta,
                    js_sys::Date::now() as i64,
                    &empleados.borrow(),
                );
                reservas.borrow_mut().push(nueva);
                let _ = pintar_reservas(&lista, &reservas.borrow());
                limpiar_formulario();
            }
            Err(error) => manejar_error_api(
                &state,
                "Error al crear la reserva. Por favor, intenta de nuevo.",
                &error,
            ),
        }
    });
}

/// Reserva para pintar de inmediato: usa lo que devolvió el backend cuando
/// vino y completa el resto con lo que hay a mano. El cliente va solo con
/// su id; el empleado sale de la lista cargada o queda como desconocido.
fn reserva_local(
    cliente_id: i64,
    empleado_id: i64,
    fecha: &str,
    servicio: &str,
    respuesta: ReservaResponse,
    id_provisorio: i64,
    empleados: &[Empleado],
) -> Reserva {
    let id = respuesta.data.map(|d| d.id).unwrap_or(id_provisorio);

    let empleado = empleados
        .iter()
        .find(|e| e.id == Some(empleado_id))
        .cloned()
        .unwrap_or(Empleado {
            id: Some(empleado_id),
            dni: String::new(),
            nombre: "Desconocido".to_string(),
            apellido: String::new(),
            email: String::new(),
            telefono: String::new(),
            rol: String::new(),
            password: None,
        });

    Reserva {
        id,
        cliente: Cliente {
            id: Some(cliente_id),
            ..Cliente::default()
        },
        empleado,
        fecha_reserva: fecha.to_string(),
        servicio: servicio.to_string(),
        status: ESTADO_PENDIENTE.to_string(),
    }
}

fn pintar_reservas(lista: &Element, reservas: &[Reserva]) -> Result<(), JsValue> {
    lista.set_inner_html("");

    if reservas.is_empty() {
        let vacio = ElementBuilder::new("p")?
            .class("lista-vacia")
            .text("Sin reservas por el momento.")
            .build();
        return append_child(lista, &vacio);
    }

    let tabla = ElementBuilder::new("table")?.class("tabla-reservas").build();
    let cabecera = ElementBuilder::new("tr")?.build();
    for texto in ["Servicio", "Profesional", "Fecha", "Estado"] {
        let th = ElementBuilder::new("th")?.text(texto).build();
        append_child(&cabecera, &th)?;
    }
    append_child(&tabla, &cabecera)?;

    for reserva in reservas {
        let profesional = reserva.empleado.nombre_completo();
        let fila = ElementBuilder::new("tr")?.build();
        for valor in [
            nombre_para_tag(&reserva.servicio),
            profesional.as_str(),
            reserva.fecha_reserva.as_str(),
            reserva.status.as_str(),
        ] {
            let td = ElementBuilder::new("td")?.text(valor).build();
            append_child(&fila, &td)?;
        }
        append_child(&tabla, &fila)?;
    }
    append_child(lista, &tabla)
}

fn limpiar_formulario() {
    set_input_value("dash-servicio", "");
    set_input_value("dash-fecha", "");
    set_input_value("dash-empleado", "");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn respuesta_con_id(id: i64) -> ReservaResponse {
        ReservaResponse {
            message: None,
            data: Some(Reserva {
                id,
                cliente: Cliente::default(),
                empleado: Empleado::default(),
                fecha_reserva: "2026-09-01T10:00".to_string(),
                servicio: "YOGA".to_string(),
                status: "PENDIENTE".to_string(),
            }),
        }
    }

    fn empleada_luz() -> Empleado {
        Empleado {
            id: Some(2),
            dni: "27888999".to_string(),
            nombre: "Luz".to_string(),
            apellido: "Pérez".to_string(),
            email: "luz@spa.com".to_string(),
            telefono: "3624112233".to_string(),
            rol: "TERAPEUTA".to_string(),
            password: None,
        }
    }

    #[test]
    fn usa_el_id_que_devolvio_el_backend() {
        let reserva = reserva_local(
            5,
            2,
            "2026-09-01T10:00",
            "YOGA",
            respuesta_con_id(77),
            999,
            &[empleada_luz()],
        );
        assert_eq!(reserva.id, 77);
        assert_eq!(reserva.empleado.nombre_completo(), "Luz Pérez");
        assert_eq!(reserva.status, "PENDIENTE");
    }

    #[test]
    fn sin_cuerpo_del_backend_cae_al_id_provisorio() {
        let reserva = reserva_local(
            5,
            2,
            "2026-09-01T10:00",
            "YOGA",
            ReservaResponse::default(),
            999,
            &[empleada_luz()],
        );
        assert_eq!(reserva.id, 999);
    }

    #[test]
    fn empleado_fuera_de_la_lista_queda_como_desconocido() {
        let reserva = reserva_local(
            5,
            8,
            "2026-09-01T10:00",
            "YOGA",
            ReservaResponse::default(),
            999,
            &[empleada_luz()],
        );
        assert_eq!(reserva.empleado.id, Some(8));
        assert_eq!(reserva.empleado.nombre, "Desconocido");
        assert_eq!(reserva.empleado.rol, "");
    }

    #[test]
    fn el_cliente_viaja_solo_con_su_id() {
        let reserva = reserva_local(
            5,
            2,
            "2026-09-01T10:00",
            "YOGA",
            ReservaResponse::default(),
            999,
            &[],
        );
        assert_eq!(reserva.cliente.id, Some(5));
        assert_eq!(reserva.cliente.nombre, "");
    }
}
