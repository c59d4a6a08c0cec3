// ============================================================================
// ADMIN RESERVAS - Gestión completa de reservas (solo gerencia)
// ============================================================================
// A diferencia del panel de recepción acá todo pasa por refetch: crear,
// actualizar y borrar repiden la lista completa en lugar de tocarla local.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};

use crate::dom::{
    append_child, confirmar, input_value, on_click, set_input_value, ElementBuilder,
};
use crate::models::servicio::nombre_para_tag;
use crate::models::{Cliente, Empleado, RefId, Reserva, ReservaPayload};
use crate::router::{policy, Route};
use crate::services::{clientes_api, empleados_api, reservas_api};
use crate::state::AppState;
use crate::utils::constants::ESTADO_PENDIENTE;
use crate::utils::toast;
use crate::viewmodels::manejar_error_api;
use crate::views::formularios::{
    campo_select, campo_texto, fecha_para_input, opciones_catalogo, opciones_estados,
    poblar_select,
};
use crate::views::{contenedor_transitorio, redirigir_luego};

pub fn render_admin_reservas(state: &AppState) -> Result<Element, JsValue> {
    // Chequeo propio además del guard de ruta
    if !policy::puede_acceder_gerencia(state.session.rol()) {
        redirigir_luego(state, Route::Dashboard);
        return contenedor_transitorio();
    }

    let pantalla = ElementBuilder::new("div")?.class("pantalla-admin").build();
    let titulo = ElementBuilder::new("h1")?.text("Gestión de reservas").build();
    append_child(&pantalla, &titulo)?;

    let edicion = ElementBuilder::new("div")?
        .id("admr-edicion")?
        .class("seccion-edicion")
        .build();
    let lista = ElementBuilder::new("div")?
        .id("admr-lista")?
        .class("lista-admin")
        .build();

    let panel = PanelReservas {
        state: state.clone(),
        reservas: Rc::new(RefCell::new(Vec::new())),
        clientes: Rc::new(RefCell::new(Vec::new())),
        empleados: Rc::new(RefCell::new(Vec::new())),
        editando: Rc::new(RefCell::new(None)),
        edicion: edicion.clone(),
        lista: lista.clone(),
    };

    let form = ElementBuilder::new("div")?.class("tarjeta-form").build();
    let subtitulo = ElementBuilder::new("h2")?.text("Nueva reserva").build();
    append_child(&form, &subtitulo)?;
    append_child(&form, &campo_select("admr-cliente", "Cliente", &[], None)?)?;
    append_child(
        &form,
        &campo_select("admr-empleado", "Profesional", &[], None)?,
    )?;
    append_child(
        &form,
        &campo_select("admr-servicio", "Servicio", &opciones_catalogo(), None)?,
    )?;
    append_child(
        &form,
        &campo_texto("admr-fecha", "Fecha y hora", "datetime-local", "")?,
    )?;
    append_child(
        &form,
        &campo_select(
            "admr-status",
            "Estado",
            &opciones_estados(),
            Some(ESTADO_PENDIENTE),
        )?,
    )?;

    let crear = ElementBuilder::new("button")?
        .class("btn-principal")
        .text("Crear reserva")
        .build();
    {
        let panel = panel.clone();
        on_click(&crear, move |_: MouseEvent| panel.crear())?;
    }
    append_child(&form, &crear)?;

    panel.cargar_reservas();
    panel.cargar_clientes();
    panel.cargar_empleados();

    append_child(&pantalla, &form)?;
    append_child(&pantalla, &edicion)?;
    append_child(&pantalla, &lista)?;
    Ok(pantalla)
}

#[derive(Clone)]
struct PanelReservas {
    state: AppState,
    reservas: Rc<RefCell<Vec<Reserva>>>,
    clientes: Rc<RefCell<Vec<Cliente>>>,
    empleados: Rc<RefCell<Vec<Empleado>>>,
    editando: Rc<RefCell<Option<Reserva>>>,
    edicion: Element,
    lista: Element,
}

impl PanelReservas {
    fn cargar_reservas(&self) {
        let panel = self.clone();
        spawn_local(async move {
            let epoch = panel.state.session.epoch();
            let resultado = reservas_api::listar_para_rol(&panel.state.session).await;
            if panel.state.session.epoch() != epoch {
                return;
            }

            match resultado {
                Ok(recibidas) => {
                    if recibidas.is_empty() {
                        toast::info("No hay reservas registradas.");
                    }
                    *panel.reservas.borrow_mut() = recibidas;
                    let _ = panel.pintar_tabla();
                }
                Err(error) => {
                    manejar_error_api(&panel.state, "Error al cargar las reservas.", &error)
                }
            }
        });
    }

    fn cargar_clientes(&self) {
        let panel = self.clone();
        spawn_local(async move {
            let epoch = panel.state.session.epoch();
            let resultado = clientes_api::listar(&panel.state.session).await;
            if panel.state.session.epoch() != epoch {
                return;
            }

            match resultado {
                Ok(recibidos) => {
                    *panel.clientes.borrow_mut() = recibidos;
                    let _ = poblar_select("admr-cliente", &panel.opciones_clientes(), None);
                }
                Err(error) => {
                    manejar_error_api(&panel.state, "Error al cargar los clientes.", &error)
                }
            }
        });
    }

    fn cargar_empleados(&self) {
        let panel = self.clone();
        spawn_local(async move {
            let epoch = panel.state.session.epoch();
            let resultado = empleados_api::listar(&panel.state.session).await;
            if panel.state.session.epoch() != epoch {
                return;
            }

            match resultado {
                Ok(recibidos) => {
                    *panel.empleados.borrow_mut() = recibidos;
                    let _ = poblar_select("admr-empleado", &panel.opciones_empleados(), None);
                }
                Err(error) => {
                    manejar_error_api(&panel.state, "Error al cargar los empleados.", &error)
                }
            }
        });
    }

    fn opciones_clientes(&self) -> Vec<(String, String)> {
        self.clientes
            .borrow()
            .iter()
            .filter_map(|c| c.id.map(|id| (id.to_string(), c.nombre_completo())))
            .collect()
    }

    fn opciones_empleados(&self) -> Vec<(String, String)> {
        self.empleados
            .borrow()
            .iter()
            .filter_map(|e| e.id.map(|id| (id.to_string(), e.nombre_completo())))
            .collect()
    }

    fn pintar_tabla(&self) -> Result<(), JsValue> {
        self.lista.set_inner_html("");

        let reservas = self.reservas.borrow();
        if reservas.is_empty() {
            let vacio = ElementBuilder::new("p")?
                .class("lista-vacia")
                .text("Sin reservas por el momento.")
                .build();
            return append_child(&self.lista, &vacio);
        }

        let tabla = ElementBuilder::new("table")?.class("tabla-admin").build();
        let cabecera = ElementBuilder::new("tr")?.build();
        for texto in ["Cliente", "Profesional", "Fecha", "Servicio", "Estado", "Acciones"] {
            let th = ElementBuilder::new("th")?.text(texto).build();
            append_child(&cabecera, &th)?;
        }
        append_child(&tabla, &cabecera)?;

        for reserva in reservas.iter() {
            append_child(&tabla, &self.fila_reserva(reserva)?)?;
        }
        append_child(&self.lista, &tabla)
    }

    fn fila_reserva(&self, reserva: &Reserva) -> Result<Element, JsValue> {
        let fila = ElementBuilder::new("tr")?.build();

        let cliente = reserva.cliente.nombre_completo();
        let profesional = reserva.empleado.nombre_completo();
        for valor in [
            cliente.as_str(),
            profesional.as_str(),
            reserva.fecha_reserva.as_str(),
            nombre_para_tag(&reserva.servicio),
            reserva.status.as_str(),
        ] {
            let td = ElementBuilder::new("td")?.text(valor).build();
            append_child(&fila, &td)?;
        }

        let acciones = ElementBuilder::new("td")?.class("acciones").build();
        let editar = ElementBuilder::new("button")?
            .class("btn-secundario")
            .text("Editar")
            .build();
        {
            let panel = self.clone();
            let reserva = reserva.clone();
            on_click(&editar, move |_: MouseEvent| {
                let _ = panel.abrir_edicion(&reserva);
            })?;
        }
        let eliminar = ElementBuilder::new("button")?
            .class("btn-peligro")
            .text("Eliminar")
            .build();
        {
            let panel = self.clone();
            let id = reserva.id;
            on_click(&eliminar, move |_: MouseEvent| panel.eliminar(id))?;
        }
        append_child(&acciones, &editar)?;
        append_child(&acciones, &eliminar)?;
        append_child(&fila, &acciones)?;
        Ok(fila)
    }

    fn crear(&self) {
        let servicio = input_value("admr-servicio").unwrap_or_default();
        let fecha = input_value("admr-fecha").unwrap_or_default();
        let status = input_value("admr-status")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| ESTADO_PENDIENTE.to_string());
        let cliente_id = input_value("admr-cliente").and_then(|v| v.parse::<i64>().ok());
        let empleado_id = input_value("admr-empleado").and_then(|v| v.parse::<i64>().ok());

        let (Some(cliente_id), Some(empleado_id)) = (cliente_id, empleado_id) else {
            toast::advertencia("Por favor, completa todos los campos requeridos.");
            return;
        };
        if servicio.is_empty() || fecha.is_empty() {
            toast::advertencia("Por favor, completa todos los campos requeridos.");
            return;
        }

        let payload = ReservaPayload {
            id: None,
            cliente: RefId { id: cliente_id },
            empleado: RefId { id: empleado_id },
            fecha_reserva: fecha,
            servicio,
            status,
        };

        let panel = self.clone();
        spawn_local(async move {
            let epoch = panel.state.session.epoch();
            let resultado = reservas_api::crear(&panel.state.session, &payload).await;
            if panel.state.session.epoch() != epoch {
                return;
            }

            match resultado {
                Ok(_) => {
                    toast::exito("Reserva creada exitosamente.");
                    limpiar_formulario_alta();
                    panel.cargar_reservas();
                }
                Err(error) => {
                    manejar_error_api(&panel.state, "Error al crear la reserva.", &error)
                }
            }
        });
    }

    fn abrir_edicion(&self, reserva: &Reserva) -> Result<(), JsValue> {
        *self.editando.borrow_mut() = Some(reserva.clone());
        self.edicion.set_inner_html("");

        let tarjeta = ElementBuilder::new("div")?.class("tarjeta-form").build();
        let subtitulo = ElementBuilder::new("h2")?.text("Editar reserva").build();
        append_child(&tarjeta, &subtitulo)?;

        let cliente_actual = reserva.cliente.id.map(|id| id.to_string());
        append_child(
            &tarjeta,
            &campo_select(
                "admr-edit-cliente",
                "Cliente",
                &self.opciones_clientes(),
                cliente_actual.as_deref(),
            )?,
        )?;
        let empleado_actual = reserva.empleado.id.map(|id| id.to_string());
        append_child(
            &tarjeta,
            &campo_select(
                "admr-edit-empleado",
                "Profesional",
                &self.opciones_empleados(),
                empleado_actual.as_deref(),
            )?,
        )?;
        append_child(
            &tarjeta,
            &campo_select(
                "admr-edit-servicio",
                "Servicio",
                &opciones_catalogo(),
                Some(&reserva.servicio),
            )?,
        )?;
        append_child(
            &tarjeta,
            &campo_texto("admr-edit-fecha", "Fecha y hora", "datetime-local", "")?,
        )?;
        append_child(
            &tarjeta,
            &campo_select(
                "admr-edit-status",
                "Estado",
                &opciones_estados(),
                Some(&reserva.status),
            )?,
        )?;

        let guardar = ElementBuilder::new("button")?
            .class("btn-principal")
            .text("Guardar")
            .build();
        {
            let panel = self.clone();
            on_click(&guardar, move |_: MouseEvent| panel.guardar_edicion())?;
        }
        let cancelar = ElementBuilder::new("button")?
            .class("btn-secundario")
            .text("Cancelar")
            .build();
        {
            let panel = self.clone();
            on_click(&cancelar, move |_: MouseEvent| panel.cerrar_edicion())?;
        }
        append_child(&tarjeta, &guardar)?;
        append_child(&tarjeta, &cancelar)?;
        append_child(&self.edicion, &tarjeta)?;

        set_input_value("admr-edit-fecha", &fecha_para_input(&reserva.fecha_reserva));
        Ok(())
    }

    fn guardar_edicion(&self) {
        let Some(editando) = self.editando.borrow().clone() else {
            return;
        };

        let servicio = input_value("admr-edit-servicio").unwrap_or_default();
        let fecha = input_value("admr-edit-fecha").unwrap_or_default();
        let status = input_value("admr-edit-status").unwrap_or_default();
        let cliente_id = input_value("admr-edit-cliente").and_then(|v| v.parse::<i64>().ok());
        let empleado_id = input_value("admr-edit-empleado").and_then(|v| v.parse::<i64>().ok());

        let (Some(cliente_id), Some(empleado_id)) = (cliente_id, empleado_id) else {
            toast::advertencia("Por favor, completa todos los campos requeridos.");
            return;
        };
        if servicio.is_empty() || fecha.is_empty() || status.is_empty() {
            toast::advertencia("Por favor, completa todos los campos requeridos.");
            return;
        }

        let payload = ReservaPayload {
            id: Some(editando.id),
            cliente: RefId { id: cliente_id },
            empleado: RefId { id: empleado_id },
            fecha_reserva: fecha,
            servicio,
            status,
        };

        let panel = self.clone();
        spawn_local(async move {
            let epoch = panel.state.session.epoch();
            let resultado =
                reservas_api::actualizar(&panel.state.session, editando.id, &payload).await;
            if panel.state.session.epoch() != epoch {
                return;
            }

            match resultado {
                Ok(_) => {
                    toast::exito("Reserva actualizada exitosamente.");
                    panel.cerrar_edicion();
                    panel.cargar_reservas();
                }
                Err(error) => {
                    manejar_error_api(&panel.state, "Error al actualizar la reserva.", &error)
                }
            }
        });
    }

    fn cerrar_edicion(&self) {
        *self.editando.borrow_mut() = None;
        self.edicion.set_inner_html("");
    }

    fn eliminar(&self, id: i64) {
        if !confirmar("¿Estás seguro de que deseas eliminar esta reserva?") {
            return;
        }

        let panel = self.clone();
        spawn_local(async move {
            let epoch = panel.state.session.epoch();
            let resultado = reservas_api::eliminar(&panel.state.session, id).await;
            if panel.state.session.epoch() != epoch {
                return;
            }

            match resultado {
                Ok(()) => {
                    toast::exito("Reserva eliminada exitosamente.");
                    panel.cargar_reservas();
                }
                Err(error) => {
                    manejar_error_api(&panel.state, "Error al eliminar la reserva.", &error)
                }
            }
        });
    }
}

fn limpiar_formulario_alta() {
    set_input_value("admr-cliente", "");
    set_input_value("admr-empleado", "");
    set_input_value("admr-servicio", "");
    set_input_value("admr-fecha", "");
    set_input_value("admr-status", ESTADO_PENDIENTE);
}
