// ============================================================================
// ADMIN CLIENTES - Alta, edición y baja de clientes (solo gerencia)
// ============================================================================
// Un único formulario sirve para crear y editar; el modo lo decide el
// registro en edición. Tras crear o actualizar se repide la lista completa.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};

use crate::dom::{append_child, confirmar, input_value, on_click, set_input_value, ElementBuilder};
use crate::models::Cliente;
use crate::router::{policy, Route};
use crate::services::clientes_api;
use crate::state::AppState;
use crate::utils::toast;
use crate::viewmodels::manejar_error_api;
use crate::views::formularios::campo_texto;
use crate::views::{contenedor_transitorio, redirigir_luego};

pub fn render_admin_clientes(state: &AppState) -> Result<Element, JsValue> {
    // Chequeo propio además del guard de ruta
    if !policy::puede_acceder_gerencia(state.session.rol()) {
        redirigir_luego(state, Route::Dashboard);
        return contenedor_transitorio();
    }

    let pantalla = ElementBuilder::new("div")?.class("pantalla-admin").build();
    let titulo = ElementBuilder::new("h1")?.text("Gestión de clientes").build();
    append_child(&pantalla, &titulo)?;

    let formulario = ElementBuilder::new("div")?
        .id("adm-cli-form")?
        .build();
    let lista = ElementBuilder::new("div")?
        .id("adm-cli-lista")?
        .class("lista-admin")
        .build();

    let panel = PanelClientes {
        state: state.clone(),
        clientes: Rc::new(RefCell::new(Vec::new())),
        editando: Rc::new(RefCell::new(None)),
        formulario: formulario.clone(),
        lista: lista.clone(),
    };
    panel.pintar_formulario()?;
    panel.cargar();

    append_child(&pantalla, &formulario)?;
    append_child(&pantalla, &lista)?;
    Ok(pantalla)
}

#[derive(Clone)]
struct PanelClientes {
    state: AppState,
    clientes: Rc<RefCell<Vec<Cliente>>>,
    editando: Rc<RefCell<Option<Cliente>>>,
    formulario: Element,
    lista: Element,
}

impl PanelClientes {
    fn cargar(&self) {
        let panel = self.clone();
        spawn_local(async move {
            let epoch = panel.state.session.epoch();
            let resultado = clientes_api::listar(&panel.state.session).await;
            if panel.state.session.epoch() != epoch {
                return;
            }

            match resultado {
                Ok(recibidos) => {
                    if recibidos.is_empty() {
                        toast::info("No hay clientes registrados.");
                    }
                    *panel.clientes.borrow_mut() = recibidos;
                    let _ = panel.pintar_tabla();
                }
                Err(error) => {
                    manejar_error_api(&panel.state, "Error al cargar los clientes.", &error)
                }
            }
        });
    }

    fn pintar_formulario(&self) -> Result<(), JsValue> {
        self.formulario.set_inner_html("");
        let es_edicion = self.editando.borrow().is_some();

        let tarjeta = ElementBuilder::new("div")?.class("tarjeta-form").build();
        let subtitulo = ElementBuilder::new("h2")?
            .text(if es_edicion {
                "Editar cliente"
            } else {
                "Nuevo cliente"
            })
            .build();
        append_child(&tarjeta, &subtitulo)?;

        append_child(&tarjeta, &campo_texto("adm-cli-dni", "DNI", "text", "DNI")?)?;
        append_child(
            &tarjeta,
            &campo_texto("adm-cli-nombre", "Nombre", "text", "Nombre")?,
        )?;
        append_child(
            &tarjeta,
            &campo_texto("adm-cli-apellido", "Apellido", "text", "Apellido")?,
        )?;
        append_child(
            &tarjeta,
            &campo_texto("adm-cli-email", "Correo electrónico", "email", "correo@mail.com")?,
        )?;
        append_child(
            &tarjeta,
            &campo_texto("adm-cli-telefono", "Teléfono", "tel", "Teléfono")?,
        )?;

        let guardar = ElementBuilder::new("button")?
            .class("btn-principal")
            .text("Guardar")
            .build();
        {
            let panel = self.clone();
            on_click(&guardar, move |_: MouseEvent| panel.guardar())?;
        }
        append_child(&tarjeta, &guardar)?;

        if es_edicion {
            let cancelar = ElementBuilder::new("button")?
                .class("btn-secundario")
                .text("Cancelar")
                .build();
            {
                let panel = self.clone();
                on_click(&cancelar, move |_: MouseEvent| panel.reset_formulario())?;
            }
            append_child(&tarjeta, &cancelar)?;
        }

        append_child(&self.formulario, &tarjeta)
    }

    fn pintar_tabla(&self) -> Result<(), JsValue> {
        self.lista.set_inner_html("");

        let clientes = self.clientes.borrow();
        if clientes.is_empty() {
            let vacio = ElementBuilder::new("p")?
                .class("lista-vacia")
                .text("Sin clientes por el momento.")
                .build();
            return append_child(&self.lista, &vacio);
        }

        let tabla = ElementBuilder::new("table")?.class("tabla-admin").build();
        let cabecera = ElementBuilder::new("tr")?.build();
        for texto in ["DNI", "Nombre", "Apellido", "Email", "Teléfono", "Acciones"] {
            let th = ElementBuilder::new("th")?.text(texto).build();
            append_child(&cabecera, &th)?;
        }
        append_child(&tabla, &cabecera)?;

        for cliente in clientes.iter() {
            append_child(&tabla, &self.fila_cliente(cliente)?)?;
        }
        append_child(&self.lista, &tabla)
    }

    fn fila_cliente(&self, cliente: &Cliente) -> Result<Element, JsValue> {
        let fila = ElementBuilder::new("tr")?.build();
        for valor in [
            cliente.dni.as_str(),
            cliente.nombre.as_str(),
            cliente.apellido.as_str(),
            cliente.email.as_str(),
            cliente.telefono.as_str(),
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
            let cliente = cliente.clone();
            on_click(&editar, move |_: MouseEvent| panel.abrir_edicion(&cliente))?;
        }
        append_child(&acciones, &editar)?;

        if let Some(id) = cliente.id {
            let eliminar = ElementBuilder::new("button")?
                .class("btn-peligro")
                .text("Eliminar")
                .build();
            {
                let panel = self.clone();
                on_click(&eliminar, move |_: MouseEvent| panel.eliminar(id))?;
            }
            append_child(&acciones, &eliminar)?;
        }
        append_child(&fila, &acciones)?;
        Ok(fila)
    }

    fn abrir_edicion(&self, cliente: &Cliente) {
        *self.editando.borrow_mut() = Some(cliente.clone());
        let _ = self.pintar_formulario();

        set_input_value("adm-cli-dni", &cliente.dni);
        set_input_value("adm-cli-nombre", &cliente.nombre);
        set_input_value("adm-cli-apellido", &cliente.apellido);
        set_input_value("adm-cli-email", &cliente.email);
        set_input_value("adm-cli-telefono", &cliente.telefono);
    }

    fn reset_formulario(&self) {
        *self.editando.borrow_mut() = None;
        let _ = self.pintar_formulario();
    }

    /// Crea o actualiza según haya un registro en edición
    fn guardar(&self) {
        let datos = Cliente {
            id: self.editando.borrow().as_ref().and_then(|c| c.id),
            dni: input_value("adm-cli-dni").unwrap_or_default(),
            nombre: input_value("adm-cli-nombre").unwrap_or_default(),
            apellido: input_value("adm-cli-apellido").unwrap_or_default(),
            email: input_value("adm-cli-email").unwrap_or_default(),
            telefono: input_value("adm-cli-telefono").unwrap_or_default(),
            password: None,
        };

        let panel = self.clone();
        spawn_local(async move {
            let epoch = panel.state.session.epoch();
            let resultado = match datos.id {
                Some(id) => clientes_api::actualizar(&panel.state.session, id, &datos)
                    .await
                    .map(|_| ()),
                None => clientes_api::crear(&panel.state.session, &datos)
                    .await
                    .map(|_| ()),
            };
            if panel.state.session.epoch() != epoch {
                return;
            }

            let es_edicion = datos.id.is_some();
            match resultado {
                Ok(()) => {
                    if es_edicion {
                        toast::exito("Cliente actualizado exitosamente.");
                    } else {
                        toast::exito("Cliente creado exitosamente.");
                    }
                    panel.reset_formulario();
                    panel.cargar();
                }
                Err(error) => {
                    let contexto = if es_edicion {
                        "Error al actualizar el cliente."
                    } else {
                        "Error al crear el cliente."
                    };
                    manejar_error_api(&panel.state, contexto, &error);
                }
            }
        });
    }

    fn eliminar(&self, id: i64) {
        if !confirmar("¿Estás seguro de que deseas eliminar este cliente?") {
            return;
        }

        let panel = self.clone();
        spawn_local(async move {
            let epoch = panel.state.session.epoch();
            let resultado = clientes_api::eliminar(&panel.state.session, id).await;
            if panel.state.session.epoch() != epoch {
                return;
            }

            match resultado {
                Ok(()) => {
                    toast::exito("Cliente eliminado exitosamente.");
                    panel.cargar();
                }
                Err(error) => {
                    manejar_error_api(&panel.state, "Error al eliminar el cliente.", &error)
                }
            }
        });
    }
}
