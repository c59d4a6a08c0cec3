// ============================================================================
// ADMIN EMPLEADOS - Alta, edición y baja de empleados (solo gerencia)
// ============================================================================
// El alta lleva contraseña y rol; la edición abre su propia tarjeta y no
// toca la contraseña. El selector de rol se alimenta del backend y si esa
// carga falla queda el valor por defecto.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};

use crate::dom::{append_child, confirmar, input_value, on_click, set_input_value, ElementBuilder};
use crate::models::Empleado;
use crate::router::{policy, Route};
use crate::services::empleados_api;
use crate::state::AppState;
use crate::utils::constants::ROL_EMPLEADO_DEFECTO;
use crate::utils::toast;
use crate::viewmodels::manejar_error_api;
use crate::views::formularios::{campo_select, campo_texto, poblar_select};
use crate::views::{contenedor_transitorio, redirigir_luego};

pub fn render_admin_empleados(state: &AppState) -> Result<Element, JsValue> {
    // Chequeo propio además del guard de ruta
    if !policy::puede_acceder_gerencia(state.session.rol()) {
        redirigir_luego(state, Route::Dashboard);
        return contenedor_transitorio();
    }

    let pantalla = ElementBuilder::new("div")?.class("pantalla-admin").build();
    let titulo = ElementBuilder::new("h1")?
        .text("Gestión de empleados")
        .build();
    append_child(&pantalla, &titulo)?;

    let edicion = ElementBuilder::new("div")?
        .id("adm-emp-edicion")?
        .class("seccion-edicion")
        .build();
    let lista = ElementBuilder::new("div")?
        .id("adm-emp-lista")?
        .class("lista-admin")
        .build();

    let panel = PanelEmpleados {
        state: state.clone(),
        empleados: Rc::new(RefCell::new(Vec::new())),
        roles: Rc::new(RefCell::new(Vec::new())),
        editando: Rc::new(RefCell::new(None)),
        edicion: edicion.clone(),
        lista: lista.clone(),
    };

    let form = ElementBuilder::new("div")?.class("tarjeta-form").build();
    let subtitulo = ElementBuilder::new("h2")?.text("Nuevo empleado").build();
    append_child(&form, &subtitulo)?;
    append_child(&form, &campo_texto("adm-emp-dni", "DNI", "text", "DNI")?)?;
    append_child(
        &form,
        &campo_texto("adm-emp-nombre", "Nombre", "text", "Nombre")?,
    )?;
    append_child(
        &form,
        &campo_texto("adm-emp-apellido", "Apellido", "text", "Apellido")?,
    )?;
    append_child(
        &form,
        &campo_texto("adm-emp-email", "Correo electrónico", "email", "correo@spa.com")?,
    )?;
    append_child(
        &form,
        &campo_texto("adm-emp-telefono", "Teléfono", "tel", "Teléfono")?,
    )?;
    append_child(
        &form,
        &campo_texto("adm-emp-password", "Contraseña", "password", "Contraseña")?,
    )?;
    append_child(
        &form,
        &campo_select(
            "adm-emp-rol",
            "Rol",
            &panel.opciones_roles(),
            Some(ROL_EMPLEADO_DEFECTO),
        )?,
    )?;

    let crear = ElementBuilder::new("button")?
        .class("btn-principal")
        .text("Crear empleado")
        .build();
    {
        let panel = panel.clone();
        on_click(&crear, move |_: MouseEvent| panel.crear())?;
    }
    append_child(&form, &crear)?;

    panel.cargar();
    panel.cargar_roles();

    append_child(&pantalla, &form)?;
    append_child(&pantalla, &edicion)?;
    append_child(&pantalla, &lista)?;
    Ok(pantalla)
}

#[derive(Clone)]
struct PanelEmpleados {
    state: AppState,
    empleados: Rc<RefCell<Vec<Empleado>>>,
    roles: Rc<RefCell<Vec<String>>>,
    editando: Rc<RefCell<Option<Empleado>>>,
    edicion: Element,
    lista: Element,
}

impl PanelEmpleados {
    fn cargar(&self) {
        let panel = self.clone();
        spawn_local(async move {
            let epoch = panel.state.session.epoch();
            let resultado = empleados_api::listar(&panel.state.session).await;
            if panel.state.session.epoch() != epoch {
                return;
            }

            match resultado {
                Ok(recibidos) => {
                    if recibidos.is_empty() {
                        toast::info("No hay empleados registrados.");
                    }
                    *panel.empleados.borrow_mut() = recibidos;
                    let _ = panel.pintar_tabla();
                }
                Err(error) => {
                    manejar_error_api(&panel.state, "Error al cargar los empleados.", &error)
                }
            }
        });
    }

    /// La lista de roles es decorativa para el select; si falla queda
    /// el valor por defecto y el alta sigue andando.
    fn cargar_roles(&self) {
        let panel = self.clone();
        spawn_local(async move {
            let epoch = panel.state.session.epoch();
            let resultado = empleados_api::roles(&panel.state.session).await;
            if panel.state.session.epoch() != epoch {
                return;
            }

            match resultado {
                Ok(roles) if !roles.is_empty() => {
                    *panel.roles.borrow_mut() = roles;
                    let _ = poblar_select(
                        "adm-emp-rol",
                        &panel.opciones_roles(),
                        Some(ROL_EMPLEADO_DEFECTO),
                    );
                }
                Ok(_) => {}
                Err(error) => {
                    log::warn!("👔 [EMPLEADOS] No se pudo cargar la lista de roles: {}", error)
                }
            }
        });
    }

    fn opciones_roles(&self) -> Vec<(String, String)> {
        let roles = self.roles.borrow();
        if roles.is_empty() {
            return vec![(
                ROL_EMPLEADO_DEFECTO.to_string(),
                ROL_EMPLEADO_DEFECTO.to_string(),
            )];
        }
        roles.iter().map(|r| (r.clone(), r.clone())).collect()
    }

    fn pintar_tabla(&self) -> Result<(), JsValue> {
        self.lista.set_inner_html("");

        let empleados = self.empleados.borrow();
        if empleados.is_empty() {
            let vacio = ElementBuilder::new("p")?
                .class("lista-vacia")
                .text("Sin empleados por el momento.")
                .build();
            return append_child(&self.lista, &vacio);
        }

        let tabla = ElementBuilder::new("table")?.class("tabla-admin").build();
        let cabecera = ElementBuilder::new("tr")?.build();
        for texto in [
            "DNI", "Nombre", "Apellido", "Email", "Teléfono", "Rol", "Acciones",
        ] {
            let th = ElementBuilder::new("th")?.text(texto).build();
            append_child(&cabecera, &th)?;
        }
        append_child(&tabla, &cabecera)?;

        for empleado in empleados.iter() {
            append_child(&tabla, &self.fila_empleado(empleado)?)?;
        }
        append_child(&self.lista, &tabla)
    }

    fn fila_empleado(&self, empleado: &Empleado) -> Result<Element, JsValue> {
        let fila = ElementBuilder::new("tr")?.build();
        for valor in [
            empleado.dni.as_str(),
            empleado.nombre.as_str(),
            empleado.apellido.as_str(),
            empleado.email.as_str(),
            empleado.telefono.as_str(),
            empleado.rol.as_str(),
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
            let empleado = empleado.clone();
            on_click(&editar, move |_: MouseEvent| {
                let _ = panel.abrir_edicion(&empleado);
            })?;
        }
        append_child(&acciones, &editar)?;

        if let Some(id) = empleado.id {
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

    fn crear(&self) {
        let rol = input_value("adm-emp-rol")
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| ROL_EMPLEADO_DEFECTO.to_string());
        let datos = Empleado {
            id: None,
            dni: input_value("adm-emp-dni").unwrap_or_default(),
            nombre: input_value("adm-emp-nombre").unwrap_or_default(),
            apellido: input_value("adm-emp-apellido").unwrap_or_default(),
            email: input_value("adm-emp-email").unwrap_or_default(),
            telefono: input_value("adm-emp-telefono").unwrap_or_default(),
            rol,
            password: Some(input_value("adm-emp-password").unwrap_or_default()),
        };

        let panel = self.clone();
        spawn_local(async move {
            let epoch = panel.state.session.epoch();
            let resultado = empleados_api::crear(&panel.state.session, &datos).await;
            if panel.state.session.epoch() != epoch {
                return;
            }

            match resultado {
                Ok(_) => {
                    toast::exito("Empleado creado exitosamente.");
                    panel.limpiar_formulario();
                    panel.cargar();
                }
                Err(error) => {
                    manejar_error_api(&panel.state, "Error al crear el empleado.", &error)
                }
            }
        });
    }

    fn limpiar_formulario(&self) {
        for id in [
            "adm-emp-dni",
            "adm-emp-nombre",
            "adm-emp-apellido",
            "adm-emp-email",
            "adm-emp-telefono",
            "adm-emp-password",
        ] {
            set_input_value(id, "");
        }
        set_input_value("adm-emp-rol", ROL_EMPLEADO_DEFECTO);
    }

    fn abrir_edicion(&self, empleado: &Empleado) -> Result<(), JsValue> {
        *self.editando.borrow_mut() = Some(empleado.clone());
        self.edicion.set_inner_html("");

        let tarjeta = ElementBuilder::new("div")?.class("tarjeta-form").build();
        let subtitulo = ElementBuilder::new("h2")?.text("Editar empleado").build();
        append_child(&tarjeta, &subtitulo)?;

        append_child(
            &tarjeta,
            &campo_texto("adm-emp-edit-dni", "DNI", "text", "DNI")?,
        )?;
        append_child(
            &tarjeta,
            &campo_texto("adm-emp-edit-nombre", "Nombre", "text", "Nombre")?,
        )?;
        append_child(
            &tarjeta,
            &campo_texto("adm-emp-edit-apellido", "Apellido", "text", "Apellido")?,
        )?;
        append_child(
            &tarjeta,
            &campo_texto(
                "adm-emp-edit-email",
                "Correo electrónico",
                "email",
                "correo@spa.com",
            )?,
        )?;
        append_child(
            &tarjeta,
            &campo_texto("adm-emp-edit-telefono", "Teléfono", "tel", "Teléfono")?,
        )?;
        append_child(
            &tarjeta,
            &campo_select(
                "adm-emp-edit-rol",
                "Rol",
                &self.opciones_roles(),
                Some(&empleado.rol),
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

        set_input_value("adm-emp-edit-dni", &empleado.dni);
        set_input_value("adm-emp-edit-nombre", &empleado.nombre);
        set_input_value("adm-emp-edit-apellido", &empleado.apellido);
        set_input_value("adm-emp-edit-email", &empleado.email);
        set_input_value("adm-emp-edit-telefono", &empleado.telefono);
        Ok(())
    }

    fn guardar_edicion(&self) {
        let Some(editando) = self.editando.borrow().clone() else {
            return;
        };
        let Some(id) = editando.id else {
            log::error!("👔 [EMPLEADOS] El registro en edición no tiene id");
            return;
        };

        let rol = input_value("adm-emp-edit-rol")
            .filter(|r| !r.is_empty())
            .unwrap_or(editando.rol);
        let datos = Empleado {
            id: Some(id),
            dni: input_value("adm-emp-edit-dni").unwrap_or_default(),
            nombre: input_value("adm-emp-edit-nombre").unwrap_or_default(),
            apellido: input_value("adm-emp-edit-apellido").unwrap_or_default(),
            email: input_value("adm-emp-edit-email").unwrap_or_default(),
            telefono: input_value("adm-emp-edit-telefono").unwrap_or_default(),
            rol,
            password: None,
        };

        let panel = self.clone();
        spawn_local(async move {
            let epoch = panel.state.session.epoch();
            let resultado = empleados_api::actualizar(&panel.state.session, id, &datos).await;
            if panel.state.session.epoch() != epoch {
                return;
            }

            match resultado {
                Ok(_) => {
                    toast::exito("Empleado actualizado exitosamente.");
                    panel.cerrar_edicion();
                    panel.cargar();
                }
                Err(error) => {
                    manejar_error_api(&panel.state, "Error al actualizar el empleado.", &error)
                }
            }
        });
    }

    fn cerrar_edicion(&self) {
        *self.editando.borrow_mut() = None;
        self.edicion.set_inner_html("");
    }

    fn eliminar(&self, id: i64) {
        if !confirmar("¿Estás seguro de que deseas eliminar este empleado?") {
            return;
        }

        let panel = self.clone();
        spawn_local(async move {
            let epoch = panel.state.session.epoch();
            let resultado = empleados_api::eliminar(&panel.state.session, id).await;
            if panel.state.session.epoch() != epoch {
                return;
            }

            match resultado {
                Ok(()) => {
                    toast::exito("Empleado eliminado exitosamente.");
                    panel.cargar();
                }
                Err(error) => {
                    manejar_error_api(&panel.state, "Error al eliminar el empleado.", &error)
                }
            }
        });
    }
}
