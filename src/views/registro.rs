// ============================================================================
// REGISTRO - Alta de cuenta de cliente
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};

use crate::dom::{append_child, input_value, on_click, ElementBuilder};
use crate::models::RegisterRequest;
use crate::router::{self, Route};
use crate::state::AppState;
use crate::utils::toast;
use crate::viewmodels::AuthViewModel;
use crate::views::formularios::campo_texto;

pub fn render_registro(state: &AppState) -> Result<Element, JsValue> {
    let pantalla = ElementBuilder::new("div")?.class("pantalla-registro").build();
    let tarjeta = ElementBuilder::new("div")?.class("tarjeta-form").build();

    let titulo = ElementBuilder::new("h1")?.text("Crear cuenta").build();
    append_child(&tarjeta, &titulo)?;

    append_child(&tarjeta, &campo_texto("reg-dni", "DNI", "text", "Sin puntos")?)?;
    append_child(&tarjeta, &campo_texto("reg-nombre", "Nombre", "text", "Tu nombre")?)?;
    append_child(
        &tarjeta,
        &campo_texto("reg-apellido", "Apellido", "text", "Tu apellido")?,
    )?;
    append_child(
        &tarjeta,
        &campo_texto("reg-email", "Correo electrónico", "email", "tu@correo.com")?,
    )?;
    append_child(
        &tarjeta,
        &campo_texto("reg-telefono", "Teléfono", "tel", "Con código de área")?,
    )?;
    append_child(
        &tarjeta,
        &campo_texto("reg-password", "Contraseña", "password", "Elegí una contraseña")?,
    )?;

    let crear = ElementBuilder::new("button")?
        .class("btn-principal")
        .text("Crear cuenta")
        .build();
    {
        let state = state.clone();
        on_click(&crear, move |_: MouseEvent| {
            let datos = RegisterRequest {
                dni: input_value("reg-dni").unwrap_or_default(),
                nombre: input_value("reg-nombre").unwrap_or_default(),
                apellido: input_value("reg-apellido").unwrap_or_default(),
                email: input_value("reg-email").unwrap_or_default(),
                password: input_value("reg-password").unwrap_or_default(),
                telefono: input_value("reg-telefono").unwrap_or_default(),
            };

            if datos.dni.is_empty()
                || datos.nombre.is_empty()
                || datos.apellido.is_empty()
                || datos.email.is_empty()
                || datos.password.is_empty()
                || datos.telefono.is_empty()
            {
                toast::advertencia("Por favor, completa todos los campos requeridos.");
                return;
            }

            let state = state.clone();
            spawn_local(async move {
                let vm = AuthViewModel::new(state.clone());
                match vm.register(&datos).await {
                    Ok(()) => {
                        toast::exito("Cuenta creada. Ahora puedes iniciar sesión.");
                        router::navigate(&state, Route::Login);
                    }
                    Err(mensaje) => {
                        log::error!("❌ [REGISTRO] {}", mensaje);
                        toast::error(&mensaje);
                    }
                }
            });
        })?;
    }
    append_child(&tarjeta, &crear)?;

    append_child(&pantalla, &tarjeta)?;
    Ok(pantalla)
}
