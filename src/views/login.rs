// ============================================================================
// LOGIN - Pantalla de inicio de sesión
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};

use crate::dom::{append_child, input_value, on_click, ElementBuilder};
use crate::router::{self, Route};
use crate::state::AppState;
use crate::utils::toast;
use crate::viewmodels::AuthViewModel;
use crate::views::formularios::campo_texto;

pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let pantalla = ElementBuilder::new("div")?.class("pantalla-login").build();
    let tarjeta = ElementBuilder::new("div")?.class("tarjeta-form").build();

    let titulo = ElementBuilder::new("h1")?.text("Iniciar sesión").build();
    append_child(&tarjeta, &titulo)?;

    append_child(
        &tarjeta,
        &campo_texto("login-email", "Correo electrónico", "email", "tu@correo.com")?,
    )?;
    append_child(
        &tarjeta,
        &campo_texto("login-password", "Contraseña", "password", "Tu contraseña")?,
    )?;

    let entrar = ElementBuilder::new("button")?
        .class("btn-principal")
        .text("Entrar")
        .build();
    {
        let state = state.clone();
        on_click(&entrar, move |_: MouseEvent| {
            let email = input_value("login-email").unwrap_or_default();
            let password = input_value("login-password").unwrap_or_default();

            if email.is_empty() || password.is_empty() {
                toast::advertencia("Por favor, completa todos los campos requeridos.");
                return;
            }

            let state = state.clone();
            spawn_local(async move {
                let vm = AuthViewModel::new(state.clone());
                match vm.login(&email, &password).await {
                    Ok(destino) => {
                        toast::exito("Sesión iniciada correctamente.");
                        router::navigate(&state, destino);
                    }
                    Err(mensaje) => {
                        log::error!("❌ [LOGIN] {}", mensaje);
                        toast::error(&mensaje);
                    }
                }
            });
        })?;
    }
    append_child(&tarjeta, &entrar)?;

    // Acceso al registro para quien todavía no tiene cuenta
    let pie = ElementBuilder::new("p")?.class("pie-form").build();
    let pregunta = ElementBuilder::new("span")?
        .text("¿No tenés cuenta? ")
        .build();
    let registrarse = ElementBuilder::new("a")?
        .attr("href", Route::Registro.path())?
        .text("Registrate")
        .build();
    {
        let state = state.clone();
        on_click(&registrarse, move |e: MouseEvent| {
            e.prevent_default();
            router::navigate(&state, Route::Registro);
        })?;
    }
    append_child(&pie, &pregunta)?;
    append_child(&pie, &registrarse)?;
    append_child(&tarjeta, &pie)?;

    append_child(&pantalla, &tarjeta)?;
    Ok(pantalla)
}
