// ============================================================================
// SPA RESERVAS - FRONTEND MVVM ESTRICTO (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado + Lógica UI
// - Services: SOLO comunicación API
// - State: State Management con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

mod app;
mod config;
mod dom;
mod models;
mod router;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para mejor debugging
    console_error_panic_hook::set_once();

    wasm_logger::init(Config::default());
    log::info!("🚀 Spa Reservas - Rust Puro + MVVM");

    let mut app = App::new()?;

    // El flag reactivo de sesión re-renderiza toda la app: el navbar y los
    // guards dependen de él. Diferido al próximo tick para no re-entrar al
    // render desde el handler que disparó el cambio.
    app.state().session.subscribe_logged_in(|| {
        log::info!("🔄 [MAIN] Cambió la sesión, re-renderizando");
        Timeout::new(0, rerender_app).forget();
    });

    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Botones atrás/adelante del navegador. Este listener global se
    // registra UNA sola vez acá en init(), por lo que es seguro.
    if let Some(win) = web_sys::window() {
        let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            let ruta = crate::router::current_route();
            log::info!("⬅️ [MAIN] popstate → {}", ruta.path());
            APP.with(|app_cell| {
                if let Some(ref app) = *app_cell.borrow() {
                    app.state().set_route(ruta);
                }
            });
            rerender_app();
        }) as Box<dyn FnMut(web_sys::Event)>);

        win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
        // forget() mantiene vivo el closure; al registrarse una única vez
        // no hay riesgo de acumulación.
        closure.forget();
    }

    Ok(())
}

/// Re-render completo de la app desde la ruta vigente
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(ref mut app) = *app_cell.borrow_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
            }
        } else {
            log::warn!("⚠️ [RERENDER] App no está inicializada");
        }
    });
}
