// ============================================================================
// TOAST - Notificaciones transitorias de resultado (éxito / error / info)
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom::{append_child, create_element, document, get_element_by_id, set_attribute};
use crate::utils::constants::TOAST_DURACION_MS;

pub fn exito(mensaje: &str) {
    log::info!("✅ [TOAST] {}", mensaje);
    let _ = mostrar("toast-exito", mensaje);
}

pub fn error(mensaje: &str) {
    log::error!("❌ [TOAST] {}", mensaje);
    let _ = mostrar("toast-error", mensaje);
}

pub fn info(mensaje: &str) {
    log::info!("ℹ️ [TOAST] {}", mensaje);
    let _ = mostrar("toast-info", mensaje);
}

pub fn advertencia(mensaje: &str) {
    log::warn!("⚠️ [TOAST] {}", mensaje);
    let _ = mostrar("toast-advertencia", mensaje);
}

fn mostrar(clase: &str, mensaje: &str) -> Result<(), JsValue> {
    let contenedor = contenedor_toasts()?;

    let toast = create_element("div")?;
    toast.set_class_name(&format!("toast {}", clase));
    toast.set_text_content(Some(mensaje));

    let id = format!("toast-{}", js_sys::Date::now() as u64);
    set_attribute(&toast, "id", &id)?;
    append_child(&contenedor, &toast)?;

    // Autodescarte pasado el tiempo de exhibición
    Timeout::new(TOAST_DURACION_MS, move || {
        if let Some(el) = get_element_by_id(&id) {
            el.remove();
        }
    })
    .forget();

    Ok(())
}

/// El contenedor se crea una sola vez y vive fuera de #app,
/// así sobrevive a los re-renders completos.
fn contenedor_toasts() -> Result<Element, JsValue> {
    if let Some(existente) = get_element_by_id("toast-container") {
        return Ok(existente);
    }

    let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;
    let contenedor = create_element("div")?;
    set_attribute(&contenedor, "id", "toast-container")?;
    contenedor.set_class_name("toast-container");

    let body = doc.body().ok_or_else(|| JsValue::from_str("No body"))?;
    body.append_child(&contenedor)?;
    Ok(contenedor)
}
