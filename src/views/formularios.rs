// ============================================================================
// FORMULARIOS - Piezas compartidas por las pantallas con formulario
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlSelectElement};

use crate::dom::{append_child, get_element_by_id, ElementBuilder};
use crate::models::servicio::catalogo_plano;
use crate::utils::constants::ESTADOS_RESERVA;

/// Grupo label + input. El valor se lee por id al momento del submit.
pub fn campo_texto(
    id: &str,
    label: &str,
    tipo: &str,
    placeholder: &str,
) -> Result<Element, JsValue> {
    let grupo = ElementBuilder::new("div")?.class("form-group").build();

    let etiqueta = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label)
        .build();

    let input = ElementBuilder::new("input")?
        .id(id)?
        .attr("type", tipo)?
        .attr("placeholder", placeholder)?
        .class("form-control")
        .build();

    append_child(&grupo, &etiqueta)?;
    append_child(&grupo, &input)?;
    Ok(grupo)
}

/// Grupo label + select. `opciones` son pares (value, texto visible).
/// `seleccionado` preselecciona si la opción existe; si no, queda la vacía.
pub fn campo_select(
    id: &str,
    label: &str,
    opciones: &[(String, String)],
    seleccionado: Option<&str>,
) -> Result<Element, JsValue> {
    let grupo = ElementBuilder::new("div")?.class("form-group").build();

    let etiqueta = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label)
        .build();

    let select = ElementBuilder::new("select")?
        .id(id)?
        .class("form-control")
        .build();
    rellenar_opciones(&select, opciones)?;

    if let (Some(valor), Some(sel)) = (seleccionado, select.dyn_ref::<HtmlSelectElement>()) {
        sel.set_value(valor);
    }

    append_child(&grupo, &etiqueta)?;
    append_child(&grupo, &select)?;
    Ok(grupo)
}

/// Repoblar un select ya montado (para opciones que llegan por API)
pub fn poblar_select(
    id: &str,
    opciones: &[(String, String)],
    seleccionado: Option<&str>,
) -> Result<(), JsValue> {
    let Some(select) = get_element_by_id(id) else {
        return Ok(());
    };

    select.set_inner_html("");
    rellenar_opciones(&select, opciones)?;

    if let (Some(valor), Some(sel)) = (seleccionado, select.dyn_ref::<HtmlSelectElement>()) {
        sel.set_value(valor);
    }
    Ok(())
}

fn rellenar_opciones(select: &Element, opciones: &[(String, String)]) -> Result<(), JsValue> {
    // Opción vacía para que "no elegí nada" sea distinguible
    let vacia = ElementBuilder::new("option")?
        .attr("value", "")?
        .text("Seleccionar...")
        .build();
    append_child(select, &vacia)?;

    for (valor, texto) in opciones {
        let opcion = ElementBuilder::new("option")?
            .attr("value", valor)?
            .text(texto)
            .build();
        append_child(select, &opcion)?;
    }
    Ok(())
}

/// Catálogo estático como opciones de select (tag del backend, nombre visible)
pub fn opciones_catalogo() -> Vec<(String, String)> {
    catalogo_plano()
        .iter()
        .map(|s| (s.tag.to_string(), s.nombre.to_string()))
        .collect()
}

pub fn opciones_estados() -> Vec<(String, String)> {
    ESTADOS_RESERVA
        .iter()
        .map(|e| (e.to_string(), e.to_string()))
        .collect()
}

/// El input datetime-local solo acepta "YYYY-MM-DDTHH:MM"; el backend
/// guarda el ISO completo con segundos y zona.
pub fn fecha_para_input(fecha: &str) -> String {
    fecha.chars().take(16).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn el_catalogo_ofrece_tag_y_nombre() {
        let opciones = opciones_catalogo();
        assert!(opciones.len() >= 10);
        assert!(opciones
            .iter()
            .any(|(tag, nombre)| tag == "ANTI_STRESS" && nombre == "Anti-stress"));
        assert!(opciones.iter().any(|(tag, _)| tag == "YOGA"));
    }

    #[test]
    fn los_estados_salen_de_la_tabla() {
        let opciones = opciones_estados();
        assert_eq!(opciones.len(), ESTADOS_RESERVA.len());
        assert_eq!(opciones[0].0, "PENDIENTE");
    }

    #[test]
    fn la_fecha_larga_se_recorta_para_el_input() {
        assert_eq!(
            fecha_para_input("2026-09-01T15:30:00.000Z"),
            "2026-09-01T15:30"
        );
        assert_eq!(fecha_para_input("2026-09-01T15:30"), "2026-09-01T15:30");
        assert_eq!(fecha_para_input(""), "");
    }
}
