// ============================================================================
// RESERVAS API - Reservas propias, de gerencia y de recepción
// ============================================================================

use crate::models::{Reserva, ReservaPayload, ReservaResponse, Rol};
use crate::services::error::ApiError;
use crate::services::http;
use crate::state::SessionStore;

fn ruta_reservas_propias(session: &SessionStore) -> Result<String, ApiError> {
    let cliente_id = session.user_id().ok_or_else(|| {
        log::error!("📅 [RESERVAS] No hay userId en la sesión");
        ApiError::NoAutenticado
    })?;
    Ok(format!("/api/clientes/{}/reservas", cliente_id))
}

/// Listado completo: gerencia y recepción tienen rutas distintas
fn ruta_listado(session: &SessionStore) -> &'static str {
    if session.is_in_role(Rol::Recepcionista) {
        "/api/recepcionista/reservas"
    } else {
        "/api/admin/reservas"
    }
}

/// Reservas del cliente logueado
pub async fn de_cliente(session: &SessionStore) -> Result<Vec<Reserva>, ApiError> {
    let ruta = ruta_reservas_propias(session)?;
    http::get_json(session, &ruta).await
}

pub async fn crear(
    session: &SessionStore,
    reserva: &ReservaPayload,
) -> Result<ReservaResponse, ApiError> {
    http::post_json(session, "/api/clientes/reservas", reserva).await
}

pub async fn listar_para_rol(session: &SessionStore) -> Result<Vec<Reserva>, ApiError> {
    http::get_json(session, ruta_listado(session)).await
}

pub async fn actualizar(
    session: &SessionStore,
    id: i64,
    reserva: &ReservaPayload,
) -> Result<Reserva, ApiError> {
    http::put_json(session, &format!("/api/admin/reservas/{}", id), reserva).await
}

pub async fn eliminar(session: &SessionStore, id: i64) -> Result<(), ApiError> {
    http::delete(session, &format!("/api/admin/reservas/{}", id)).await
}

/// Tags de servicio que acepta el backend (el catálogo con precios
/// y descripciones vive en models::servicio)
pub async fn servicios(session: &SessionStore) -> Result<Vec<String>, ApiError> {
    http::get_json(session, "/api/servicios").await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::{ROL_KEY, TOKEN_KEY, USER_ID_KEY};
    use crate::utils::storage::{KeyValueStore, MemoryStorage};
    use std::rc::Rc;

    fn sesion(user_id: Option<&str>, rol: Option<&str>) -> SessionStore {
        let storage = Rc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "jwt-de-prueba").unwrap();
        if let Some(id) = user_id {
            storage.set(USER_ID_KEY, id).unwrap();
        }
        if let Some(rol) = rol {
            storage.set(ROL_KEY, rol).unwrap();
        }
        SessionStore::with_storage(storage)
    }

    #[test]
    fn las_reservas_propias_usan_el_id_de_la_sesion() {
        let session = sesion(Some("42"), None);
        assert_eq!(
            ruta_reservas_propias(&session).unwrap(),
            "/api/clientes/42/reservas"
        );
    }

    #[test]
    fn sin_user_id_no_se_puede_pedir_reservas_propias() {
        let session = SessionStore::with_storage(Rc::new(MemoryStorage::new()));
        assert_eq!(
            ruta_reservas_propias(&session).unwrap_err(),
            ApiError::NoAutenticado
        );
    }

    #[test]
    fn el_listado_elige_la_ruta_segun_el_rol() {
        assert_eq!(
            ruta_listado(&sesion(Some("1"), Some("RECEPCIONISTA"))),
            "/api/recepcionista/reservas"
        );
        assert_eq!(
            ruta_listado(&sesion(Some("1"), Some("GERENTE_GENERAL"))),
            "/api/admin/reservas"
        );
        assert_eq!(
            ruta_listado(&sesion(Some("1"), None)),
            "/api/admin/reservas"
        );
    }
}
