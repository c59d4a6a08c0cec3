// ============================================================================
// CLIENTES API - CRUD de clientes
// ============================================================================

use crate::models::{Cliente, Rol};
use crate::services::error::ApiError;
use crate::services::http;
use crate::state::SessionStore;

/// El listado tiene dos rutas en el backend según quién consulta.
/// Las operaciones de escritura son solo de gerencia.
fn base_listado(session: &SessionStore) -> &'static str {
    if session.is_in_role(Rol::Recepcionista) {
        "/api/recepcionista/clientes"
    } else {
        "/api/admin/clientes"
    }
}

pub async fn listar(session: &SessionStore) -> Result<Vec<Cliente>, ApiError> {
    http::get_json(session, base_listado(session)).await
}

pub async fn obtener(session: &SessionStore, id: i64) -> Result<Cliente, ApiError> {
    http::get_json(session, &format!("/api/admin/clientes/{}", id)).await
}

/// El cliente logueado, resuelto por el backend a partir del token
pub async fn actual(session: &SessionStore) -> Result<Cliente, ApiError> {
    http::get_json(session, "/api/clientes/actual").await
}

pub async fn crear(session: &SessionStore, cliente: &Cliente) -> Result<Cliente, ApiError> {
    http::post_json(session, "/api/admin/clientes", cliente).await
}

pub async fn actualizar(
    session: &SessionStore,
    id: i64,
    cliente: &Cliente,
) -> Result<Cliente, ApiError> {
    http::put_json(session, &format!("/api/admin/clientes/{}", id), cliente).await
}

pub async fn eliminar(session: &SessionStore, id: i64) -> Result<(), ApiError> {
    http::delete(session, &format!("/api/admin/clientes/{}", id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::{ROL_KEY, TOKEN_KEY};
    use crate::utils::storage::{KeyValueStore, MemoryStorage};
    use std::rc::Rc;

    fn sesion_con_rol(rol: &str) -> SessionStore {
        let storage = Rc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "jwt-de-prueba").unwrap();
        storage.set(ROL_KEY, rol).unwrap();
        SessionStore::with_storage(storage)
    }

    #[test]
    fn la_recepcionista_lista_por_su_propia_ruta() {
        let session = sesion_con_rol("RECEPCIONISTA");
        assert_eq!(base_listado(&session), "/api/recepcionista/clientes");
    }

    #[test]
    fn el_resto_lista_por_la_ruta_de_gerencia() {
        assert_eq!(
            base_listado(&sesion_con_rol("GERENTE_GENERAL")),
            "/api/admin/clientes"
        );
        assert_eq!(
            base_listado(&SessionStore::with_storage(Rc::new(MemoryStorage::new()))),
            "/api/admin/clientes"
        );
    }
}
