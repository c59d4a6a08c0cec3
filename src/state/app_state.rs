// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::router::Route;
use crate::state::SessionStore;
use crate::utils::storage::KeyValueStore;

/// Estado global: sesión + ruta actual.
///
/// Los clones comparten el mismo estado (todo vive detrás de Rc),
/// así que los closures de eventos pueden capturar copias baratas.
#[derive(Clone)]
pub struct AppState {
    pub session: SessionStore,
    pub route: Rc<RefCell<Route>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: SessionStore::new(),
            route: Rc::new(RefCell::new(Route::Home)),
        }
    }

    /// Variante con almacenamiento inyectado, para tests sin navegador
    pub fn with_storage(storage: Rc<dyn KeyValueStore>) -> Self {
        Self {
            session: SessionStore::with_storage(storage),
            route: Rc::new(RefCell::new(Route::Home)),
        }
    }

    pub fn current_route(&self) -> Route {
        *self.route.borrow()
    }

    pub fn set_route(&self, route: Route) {
        *self.route.borrow_mut() = route;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;

    #[test]
    fn la_ruta_arranca_en_home_y_se_puede_cambiar() {
        let state = AppState::with_storage(Rc::new(MemoryStorage::new()));
        assert_eq!(state.current_route(), Route::Home);

        state.set_route(Route::Login);
        assert_eq!(state.current_route(), Route::Login);
    }

    #[test]
    fn los_clones_ven_la_misma_ruta() {
        let state = AppState::with_storage(Rc::new(MemoryStorage::new()));
        let copia = state.clone();

        copia.set_route(Route::Reserva);
        assert_eq!(state.current_route(), Route::Reserva);
    }
}
