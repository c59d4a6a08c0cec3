// ============================================================================
// SESSION STORE - Sesión durable (token / userId / rol) + flag reactivo
// ============================================================================
// Dueño único de la sesión. Se construye una vez en AppState y se reparte
// por clon; todos los clones comparten storage, flag y epoch. El resto de
// la app solo lee a través de este handle.

use std::cell::Cell;
use std::rc::Rc;

use crate::models::Rol;
use crate::state::reactivity::ReactiveState;
use crate::utils::constants::{ROL_KEY, TOKEN_KEY, USER_ID_KEY};
use crate::utils::storage::{BrowserStorage, KeyValueStore};

#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStore>,
    logged_in: ReactiveState<bool>,
    epoch: Rc<Cell<u64>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_storage(Rc::new(BrowserStorage::new()))
    }

    /// Arranque: la sesión previa (si la hay) se levanta del storage
    pub fn with_storage(storage: Rc<dyn KeyValueStore>) -> Self {
        let logged_in = storage.get(TOKEN_KEY).is_some();
        Self {
            storage,
            logged_in: ReactiveState::new(logged_in),
            epoch: Rc::new(Cell::new(0)),
        }
    }

    /// Persiste lo que trajo la respuesta de login. El token habilita la
    /// sesión; userId y rol pueden faltar en respuestas malformadas y en
    /// ese caso se guarda solo lo que llegó.
    pub fn save_login(&self, jwt: &str, user_id: Option<&str>, rol: Option<&str>) {
        let _ = self.storage.set(TOKEN_KEY, jwt);

        match user_id {
            Some(id) => {
                let _ = self.storage.set(USER_ID_KEY, id);
            }
            None => log::error!("🔐 [SESSION] La respuesta de login no trajo userId"),
        }
        if let Some(rol) = rol {
            let _ = self.storage.set(ROL_KEY, rol);
        }

        self.epoch.set(self.epoch.get() + 1);
        self.logged_in.set(true);
    }

    /// Borra los tres campos y apaga el flag. Nunca falla; repetirlo deja
    /// el mismo estado.
    pub fn logout(&self) {
        let _ = self.storage.remove(TOKEN_KEY);
        let _ = self.storage.remove(USER_ID_KEY);
        let _ = self.storage.remove(ROL_KEY);

        self.epoch.set(self.epoch.get() + 1);
        self.logged_in.set(false);
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY)
    }

    pub fn user_id(&self) -> Option<String> {
        self.storage.get(USER_ID_KEY)
    }

    /// Rol tipado; un tag desconocido cuenta como sin rol
    pub fn rol(&self) -> Option<Rol> {
        self.storage.get(ROL_KEY).as_deref().and_then(Rol::parse)
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    pub fn is_in_role(&self, rol: Rol) -> bool {
        self.rol() == Some(rol)
    }

    /// Generación de la sesión; cambia en cada login y en cada logout.
    /// Los handlers async la capturan antes de despachar y descartan el
    /// resultado si al volver ya no coincide.
    pub fn epoch(&self) -> u64 {
        self.epoch.get()
    }

    pub fn subscribe_logged_in<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.logged_in.subscribe(callback);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;
    use std::cell::Cell;

    fn store_vacio() -> SessionStore {
        SessionStore::with_storage(Rc::new(MemoryStorage::new()))
    }

    fn store_con_sesion(rol: &str) -> SessionStore {
        let store = store_vacio();
        store.save_login("jwt.de.prueba", Some("42"), Some(rol));
        store
    }

    #[test]
    fn arranca_sin_sesion() {
        let store = store_vacio();
        assert!(!store.is_logged_in());
        assert_eq!(store.token(), None);
        assert_eq!(store.user_id(), None);
        assert_eq!(store.rol(), None);
    }

    #[test]
    fn login_persiste_los_tres_campos() {
        let store = store_con_sesion("RECEPCIONISTA");
        assert!(store.is_logged_in());
        assert_eq!(store.token().as_deref(), Some("jwt.de.prueba"));
        assert_eq!(store.user_id().as_deref(), Some("42"));
        assert_eq!(store.rol(), Some(Rol::Recepcionista));
        assert!(store.is_in_role(Rol::Recepcionista));
        assert!(!store.is_in_role(Rol::GerenteGeneral));
    }

    #[test]
    fn respuesta_malformada_guarda_solo_el_token() {
        let store = store_vacio();
        store.save_login("jwt.sin.datos", None, None);

        // Con token alcanza para estar logueado; el resto queda ausente
        assert!(store.is_logged_in());
        assert_eq!(store.user_id(), None);
        assert_eq!(store.rol(), None);
    }

    #[test]
    fn rol_desconocido_cuenta_como_ausente() {
        let store = store_con_sesion("SUPERADMIN");
        assert!(store.is_logged_in());
        assert_eq!(store.rol(), None);
        assert!(!store.is_in_role(Rol::GerenteGeneral));
    }

    #[test]
    fn logout_borra_todo() {
        let store = store_con_sesion("GERENTE_GENERAL");
        store.logout();

        assert!(!store.is_logged_in());
        assert_eq!(store.token(), None);
        assert_eq!(store.user_id(), None);
        assert_eq!(store.rol(), None);
    }

    #[test]
    fn logout_es_idempotente() {
        let store = store_con_sesion("CLIENTE");
        store.logout();
        store.logout();

        assert!(!store.is_logged_in());
        assert_eq!(store.token(), None);
        assert_eq!(store.rol(), None);
    }

    #[test]
    fn epoch_cambia_en_login_y_logout() {
        let store = store_vacio();
        let inicial = store.epoch();

        store.save_login("jwt", Some("1"), Some("CLIENTE"));
        let tras_login = store.epoch();
        assert_ne!(inicial, tras_login);

        store.logout();
        assert_ne!(tras_login, store.epoch());
    }

    #[test]
    fn flag_reactivo_notifica_login_y_logout() {
        let store = store_vacio();
        let avisos = Rc::new(Cell::new(0u32));

        let avisos_sub = avisos.clone();
        store.subscribe_logged_in(move || avisos_sub.set(avisos_sub.get() + 1));

        store.save_login("jwt", Some("1"), Some("CLIENTE"));
        store.logout();
        assert_eq!(avisos.get(), 2);
    }

    #[test]
    fn los_clones_comparten_la_sesion() {
        let store = store_vacio();
        let clon = store.clone();

        store.save_login("jwt", Some("7"), Some("TERAPEUTA"));
        assert!(clon.is_logged_in());
        assert_eq!(clon.user_id().as_deref(), Some("7"));
        assert_eq!(clon.epoch(), store.epoch());

        clon.logout();
        assert!(!store.is_logged_in());
    }
}
