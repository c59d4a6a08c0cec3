use std::cell::RefCell;
use std::collections::HashMap;
use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Acceso clave-valor durable. La sesión se guarda a través de este trait
/// para poder inyectar un backend en memoria en los tests.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

/// localStorage del navegador. Los valores se guardan como strings crudos,
/// sin pasar por JSON, para que otras pestañas los lean tal cual.
#[derive(Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = get_local_storage()?;
        storage.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
        storage
            .set_item(key, value)
            .map_err(|_| "Error guardando en localStorage".to_string())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
        storage
            .remove_item(key)
            .map_err(|_| "Error eliminando de localStorage".to_string())
    }
}

/// Backend en memoria para tests y entornos sin navegador
#[derive(Default)]
pub struct MemoryStorage {
    datos: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.datos.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.datos.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.datos.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_guarda_y_lee() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("clave"), None);

        storage.set("clave", "valor").unwrap();
        assert_eq!(storage.get("clave"), Some("valor".to_string()));
    }

    #[test]
    fn memory_storage_remove_es_idempotente() {
        let storage = MemoryStorage::new();
        storage.set("clave", "valor").unwrap();

        storage.remove("clave").unwrap();
        storage.remove("clave").unwrap();
        assert_eq!(storage.get("clave"), None);
    }
}
