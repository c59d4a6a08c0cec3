// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Box<dyn Fn()>;

/// Estado reactivo con sistema de notificaciones.
/// Los clones comparten valor y subscribers: una suscripción hecha desde
/// cualquier clon recibe las notificaciones de todos.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Obtener referencia al valor interno
    pub fn get(&self) -> Rc<RefCell<T>> {
        self.value.clone()
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Actualizar valor usando closure y notificar
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut *self.value.borrow_mut());
        self.notify();
    }

    /// Suscribirse a cambios. Los callbacks no deben volver a suscribir
    /// ni setear dentro de la notificación (usar un Timeout si hace falta).
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Box::new(callback));
    }

    fn notify(&self) {
        for callback in self.subscribers.borrow().iter() {
            callback();
        }
    }
}

impl<T: Clone> ReactiveState<T> {
    pub fn snapshot(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn set_notifica_a_los_subscribers() {
        let estado = ReactiveState::new(0u32);
        let avisos = Rc::new(Cell::new(0u32));

        let avisos_sub = avisos.clone();
        estado.subscribe(move || avisos_sub.set(avisos_sub.get() + 1));

        estado.set(1);
        estado.update(|v| *v += 1);

        assert_eq!(avisos.get(), 2);
        assert_eq!(estado.snapshot(), 2);
    }

    #[test]
    fn los_clones_comparten_subscribers() {
        let estado = ReactiveState::new(false);
        let clon = estado.clone();

        let avisos = Rc::new(Cell::new(0u32));
        let avisos_sub = avisos.clone();
        clon.subscribe(move || avisos_sub.set(avisos_sub.get() + 1));

        // El set sobre el original dispara la suscripción hecha en el clon
        estado.set(true);
        assert_eq!(avisos.get(), 1);
        assert!(clon.snapshot());
    }
}
