// ============================================================================
// ROUTE GUARDS - Evaluación de acceso por navegación
// ============================================================================

use crate::router::policy;
use crate::router::route::Route;
use crate::state::session_store::SessionStore;

/// Requisito de acceso de un grupo de rutas
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Acceso {
    Publico,
    Autenticado,
    Gerencia,
    Recepcion,
}

/// Resultado de evaluar una navegación
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Decision {
    Permitir,
    Redirigir(Route),
}

/// Función pura del estado de sesión en el instante de navegar: no se
/// suscribe a cambios futuros ni reintenta. Sin sesión se cae al login;
/// con sesión pero rol insuficiente se cae al home.
pub fn evaluar(acceso: Acceso, session: &SessionStore) -> Decision {
    match acceso {
        Acceso::Publico => Decision::Permitir,
        Acceso::Autenticado => {
            if session.is_logged_in() {
                Decision::Permitir
            } else {
                Decision::Redirigir(Route::Login)
            }
        }
        Acceso::Gerencia => {
            if !session.is_logged_in() {
                return Decision::Redirigir(Route::Login);
            }
            if policy::puede_acceder_gerencia(session.rol()) {
                Decision::Permitir
            } else {
                Decision::Redirigir(Route::Home)
            }
        }
        Acceso::Recepcion => {
            if !session.is_logged_in() {
                return Decision::Redirigir(Route::Login);
            }
            if policy::puede_acceder_recepcion(session.rol()) {
                Decision::Permitir
            } else {
                Decision::Redirigir(Route::Home)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;
    use std::rc::Rc;

    fn sesion_anonima() -> SessionStore {
        SessionStore::with_storage(Rc::new(MemoryStorage::new()))
    }

    fn sesion_con_rol(rol: &str) -> SessionStore {
        let session = sesion_anonima();
        session.save_login("jwt.de.prueba", Some("1"), Some(rol));
        session
    }

    #[test]
    fn publico_siempre_permite() {
        let anonima = sesion_anonima();
        assert_eq!(evaluar(Acceso::Publico, &anonima), Decision::Permitir);

        let logueada = sesion_con_rol("CLIENTE");
        assert_eq!(evaluar(Acceso::Publico, &logueada), Decision::Permitir);
    }

    #[test]
    fn sin_sesion_toda_ruta_protegida_redirige_al_login() {
        let session = sesion_anonima();
        for acceso in [Acceso::Autenticado, Acceso::Gerencia, Acceso::Recepcion] {
            assert_eq!(
                evaluar(acceso, &session),
                Decision::Redirigir(Route::Login),
                "acceso {:?}",
                acceso
            );
        }
    }

    #[test]
    fn con_sesion_pero_rol_insuficiente_redirige_al_home() {
        let cliente = sesion_con_rol("CLIENTE");
        assert_eq!(
            evaluar(Acceso::Gerencia, &cliente),
            Decision::Redirigir(Route::Home)
        );
        assert_eq!(
            evaluar(Acceso::Recepcion, &cliente),
            Decision::Redirigir(Route::Home)
        );
    }

    #[test]
    fn autenticado_alcanza_con_cualquier_rol() {
        let terapeuta = sesion_con_rol("TERAPEUTA");
        assert_eq!(evaluar(Acceso::Autenticado, &terapeuta), Decision::Permitir);
    }

    #[test]
    fn escenario_recepcionista() {
        let session = sesion_con_rol("RECEPCIONISTA");

        // El área de gerencia la rebota al home
        assert_eq!(
            evaluar(Route::AdminClientes.acceso(), &session),
            Decision::Redirigir(Route::Home)
        );
        // Su propio panel la deja pasar
        assert_eq!(
            evaluar(Route::DashboardRecepcion.acceso(), &session),
            Decision::Permitir
        );
    }

    #[test]
    fn gerente_entra_a_gerencia_pero_no_a_recepcion() {
        let session = sesion_con_rol("GERENTE_GENERAL");
        assert_eq!(evaluar(Acceso::Gerencia, &session), Decision::Permitir);
        assert_eq!(
            evaluar(Acceso::Recepcion, &session),
            Decision::Redirigir(Route::Home)
        );
    }

    #[test]
    fn logout_durante_la_sesion_vuelve_a_exigir_login() {
        let session = sesion_con_rol("GERENTE_GENERAL");
        assert_eq!(evaluar(Acceso::Gerencia, &session), Decision::Permitir);

        session.logout();
        assert_eq!(
            evaluar(Acceso::Gerencia, &session),
            Decision::Redirigir(Route::Login)
        );
    }

    #[test]
    fn rol_desconocido_no_abre_ninguna_area() {
        let session = sesion_con_rol("SUPERADMIN");
        assert_eq!(evaluar(Acceso::Autenticado, &session), Decision::Permitir);
        assert_eq!(
            evaluar(Acceso::Gerencia, &session),
            Decision::Redirigir(Route::Home)
        );
        assert_eq!(
            evaluar(Acceso::Recepcion, &session),
            Decision::Redirigir(Route::Home)
        );
    }
}
