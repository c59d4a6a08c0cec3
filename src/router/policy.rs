// ============================================================================
// ACCESS POLICY - Predicados puros de acceso por rol
// ============================================================================
// Permisos planos: cada área exige exactamente un rol. El gerente NO
// hereda las capacidades de recepción ni al revés.

use crate::models::Rol;

/// Área de administración (gestión de clientes, empleados y reservas)
pub fn puede_acceder_gerencia(rol: Option<Rol>) -> bool {
    matches!(rol, Some(Rol::GerenteGeneral))
}

/// Panel de recepción
pub fn puede_acceder_recepcion(rol: Option<Rol>) -> bool {
    matches!(rol, Some(Rol::Recepcionista))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TODOS: [Rol; 4] = [
        Rol::GerenteGeneral,
        Rol::Recepcionista,
        Rol::Terapeuta,
        Rol::Cliente,
    ];

    #[test]
    fn gerencia_solo_para_gerente_general() {
        for rol in TODOS {
            assert_eq!(
                puede_acceder_gerencia(Some(rol)),
                rol == Rol::GerenteGeneral,
                "rol {:?}",
                rol
            );
        }
        assert!(!puede_acceder_gerencia(None));
    }

    #[test]
    fn recepcion_solo_para_recepcionista() {
        for rol in TODOS {
            assert_eq!(
                puede_acceder_recepcion(Some(rol)),
                rol == Rol::Recepcionista,
                "rol {:?}",
                rol
            );
        }
        assert!(!puede_acceder_recepcion(None));
    }

    #[test]
    fn el_gerente_no_hereda_recepcion() {
        assert!(!puede_acceder_recepcion(Some(Rol::GerenteGeneral)));
        assert!(!puede_acceder_gerencia(Some(Rol::Recepcionista)));
    }
}
