use serde::{Deserialize, Serialize};

use crate::utils::constants::ROL_EMPLEADO_DEFECTO;

/// Empleado del spa. El rol se guarda como string del backend
/// (la lista válida sale de GET /api/empleados/roles).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Empleado {
    #[serde(default)]
    pub id: Option<i64>,
    pub dni: String,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub telefono: String,
    pub rol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Default for Empleado {
    fn default() -> Self {
        Self {
            id: None,
            dni: String::new(),
            nombre: String::new(),
            apellido: String::new(),
            email: String::new(),
            telefono: String::new(),
            rol: ROL_EMPLEADO_DEFECTO.to_string(),
            password: None,
        }
    }
}

impl Empleado {
    pub fn nombre_completo(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alta_arranca_con_rol_terapeuta() {
        let empleado = Empleado::default();
        assert_eq!(empleado.rol, "TERAPEUTA");
        assert_eq!(empleado.id, None);
    }

    #[test]
    fn deserializa_empleado_del_backend() {
        let json = r#"{"id":3,"dni":"27888999","nombre":"Luz","apellido":"Pérez","email":"luz@spa.com","telefono":"3624112233","rol":"TERAPEUTA"}"#;
        let empleado: Empleado = serde_json::from_str(json).unwrap();
        assert_eq!(empleado.id, Some(3));
        assert_eq!(empleado.rol, "TERAPEUTA");
        assert_eq!(empleado.password, None);
    }
}
