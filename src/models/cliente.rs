use serde::{Deserialize, Serialize};

/// Cliente tal como lo devuelve el backend
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Cliente {
    #[serde(default)]
    pub id: Option<i64>,
    pub dni: String,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub telefono: String,
    // Solo viaja en altas; el backend nunca la devuelve
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Cliente {
    pub fn nombre_completo(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializa_sin_password() {
        let json = r#"{"id":7,"dni":"30111222","nombre":"Ana","apellido":"Gómez","email":"ana@mail.com","telefono":"3624001122"}"#;
        let cliente: Cliente = serde_json::from_str(json).unwrap();
        assert_eq!(cliente.id, Some(7));
        assert_eq!(cliente.nombre_completo(), "Ana Gómez");
        assert_eq!(cliente.password, None);
    }

    #[test]
    fn serializa_omite_password_ausente() {
        let cliente = Cliente {
            id: Some(1),
            dni: "1".to_string(),
            nombre: "A".to_string(),
            apellido: "B".to_string(),
            email: "a@b.com".to_string(),
            telefono: "0".to_string(),
            password: None,
        };
        let json = serde_json::to_string(&cliente).unwrap();
        assert!(!json.contains("password"));
    }
}
