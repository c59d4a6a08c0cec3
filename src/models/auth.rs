use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Respuesta de POST /api/auth/login. Cualquier campo puede faltar si el
/// backend respondió algo inesperado; se persiste lo que haya llegado.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct LoginResponse {
    #[serde(default)]
    pub jwt: Option<String>,
    #[serde(default, rename = "userId")]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub rol: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct RegisterRequest {
    pub dni: String,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub password: String,
    pub telefono: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_completa() {
        let json = r#"{"jwt":"abc.def.ghi","userId":42,"rol":"RECEPCIONISTA"}"#;
        let respuesta: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(respuesta.jwt.as_deref(), Some("abc.def.ghi"));
        assert_eq!(respuesta.user_id, Some(42));
        assert_eq!(respuesta.rol.as_deref(), Some("RECEPCIONISTA"));
    }

    #[test]
    fn login_response_solo_jwt() {
        let respuesta: LoginResponse = serde_json::from_str(r#"{"jwt":"abc"}"#).unwrap();
        assert_eq!(respuesta.jwt.as_deref(), Some("abc"));
        assert_eq!(respuesta.user_id, None);
        assert_eq!(respuesta.rol, None);
    }
}
