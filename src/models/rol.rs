use serde::{Deserialize, Serialize};

/// Rol asignado por el backend. En el wire viaja como tag en mayúsculas;
/// un tag desconocido se trata como ausencia de rol.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Rol {
    #[serde(rename = "GERENTE_GENERAL")]
    GerenteGeneral,
    #[serde(rename = "RECEPCIONISTA")]
    Recepcionista,
    #[serde(rename = "TERAPEUTA")]
    Terapeuta,
    #[serde(rename = "CLIENTE")]
    Cliente,
}

impl Rol {
    pub fn parse(tag: &str) -> Option<Rol> {
        match tag {
            "GERENTE_GENERAL" => Some(Rol::GerenteGeneral),
            "RECEPCIONISTA" => Some(Rol::Recepcionista),
            "TERAPEUTA" => Some(Rol::Terapeuta),
            "CLIENTE" => Some(Rol::Cliente),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rol::GerenteGeneral => "GERENTE_GENERAL",
            Rol::Recepcionista => "RECEPCIONISTA",
            Rol::Terapeuta => "TERAPEUTA",
            Rol::Cliente => "CLIENTE",
        }
    }

    pub fn es_gerente_general(&self) -> bool {
        matches!(self, Rol::GerenteGeneral)
    }

    pub fn es_recepcionista(&self) -> bool {
        matches!(self, Rol::Recepcionista)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_y_as_str_son_inversos() {
        for rol in [
            Rol::GerenteGeneral,
            Rol::Recepcionista,
            Rol::Terapeuta,
            Rol::Cliente,
        ] {
            assert_eq!(Rol::parse(rol.as_str()), Some(rol));
        }
    }

    #[test]
    fn parse_rechaza_tags_desconocidos() {
        assert_eq!(Rol::parse("SUPERADMIN"), None);
        assert_eq!(Rol::parse(""), None);
        assert_eq!(Rol::parse("gerente_general"), None);
    }

    #[test]
    fn tag_wire_en_serde() {
        let json = serde_json::to_string(&Rol::GerenteGeneral).unwrap();
        assert_eq!(json, "\"GERENTE_GENERAL\"");

        let rol: Rol = serde_json::from_str("\"RECEPCIONISTA\"").unwrap();
        assert_eq!(rol, Rol::Recepcionista);
    }

    #[test]
    fn predicados_por_rol() {
        assert!(Rol::GerenteGeneral.es_gerente_general());
        assert!(!Rol::GerenteGeneral.es_recepcionista());
        assert!(Rol::Recepcionista.es_recepcionista());
        assert!(!Rol::Terapeuta.es_gerente_general());
        assert!(!Rol::Cliente.es_recepcionista());
    }
}
