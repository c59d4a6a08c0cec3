use serde::{Deserialize, Serialize};

use crate::models::{Cliente, Empleado};

/// Reserva como la devuelve el backend (entidades anidadas completas)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Reserva {
    pub id: i64,
    pub cliente: Cliente,
    pub empleado: Empleado,
    #[serde(rename = "fechaReserva")]
    pub fecha_reserva: String,
    pub servicio: String,
    pub status: String,
}

/// Referencia por id para crear/actualizar
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct RefId {
    pub id: i64,
}

/// Cuerpo de POST/PUT de reservas: el backend espera las entidades
/// referenciadas solo por id. En altas el id propio se omite.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ReservaPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub cliente: RefId,
    pub empleado: RefId,
    #[serde(rename = "fechaReserva")]
    pub fecha_reserva: String,
    pub servicio: String,
    pub status: String,
}

/// Respuesta de POST /api/clientes/reservas
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ReservaResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Reserva>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_de_prueba() -> ReservaPayload {
        ReservaPayload {
            id: None,
            cliente: RefId { id: 5 },
            empleado: RefId { id: 2 },
            fecha_reserva: "2026-09-01T15:30:00.000Z".to_string(),
            servicio: "ANTI_STRESS".to_string(),
            status: "PENDIENTE".to_string(),
        }
    }

    #[test]
    fn payload_usa_nombres_wire() {
        let json = serde_json::to_string(&payload_de_prueba()).unwrap();
        assert!(json.contains("\"fechaReserva\":\"2026-09-01T15:30:00.000Z\""));
        assert!(json.contains("\"cliente\":{\"id\":5}"));
        assert!(json.contains("\"empleado\":{\"id\":2}"));
    }

    #[test]
    fn payload_de_alta_omite_id() {
        let json = serde_json::to_string(&payload_de_prueba()).unwrap();
        assert!(!json.contains("\"id\":null"));
        assert!(json.starts_with("{\"cliente\""));
    }

    #[test]
    fn payload_de_actualizacion_incluye_id() {
        let payload = ReservaPayload {
            id: Some(9),
            ..payload_de_prueba()
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"id\":9"));
    }

    #[test]
    fn deserializa_reserva_completa() {
        let json = r#"{
            "id": 12,
            "cliente": {"id": 5, "dni": "1", "nombre": "Ana", "apellido": "Gómez", "email": "a@b.com", "telefono": "0"},
            "empleado": {"id": 2, "dni": "2", "nombre": "Luz", "apellido": "Pérez", "email": "l@spa.com", "telefono": "0", "rol": "TERAPEUTA"},
            "fechaReserva": "2026-09-01T15:30:00.000Z",
            "servicio": "YOGA",
            "status": "PENDIENTE"
        }"#;
        let reserva: Reserva = serde_json::from_str(json).unwrap();
        assert_eq!(reserva.id, 12);
        assert_eq!(reserva.fecha_reserva, "2026-09-01T15:30:00.000Z");
        assert_eq!(reserva.empleado.nombre_completo(), "Luz Pérez");
    }

    #[test]
    fn respuesta_de_alta_tolera_campos_ausentes() {
        let respuesta: ReservaResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(respuesta.message, None);
        assert!(respuesta.data.is_none());

        let respuesta: ReservaResponse =
            serde_json::from_str(r#"{"message":"Reserva confirmada"}"#).unwrap();
        assert_eq!(respuesta.message.as_deref(), Some("Reserva confirmada"));
    }
}
