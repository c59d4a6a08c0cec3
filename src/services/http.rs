// ============================================================================
// HTTP - Helpers compartidos sobre gloo-net
// ============================================================================
//
// Todas las llamadas al backend pasan por estas funciones: se arma la
// URL con la base configurada, se adjunta el token si hay sesión y los
// fallos se clasifican con la política compartida de error.rs.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::CONFIG;
use crate::services::error::{clasificar_estado, ApiError};
use crate::state::SessionStore;

/// Cuerpo de error estándar del backend: `{ "message": "..." }`
#[derive(serde::Deserialize)]
struct CuerpoError {
    #[serde(default)]
    message: Option<String>,
}

pub fn url_api(path: &str) -> String {
    format!("{}{}", CONFIG.backend_url(), path)
}

fn con_token(builder: RequestBuilder, session: &SessionStore) -> RequestBuilder {
    match session.token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Lee el cuerpo de una respuesta fallida y la clasifica
async fn clasificar_respuesta(path: &str, response: Response) -> ApiError {
    let status = response.status();
    log::error!("🌐 [HTTP] {} respondió {}", path, status);

    let mensaje = match response.text().await {
        Ok(texto) => serde_json::from_str::<CuerpoError>(&texto)
            .ok()
            .and_then(|cuerpo| cuerpo.message),
        Err(_) => None,
    };
    clasificar_estado(status, mensaje)
}

pub async fn get_json<T: DeserializeOwned>(
    session: &SessionStore,
    path: &str,
) -> Result<T, ApiError> {
    let response = con_token(Request::get(&url_api(path)), session)
        .send()
        .await
        .map_err(|e| ApiError::Transporte(format!("Error enviando request: {}", e)))?;

    if !response.ok() {
        return Err(clasificar_respuesta(path, response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Transporte(format!("Error parseando respuesta: {}", e)))
}

pub async fn post_json<B, T>(session: &SessionStore, path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = con_token(Request::post(&url_api(path)), session)
        .json(body)
        .map_err(|e| ApiError::Transporte(format!("Error serializando request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Transporte(format!("Error enviando request: {}", e)))?;

    if !response.ok() {
        return Err(clasificar_respuesta(path, response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Transporte(format!("Error parseando respuesta: {}", e)))
}

/// POST cuyo cuerpo de respuesta no interesa (el que llama re-consulta
/// la lista después). No intenta parsear, así un 201 sin cuerpo no falla.
pub async fn post_sin_respuesta<B: Serialize>(
    session: &SessionStore,
    path: &str,
    body: &B,
) -> Result<(), ApiError> {
    let response = con_token(Request::post(&url_api(path)), session)
        .json(body)
        .map_err(|e| ApiError::Transporte(format!("Error serializando request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Transporte(format!("Error enviando request: {}", e)))?;

    if !response.ok() {
        return Err(clasificar_respuesta(path, response).await);
    }
    Ok(())
}

/// PUT: el backend devuelve la entidad actualizada
pub async fn put_json<B, T>(session: &SessionStore, path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = con_token(Request::put(&url_api(path)), session)
        .json(body)
        .map_err(|e| ApiError::Transporte(format!("Error serializando request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Transporte(format!("Error enviando request: {}", e)))?;

    if !response.ok() {
        return Err(clasificar_respuesta(path, response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Transporte(format!("Error parseando respuesta: {}", e)))
}

pub async fn delete(session: &SessionStore, path: &str) -> Result<(), ApiError> {
    let response = con_token(Request::delete(&url_api(path)), session)
        .send()
        .await
        .map_err(|e| ApiError::Transporte(format!("Error enviando request: {}", e)))?;

    if !response.ok() {
        return Err(clasificar_respuesta(path, response).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn la_url_se_arma_con_la_base_configurada() {
        let url = url_api("/api/servicios");
        assert!(url.ends_with("/api/servicios"));
        assert!(url.starts_with("http"));
    }

    #[test]
    fn el_cuerpo_de_error_tolera_campos_extra_y_faltantes() {
        let con_mensaje: CuerpoError =
            serde_json::from_str(r#"{"message":"DNI duplicado","status":400}"#).unwrap();
        assert_eq!(con_mensaje.message.as_deref(), Some("DNI duplicado"));

        let sin_mensaje: CuerpoError = serde_json::from_str("{}").unwrap();
        assert!(sin_mensaje.message.is_none());
    }
}
