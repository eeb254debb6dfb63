use reqwest::{Method, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use studyhall_interfaces::api::{error::ServerError, resource::filter::Filter};

use super::transport::Transport;

/// DRF error bodies carry the message under `detail`.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    detail: String,
}

/// Wire-encode filter pairs the way the browser's URLSearchParams does,
/// spaces as `+` included.
pub fn encode_query(filter: &Filter) -> Result<String, ServerError> {
    serde_urlencoded::to_string(filter.to_pairs())
        .map_err(|e| ServerError::SerializeError(e.to_string()))
}

pub async fn get_request<R: DeserializeOwned>(
    transport: &Transport,
    path: &str,
) -> Result<R, ServerError> {
    let url = transport.url(path);
    log::debug!("GET {}", url);
    let response = transport
        .request(Method::GET, path)
        .send()
        .await
        .map_err(|e| ServerError::NetworkError(e.to_string()))?;
    handle_response(response, &url, "").await
}

pub async fn post_request<B: Serialize, R: DeserializeOwned>(
    transport: &Transport,
    path: &str,
    body: &B,
) -> Result<R, ServerError> {
    let url = transport.url(path);
    let request_str =
        serde_json::to_string(body).map_err(|e| ServerError::SerializeError(e.to_string()))?;
    log::debug!("POST {}", url);
    let response = transport
        .request(Method::POST, path)
        .json(body)
        .send()
        .await
        .map_err(|e| ServerError::NetworkError(e.to_string()))?;
    handle_response(response, &url, &request_str).await
}

pub async fn patch_request<B: Serialize, R: DeserializeOwned>(
    transport: &Transport,
    path: &str,
    body: &B,
) -> Result<R, ServerError> {
    let url = transport.url(path);
    let request_str =
        serde_json::to_string(body).map_err(|e| ServerError::SerializeError(e.to_string()))?;
    log::debug!("PATCH {}", url);
    let response = transport
        .request(Method::PATCH, path)
        .json(body)
        .send()
        .await
        .map_err(|e| ServerError::NetworkError(e.to_string()))?;
    handle_response(response, &url, &request_str).await
}

/// DELETE hands the raw response back to the caller once the status is
/// checked; some endpoints answer 204 with no body worth decoding.
pub async fn delete_request(transport: &Transport, path: &str) -> Result<Response, ServerError> {
    let url = transport.url(path);
    log::debug!("DELETE {}", url);
    let response = transport
        .request(Method::DELETE, path)
        .send()
        .await
        .map_err(|e| ServerError::NetworkError(e.to_string()))?;
    check_status(response, &url, "").await
}

async fn check_status(
    response: Response,
    url: &str,
    request_str: &str,
) -> Result<Response, ServerError> {
    let status = response.status();
    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error response".to_string());
        let error_message = match serde_json::from_str::<ErrorResponse>(&error_text) {
            Ok(error_resp) => error_resp.detail,
            Err(_) => error_text,
        };
        log::warn!("{} responded {}: {}", url, status, error_message);
        return Err(ServerError::ServerError(
            status.into(),
            error_message,
            url.to_string(),
            request_str.to_string(),
        ));
    }
    Ok(response)
}

async fn handle_response<R: DeserializeOwned>(
    response: Response,
    url: &str,
    request_str: &str,
) -> Result<R, ServerError> {
    let response = check_status(response, url, request_str).await?;
    response
        .json::<R>()
        .await
        .map_err(|e| ServerError::DeserializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use studyhall_interfaces::api::resource::filter::Scalar;

    use super::*;

    #[test]
    fn test_encode_query_uses_plus_for_spaces() {
        let filter = Filter::new().push("title", "linear equations");
        assert_eq!(encode_query(&filter).unwrap(), "title=linear+equations");
    }

    #[test]
    fn test_encode_query_repeats_keys_in_order() {
        let filter = Filter::new()
            .push_many("tags", vec!["a", "b"])
            .push("active", true);
        assert_eq!(encode_query(&filter).unwrap(), "tags=a&tags=b&active=true");
    }

    #[test]
    fn test_encode_query_renders_null_literally() {
        let filter = Filter::new().push("note", Scalar::Null);
        assert_eq!(encode_query(&filter).unwrap(), "note=null");
    }

    #[test]
    fn test_encode_query_empty_filter() {
        assert_eq!(encode_query(&Filter::new()).unwrap(), "");
    }
}
