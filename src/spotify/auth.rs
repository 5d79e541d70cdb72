use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, header::AUTHORIZATION};
use serde_json::Value;

use crate::{Error, Res, config::Credentials, types::Credential};

/// Builds the `Authorization` header value for the token endpoint.
///
/// # Example
///
/// ```
/// assert_eq!(basic_auth_header("id", "secret"), "Basic aWQ6c2VjcmV0");
/// ```
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let raw = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", STANDARD.encode(raw))
}

/// Extracts the credential from a token endpoint response body.
///
/// # Errors
///
/// [`Error::Auth`] when `access_token` is missing, not a string, or empty.
pub fn credential_from_response(json: &Value) -> Res<Credential> {
    let access_token = json["access_token"]
        .as_str()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            let reason = json["error_description"]
                .as_str()
                .or_else(|| json["error"].as_str())
                .unwrap_or("response has no access_token");
            Error::Auth(reason.to_string())
        })?;

    Ok(Credential {
        access_token: access_token.to_string(),
        token_type: json["token_type"].as_str().map(String::from),
        expires_in: json["expires_in"].as_u64(),
    })
}

/// Exchanges the client id/secret for a bearer credential.
///
/// Sends one `POST` with `grant_type=client_credentials` and HTTP Basic
/// client authentication. The endpoint's error body, when it has one, is
/// surfaced in the [`Error::Auth`] message.
///
/// # Arguments
///
/// * `http` - Shared client; its timeout applies to the request
/// * `token_url` - Token endpoint, `SPOTIFY_TOKEN_URL`
/// * `credentials` - Client id/secret sent as the Basic header
///
/// # Returns
///
/// The bearer [`Credential`] with `token_type` and `expires_in` when the
/// endpoint provides them.
///
/// # Errors
///
/// [`Error::Auth`] on transport failure, undecodable body, or a body without
/// a usable `access_token`. A non-2xx status is reported with the endpoint's
/// own error text when present.
pub async fn request_token(
    http: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Res<Credential> {
    let response = http
        .post(token_url)
        .header(
            AUTHORIZATION,
            basic_auth_header(&credentials.client_id, &credentials.client_secret),
        )
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| Error::Auth(e.to_string()))?;

    let status = response.status();
    let json: Value = response
        .json()
        .await
        .map_err(|e| Error::Auth(format!("{} ({})", e, status)))?;

    if !status.is_success() {
        let reason = json["error_description"]
            .as_str()
            .or_else(|| json["error"].as_str())
            .unwrap_or("token endpoint rejected the request");
        return Err(Error::Auth(format!("{} ({})", reason, status)));
    }

    credential_from_response(&json)
}
