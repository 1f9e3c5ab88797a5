//! Custom Axum extractors

use std::fmt;

use axum::body::Bytes;
use axum::extract::{Form, FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::Json;
use domains::DomainError;
use serde::de::{self, DeserializeOwned, Deserializer, Visitor};
use uuid::Uuid;

/// Request body that may arrive as JSON (scripted clients) or as an HTML
/// form post (browsers).
///
/// A request without a `Content-Type` is read as a form, and an empty JSON
/// body as `{}`, so bare `PUT`/`DELETE` calls reach the handler and get a
/// plain-text answer.
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Response;

    async fn from_request(mut req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_ascii_lowercase);

        match content_type {
            Some(ct) if ct.starts_with("application/json") => {
                let body = Bytes::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
                    b"{}"
                } else {
                    &body
                };
                let Json(value) = Json::<T>::from_bytes(body).map_err(IntoResponse::into_response)?;
                Ok(Self(value))
            }
            content_type => {
                if content_type.is_none() {
                    req.headers_mut().insert(
                        CONTENT_TYPE,
                        HeaderValue::from_static("application/x-www-form-urlencoded"),
                    );
                }
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                Ok(Self(value))
            }
        }
    }
}

/// Deserializes a body field into a `String` whatever scalar the client
/// sent: `null` becomes empty, numbers and booleans their text.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientString)
}

struct LenientString;

impl<'de> Visitor<'de> for LenientString {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, number, boolean or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_owned())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_unit<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<String, D::Error> {
        deserializer.deserialize_any(self)
    }
}

/// Parses a client-supplied identifier. Anything that is not a UUID cannot
/// name a stored record, so it is reported as `missing`.
pub fn parse_id(raw: &str, missing: DomainError) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw.trim()).map_err(|_| missing)
}

/// Reply ids only resolve inside their thread. An unparsable one becomes the
/// nil UUID, which no reply carries, so the thread lookup still runs first
/// and decides between `thread not found` and `reply not found`.
pub fn reply_id_or_nil(raw: &str) -> Uuid {
    Uuid::parse_str(raw.trim()).unwrap_or_else(|_| Uuid::nil())
}
