//! Content negotiation between JSON and XML for the computer resource.
//!
//! Response encoding follows the `Accept` header (default JSON); request
//! decoding follows `Content-Type`. Undecodable bodies reject with the
//! standard error envelope instead of axum's built-in rejections.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::convert::Infallible;

use crate::dto::computer::{ComputerDto, ComputerListXml, ComputerXml};
use crate::error::AppError;

/// The response encoding selected from the `Accept` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    Xml,
}

impl<S> FromRequestParts<S> for ResponseFormat
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let accept = parts
            .headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if wants_xml(accept) {
            Ok(ResponseFormat::Xml)
        } else {
            Ok(ResponseFormat::Json)
        }
    }
}

impl ResponseFormat {
    /// Encode one computer at the given status.
    pub fn render_computer(self, status: StatusCode, dto: ComputerDto) -> Result<Response, AppError> {
        match self {
            ResponseFormat::Json => Ok((status, axum::Json(dto)).into_response()),
            ResponseFormat::Xml => xml_response(status, &ComputerXml::from(dto)),
        }
    }

    /// Encode a computer collection at 200.
    pub fn render_computer_list(self, dtos: Vec<ComputerDto>) -> Result<Response, AppError> {
        match self {
            ResponseFormat::Json => Ok(axum::Json(dtos).into_response()),
            ResponseFormat::Xml => {
                let list = ComputerListXml {
                    computer: dtos.into_iter().map(ComputerXml::from).collect(),
                };
                xml_response(StatusCode::OK, &list)
            }
        }
    }
}

/// A computer request body, decoded per `Content-Type` (XML when the type
/// says so, JSON otherwise).
pub struct ComputerBody(pub ComputerDto);

impl<S> FromRequest<S> for ComputerBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_xml = content_type_is_xml(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|err| AppError::BadRequest(err.to_string()))?;

        if is_xml {
            let text = std::str::from_utf8(&bytes)
                .map_err(|_| AppError::BadRequest("Request body is not valid UTF-8".to_string()))?;
            let xml: ComputerXml = quick_xml::de::from_str(text)
                .map_err(|err| AppError::BadRequest(format!("Malformed XML request body: {err}")))?;
            Ok(Self(xml.into()))
        } else {
            let dto: ComputerDto = serde_json::from_slice(&bytes)
                .map_err(|err| AppError::BadRequest(format!("Malformed JSON request body: {err}")))?;
            Ok(Self(dto))
        }
    }
}

/// A JSON request body that rejects with the standard error envelope.
/// Used by the JSON-only SSH key routes.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|err| AppError::BadRequest(err.to_string()))?;

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|err| AppError::BadRequest(format!("Malformed JSON request body: {err}")))
    }
}

fn wants_xml(accept: &str) -> bool {
    accept.contains("application/xml") || accept.contains("text/xml")
}

fn content_type_is_xml(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains("application/xml") || ct.contains("text/xml"))
}

fn xml_response<T: Serialize>(status: StatusCode, value: &T) -> Result<Response, AppError> {
    let body = quick_xml::se::to_string(value)
        .map_err(|err| AppError::Internal(format!("XML encoding failed: {err}")))?;
    Ok((
        status,
        [(header::CONTENT_TYPE, "application/xml")],
        body,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_header_selects_xml() {
        assert!(wants_xml("application/xml"));
        assert!(wants_xml("text/xml, application/json;q=0.5"));
        assert!(!wants_xml("application/json"));
        assert!(!wants_xml("*/*"));
        assert!(!wants_xml(""));
    }
}
