//! HTTP response delivery.

use anyhow::Result;
use tiny_http::{Header, Request, Response, StatusCode};

/// Content type for all sitemap documents.
const XML_UTF8: &str = "application/xml; charset=utf-8";

/// Respond with an encoded sitemap document.
pub fn respond_xml(request: Request, body: String) -> Result<()> {
    send_body(request, 200, XML_UTF8, body.into_bytes())
}

/// Respond with 404 plain text.
pub fn respond_not_found(request: Request) -> Result<()> {
    send_body(request, 404, "text/plain", b"404 Not Found".to_vec())
}

fn send_body(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type));
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Header {
    // Static key/value pairs are always valid header bytes
    Header::from_bytes(key, value).unwrap()
}
