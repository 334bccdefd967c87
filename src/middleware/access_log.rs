use axum::{
    extract::Request,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header::USER_AGENT},
    middleware::Next,
    response::Response,
};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngCore;
use std::time::Instant;
use tracing::{error, info, warn};

const REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");
const REQUEST_ID_MAX: usize = 128;

/// Caller-supplied request id, if it is usable as-is.
fn incoming_request_id(headers: &HeaderMap) -> Option<String> {
    let id = headers.get(REQUEST_ID)?.to_str().ok()?;
    (!id.is_empty() && id.len() <= REQUEST_ID_MAX).then(|| id.to_owned())
}

fn new_request_id() -> String {
    let mut raw = [0u8; 12];
    rand::rng().fill_bytes(&mut raw);
    URL_SAFE_NO_PAD.encode(raw)
}

fn emit(status: StatusCode, line: &str) {
    match status.as_u16() {
        500.. => error!("{line}"),
        400..=499 => warn!("{line}"),
        _ => info!("{line}"),
    }
}

/// Logs each request once it has been answered and tags the response with
/// its `x-request-id`.
pub async fn access_log(req: Request, next: Next) -> Response {
    let request_id = incoming_request_id(req.headers()).unwrap_or_else(new_request_id);
    let agent = req
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_owned();
    let summary = format!(
        "{:<6} {:?} {}",
        req.method().as_str(),
        req.version(),
        req.uri().path()
    );

    let started = Instant::now();
    let mut resp = next.run(req).await;
    let elapsed = started.elapsed();

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        resp.headers_mut().insert(REQUEST_ID, value);
    }

    let status = resp.status();
    emit(
        status,
        &format!(
            "{} [{request_id}] {summary} {}ms \"{agent}\"",
            status.as_u16(),
            elapsed.as_millis()
        ),
    );
    resp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_sixteen_url_safe_chars() {
        let id = new_request_id();
        assert_eq!(id.len(), 16);
        assert!(id.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_'));
    }

    #[test]
    fn oversized_or_empty_incoming_ids_are_replaced() {
        let mut headers = HeaderMap::new();
        assert_eq!(incoming_request_id(&headers), None);

        headers.insert(REQUEST_ID, HeaderValue::from_static(""));
        assert_eq!(incoming_request_id(&headers), None);

        let long = "a".repeat(REQUEST_ID_MAX + 1);
        headers.insert(REQUEST_ID, HeaderValue::from_str(&long).unwrap());
        assert_eq!(incoming_request_id(&headers), None);

        headers.insert(REQUEST_ID, HeaderValue::from_static("abc-123"));
        assert_eq!(incoming_request_id(&headers).as_deref(), Some("abc-123"));
    }
}
