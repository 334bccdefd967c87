use axum::extract::{FromRequestParts, Path, RawPathParams};
use axum::http::{StatusCode, request::Parts};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;

/// Integer path parameters. Each segment must be plain decimal digits (no
/// sign) that fit the target type; anything else means the route did not
/// match, so the rejection is a bare 404 like the router fallback.
#[derive(Debug, Clone, Copy)]
pub struct Ids<T>(pub T);

impl<S, T> FromRequestParts<S> for Ids<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = RawPathParams::from_request_parts(parts, state)
            .await
            .map_err(|rejection| not_found(parts, &rejection))?;
        if let Some((name, value)) = raw.iter().find(|(_, value)| !is_unsigned(value)) {
            tracing::debug!(
                path = %parts.uri.path(),
                param = name,
                value,
                "path id is not unsigned"
            );
            return Err(StatusCode::NOT_FOUND.into_response());
        }

        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(not_found(parts, &rejection)),
        }
    }
}

fn is_unsigned(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn not_found(parts: &Parts, rejection: &dyn std::fmt::Display) -> Response {
    tracing::debug!(path = %parts.uri.path(), error = %rejection, "path ids rejected");
    StatusCode::NOT_FOUND.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_plain_digits_are_unsigned() {
        assert!(is_unsigned("0"));
        assert!(is_unsigned("0042"));
        assert!(!is_unsigned("-1"));
        assert!(!is_unsigned("+1"));
        assert!(!is_unsigned(""));
        assert!(!is_unsigned("1e3"));
    }
}
