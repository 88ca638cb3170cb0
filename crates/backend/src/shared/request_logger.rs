use std::borrow::Cow;

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::format::format_size;
use crate::shared::state::AppState;

/// Logs method, path, status, response size and duration of every request.
///
/// The session token travels in the URL path, so it is masked before logging.
pub async fn request_logger(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = mask_token(req.uri().path(), &state.config.auth.token);

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                status = parts.status.as_u16(),
                %method,
                %path,
                "failed to buffer response body: {e}"
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    tracing::info!(
        "{} {:>6} {} | {:>5}ms | {:>9}",
        parts.status.as_u16(),
        method,
        path,
        start.elapsed().as_millis(),
        format_size(bytes.len())
    );

    Response::from_parts(parts, Body::from(bytes))
}

fn mask_token(path: &str, token: &str) -> String {
    if token.is_empty() {
        return path.to_string();
    }
    // Clients percent-encode the token segment; compare decoded.
    path.split('/')
        .map(|segment| {
            let decoded = urlencoding::decode(segment).unwrap_or(Cow::Borrowed(segment));
            if decoded == token {
                "***"
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_segment_is_masked() {
        assert_eq!(
            mask_token("/client/get-all/dev-token", "dev-token"),
            "/client/get-all/***"
        );
        assert_eq!(mask_token("/client/add", "dev-token"), "/client/add");
        assert_eq!(
            mask_token("/vendor/get-by/name/dev-token-x/dev-token", "dev-token"),
            "/vendor/get-by/name/dev-token-x/***"
        );
    }

    #[test]
    fn encoded_token_segment_is_masked() {
        let token = "s3cr3t/+= key";
        let path = format!("/order/get-all/{}", urlencoding::encode(token));
        assert_eq!(mask_token(&path, token), "/order/get-all/***");
        assert_eq!(
            mask_token("/order/get-all/s3cr3t%2F%2B%3D%20key", token),
            "/order/get-all/***"
        );
    }
}
