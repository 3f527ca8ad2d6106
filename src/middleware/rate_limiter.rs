use std::net::SocketAddr;

use axum::{extract::ConnectInfo, http::Request, middleware::Next, response::Response};

use crate::{error::ApiError, utils::rate_limiter::RateLimiter};

/// Rejections go through [`ApiError`] so a throttled client still gets the
/// `{"error": <message>}` body every other failure path emits.
pub async fn rate_limit_middleware(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let rate_limiter = req
        .extensions()
        .get::<RateLimiter>()
        .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("rate limiter not attached")))?;

    let client_key = rate_limiter.get_client_key(&addr);

    if !rate_limiter.check_rate_limit(&client_key) {
        return Err(ApiError::RateLimited);
    }

    Ok(next.run(req).await)
}
