use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use std::{
    future::Future,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    num::NonZeroU32,
    pin::Pin,
    sync::Arc,
};
use tower::{Layer, Service};

use crate::error::ErrorResponse;

/// Client buckets kept before idle ones are swept.
const MAX_TRACKED_CLIENTS: usize = 10_000;

pub type ClientRateLimiter = Arc<DefaultKeyedRateLimiter<IpAddr>>;

/// Per client address: `burst` credential attempts up front, then one more
/// per minute.
pub fn create_rate_limiter(burst: u32) -> ClientRateLimiter {
    let burst = NonZeroU32::new(burst).unwrap_or(NonZeroU32::MIN);
    let quota = Quota::per_minute(NonZeroU32::MIN).allow_burst(burst);
    Arc::new(RateLimiter::keyed(quota))
}

/// Peer address from the connection; requests served without connect info
/// share the unspecified address bucket.
pub fn client_ip<B>(request: &Request<B>) -> IpAddr {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

#[derive(Clone)]
pub struct RateLimitLayer {
    limiter: ClientRateLimiter,
}

impl RateLimitLayer {
    pub fn new(limiter: ClientRateLimiter) -> Self {
        Self { limiter }
    }
}

impl<S> Layer<S> for RateLimitLayer {
    type Service = RateLimitService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RateLimitService {
            inner,
            limiter: self.limiter.clone(),
        }
    }
}

#[derive(Clone)]
pub struct RateLimitService<S> {
    inner: S,
    limiter: ClientRateLimiter,
}

impl<S> Service<Request<Body>> for RateLimitService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let limiter = self.limiter.clone();
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let ip = client_ip(&request);
            if limiter.check_key(&ip).is_err() {
                tracing::warn!(path = %request.uri().path(), %ip, "rate limit exceeded");
                return Ok(too_many_requests());
            }
            if limiter.len() > MAX_TRACKED_CLIENTS {
                limiter.retain_recent();
            }
            inner.call(request).await
        })
    }
}

fn too_many_requests() -> Response {
    (
        StatusCode::TOO_MANY_REQUESTS,
        Json(ErrorResponse {
            detail: "too many requests, slow down".to_string(),
        }),
    )
        .into_response()
}
