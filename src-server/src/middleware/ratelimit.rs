//! Per-client rate limiting.
//!
//! `RateLimiter` counts requests per client IP in fixed windows.
//! `RateLimitLayer` wraps a service with it: `OPTIONS` requests are answered
//! directly and never counted, and clients over the limit get a JSON 429 with
//! `Retry-After`.

use std::collections::HashMap;
use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::{Arc, Weak};
use std::task::{Context, Poll};
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{header, HeaderMap, HeaderValue, Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tower::{Layer, Service};
use tracing::{debug, warn};

use crate::api::ApiResponse;

pub const RATE_LIMITED_MESSAGE: &str = "Too many requests. Please try again later.";
const CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy)]
struct Visitor {
    last_seen: Instant,
    count: u32,
}

/// In-memory request counter keyed by client IP
#[derive(Debug)]
pub struct RateLimiter {
    visitors: Mutex<HashMap<String, Visitor>>,
    requests: u32,
    window: Duration,
}

impl RateLimiter {
    /// Allow `requests` per `window` for each client.
    pub fn new(requests: u32, window: Duration) -> Self {
        Self {
            visitors: Mutex::new(HashMap::new()),
            requests,
            window,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Count a request from `ip`; false once the client is over the limit.
    pub fn allow(&self, ip: &str) -> bool {
        self.allow_at(ip, Instant::now())
    }

    fn allow_at(&self, ip: &str, now: Instant) -> bool {
        let mut visitors = self.visitors.lock();
        let visitor = visitors.entry(ip.to_string()).or_insert(Visitor {
            last_seen: now,
            count: 0,
        });

        // Window expired
        if now.duration_since(visitor.last_seen) > self.window {
            visitor.count = 0;
        }
        if visitor.count >= self.requests {
            return false;
        }

        visitor.count += 1;
        visitor.last_seen = now;
        true
    }

    /// Drop clients idle for more than two windows. Returns how many went.
    pub fn prune(&self) -> usize {
        self.prune_at(Instant::now())
    }

    fn prune_at(&self, now: Instant) -> usize {
        let mut visitors = self.visitors.lock();
        let before = visitors.len();
        visitors.retain(|_, v| now.duration_since(v.last_seen) <= self.window * 2);
        before - visitors.len()
    }

    pub fn tracked_clients(&self) -> usize {
        self.visitors.lock().len()
    }

    /// Prune once a minute until the limiter is dropped.
    pub fn spawn_cleanup(self: &Arc<Self>) -> JoinHandle<()> {
        let limiter: Weak<Self> = Arc::downgrade(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(CLEANUP_INTERVAL);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let Some(limiter) = limiter.upgrade() else {
                    break;
                };
                let removed = limiter.prune();
                if removed > 0 {
                    debug!(removed, "Pruned idle rate limit entries");
                }
            }
        })
    }
}

/// Client IP: first `X-Forwarded-For` entry, else the peer address.
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty());

    match (forwarded, peer) {
        (Some(ip), _) => ip.to_string(),
        (None, Some(addr)) => addr.ip().to_string(),
        (None, None) => "unknown".to_string(),
    }
}

fn too_many_requests(retry_after: Duration) -> Response {
    let mut response = (
        StatusCode::TOO_MANY_REQUESTS,
        Json(ApiResponse::failure(RATE_LIMITED_MESSAGE)),
    )
        .into_response();

    if let Ok(value) = HeaderValue::from_str(&retry_after.as_secs().to_string()) {
        response.headers_mut().insert(header::RETRY_AFTER, value);
    }
    response
}

/// Tower `Layer` applying a shared [`RateLimiter`]
#[derive(Clone)]
pub struct RateLimitLayer {
    limiter: Arc<RateLimiter>,
}

impl RateLimitLayer {
    pub fn new(limiter: Arc<RateLimiter>) -> Self {
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
    limiter: Arc<RateLimiter>,
}

impl<S> Service<Request<Body>> for RateLimitService<S>
where
    S: Service<Request<Body>, Error = Infallible> + Clone + Send + 'static,
    S::Response: IntoResponse,
    S::Future: Send,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let limiter = self.limiter.clone();

        Box::pin(async move {
            // Preflight; CORS headers are added by the outer layer
            if req.method() == Method::OPTIONS {
                return Ok(StatusCode::OK.into_response());
            }

            let peer = req
                .extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| *addr);
            let ip = client_ip(req.headers(), peer);

            if !limiter.allow(&ip) {
                warn!(client = %ip, path = %req.uri().path(), "Rate limit exceeded");
                return Ok(too_many_requests(limiter.window()));
            }

            let resp = inner
                .call(req)
                .await
                .unwrap_or_else(|infallible| match infallible {});
            Ok(resp.into_response())
        })
    }
}
