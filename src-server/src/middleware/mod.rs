//! HTTP middleware.

mod ratelimit;

pub use ratelimit::{client_ip, RateLimitLayer, RateLimiter, RATE_LIMITED_MESSAGE};
