// Rate limiting configuration for tower-governor
//
// - 10 requests per second per IP with a burst of 20
// - Covers the login mutation, so password guessing is bounded per client
// - Client IP comes from X-Forwarded-For / X-Real-IP, then the socket address
//
// Applied in app.rs as a layer over every route except /health

/// Sustained requests per second per client IP
pub const RATE_LIMIT_PER_SECOND: u64 = 10;

/// Requests a client may burst before being throttled
pub const RATE_LIMIT_BURST: u32 = 20;
