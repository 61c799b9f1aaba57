use axum::{
    extract::{ConnectInfo, Request},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::net::{IpAddr, SocketAddr};

/// Caller's IP address, stored in request extensions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClientIp(pub IpAddr);

/// Resolve the caller's IP
///
/// Priority:
/// 1. X-Forwarded-For header (first hop)
/// 2. X-Real-IP header
/// 3. Socket peer address
pub fn resolve_client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> Option<IpAddr> {
    let header_ip = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.split(',').next())
            .and_then(|s| s.trim().parse::<IpAddr>().ok())
    };

    header_ip("x-forwarded-for")
        .or_else(|| header_ip("x-real-ip"))
        .or_else(|| peer.map(|addr| addr.ip()))
}

/// Middleware that records `ClientIp` for handlers and logs
pub async fn extract_client_ip(mut request: Request, next: Next) -> Response {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    if let Some(ip) = resolve_client_ip(request.headers(), peer) {
        request.extensions_mut().insert(ClientIp(ip));
    }

    next.run(request).await
}
