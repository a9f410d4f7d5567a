//! Security headers middleware for XSS, clickjacking, and isolation protection.
//!
//! Adds restrictive security headers to all responses. The only third-party
//! origins allowed are the catalog API (product images), the placeholder
//! image host and the CDN serving htmx.

use axum::{
    extract::{Request, State},
    http::{
        HeaderName, HeaderValue,
        header::{
            CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
        },
    },
    middleware::Next,
    response::Response,
};
use url::Url;

/// Origin of the placeholder images used for missing product and category art.
const PLACEHOLDER_ORIGIN: &str = "https://placehold.co";

/// Origin serving the htmx script.
const SCRIPT_CDN_ORIGIN: &str = "https://unpkg.com";

/// Policy used if the computed one is not a valid header value.
const FALLBACK_POLICY: &str = "default-src 'self'; object-src 'none'; frame-ancestors 'none'";

/// A `Content-Security-Policy` value for a given catalog API.
#[derive(Debug, Clone)]
pub struct ContentSecurityPolicy(HeaderValue);

impl ContentSecurityPolicy {
    /// Build the policy, allowing images from the catalog API's origin.
    ///
    /// ```text
    /// default-src 'none';
    /// script-src 'self' https://unpkg.com;
    /// style-src 'self';
    /// img-src 'self' <catalog origin> https://placehold.co;
    /// connect-src 'self';
    /// frame-src 'none';
    /// object-src 'none';
    /// base-uri 'self';
    /// form-action 'self';
    /// frame-ancestors 'none'
    /// ```
    #[must_use]
    pub fn for_catalog(catalog_base: &Url) -> Self {
        let catalog_origin = catalog_base.origin().ascii_serialization();
        let policy = format!(
            "default-src 'none'; \
             script-src 'self' {SCRIPT_CDN_ORIGIN}; \
             style-src 'self'; \
             img-src 'self' {catalog_origin} {PLACEHOLDER_ORIGIN}; \
             connect-src 'self'; \
             frame-src 'none'; \
             object-src 'none'; \
             base-uri 'self'; \
             form-action 'self'; \
             frame-ancestors 'none'"
        );

        Self(
            HeaderValue::from_str(&policy)
                .unwrap_or_else(|_| HeaderValue::from_static(FALLBACK_POLICY)),
        )
    }

    /// The policy text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.to_str().unwrap_or(FALLBACK_POLICY)
    }
}

/// Add security headers to all responses.
///
/// Headers applied:
/// - `X-Frame-Options: DENY`
/// - `X-Content-Type-Options: nosniff`
/// - `Referrer-Policy: no-referrer`
/// - `Content-Security-Policy` from [`ContentSecurityPolicy`]
/// - `Permissions-Policy` denying sensors, media capture and payment
/// - `Cache-Control: no-store, max-age=0` (every page reflects the live cart)
/// - `Cross-Origin-Opener-Policy: same-origin`
/// - `Cross-Origin-Resource-Policy: same-origin`
/// - `Cross-Origin-Embedder-Policy: credentialless`
pub async fn security_headers_middleware(
    State(csp): State<ContentSecurityPolicy>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(REFERRER_POLICY, HeaderValue::from_static("no-referrer"));
    headers.insert(CONTENT_SECURITY_POLICY, csp.0);

    headers.insert(
        HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static(
            "accelerometer=(), \
             camera=(), \
             display-capture=(), \
             geolocation=(), \
             gyroscope=(), \
             magnetometer=(), \
             microphone=(), \
             payment=(), \
             usb=()",
        ),
    );

    headers.insert(
        HeaderName::from_static("cache-control"),
        HeaderValue::from_static("no-store, max-age=0"),
    );

    headers.insert(
        HeaderName::from_static("cross-origin-opener-policy"),
        HeaderValue::from_static("same-origin"),
    );
    headers.insert(
        HeaderName::from_static("cross-origin-resource-policy"),
        HeaderValue::from_static("same-origin"),
    );

    // Catalog and placeholder images carry no CORP header
    headers.insert(
        HeaderName::from_static("cross-origin-embedder-policy"),
        HeaderValue::from_static("credentialless"),
    );

    response
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{Router, body::Body, http, middleware, routing::get};
    use tower::ServiceExt;

    use super::*;

    #[test]
    fn test_policy_allows_catalog_images() {
        let csp = ContentSecurityPolicy::for_catalog(
            &Url::parse("https://fakestoreapi.com/").unwrap(),
        );
        assert!(
            csp.as_str()
                .contains("img-src 'self' https://fakestoreapi.com https://placehold.co;")
        );
        assert!(csp.as_str().contains("script-src 'self' https://unpkg.com;"));
    }

    #[test]
    fn test_policy_keeps_catalog_port() {
        let csp = ContentSecurityPolicy::for_catalog(
            &Url::parse("http://127.0.0.1:8080/api/").unwrap(),
        );
        assert!(csp.as_str().contains("http://127.0.0.1:8080 "));
    }

    #[tokio::test]
    async fn test_headers_applied() {
        let csp = ContentSecurityPolicy::for_catalog(
            &Url::parse("https://fakestoreapi.com/").unwrap(),
        );
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(middleware::from_fn_with_state(
                csp,
                security_headers_middleware,
            ));

        let response = app
            .oneshot(http::Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let headers = response.headers();

        assert_eq!(headers.get(X_FRAME_OPTIONS).unwrap(), "DENY");
        assert_eq!(headers.get("cache-control").unwrap(), "no-store, max-age=0");
        assert!(
            headers
                .get(CONTENT_SECURITY_POLICY)
                .unwrap()
                .to_str()
                .unwrap()
                .starts_with("default-src 'none';")
        );
    }
}
