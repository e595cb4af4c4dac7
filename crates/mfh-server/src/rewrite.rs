//! Placeholder rewrite fairing
//!
//! Response fairing that substitutes the federation placeholder tokens in
//! served HTML/JS bodies with the currently resolved remote entry URLs. This
//! is what lets a remote redeploy propagate to the host without rebuilding or
//! redeploying the host itself.

use mfh_application::RemoteUrlResolver;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::ContentType;
use rocket::{Request, Response};
use std::io::Cursor;
use std::sync::Arc;
use tracing::{debug, error};

/// Rewrites placeholder tokens in eligible response bodies
///
/// Only the root path and `.html`/`.js` paths are considered, and only
/// successful responses with a text-like content type. Status and headers are
/// always preserved; a body without any token passes through byte-identical.
/// Every failure is absorbed here — the worst case is serving the response
/// unmodified or with fallback URLs substituted.
pub struct RewriteFairing {
    resolver: Arc<RemoteUrlResolver>,
}

impl RewriteFairing {
    /// Create a fairing substituting URLs from the given resolver
    pub fn new(resolver: Arc<RemoteUrlResolver>) -> Self {
        Self { resolver }
    }
}

/// Whether the request path belongs to the host document surface
fn is_rewritable_path(path: &str) -> bool {
    path == "/" || path.ends_with(".html") || path.ends_with(".js")
}

/// Whether the content type is text-like (HTML, JS, plain text)
fn is_text_like(content_type: &ContentType) -> bool {
    content_type.top() == "text" || content_type.sub().as_str().contains("javascript")
}

#[rocket::async_trait]
impl Fairing for RewriteFairing {
    fn info(&self) -> Info {
        Info {
            name: "Remote URL Rewriter",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let path = request.uri().path().as_str();
        if !is_rewritable_path(path) {
            return;
        }
        if !response.status().class().is_success() {
            return;
        }
        let Some(content_type) = response.content_type() else {
            return;
        };
        if !is_text_like(&content_type) {
            return;
        }

        // Resolve before touching the body: the cache window applies to every
        // eligible response, token or not.
        let substitutions = self.resolver.resolve_all().await;

        let bytes = match response.body_mut().to_bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(path = %path, error = %e, "failed to read response body");
                return;
            }
        };

        let mut body = match String::from_utf8(bytes) {
            Ok(body) => body,
            Err(e) => {
                // Declared text but not UTF-8: pass the bytes through untouched.
                let bytes = e.into_bytes();
                response.set_sized_body(bytes.len(), Cursor::new(bytes));
                return;
            }
        };

        for (placeholder, url) in &substitutions {
            if body.contains(placeholder.as_str()) {
                debug!(path = %path, placeholder = %placeholder, url = %url, "substituted remote entry url");
                body = body.replace(placeholder.as_str(), url);
            }
        }

        let body = body.into_bytes();
        response.set_sized_body(body.len(), Cursor::new(body));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewritable_paths() {
        assert!(is_rewritable_path("/"));
        assert!(is_rewritable_path("/index.html"));
        assert!(is_rewritable_path("/assets/main.3f2a.js"));
        assert!(!is_rewritable_path("/styles.css"));
        assert!(!is_rewritable_path("/logo.png"));
        assert!(!is_rewritable_path("/api/health"));
    }

    #[test]
    fn test_text_like_content_types() {
        assert!(is_text_like(&ContentType::HTML));
        assert!(is_text_like(&ContentType::Plain));
        assert!(is_text_like(&ContentType::JavaScript));
        assert!(!is_text_like(&ContentType::PNG));
        assert!(!is_text_like(&ContentType::Binary));
    }
}
