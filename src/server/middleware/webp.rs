//! WebP content negotiation for artwork requests.
//!
//! Artwork is stored on disk as JPEG or PNG, optionally next to a `.webp` copy with the
//! same stem. When a client advertises WebP support and such a copy exists, the request
//! is rewritten to it before static file serving runs.

use std::path::{Component, Path, PathBuf};

use axum::{
    extract::{Request, State},
    http::{header, uri::PathAndQuery, HeaderMap, HeaderValue, Uri},
    middleware::Next,
    response::Response,
};

const NEGOTIABLE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// WebP sibling of a negotiable image request.
#[derive(Debug, PartialEq, Eq)]
pub struct WebpVariant {
    /// Request path with the extension replaced by `webp`.
    pub request_path: String,
    /// Location of the sibling relative to the artwork directory.
    pub file: PathBuf,
}

/// Rewrites JPEG and PNG requests to an existing WebP sibling when the client accepts WebP.
///
/// Requests that could be negotiated get `Vary: Accept` on their response whether or not
/// they were rewritten, so shared caches keep the variants apart.
pub async fn webp_negotiation(
    State(artwork_dir): State<PathBuf>,
    mut request: Request,
    next: Next,
) -> Response {
    let variant = webp_variant(request.uri().path());

    if let Some(variant) = &variant {
        if accepts_webp(request.headers()) && is_file(&artwork_dir.join(&variant.file)).await {
            if let Some(uri) = with_path(request.uri(), &variant.request_path) {
                tracing::debug!("Serving {} for {}", variant.request_path, request.uri().path());
                *request.uri_mut() = uri;
            }
        }
    }

    let mut response = next.run(request).await;

    if variant.is_some() {
        response
            .headers_mut()
            .append(header::VARY, HeaderValue::from_static("accept"));
    }

    response
}

/// Finds the WebP sibling for a request path.
///
/// Returns `None` unless the path ends in `.jpg`, `.jpeg` or `.png` (any case) and consists
/// only of plain file name segments. Parent directory and root components never match.
pub fn webp_variant(request_path: &str) -> Option<WebpVariant> {
    let relative = Path::new(request_path.trim_start_matches('/'));

    if relative.as_os_str().is_empty()
        || !relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
    {
        return None;
    }

    let extension = relative.extension()?.to_str()?;
    if !NEGOTIABLE_EXTENSIONS
        .iter()
        .any(|candidate| extension.eq_ignore_ascii_case(candidate))
    {
        return None;
    }

    // `Path` drops trailing `/` and `.` segments, so the raw path must end in the extension too.
    let stem = request_path
        .strip_suffix(extension)
        .filter(|stem| stem.ends_with('.'))?;

    Some(WebpVariant {
        request_path: format!("{stem}webp"),
        file: relative.with_extension("webp"),
    })
}

/// Whether any `Accept` header lists `image/webp`.
pub fn accepts_webp(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .filter_map(|media_range| media_range.split(';').next())
        .any(|media_type| media_type.trim().eq_ignore_ascii_case("image/webp"))
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|metadata| metadata.is_file())
        .unwrap_or(false)
}

/// Replaces the path of `uri`, keeping its query string.
fn with_path(uri: &Uri, path: &str) -> Option<Uri> {
    let path_and_query = match uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(path_and_query).ok()?);

    Uri::from_parts(parts).ok()
}
