//! Endpoint URL construction for the resource, proxy and unify APIs.

/// Default base URL of the resource API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.bundleup.io";
/// Default resource API version segment.
pub const DEFAULT_API_VERSION: &str = "v1";
/// Default base URL of the proxy API.
pub const DEFAULT_PROXY_BASE_URL: &str = "https://proxy.bundleup.io";
/// Default base URL of the unify API.
pub const DEFAULT_UNIFY_BASE_URL: &str = "https://unify.bundleup.io";

/// `{base}/{version}/{namespace}[/{id}]`
///
/// The id is appended verbatim; it is an opaque server-assigned token.
pub fn build_resource_url(base: &str, version: &str, namespace: &str, id: Option<&str>) -> String {
    let mut url = format!("{}/{}/{}", base.trim_end_matches('/'), version, namespace);
    if let Some(id) = id.filter(|id| !id.is_empty()) {
        url.push('/');
        url.push_str(id);
    }
    url
}

/// Ensure `path` starts with a single leading `/`.
pub fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// `{base}{path}` with the leading `/` enforced on `path`.
pub fn build_proxy_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), normalize_path(path))
}
