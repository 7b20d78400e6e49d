//! The request surface consumed by the resolver.

/// Minimal view of an already-parsed request.
///
/// Resolution only needs the exact path and the raw method token; any
/// transport-layer request type can implement this seam. The method is
/// kept as a string here and parsed into an
/// [`HttpMethod`](crate::HttpMethod) during resolution, so malformed
/// tokens surface as a per-request error rather than a parse failure in
/// the transport.
pub trait RequestDescriptor {
    /// The exact request path.
    fn path(&self) -> &str;

    /// The raw method token.
    fn method(&self) -> &str;
}

/// Owned `(method, path)` pair, the simplest [`RequestDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    method: String,
    path: String,
}

impl RequestLine {
    /// Creates a request line from a raw method token and an exact path.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
        }
    }
}

impl RequestDescriptor for RequestLine {
    fn path(&self) -> &str {
        &self.path
    }

    fn method(&self) -> &str {
        &self.method
    }
}
