use std::future::Future;

use crate::error::AppError;

/// Fetches raw page markup from a URL.
///
/// Implementations own retries, rate limiting and timeouts; the core
/// treats any error as "extraction impossible for this URL".
pub trait Fetcher: Send + Sync + Clone {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, AppError>> + Send;
}

/// A parsed page that can be queried by CSS selector.
///
/// Returned text is the concatenation of the matched element's text nodes
/// with whitespace runs collapsed to a single space and trimmed.
pub trait Document {
    /// Text of the first element matching `selector`, or `None` when nothing matches.
    fn select_first_text(&self, selector: &str) -> Result<Option<String>, AppError>;

    /// Text of every element matching `selector`, in document order.
    fn select_all_text(&self, selector: &str) -> Result<Vec<String>, AppError>;
}

/// Turns raw markup into a queryable [`Document`].
pub trait DocumentParser: Send + Sync + Clone {
    type Document: Document;

    fn parse(&self, markup: &str) -> Self::Document;
}
