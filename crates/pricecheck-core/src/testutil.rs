//! Test utilities: mock implementations of the external capabilities.
//!
//! Handwritten mocks for dependency injection in unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::traits::{Document, DocumentParser, Fetcher};

// ---------------------------------------------------------------------------
// MockFetcher
// ---------------------------------------------------------------------------

/// Mock fetcher serving one configured response per URL.
///
/// Unknown URLs fail with an HTTP 404 error. Every requested URL is recorded.
#[derive(Clone, Default)]
pub struct MockFetcher {
    responses: Arc<Mutex<HashMap<String, Result<String, AppError>>>>,
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, url: &str, markup: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), Ok(markup.to_string()));
        self
    }

    pub fn with_error(self, url: &str, error: AppError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), Err(error));
        self
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        self.requested.lock().unwrap().push(url.to_string());
        self.responses
            .lock()
            .unwrap()
            .remove(url)
            .unwrap_or_else(|| Err(AppError::HttpError(format!("HTTP 404 for {url}"))))
    }
}

// ---------------------------------------------------------------------------
// MockDocument / MockParser
// ---------------------------------------------------------------------------

/// Document answering selector queries from a fixed table.
#[derive(Clone, Default)]
pub struct MockDocument {
    texts: HashMap<String, Vec<String>>,
    failing: HashSet<String>,
}

impl MockDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element with `text` matching `selector`.
    pub fn with(mut self, selector: &str, text: &str) -> Self {
        self.texts
            .entry(selector.to_string())
            .or_default()
            .push(text.to_string());
        self
    }

    /// Queries for `selector` fail with a query error.
    pub fn failing_on(mut self, selector: &str) -> Self {
        self.failing.insert(selector.to_string());
        self
    }

    fn check(&self, selector: &str) -> Result<(), AppError> {
        if self.failing.contains(selector) {
            return Err(AppError::QueryError(format!("cannot query '{selector}'")));
        }
        Ok(())
    }
}

impl Document for MockDocument {
    fn select_first_text(&self, selector: &str) -> Result<Option<String>, AppError> {
        self.check(selector)?;
        Ok(self
            .texts
            .get(selector)
            .and_then(|texts| texts.first().cloned()))
    }

    fn select_all_text(&self, selector: &str) -> Result<Vec<String>, AppError> {
        self.check(selector)?;
        Ok(self.texts.get(selector).cloned().unwrap_or_default())
    }
}

/// Parser mapping known markup strings to prepared documents.
///
/// Markup without a registered document parses to the fallback document.
#[derive(Clone, Default)]
pub struct MockParser {
    documents: HashMap<String, MockDocument>,
    fallback: MockDocument,
}

impl MockParser {
    /// Parser returning `document` for any markup.
    pub fn new(document: MockDocument) -> Self {
        Self {
            documents: HashMap::new(),
            fallback: document,
        }
    }

    pub fn with_markup(mut self, markup: &str, document: MockDocument) -> Self {
        self.documents.insert(markup.to_string(), document);
        self
    }
}

impl DocumentParser for MockParser {
    type Document = MockDocument;

    fn parse(&self, markup: &str) -> MockDocument {
        self.documents
            .get(markup)
            .unwrap_or(&self.fallback)
            .clone()
    }
}
