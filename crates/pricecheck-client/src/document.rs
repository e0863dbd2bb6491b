use pricecheck_core::error::AppError;
use pricecheck_core::traits::{Document, DocumentParser};
use scraper::{ElementRef, Html, Selector};

/// Document-query capability backed by the `scraper` HTML parser.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlParser;

impl HtmlParser {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentParser for HtmlParser {
    type Document = HtmlDocument;

    fn parse(&self, markup: &str) -> HtmlDocument {
        HtmlDocument::parse(markup)
    }
}

/// A parsed HTML page. Malformed markup is parsed leniently, never rejected.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }
}

impl Document for HtmlDocument {
    fn select_first_text(&self, selector: &str) -> Result<Option<String>, AppError> {
        let selector = compile(selector)?;
        Ok(self.html.select(&selector).next().map(element_text))
    }

    fn select_all_text(&self, selector: &str) -> Result<Vec<String>, AppError> {
        let selector = compile(selector)?;
        Ok(self.html.select(&selector).map(element_text).collect())
    }
}

fn compile(selector: &str) -> Result<Selector, AppError> {
    Selector::parse(selector)
        .map_err(|e| AppError::QueryError(format!("Invalid selector '{selector}': {e}")))
}

/// Concatenated text nodes with whitespace runs collapsed.
fn element_text(element: ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
