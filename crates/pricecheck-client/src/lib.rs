pub mod document;
pub mod fetcher;

pub use document::{HtmlDocument, HtmlParser};
pub use fetcher::ReqwestFetcher;
