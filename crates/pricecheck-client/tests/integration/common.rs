use std::collections::HashMap;
use std::sync::Arc;

use pricecheck_core::error::AppError;
use pricecheck_core::traits::Fetcher;

pub const AMAZON_URL: &str = "https://www.amazon.com/dp/B0TEST1234";
pub const WALMART_URL: &str = "https://www.walmart.com/ip/123456789";
pub const BESTBUY_URL: &str = "https://www.bestbuy.com/site/6501234.p";

pub const AMAZON_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Amazon.com: Amazon Product Name</title></head>
<body>
  <div id="centerCol">
    <h1 id="title"><span id="productTitle">  Amazon Product Name  </span></h1>
    <div class="a-section">
      <span class="a-size-base">4.5 out of 5 stars</span>
      <span class="a-price"><span class="a-price-whole">$49.99</span></span>
    </div>
    <div data-feature-name="availability">
      <span class="a-size-medium a-color-success"> In Stock </span>
    </div>
  </div>
</body>
</html>"#;

/// Amazon split-price layout: whole part and fraction live in sibling spans.
pub const AMAZON_SPLIT_PRICE_PAGE: &str = r#"<html><body>
  <h1><span id="productTitle">Robot Vacuum S8</span></h1>
  <span class="a-price">
    <span class="a-price-whole">1,299<span class="a-price-decimal">.</span></span>
    <span class="a-price-fraction">99</span>
  </span>
  <span class="a-size-base">Only 3 left in stock - order soon.</span>
</body></html>"#;

/// Same layout with the screen-reader copy of the full price.
pub const AMAZON_OFFSCREEN_PRICE_PAGE: &str = r#"<html><body>
  <h1><span id="productTitle">Robot Vacuum S8</span></h1>
  <span class="a-price">
    <span class="a-offscreen">$1,299.99</span>
    <span aria-hidden="true">
      <span class="a-price-whole">1,299<span class="a-price-decimal">.</span></span>
      <span class="a-price-fraction">99</span>
    </span>
  </span>
</body></html>"#;

pub const WALMART_PAGE: &str = r#"<html>
<head><title>Walmart Product Name - Walmart.com</title></head>
<body>
  <h1 itemprop="name">Walmart Product Name</h1>
  <span data-testid="product-price" itemprop="price">
    <span class="f6">current price</span> $39.99
  </span>
  <div data-testid="availability">In stock</div>
</body>
</html>"#;

pub const GENERIC_PAGE: &str = r#"<html>
<head><title>Generic Product</title></head>
<body>
  <h1>Generic Product</h1>
  <div class="product">
    <span class="price">$29.99</span>
    <span class="stock-status">Available</span>
  </div>
</body>
</html>"#;

pub const NO_PRICE_PAGE: &str = r#"<html><head><title>Coming soon</title></head>
<body><h1>Coming soon</h1><p>Sign up to be notified.</p></body></html>"#;

/// Serves fixture pages from memory; unknown URLs answer 404.
#[derive(Clone, Default)]
pub struct FixtureFetcher {
    pages: Arc<HashMap<String, String>>,
}

impl FixtureFetcher {
    pub fn new(pages: &[(&str, &str)]) -> Self {
        Self {
            pages: Arc::new(
                pages
                    .iter()
                    .map(|(url, page)| (url.to_string(), page.to_string()))
                    .collect(),
            ),
        }
    }
}

impl Fetcher for FixtureFetcher {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| AppError::HttpError(format!("HTTP 404 for {url}")))
    }
}
