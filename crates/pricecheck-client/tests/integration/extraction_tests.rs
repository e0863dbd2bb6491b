use pricecheck_client::HtmlParser;
use pricecheck_core::selector::ExtractorSelector;
use pricecheck_core::vendor::VendorExtractor;

use crate::common::*;

#[test]
fn amazon_fixture() {
    let record = VendorExtractor::Amazon
        .extract_price(&HtmlParser, AMAZON_PAGE, AMAZON_URL)
        .unwrap();

    assert_eq!(record.vendor, "Amazon");
    assert_eq!(record.product_name.as_deref(), Some("Amazon Product Name"));
    assert_eq!(record.price, Some(49.99));
    assert_eq!(record.currency, "USD");
    assert_eq!(record.raw_price_text.as_deref(), Some("$49.99"));
    assert_eq!(record.availability.as_deref(), Some("In Stock"));
    assert_eq!(record.source_url, AMAZON_URL);
}

#[test]
fn amazon_split_price_layout() {
    let record = VendorExtractor::Amazon
        .extract_price(&HtmlParser, AMAZON_SPLIT_PRICE_PAGE, AMAZON_URL)
        .unwrap();

    assert_eq!(record.product_name.as_deref(), Some("Robot Vacuum S8"));
    assert_eq!(record.price, Some(1299.99));
    assert_eq!(record.raw_price_text.as_deref(), Some("1,299.99"));
    assert_eq!(record.currency, "USD");
    // "in stock" wording is enough for the catch-all availability selector
    assert_eq!(
        record.availability.as_deref(),
        Some("Only 3 left in stock - order soon.")
    );
}

#[test]
fn amazon_offscreen_price() {
    let record = VendorExtractor::Amazon
        .extract_price(&HtmlParser, AMAZON_OFFSCREEN_PRICE_PAGE, AMAZON_URL)
        .unwrap();

    assert_eq!(record.price, Some(1299.99));
    assert_eq!(record.raw_price_text.as_deref(), Some("$1,299.99"));
}

#[test]
fn walmart_fixture() {
    let record = VendorExtractor::Walmart
        .extract_price(&HtmlParser, WALMART_PAGE, WALMART_URL)
        .unwrap();

    assert_eq!(record.vendor, "Walmart");
    assert_eq!(record.product_name.as_deref(), Some("Walmart Product Name"));
    assert_eq!(record.price, Some(39.99));
    assert_eq!(
        record.raw_price_text.as_deref(),
        Some("current price $39.99")
    );
    assert_eq!(record.availability.as_deref(), Some("In stock"));
}

#[test]
fn generic_fixture() {
    let extractor = ExtractorSelector::default().select(BESTBUY_URL);
    let record = extractor
        .extract_price(&HtmlParser, GENERIC_PAGE, BESTBUY_URL)
        .unwrap();

    assert_eq!(record.vendor, "Bestbuy");
    assert_eq!(record.product_name.as_deref(), Some("Generic Product"));
    assert_eq!(record.price, Some(29.99));
    assert_eq!(record.availability.as_deref(), Some("Available"));
}

#[test]
fn generic_euro_page() {
    let page = r#"<html><head><title>Kaffeemaschine</title></head>
        <body><div class="price">€1.234,56</div></body></html>"#;
    let record = VendorExtractor::Generic {
        vendor: "Shop".into(),
    }
    .extract_price(&HtmlParser, page, "https://shop.de/p/1")
    .unwrap();

    assert_eq!(record.price, Some(1234.56));
    assert_eq!(record.currency, "EUR");
}

#[test]
fn generic_skips_zero_amounts_in_markup() {
    let page = r#"<html><body><p>$0.00 delivery</p>
        <span class="price">$19.99</span></body></html>"#;
    let record = VendorExtractor::Generic {
        vendor: "Shop".into(),
    }
    .extract_price(&HtmlParser, page, "https://shop.com/p/2")
    .unwrap();

    assert_eq!(record.price, Some(19.99));
}

#[test]
fn generic_falls_back_to_data_attributes() {
    let page = r#"<html><head><title>Plain</title></head>
        <body><span data-price="1">Sale 45</span></body></html>"#;
    let record = VendorExtractor::Generic {
        vendor: "Shop".into(),
    }
    .extract_price(&HtmlParser, page, "https://shop.com/p/3")
    .unwrap();

    assert_eq!(record.price, Some(45.0));
    assert_eq!(record.currency, "USD");
}

#[test]
fn page_without_price_leaves_fields_unset() {
    for extractor in [
        VendorExtractor::Amazon,
        VendorExtractor::Walmart,
        VendorExtractor::Generic {
            vendor: "Shop".into(),
        },
    ] {
        let record = extractor
            .extract_price(&HtmlParser, NO_PRICE_PAGE, "https://shop.com/p/4")
            .unwrap();
        assert_eq!(record.price, None, "{extractor:?}");
        assert_eq!(record.raw_price_text, None, "{extractor:?}");
        assert_eq!(record.currency, "USD");
    }
}

#[test]
fn empty_markup_is_not_an_error() {
    let record = VendorExtractor::Walmart
        .extract_price(&HtmlParser, "", WALMART_URL)
        .unwrap();
    assert_eq!(record.product_name, None);
    assert_eq!(record.price, None);
}
