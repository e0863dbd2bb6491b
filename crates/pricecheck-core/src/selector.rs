use url::Url;

use crate::config::{CheckConfig, VendorMarker};
use crate::validator::is_valid_vendor;
use crate::vendor::VendorExtractor;

/// Label used when no host can be recovered from the URL.
pub const UNKNOWN_VENDOR: &str = "Unknown";

/// Picks the extractor for a URL by looking for vendor markers in its host.
///
/// Selection never fails: URLs without a known marker (or without a usable
/// host at all) get a [`VendorExtractor::Generic`] extractor.
#[derive(Debug, Clone)]
pub struct ExtractorSelector {
    markers: Vec<VendorMarker>,
}

impl ExtractorSelector {
    pub fn new(markers: Vec<VendorMarker>) -> Self {
        Self { markers }
    }

    pub fn from_config(config: &CheckConfig) -> Self {
        Self::new(config.vendor_markers.clone())
    }

    pub fn select(&self, url: &str) -> VendorExtractor {
        let Some(host) = host_segment(url) else {
            return VendorExtractor::Generic {
                vendor: UNKNOWN_VENDOR.to_string(),
            };
        };

        if let Some(marker) = self.markers.iter().find(|m| host.contains(&m.marker)) {
            return marker.vendor.into();
        }

        VendorExtractor::Generic {
            vendor: vendor_label(&host),
        }
    }
}

impl Default for ExtractorSelector {
    fn default() -> Self {
        Self::from_config(&CheckConfig::default())
    }
}

/// Lowercase host of `url`.
///
/// Falls back to plain string splitting for input the URL parser rejects;
/// without a scheme the leading segment only counts if it looks like a domain.
fn host_segment(url: &str) -> Option<String> {
    if let Ok(parsed) = Url::parse(url) {
        if let Some(host) = parsed.host_str() {
            return Some(host.to_lowercase());
        }
    }

    let (rest, has_scheme) = match url.trim().split_once("://") {
        Some((_, rest)) => (rest, true),
        None => (url.trim(), false),
    };
    let authority = rest.split(['/', '?', '#']).next()?;
    let host = authority.rsplit('@').next()?.split(':').next()?;

    let plausible = !host.is_empty()
        && !host.contains(char::is_whitespace)
        && (has_scheme || host.contains('.'));
    plausible.then(|| host.to_lowercase())
}

/// Display label for a shop host: `www.bestbuy.com` -> `Bestbuy`.
fn vendor_label(host: &str) -> String {
    let host = host.strip_prefix("www.").unwrap_or(host);
    let name = host.split('.').next().unwrap_or_default();
    if !is_valid_vendor(name) {
        return UNKNOWN_VENDOR.to_string();
    }
    title_case(name)
}

/// Uppercase every letter that follows a non-letter, lowercase the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}
