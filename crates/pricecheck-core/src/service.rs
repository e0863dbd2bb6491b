use chrono::Utc;
use futures::future::join_all;

use crate::classifier::{ErrorClassifier, FailureReport};
use crate::comparator::{Comparison, PriceComparator};
use crate::config::CheckConfig;
use crate::models::{ComparisonReport, PriceCheck, PriceRecord};
use crate::selector::ExtractorSelector;
use crate::traits::{DocumentParser, Fetcher};
use crate::validator::PriceValidator;

/// Runs the price pipeline: fetch -> select extractor -> extract -> validate,
/// and aggregates several runs into a cross-vendor comparison.
///
/// Generic over the page-fetch and document-query capabilities so tests can
/// run without network access or a real HTML parser.
pub struct PriceService<F, P>
where
    F: Fetcher,
    P: DocumentParser,
{
    fetcher: F,
    parser: P,
    selector: ExtractorSelector,
    validator: PriceValidator,
}

impl<F, P> PriceService<F, P>
where
    F: Fetcher,
    P: DocumentParser,
{
    /// Create a service with the default price range and vendor markers.
    pub fn new(fetcher: F, parser: P) -> Self {
        Self::with_config(fetcher, parser, &CheckConfig::default())
    }

    pub fn with_config(fetcher: F, parser: P, config: &CheckConfig) -> Self {
        Self {
            fetcher,
            parser,
            selector: ExtractorSelector::from_config(config),
            validator: PriceValidator::new(config.price_range),
        }
    }

    /// Extract and validate the price behind one URL.
    ///
    /// A rejected record is still `Ok`; only fetch or query failures become
    /// a [`FailureReport`].
    pub async fn check_price(&self, url: &str) -> Result<PriceCheck, FailureReport> {
        let extractor = self.selector.select(url);
        let vendor = extractor.vendor_name();

        tracing::info!(%vendor, %url, "Fetching");
        let markup = match self.fetcher.fetch(url).await {
            Ok(markup) => markup,
            Err(e) => {
                tracing::warn!(%vendor, %url, error = %e, "Fetch failed");
                return Err(ErrorClassifier::classify(&e, url, vendor));
            }
        };
        tracing::info!(%vendor, "Fetched {} bytes of markup", markup.len());

        let record = extractor
            .extract_price(&self.parser, &markup, url)
            .map_err(|e| {
                tracing::warn!(%vendor, %url, error = %e, "Extraction failed");
                ErrorClassifier::classify(&e, url, vendor)
            })?;

        let validation = self.validator.validate_record(&record);
        if validation.accepted {
            tracing::info!(%vendor, price = ?record.price, currency = %record.currency, "Price accepted");
        } else {
            tracing::warn!(%vendor, %url, reason = %validation.message, "Price rejected");
        }

        Ok(PriceCheck { record, validation })
    }

    /// Check every URL concurrently and compare the accepted prices.
    ///
    /// One URL failing never aborts the others; failures and rejected records
    /// are reported next to the comparison.
    pub async fn compare_across_vendors<S: AsRef<str>>(&self, urls: &[S]) -> ComparisonReport {
        let results = join_all(urls.iter().map(|url| self.check_price(url.as_ref()))).await;

        let mut vendors = Vec::new();
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(check) => vendors.push(check),
                Err(report) => failures.push(report),
            }
        }

        let accepted: Vec<PriceRecord> = vendors
            .iter()
            .filter(|check| check.is_accepted())
            .map(|check| check.record.clone())
            .collect();
        let rejected = vendors.len() - accepted.len();

        let comparison = if urls.is_empty() {
            Comparison::NoData
        } else if accepted.is_empty() {
            Comparison::NoValidPrices
        } else {
            PriceComparator::compare(&accepted)
        };

        tracing::info!(
            urls = urls.len(),
            accepted = accepted.len(),
            rejected,
            failed = failures.len(),
            "Comparison complete"
        );

        ComparisonReport {
            comparison,
            vendors,
            rejected,
            failures,
            checked_at: Utc::now(),
        }
    }
}
