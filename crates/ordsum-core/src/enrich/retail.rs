//! Live pack-quantity lookup against a retail search flow.

use std::time::Duration;

use async_trait::async_trait;
use scraper::{Html, Selector};
use tokio::time::timeout;
use tracing::{debug, warn};
use url::Url;

use super::{parse_pack_quantity, QuantityLookup};
use crate::models::config::EnrichmentConfig;
use crate::models::order::QuantityOutcome;

/// CSS selector for the first product link on a search-results page.
const RESULT_LINK: &str = r#"div[data-component-type="s-search-result"] h2 a"#;

/// CSS selector for the product title on a detail page.
const PRODUCT_TITLE: &str = "span#productTitle";

/// Pack-quantity lookup backed by the retailer's public search pages.
///
/// Each lookup runs in its own HTTP session which is torn down on every
/// exit path; nothing is shared or reused across items. The flow is search
/// page, first result link, detail page, title element, with the bounded
/// wait applied to every network step. A single attempt is made per item.
pub struct RetailQuantityLookup {
    search_url: String,
    user_agent: String,
    step_timeout: Duration,
}

enum Fetched {
    Body(String),
    /// The page answered 404/410: the reference we followed no longer
    /// resolves.
    Gone,
}

impl RetailQuantityLookup {
    pub fn new(config: &EnrichmentConfig) -> Self {
        Self {
            search_url: config.search_url.clone(),
            user_agent: config.user_agent.clone(),
            step_timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }

    async fn try_lookup(&self, item_name: &str) -> QuantityOutcome {
        let client = match reqwest::Client::builder()
            .timeout(self.step_timeout)
            .user_agent(&self.user_agent)
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                return QuantityOutcome::TransientError(format!(
                    "could not build HTTP session: {}",
                    e
                ))
            }
        };

        let search_url = format!("{}{}", self.search_url, urlencoding::encode(item_name));
        let search_html = match self.fetch(&client, &search_url).await {
            Ok(Fetched::Body(body)) => body,
            Ok(Fetched::Gone) => return QuantityOutcome::NotFound,
            Err(outcome) => return outcome,
        };

        let Some(href) = first_result_href(&search_html) else {
            debug!(item = item_name, "No result link on search page");
            return QuantityOutcome::NotFound;
        };

        let Some(detail_url) = resolve_href(&search_url, &href) else {
            return QuantityOutcome::TransientError(format!(
                "could not resolve result link {}",
                href
            ));
        };

        // The link was just located on the search page; if it no longer
        // resolves the page state changed under us. Retryable, not fatal.
        let detail_html = match self.fetch(&client, &detail_url).await {
            Ok(Fetched::Body(body)) => body,
            Ok(Fetched::Gone) => return QuantityOutcome::StaleReference,
            Err(outcome) => return outcome,
        };

        let Some(title) = product_title(&detail_html) else {
            debug!(item = item_name, "No title element on detail page");
            return QuantityOutcome::NotFound;
        };

        match parse_pack_quantity(&title) {
            Some(quantity) => QuantityOutcome::Exact(quantity),
            None => QuantityOutcome::NotFound,
        }
    }

    /// Fetch one page with the bounded wait applied to the whole step.
    async fn fetch(&self, client: &reqwest::Client, url: &str) -> Result<Fetched, QuantityOutcome> {
        let response = match timeout(self.step_timeout, client.get(url).send()).await {
            Err(_) => return Err(QuantityOutcome::Timeout),
            Ok(Err(e)) if e.is_timeout() => return Err(QuantityOutcome::Timeout),
            Ok(Err(e)) => {
                return Err(QuantityOutcome::TransientError(format!(
                    "request to {} failed: {}",
                    url, e
                )))
            }
            Ok(Ok(response)) => response,
        };

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND || status == reqwest::StatusCode::GONE {
            return Ok(Fetched::Gone);
        }
        if !status.is_success() {
            return Err(QuantityOutcome::TransientError(format!(
                "{} returned HTTP {}",
                url, status
            )));
        }

        match timeout(self.step_timeout, response.text()).await {
            Err(_) => Err(QuantityOutcome::Timeout),
            Ok(Err(e)) => Err(QuantityOutcome::TransientError(format!(
                "failed to read body from {}: {}",
                url, e
            ))),
            Ok(Ok(body)) => Ok(Fetched::Body(body)),
        }
    }
}

#[async_trait]
impl QuantityLookup for RetailQuantityLookup {
    async fn lookup(&self, item_name: &str) -> QuantityOutcome {
        debug!(item = item_name, "Starting pack-quantity lookup");
        let outcome = self.try_lookup(item_name).await;
        if let QuantityOutcome::TransientError(cause) = &outcome {
            warn!(item = item_name, cause = %cause, "Lookup failed");
        }
        outcome
    }
}

/// First product link href on a search-results page, if any.
fn first_result_href(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(RESULT_LINK).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("href"))
        .map(str::to_string)
}

/// Product title text on a detail page, if any.
fn product_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(PRODUCT_TITLE).ok()?;
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<Vec<_>>().join(" ").trim().to_string())
        .filter(|title| !title.is_empty())
}

/// Resolve a possibly-relative href against the page it was found on.
fn resolve_href(base: &str, href: &str) -> Option<String> {
    let base = Url::parse(base).ok()?;
    base.join(href).ok().map(|url| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_PAGE: &str = r#"
        <html><body>
        <div data-component-type="s-search-result">
            <h2><a href="/dp/B000TEST">Widget Pack</a></h2>
        </div>
        <div data-component-type="s-search-result">
            <h2><a href="/dp/B000OTHER">Other Widget</a></h2>
        </div>
        </body></html>
    "#;

    #[test]
    fn test_first_result_href() {
        assert_eq!(
            first_result_href(SEARCH_PAGE),
            Some("/dp/B000TEST".to_string())
        );
    }

    #[test]
    fn test_no_result_href() {
        assert_eq!(first_result_href("<html><body></body></html>"), None);
    }

    #[test]
    fn test_product_title() {
        let html = r#"
            <html><body>
            <span id="productTitle">
                Widget Pack of 24 count
            </span>
            </body></html>
        "#;
        assert_eq!(
            product_title(html),
            Some("Widget Pack of 24 count".to_string())
        );
    }

    #[test]
    fn test_missing_title_is_none() {
        assert_eq!(product_title("<html><body></body></html>"), None);
    }

    #[test]
    fn test_resolve_relative_href() {
        assert_eq!(
            resolve_href("https://www.amazon.com/s?k=widget", "/dp/B000TEST"),
            Some("https://www.amazon.com/dp/B000TEST".to_string())
        );
    }

    #[test]
    fn test_resolve_absolute_href() {
        assert_eq!(
            resolve_href(
                "https://www.amazon.com/s?k=widget",
                "https://www.amazon.com/dp/B000TEST"
            ),
            Some("https://www.amazon.com/dp/B000TEST".to_string())
        );
    }
}
