//! Multi-page in-stock collection loop for [`MagnitClient`].

use std::time::Duration;

use crate::error::ScraperError;
use crate::types::GoodsItem;

use super::{MagnitClient, MAX_PAGES};

impl MagnitClient {
    /// Collects every in-stock item in a category for a city.
    ///
    /// Starts at offset 0 with an empty continuation token; each page
    /// advances the offset by `limit` and echoes the token the server
    /// returned. The loop stops when a page comes back with zero items.
    /// Items whose stock quantity is not a positive integer are dropped
    /// silently.
    ///
    /// `inter_page_delay_ms` is slept after every non-empty page, keeping
    /// request pacing at roughly the cadence of the mobile app.
    ///
    /// **All-or-nothing semantics**: a failure on any page discards the
    /// items collected so far and returns the error. The caller only writes
    /// output after the full list is in hand, so a mid-run failure produces
    /// no file at all.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::search_page`]. Returns
    /// [`ScraperError::PaginationLimit`] after [`MAX_PAGES`] pages.
    pub async fn search_in_stock(
        &self,
        category_id: i64,
        city_id: &str,
        limit: u32,
        inter_page_delay_ms: u64,
    ) -> Result<Vec<GoodsItem>, ScraperError> {
        let mut in_stock: Vec<GoodsItem> = Vec::new();
        let mut offset = 0u32;
        let mut token = String::new();
        let mut page_count = 0usize;

        loop {
            page_count += 1;
            if page_count > MAX_PAGES {
                return Err(ScraperError::PaginationLimit {
                    max_pages: MAX_PAGES,
                });
            }

            let page = self
                .search_page(category_id, city_id, offset, limit, &token)
                .await?;
            if page.items.is_empty() {
                break;
            }

            let page_total = page.items.len();
            in_stock.extend(page.items.into_iter().filter(GoodsItem::is_in_stock));
            tracing::debug!(
                offset,
                page_total,
                in_stock = in_stock.len(),
                "fetched goods page"
            );

            token = page.token.unwrap_or_default();
            offset += limit;

            if inter_page_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(inter_page_delay_ms)).await;
            }
        }

        Ok(in_stock)
    }
}
