/// The single view-state store for the product list
///
/// Holds the fully fetched list plus the search/pagination knobs and the
/// page-level loading/error flags. Every mutation that can change the
/// filtered count re-clamps the current page so it never points past the
/// last page.

use super::product::{Product, ProductPatch};
use super::query;

/// Page size choices offered by the per-page selector
pub const PAGE_SIZES: [usize; 4] = [4, 8, 12, 16];

/// Default page size on startup
pub const DEFAULT_PAGE_SIZE: usize = 8;

#[derive(Debug)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub query: String,
    pub page: usize,
    pub page_size: usize,
    /// True while the initial list fetch is in flight
    pub loading: bool,
    /// Page-level error banner from a failed list fetch
    pub error: Option<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            query: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            loading: true,
            error: None,
        }
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the full list after a successful fetch
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.loading = false;
        self.error = None;
        self.reclamp();
    }

    /// Record a failed list fetch; the list stays empty
    pub fn set_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Change the search query and jump back to the first page
    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.page = 1;
    }

    /// Change the page size and jump back to the first page
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = query::clamp_page(page, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.go_to_page(self.page.saturating_sub(1));
    }

    /// Prepend a freshly created record so it shows up without a refetch
    pub fn prepend(&mut self, product: Product) {
        self.products.insert(0, product);
        self.reclamp();
    }

    /// Merge an update response into the matching record, if still present
    pub fn apply_patch(&mut self, id: u64, patch: &ProductPatch) {
        if let Some(product) = self.products.iter_mut().find(|p| p.id == id) {
            patch.merge_into(product);
        }
    }

    /// Splice out a deleted record
    pub fn remove(&mut self, id: u64) {
        self.products.retain(|p| p.id != id);
        self.reclamp();
    }

    pub fn filtered(&self) -> Vec<&Product> {
        query::filter(&self.products, &self.query)
    }

    pub fn total_pages(&self) -> usize {
        query::total_pages(self.filtered().len(), self.page_size)
    }

    /// The visible slice of the filtered list for the current page
    pub fn visible(&self) -> Vec<&Product> {
        let filtered = self.filtered();
        let (start, end) = query::page_bounds(filtered.len(), self.page, self.page_size);
        filtered[start..end].to_vec()
    }

    pub fn showing_text(&self) -> String {
        query::showing_text(self.filtered().len(), self.page, self.page_size)
    }

    /// Invariant: page ∈ [1, total_pages] whenever the filtered count changes
    fn reclamp(&mut self) {
        self.page = query::clamp_page(self.page, self.total_pages());
    }
}
