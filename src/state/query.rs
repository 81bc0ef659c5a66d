/// Query pipeline: search filter and client-side pagination
///
/// Pure functions over the fully fetched product list. Filtering and
/// paging never touch the network and never reorder the source list.

use super::product::Product;

/// Lowercase + trim, the normalization applied to both sides of a match
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// A product matches when the normalized query is a substring of its
/// normalized "title category" concatenation. An empty or
/// whitespace-only query matches everything.
pub fn matches(product: &Product, query: &str) -> bool {
    let q = normalize(query);
    if q.is_empty() {
        return true;
    }

    let haystack = format!("{} {}", normalize(&product.title), normalize(&product.category));
    haystack.contains(&q)
}

/// Filter the full list, preserving source order
pub fn filter<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    products.iter().filter(|p| matches(p, query)).collect()
}

/// Total page count for a filtered list: max(1, ceil(count / page_size))
pub fn total_pages(count: usize, page_size: usize) -> usize {
    debug_assert!(page_size > 0);
    count.div_ceil(page_size).max(1)
}

/// Clamp a requested page number into [1, total]
pub fn clamp_page(page: usize, total: usize) -> usize {
    if total <= 1 {
        return 1;
    }
    page.clamp(1, total)
}

/// Half-open index range [start, end) of the visible page slice
pub fn page_bounds(count: usize, page: usize, page_size: usize) -> (usize, usize) {
    let page = clamp_page(page, total_pages(count, page_size));
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(count);
    (start.min(count), end)
}

/// Human-readable "showing X-Y of Z" line for the page header
pub fn showing_text(count: usize, page: usize, page_size: usize) -> String {
    if count == 0 {
        return String::from("Menampilkan 0 produk");
    }
    let (start, end) = page_bounds(count, page, page_size);
    format!("Menampilkan {}-{} dari {} produk", start + 1, end, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str, category: &str) -> Product {
        Product {
            id,
            title: title.into(),
            price: 10.0,
            description: format!("deskripsi {id}"),
            category: category.into(),
            image: String::new(),
            rating: None,
        }
    }

    fn catalog_of(n: usize) -> Vec<Product> {
        (1..=n as u64)
            .map(|id| product(id, &format!("Produk {id}"), "umum"))
            .collect()
    }

    #[test]
    fn empty_query_selects_all() {
        let products = catalog_of(10);
        assert_eq!(filter(&products, "").len(), 10);
        assert_eq!(filter(&products, "   ").len(), 10);
    }

    #[test]
    fn query_matches_title_or_category_case_insensitive() {
        let products = vec![
            product(1, "Kemeja Pria", "pakaian"),
            product(2, "Gaun", "pakaian WANITA"),
            product(3, "Tas Ransel", "aksesoris"),
        ];

        let pria = filter(&products, "PRIA");
        assert_eq!(pria.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);

        let wanita = filter(&products, "wanita");
        assert_eq!(wanita.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);

        assert!(filter(&products, "sepatu").is_empty());
    }

    #[test]
    fn filter_is_idempotent_and_order_preserving() {
        let products = vec![
            product(3, "Celana pria", "pakaian"),
            product(1, "Jam pria", "aksesoris"),
            product(2, "Gaun", "pakaian"),
        ];

        let once: Vec<u64> = filter(&products, "pria").iter().map(|p| p.id).collect();
        let twice: Vec<u64> = {
            let kept: Vec<Product> = filter(&products, "pria").into_iter().cloned().collect();
            filter(&kept, "pria").iter().map(|p| p.id).collect()
        };

        // Relative source order kept, and re-filtering changes nothing
        assert_eq!(once, vec![3, 1]);
        assert_eq!(once, twice);
    }

    #[test]
    fn total_pages_formula() {
        assert_eq!(total_pages(0, 8), 1);
        assert_eq!(total_pages(1, 8), 1);
        assert_eq!(total_pages(8, 8), 1);
        assert_eq!(total_pages(9, 8), 2);
        assert_eq!(total_pages(10, 8), 2);
        assert_eq!(total_pages(16, 4), 4);
    }

    #[test]
    fn page_is_clamped_into_range() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(5, 3), 3);
        assert_eq!(clamp_page(2, 3), 2);
        // Degenerate totals always land on page 1
        assert_eq!(clamp_page(7, 1), 1);
        assert_eq!(clamp_page(0, 0), 1);
    }

    #[test]
    fn visible_page_is_bounded_slice_in_order() {
        let products = catalog_of(10);
        let filtered = filter(&products, "");

        let (start, end) = page_bounds(filtered.len(), 1, 8);
        assert_eq!((start, end), (0, 8));
        let page: Vec<u64> = filtered[start..end].iter().map(|p| p.id).collect();
        assert_eq!(page, (1..=8).collect::<Vec<_>>());

        let (start, end) = page_bounds(filtered.len(), 2, 8);
        assert_eq!((start, end), (8, 10));
        assert!(end - start <= 8);
    }

    #[test]
    fn ten_products_page_size_eight_scenario() {
        let products = catalog_of(10);
        let count = filter(&products, "").len();

        assert_eq!(total_pages(count, 8), 2);
        assert_eq!(showing_text(count, 1, 8), "Menampilkan 1-8 dari 10 produk");
        assert_eq!(showing_text(count, 2, 8), "Menampilkan 9-10 dari 10 produk");
    }

    #[test]
    fn zero_matches_shows_empty_text_and_one_page() {
        assert_eq!(showing_text(0, 1, 8), "Menampilkan 0 produk");
        assert_eq!(total_pages(0, 8), 1);
    }
}
