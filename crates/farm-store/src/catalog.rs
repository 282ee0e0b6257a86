//! # Catalog Feed
//!
//! The read-only product data source backing the shop pages.
//!
//! ## How a Query Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  ProductQuery { search: "org", category: vegetables, sort, page }   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  filter: search → category → price range → organic → season         │
//! │          → rating → tags                                            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  sort: name | price-low | price-high | rating | popularity          │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  paginate → Page { items, total, page, per_page, total_pages }      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is fixture data loaded at startup; nothing ever mutates it.
//! The cart freezes prices on add, so a catalog reload cannot change what a
//! customer is charged mid-session.

use farm_core::types::{Category, Product, Season};
use farm_core::Money;
use serde::{Deserialize, Serialize};

// =============================================================================
// Query Types
// =============================================================================

/// Sort order for catalog queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Alphabetical by name (the shop page default).
    #[default]
    Name,
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
    /// Best rated first.
    Rating,
    /// Most popular first.
    Popularity,
}

/// Filter and paging parameters for a catalog query. All filters are
/// optional; the default query returns the whole catalog, name-sorted,
/// first page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductQuery {
    /// Case-insensitive text search over name, description and tags.
    pub search: Option<String>,

    /// Restrict to one category.
    pub category: Option<Category>,

    /// Inclusive lower price bound.
    pub min_price: Option<Money>,

    /// Inclusive upper price bound.
    pub max_price: Option<Money>,

    /// Only certified-organic products.
    pub organic_only: bool,

    /// Restrict to one season (`Season::All` products always match).
    pub seasonal: Option<Season>,

    /// Minimum average rating.
    pub min_rating: Option<f64>,

    /// Keep products matching at least one of these tags.
    pub tags: Vec<String>,

    /// Sort order.
    pub sort: SortKey,

    /// 1-based page number.
    pub page: usize,

    /// Page size.
    pub per_page: usize,
}

impl Default for ProductQuery {
    fn default() -> Self {
        ProductQuery {
            search: None,
            category: None,
            min_price: None,
            max_price: None,
            organic_only: false,
            seasonal: None,
            min_rating: None,
            tags: Vec::new(),
            sort: SortKey::Name,
            page: 1,
            per_page: 12,
        }
    }
}

/// One page of query results, with enough totals for pagination controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub items: Vec<Product>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
}

// =============================================================================
// Catalog
// =============================================================================

/// In-memory, read-only product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog from a fixed product list.
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// The demo fixture set used by the storefront (and the tests).
    pub fn demo() -> Self {
        Catalog::new(demo_products())
    }

    /// Number of products in the feed.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the feed holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products, catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks a product up by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Runs the full filter/sort/paginate pipeline.
    pub fn query(&self, query: &ProductQuery) -> Page {
        let mut matches: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| Self::matches(p, query))
            .collect();

        sort_products(&mut matches, query.sort);

        let total = matches.len();
        let per_page = query.per_page.max(1);
        let total_pages = total.div_ceil(per_page).max(1);
        let page = query.page.clamp(1, total_pages);

        let items = matches
            .into_iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .cloned()
            .collect();

        Page {
            items,
            total,
            page,
            per_page,
            total_pages,
        }
    }

    /// "You might also like" picks: most popular products first, excluding
    /// ids already in the cart.
    pub fn suggestions(&self, exclude: &[String], limit: usize) -> Vec<Product> {
        let mut picks: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| !exclude.iter().any(|id| *id == p.id))
            .collect();

        picks.sort_by(|a, b| b.popularity.cmp(&a.popularity));
        picks.into_iter().take(limit).cloned().collect()
    }

    fn matches(product: &Product, query: &ProductQuery) -> bool {
        if let Some(search) = &query.search {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty() {
                let in_name = product.name.to_lowercase().contains(&needle);
                let in_description = product
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle));
                let in_tags = product
                    .tags
                    .iter()
                    .any(|t| t.to_lowercase().contains(&needle));
                if !(in_name || in_description || in_tags) {
                    return false;
                }
            }
        }

        if let Some(category) = query.category {
            if product.category != category {
                return false;
            }
        }

        if let Some(min) = query.min_price {
            if product.price() < min {
                return false;
            }
        }
        if let Some(max) = query.max_price {
            if product.price() > max {
                return false;
            }
        }

        if query.organic_only && !product.organic {
            return false;
        }

        if let Some(season) = query.seasonal {
            // Year-round products match every seasonal filter.
            if product.seasonal != season && product.seasonal != Season::All {
                return false;
            }
        }

        if let Some(min_rating) = query.min_rating {
            if product.rating < min_rating {
                return false;
            }
        }

        if !query.tags.is_empty() {
            let any_tag = query.tags.iter().any(|wanted| {
                product
                    .tags
                    .iter()
                    .any(|t| t.eq_ignore_ascii_case(wanted))
            });
            if !any_tag {
                return false;
            }
        }

        true
    }
}

fn sort_products(products: &mut [&Product], sort: SortKey) {
    match sort {
        SortKey::Name => {
            products.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        SortKey::PriceLow => products.sort_by_key(|p| p.price_cents),
        SortKey::PriceHigh => products.sort_by_key(|p| std::cmp::Reverse(p.price_cents)),
        SortKey::Rating => {
            products.sort_by(|a, b| {
                b.rating
                    .partial_cmp(&a.rating)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
        SortKey::Popularity => products.sort_by_key(|p| std::cmp::Reverse(p.popularity)),
    }
}

// =============================================================================
// Demo Fixtures
// =============================================================================

fn fixture(
    id: &str,
    name: &str,
    category: Category,
    price_cents: i64,
    original_price_cents: Option<i64>,
    unit: &str,
    seasonal: Season,
    rating: f64,
    review_count: i64,
    stock: i64,
    tags: &[&str],
    popularity: i64,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        category,
        price_cents,
        original_price_cents,
        unit: Some(unit.to_string()),
        image: Some(format!("/images/products/{id}.jpg")),
        organic: true,
        seasonal,
        rating,
        review_count,
        stock: Some(stock),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        popularity,
    }
}

/// The storefront's mock product data.
fn demo_products() -> Vec<Product> {
    vec![
        fixture(
            "tomatoes",
            "Organic Heirloom Tomatoes",
            Category::Vegetables,
            499,
            Some(699),
            "lb",
            Season::Summer,
            4.7,
            128,
            25,
            &["organic", "heirloom", "summer", "fresh"],
            95,
        ),
        fixture(
            "carrots",
            "Fresh Organic Carrots",
            Category::Vegetables,
            349,
            None,
            "bunch",
            Season::All,
            4.5,
            89,
            50,
            &["organic", "root", "sweet", "crunchy"],
            87,
        ),
        fixture(
            "eggs",
            "Organic Free-Range Eggs",
            Category::Dairy,
            699,
            Some(799),
            "dozen",
            Season::All,
            4.9,
            203,
            12,
            &["organic", "free-range", "protein", "fresh"],
            92,
        ),
        fixture(
            "honey",
            "Organic Honey",
            Category::Other,
            1299,
            None,
            "jar",
            Season::All,
            4.8,
            156,
            18,
            &["organic", "raw", "sweet", "natural"],
            88,
        ),
        fixture(
            "basil",
            "Fresh Organic Basil",
            Category::Herbs,
            349,
            None,
            "bunch",
            Season::Summer,
            4.6,
            54,
            30,
            &["organic", "herb", "aromatic"],
            70,
        ),
        fixture(
            "strawberries",
            "Organic Strawberries",
            Category::Fruits,
            599,
            Some(749),
            "pint",
            Season::Summer,
            4.8,
            77,
            20,
            &["organic", "berry", "sweet", "summer"],
            90,
        ),
        fixture(
            "potatoes",
            "Organic Potatoes",
            Category::Vegetables,
            499,
            None,
            "lb",
            Season::Fall,
            4.4,
            66,
            40,
            &["organic", "root", "staple"],
            75,
        ),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
