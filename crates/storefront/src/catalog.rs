//! Compiled-in product catalog.
//!
//! The catalog is a fixed, read-only table. Browsing supports a category
//! filter and 1-based pagination.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use shopfront_core::{Product, ProductId};

/// Category filter value meaning "no filter".
pub const ALL_CATEGORIES: &str = "All";

/// Category chips, in display order.
pub const CATEGORIES: [&str; 5] = [
    ALL_CATEGORIES,
    "Clothing",
    "Ornaments",
    "Home Decor",
    "Furnishing",
];

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog::new(builtin_products()));

/// A read-only product table.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

/// One page of a filtered product listing.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage<'a> {
    pub items: Vec<&'a Product>,
    /// Requested page, 1-based.
    pub page: usize,
    pub total_pages: usize,
    /// Number of products matching the filter, across all pages.
    pub total_items: usize,
}

impl Catalog {
    /// Build a catalog over `products`.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in storefront catalog.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products in `category`; [`ALL_CATEGORIES`] returns everything.
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| category == ALL_CATEGORIES || p.category == category)
            .collect()
    }

    /// One page of the products in `category`.
    ///
    /// Pages past the end (and page 0) are empty. A `page_size` of 0 is
    /// treated as 1.
    #[must_use]
    pub fn page(&self, category: &str, page: usize, page_size: usize) -> CatalogPage<'_> {
        let filtered = self.by_category(category);
        let page_size = page_size.max(1);
        let total_items = filtered.len();
        let total_pages = total_items.div_ceil(page_size);

        let items = if page == 0 {
            Vec::new()
        } else {
            filtered
                .into_iter()
                .skip((page - 1).saturating_mul(page_size))
                .take(page_size)
                .collect()
        };

        CatalogPage {
            items,
            page,
            total_pages,
            total_items,
        }
    }
}

fn builtin_products() -> Vec<Product> {
    const CLOTHING: &str =
        "https://images.unsplash.com/photo-1483985988355-763728e1935b?q=80&w=800&auto=format&fit=crop";
    const ORNAMENTS: &str =
        "https://images.unsplash.com/photo-1611591437281-460bfbe1220a?q=80&w=800&auto=format&fit=crop";
    const HOME_DECOR: &str =
        "https://images.unsplash.com/photo-1616486338812-3dadae4b4ace?q=80&w=800&auto=format&fit=crop";
    const FURNISHING: &str =
        "https://images.unsplash.com/photo-1555041469-a586c61ea9bc?q=80&w=800&auto=format&fit=crop";

    vec![
        entry(
            "product-1",
            "Clothing Product 1",
            999,
            CLOTHING,
            "Clothing",
            (4.5, 120),
            "Beautiful clothing item for your wardrobe.",
            &["clothing", "fashion", "trendy", "casual"],
        ),
        entry(
            "product-2",
            "Ornaments Product 1",
            499,
            ORNAMENTS,
            "Ornaments",
            (4.2, 85),
            "Elegant ornament to enhance your space.",
            &["ornaments", "decor", "home", "elegant"],
        ),
        entry(
            "product-3",
            "Home Decor Product 1",
            799,
            HOME_DECOR,
            "Home Decor",
            (4.7, 150),
            "Stylish home decor piece for your living space.",
            &["home decor", "interior", "modern", "stylish"],
        ),
        entry(
            "product-4",
            "Furnishing Product 1",
            1299,
            FURNISHING,
            "Furnishing",
            (4.3, 95),
            "Comfortable furnishing for your home.",
            &["furnishing", "furniture", "comfort", "home"],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    name: &str,
    price: i64,
    image: &str,
    category: &str,
    (rating, reviews): (f64, u32),
    description: &str,
    tags: &[&str],
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Decimal::from(price),
        image: image.to_string(),
        images: vec![image.to_string(); 3],
        category: category.to_string(),
        rating,
        reviews,
        description: description.to_string(),
        tags: tags.iter().map(ToString::to_string).collect(),
    }
}
