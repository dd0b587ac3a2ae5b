//! Catalog browsing: in-memory filtering and sorting of the product list.
//!
//! The whole catalog is small enough to filter client-side; these helpers
//! operate on an already-fetched list and never touch the backing store.

use serde::Deserialize;

use crate::models::Product;

/// Sentinel category meaning "no category filter".
const ALL_CATEGORIES: &str = "All";

/// Filter criteria for the product list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductFilter {
    /// Category label; `None` or `"All"` matches everything.
    pub category: Option<String>,
    /// Case-insensitive free-text match over name, category, and
    /// description.
    pub query: Option<String>,
}

impl ProductFilter {
    fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category
            && category != ALL_CATEGORIES
            && product.category != *category
        {
            return false;
        }

        if let Some(query) = &self.query {
            let needle = query.to_lowercase();
            if !needle.is_empty() {
                let haystacks = [&product.name, &product.category, &product.description];
                if !haystacks
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
                {
                    return false;
                }
            }
        }

        true
    }
}

/// Sort order for the product list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Catalog order (ascending by id).
    #[default]
    Default,
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
}

impl SortOrder {
    /// Parse the query-string form (`"price-low"`, `"price-high"`);
    /// anything else is the default order.
    #[must_use]
    pub fn from_param(param: &str) -> Self {
        match param {
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            _ => Self::Default,
        }
    }
}

/// Filter and sort a product list.
#[must_use]
pub fn browse(products: &[Product], filter: &ProductFilter, sort: SortOrder) -> Vec<Product> {
    let mut result: Vec<Product> = products
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect();

    match sort {
        SortOrder::Default => {}
        SortOrder::PriceLow => result.sort_by_key(|p| p.price.amount()),
        SortOrder::PriceHigh => {
            result.sort_by_key(|p| std::cmp::Reverse(p.price.amount()));
        }
    }

    result
}

/// Distinct category labels in first-seen order.
#[must_use]
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for product in products {
        if !labels.contains(&product.category) {
            labels.push(product.category.clone());
        }
    }
    labels
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::local::seed::sample_products;

    #[test]
    fn test_category_filter() {
        let products = sample_products();
        let filter = ProductFilter {
            category: Some("Sports".to_owned()),
            query: None,
        };
        let result = browse(&products, &filter, SortOrder::Default);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|p| p.category == "Sports"));
    }

    #[test]
    fn test_all_category_matches_everything() {
        let products = sample_products();
        let filter = ProductFilter {
            category: Some("All".to_owned()),
            query: None,
        };
        assert_eq!(
            browse(&products, &filter, SortOrder::Default).len(),
            products.len()
        );
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let products = sample_products();
        let filter = ProductFilter {
            category: None,
            query: Some("JODHPUR".to_owned()),
        };
        let result = browse(&products, &filter, SortOrder::Default);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Classic Jodhpur Boots");
    }

    #[test]
    fn test_query_searches_description() {
        let products = sample_products();
        let filter = ProductFilter {
            category: None,
            query: Some("cushioning".to_owned()),
        };
        assert_eq!(browse(&products, &filter, SortOrder::Default).len(), 1);
    }

    #[test]
    fn test_price_sorts() {
        let products = sample_products();
        let low = browse(&products, &ProductFilter::default(), SortOrder::PriceLow);
        assert_eq!(low[0].name, "Suede Casual Loafers");

        let high = browse(&products, &ProductFilter::default(), SortOrder::PriceHigh);
        assert_eq!(high[0].name, "Wedding Sherwani Shoes");
    }

    #[test]
    fn test_categories_are_distinct_in_first_seen_order() {
        let products = sample_products();
        assert_eq!(
            categories(&products),
            vec!["Boots", "Ethnic", "Sneakers", "Formal", "Sports", "Casual"]
        );
    }

    #[test]
    fn test_sort_param_parsing() {
        assert_eq!(SortOrder::from_param("price-low"), SortOrder::PriceLow);
        assert_eq!(SortOrder::from_param("price-high"), SortOrder::PriceHigh);
        assert_eq!(SortOrder::from_param("default"), SortOrder::Default);
        assert_eq!(SortOrder::from_param("garbage"), SortOrder::Default);
    }
}
