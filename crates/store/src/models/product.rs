//! Product record.

use meteor_core::{Price, ProductId};
use serde::{Deserialize, Serialize};

use crate::record::Record;

/// A catalog product.
///
/// `category` is free text at this layer; only input surfaces restrict it
/// to the fixed label set in [`meteor_core::CATEGORIES`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique id, assigned by the backing store.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Non-negative price.
    pub price: Price,
    /// Category label.
    pub category: String,
    /// Image URI.
    pub image: String,
    /// Long-form description.
    pub description: String,
}

/// Create payload for a product. No id field - the store assigns one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: Price,
    pub category: String,
    pub image: String,
    pub description: String,
}

/// Partial update for a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Record for Product {
    type Id = ProductId;
    type Draft = NewProduct;
    type Patch = ProductPatch;

    const TABLE: &'static str = "products";
    const STORAGE_KEY: &'static str = "meteor_products_v3";
    const ENTITY: &'static str = "product";

    fn id(&self) -> ProductId {
        self.id
    }

    fn from_draft(draft: NewProduct, id: ProductId) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            category: draft.category,
            image: draft.image,
            description: draft.description,
        }
    }

    fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn sample() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Classic Jodhpur Boots".to_owned(),
            price: Price::new(Decimal::new(4500_00, 2)).unwrap(),
            category: "Boots".to_owned(),
            image: "https://example.com/boots.jpg".to_owned(),
            description: "Handcrafted Jodhpur boots.".to_owned(),
        }
    }

    #[test]
    fn test_apply_merges_only_present_fields() {
        let mut product = sample();
        product.apply(ProductPatch {
            price: Some(Price::new(Decimal::new(3999_00, 2)).unwrap()),
            ..ProductPatch::default()
        });

        assert_eq!(product.price.amount(), Decimal::new(3999_00, 2));
        assert_eq!(product.name, "Classic Jodhpur Boots");
        assert_eq!(product.category, "Boots");
    }

    #[test]
    fn test_patch_skips_none_on_the_wire() {
        let patch = ProductPatch {
            name: Some("Renamed".to_owned()),
            ..ProductPatch::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_from_draft_assigns_id() {
        let draft = NewProduct {
            name: "New".to_owned(),
            price: Price::zero(),
            category: "Casual".to_owned(),
            image: String::new(),
            description: String::new(),
        };
        let product = Product::from_draft(draft, ProductId::new(99));
        assert_eq!(product.id, ProductId::new(99));
    }
}
