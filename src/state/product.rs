/// Product data model
///
/// These structs mirror the remote collection's record shape and the
/// client-side editable forms derived from it:
/// - Product: the canonical remote record (server-owned id and rating)
/// - ProductDraft: the submittable shape (no id, no rating)
/// - ProductPatch: a partial record as echoed by the update endpoint
/// - DraftForm: raw form field state, validated before submission

use serde::{Deserialize, Serialize};

/// Read-only rating aggregate, never mutated by the client
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

/// A single product record as owned by the remote collection
///
/// `rating` is optional because the create/update endpoints echo records
/// without one; the UI renders a dash in that case.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub rating: Option<Rating>,
}

/// The editable subset of a product, used as the create request body
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
}

/// A partial product as returned by the update endpoint
///
/// The remote service echoes only the fields it received, so every field
/// is optional here. Merging applies present fields over the existing
/// record and leaves the rest (notably `rating`) untouched.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub rating: Option<Rating>,
}

impl ProductPatch {
    /// Apply this patch over an existing record, field by field.
    /// Fields absent from the patch keep their current value.
    pub fn merge_into(&self, product: &mut Product) {
        if let Some(title) = &self.title {
            product.title = title.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(category) = &self.category {
            product.category = category.clone();
        }
        if let Some(image) = &self.image {
            product.image = image.clone();
        }
        if let Some(rating) = self.rating {
            product.rating = Some(rating);
        }
    }
}

/// Field edits emitted by the product form widgets
#[derive(Debug, Clone)]
pub enum DraftEvent {
    TitleChanged(String),
    PriceChanged(String),
    CategoryChanged(String),
    DescriptionChanged(String),
    ImageChanged(String),
}

/// Raw form state backing both the add modal and the detail editor
///
/// The price is kept as entered text until submission so the user can
/// type freely; validation parses it.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftForm {
    pub title: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl Default for DraftForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            price: String::from("0.1"),
            description: String::new(),
            category: String::new(),
            image: String::new(),
        }
    }
}

impl DraftForm {
    /// Seed a form from an existing record (entering edit mode)
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
        }
    }

    pub fn apply(&mut self, event: DraftEvent) {
        match event {
            DraftEvent::TitleChanged(v) => self.title = v,
            DraftEvent::PriceChanged(v) => self.price = v,
            DraftEvent::CategoryChanged(v) => self.category = v,
            DraftEvent::DescriptionChanged(v) => self.description = v,
            DraftEvent::ImageChanged(v) => self.image = v,
        }
    }

    /// Parse the price field, accepting only strictly positive values
    pub fn parsed_price(&self) -> Option<f64> {
        self.price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p > 0.0)
    }

    /// Submission precondition: title, description, category non-empty
    /// after trimming and price > 0
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.description.trim().is_empty()
            && !self.category.trim().is_empty()
            && self.parsed_price().is_some()
    }

    /// Convert to a submittable draft, or None while invalid
    pub fn to_draft(&self) -> Option<ProductDraft> {
        let price = self.parsed_price()?;
        if !self.is_valid() {
            return None;
        }
        Some(ProductDraft {
            title: self.title.clone(),
            price,
            description: self.description.clone(),
            category: self.category.clone(),
            image: self.image.clone(),
        })
    }
}
