use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult, Entity, ProductId};

/// Message returned when a create candidate is missing a required field.
pub const MISSING_FIELDS_MESSAGE: &str = "please provide all fields";

/// A persisted product document (shape returned by every product endpoint).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Build a fresh document from a validated draft.
    ///
    /// Used by document stores; `created_at` and `updated_at` start out equal.
    pub fn from_draft(id: ProductId, draft: ProductDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            image: draft.image,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update in place.
    ///
    /// The identifier and creation time never change; `updated_at` always moves to
    /// `now` (even for an empty patch), but never backwards.
    pub fn apply_patch(&mut self, patch: &ProductPatch, now: DateTime<Utc>) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(image) = &patch.image {
            self.image = image.clone();
        }
        self.updated_at = now.max(self.updated_at);
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Create candidate as received from a request body.
///
/// Every field is optional on the wire; `validate` decides whether the candidate
/// can be persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price: f64, image: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
            image: Some(image.into()),
        }
    }

    /// Names of the required fields that are absent or empty.
    ///
    /// Presence is truthiness: an empty string is missing, and so is a price of
    /// exactly zero. Negative prices count as present.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.as_deref().is_none_or(str::is_empty) {
            missing.push("name");
        }
        if !self.price.is_some_and(price_is_present) {
            missing.push("price");
        }
        if self.image.as_deref().is_none_or(str::is_empty) {
            missing.push("image");
        }
        missing
    }

    /// Validate presence of name, price and image and produce a storable draft.
    pub fn validate(self) -> DomainResult<ProductDraft> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(DomainError::validation(format!(
                "{MISSING_FIELDS_MESSAGE} (missing: {})",
                missing.join(", ")
            )));
        }

        match (self.name, self.price, self.image) {
            (Some(name), Some(price), Some(image)) => Ok(ProductDraft { name, price, image }),
            _ => Err(DomainError::validation(MISSING_FIELDS_MESSAGE)),
        }
    }
}

fn price_is_present(price: f64) -> bool {
    price != 0.0 && !price.is_nan()
}

/// A create candidate that passed presence validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub image: String,
}

/// Partial update body.
///
/// Absent and `null` fields are left unchanged. No presence validation is
/// applied, so an empty `name` or `image` is stored as given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ProductPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.image.is_none()
    }
}
