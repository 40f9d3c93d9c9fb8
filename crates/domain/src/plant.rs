//! Plant — the sole stored entity, plus the values used to create and patch it.

use serde::Serialize;

use crate::id::PlantId;

/// A plant offered by the store.
///
/// `name` is expected on creation but is not enforced: a missing name is
/// stored as null.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plant {
    pub id: PlantId,
    pub name: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub is_in_stock: bool,
}

impl Plant {
    /// Combine a store-allocated id with the creation values.
    #[must_use]
    pub fn from_new(id: PlantId, new: NewPlant) -> Self {
        Self {
            id,
            name: new.name,
            image: new.image,
            price: new.price,
            is_in_stock: new.is_in_stock,
        }
    }

    /// Overwrite the fields present in `patch`, leaving the others untouched.
    pub fn apply(&mut self, patch: PlantPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(is_in_stock) = patch.is_in_stock {
            self.is_in_stock = is_in_stock;
        }
    }
}

/// Values for a plant that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlant {
    pub name: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub is_in_stock: bool,
}

impl NewPlant {
    /// Create a builder for constructing a [`NewPlant`].
    #[must_use]
    pub fn builder() -> NewPlantBuilder {
        NewPlantBuilder::default()
    }
}

/// Step-by-step builder for [`NewPlant`].
///
/// `is_in_stock` defaults to `true` when never set.
#[derive(Debug, Default)]
pub struct NewPlantBuilder {
    name: Option<String>,
    image: Option<String>,
    price: Option<f64>,
    is_in_stock: Option<bool>,
}

impl NewPlantBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn is_in_stock(mut self, is_in_stock: bool) -> Self {
        self.is_in_stock = Some(is_in_stock);
        self
    }

    /// Consume the builder and return a [`NewPlant`] with defaults applied.
    #[must_use]
    pub fn build(self) -> NewPlant {
        NewPlant {
            name: self.name,
            image: self.image,
            price: self.price,
            is_in_stock: self.is_in_stock.unwrap_or(true),
        }
    }
}

/// A partial update of a [`Plant`].
///
/// For the nullable fields the outer `Option` says whether the field is
/// present, the inner one carries the new value (possibly null).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlantPatch {
    pub name: Option<Option<String>>,
    pub image: Option<Option<String>>,
    pub price: Option<Option<f64>>,
    pub is_in_stock: Option<bool>,
}

impl PlantPatch {
    /// `true` when the patch would not change anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.image.is_none()
            && self.price.is_none()
            && self.is_in_stock.is_none()
    }
}
