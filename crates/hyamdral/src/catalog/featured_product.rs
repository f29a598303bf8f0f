// Hyamdral
// Copyright (C) 2025 Hyamdral.mn

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use hyamdral_common::error::{HyamdralError, Result};
use hyamdral_store::{ContentStore, collection, paths};
use serde::{Deserialize, Serialize};

use crate::data::lenient_i64;

/// A gallery never holds more than six images.
pub const MAX_GALLERY_IMAGES: usize = 6;

/// Spotlighted product on the featured page. Standalone: carries no
/// category link, but does carry a gallery and fulfilment details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedProduct {
    #[serde(skip_serializing, default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub store: String,
    #[serde(default)]
    pub original_price: String,
    #[serde(default)]
    pub price: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub discount: i64,
    #[serde(default)]
    pub main_image: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub warranty: String,
    #[serde(default)]
    pub delivery: String,
    #[serde(default)]
    pub description: String,
}

impl FeaturedProduct {
    /// Appends a gallery image, refusing the seventh.
    pub fn add_gallery_image(&mut self, data_uri: String) -> Result<()> {
        if self.gallery.len() >= MAX_GALLERY_IMAGES {
            return Err(HyamdralError::Validation(
                "Дээд тал нь 6 зураг оруулах боломжтой.".to_owned(),
            ));
        }
        self.gallery.push(data_uri);
        Ok(())
    }

    pub fn remove_gallery_image(&mut self, index: usize) {
        if index < self.gallery.len() {
            self.gallery.remove(index);
        }
    }
}

pub async fn create(product: &FeaturedProduct, store: &ContentStore) -> Result<String> {
    let key = store
        .push(paths::FEATURED_PRODUCTS, serde_json::to_value(product)?)
        .await?;
    Ok(key)
}

pub async fn save(id: &str, product: &FeaturedProduct, store: &ContentStore) -> Result<()> {
    let path = paths::child(paths::FEATURED_PRODUCTS, id);
    store.set(&path, serde_json::to_value(product)?).await?;
    Ok(())
}

pub async fn list(store: &ContentStore) -> Result<Vec<FeaturedProduct>> {
    let node = store.snapshot(paths::FEATURED_PRODUCTS).await?;
    Ok(collection::normalize(node.as_ref()))
}

pub async fn delete_by_id(id: &str, store: &ContentStore) -> Result<()> {
    store
        .remove(&paths::child(paths::FEATURED_PRODUCTS, id))
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_seventh_gallery_image_is_refused() {
        let mut product = FeaturedProduct::default();
        for i in 0..MAX_GALLERY_IMAGES {
            product.add_gallery_image(format!("data:image/png;base64,{i}")).unwrap();
        }
        let err = product
            .add_gallery_image("data:image/png;base64,7".to_owned())
            .unwrap_err();
        assert!(matches!(err, HyamdralError::Validation(_)));
        assert_eq!(product.gallery.len(), MAX_GALLERY_IMAGES);
        // The first six are untouched.
        assert_eq!(product.gallery[0], "data:image/png;base64,0");
    }

    #[test]
    fn removing_out_of_range_indices_is_a_no_op() {
        let mut product = FeaturedProduct::default();
        product.add_gallery_image("a".to_owned()).unwrap();
        product.remove_gallery_image(5);
        assert_eq!(product.gallery.len(), 1);
        product.remove_gallery_image(0);
        assert!(product.gallery.is_empty());
    }
}
