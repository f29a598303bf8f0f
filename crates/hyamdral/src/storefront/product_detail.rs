use hyamdral_common::error::Result;
use hyamdral_store::{ContentStore, paths};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::data::lenient_i64;

const DEFAULT_RATING: f64 = 5.0;
const DEFAULT_DESCRIPTION: &str = "Тайлбар байхгүй.";
const DEFAULT_STORE: &str = "Hyamdral.mn";

/// Normalized detail view. The three probed collections store their
/// images and discounts under different field names; this view smooths
/// them into one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub id: String,
    pub name: String,
    pub store: String,
    pub image: Option<String>,
    pub gallery: Vec<String>,
    pub rating: f64,
    pub price: String,
    pub original_price: Option<String>,
    pub discount: i64,
    pub description: String,
}

/// Raw record shape across featured products, best sellers and flash
/// sales. Everything is optional; normalization picks what is present.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDetail {
    #[serde(default)]
    name: String,
    #[serde(default)]
    store: String,
    #[serde(default)]
    main_image: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    product_image: String,
    #[serde(default)]
    gallery: Option<Vec<String>>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    discount: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    discount_percent: i64,
    #[serde(default)]
    price: String,
    #[serde(default)]
    original_price: String,
    #[serde(default)]
    description: String,
}

/// Looks a product up by id across the detail-capable collections, in
/// order: featured products, best sellers, flash sales. Regular catalog
/// products are not part of the chain; their ids resolve to `None`.
pub async fn find_product(id: &str, store: &ContentStore) -> Result<Option<ProductDetail>> {
    for collection in [
        paths::FEATURED_PRODUCTS,
        paths::HOME_BEST_SELLERS,
        paths::HOME_FLASH_SALES,
    ] {
        let node = store.snapshot(&paths::child(collection, id)).await?;
        if let Some(value) = node {
            debug!(id, collection, "product detail hit");
            return Ok(Some(normalize(id, value)));
        }
    }
    Ok(None)
}

fn normalize(id: &str, value: Value) -> ProductDetail {
    let raw: RawDetail = serde_json::from_value(value).unwrap_or_default();

    let image = [&raw.main_image, &raw.image, &raw.product_image]
        .into_iter()
        .find(|candidate| !candidate.is_empty())
        .cloned();
    let gallery = match raw.gallery {
        Some(gallery) => gallery,
        None => image.iter().cloned().collect(),
    };
    let discount = if raw.discount != 0 {
        raw.discount
    } else {
        raw.discount_percent
    };

    ProductDetail {
        id: id.to_owned(),
        name: raw.name,
        store: non_empty_or(raw.store, DEFAULT_STORE),
        image,
        gallery,
        rating: raw.rating.filter(|r| *r != 0.0).unwrap_or(DEFAULT_RATING),
        price: raw.price,
        original_price: (!raw.original_price.is_empty()).then_some(raw.original_price),
        discount,
        description: non_empty_or(raw.description, DEFAULT_DESCRIPTION),
    }
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_owned()
    } else {
        value
    }
}
