use hyamdral_common::error::Result;
use hyamdral_store::{ContentStore, collection, paths};

use crate::catalog::featured_banner::FeaturedPanelBanner;
use crate::catalog::featured_product::FeaturedProduct;
use crate::filter::{PriceRange, SortKey, parse_price, sort_by_price};

/// Filter panel state for the featured page. All active criteria combine
/// with AND semantics; an empty store list means no store filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub stores: Vec<String>,
    pub price: PriceRange,
    pub min_discount: i64,
    pub sort: SortKey,
}

impl ProductQuery {
    /// Returns the matching products as a new, sorted list; the source
    /// list is untouched.
    pub fn apply(&self, products: &[FeaturedProduct]) -> Vec<FeaturedProduct> {
        let mut result: Vec<FeaturedProduct> = products
            .iter()
            .filter(|p| self.stores.is_empty() || self.stores.contains(&p.store))
            .filter(|p| self.price.contains(parse_price(&p.price)))
            .filter(|p| self.min_discount <= 0 || p.discount >= self.min_discount)
            .cloned()
            .collect();
        sort_by_price(&mut result, self.sort, |p| parse_price(&p.price));
        result
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeaturedPage {
    pub banners: Vec<FeaturedPanelBanner>,
    pub products: Vec<FeaturedProduct>,
    /// Store names offered by the filter panel: every distinct store in
    /// arrival order.
    pub store_names: Vec<String>,
}

impl FeaturedPage {
    pub async fn load(store: &ContentStore) -> Result<Self> {
        let banners = store.snapshot(paths::FEATURED_PANEL).await?;
        let products = store.snapshot(paths::FEATURED_PRODUCTS).await?;

        let banners = collection::normalize::<FeaturedPanelBanner>(banners.as_ref())
            .into_iter()
            .filter(|banner| banner.is_active)
            .collect();
        let products: Vec<FeaturedProduct> = collection::normalize(products.as_ref());

        let mut store_names: Vec<String> = Vec::new();
        for product in &products {
            if !store_names.contains(&product.store) {
                store_names.push(product.store.clone());
            }
        }

        Ok(Self {
            banners,
            products,
            store_names,
        })
    }

    pub fn display(&self, query: &ProductQuery) -> Vec<FeaturedProduct> {
        query.apply(&self.products)
    }
}
