use hyamdral_common::error::Result;
use hyamdral_store::{ContentStore, collection, paths};

use crate::catalog::best_seller::BestSellerItem;
use crate::catalog::flash_sale::FlashSale;
use crate::catalog::hero::HeroSlide;
use crate::catalog::partner::PartnerStore;

/// Everything the home page renders. Hero slides are pre-filtered to the
/// active ones; the other collections pass through as stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeView {
    pub hero: Vec<HeroSlide>,
    pub best_sellers: Vec<BestSellerItem>,
    pub partners: Vec<PartnerStore>,
    pub flash_sales: Vec<FlashSale>,
}

impl HomeView {
    pub async fn load(store: &ContentStore) -> Result<Self> {
        let hero = store.snapshot(paths::HOME_HERO).await?;
        let best_sellers = store.snapshot(paths::HOME_BEST_SELLERS).await?;
        let partners = store.snapshot(paths::HOME_PARTNERS).await?;
        let flash_sales = store.snapshot(paths::HOME_FLASH_SALES).await?;

        let hero = collection::normalize::<HeroSlide>(hero.as_ref())
            .into_iter()
            .filter(|slide| slide.is_active)
            .collect();

        Ok(Self {
            hero,
            best_sellers: collection::normalize(best_sellers.as_ref()),
            partners: collection::normalize(partners.as_ref()),
            flash_sales: collection::normalize(flash_sales.as_ref()),
        })
    }
}
