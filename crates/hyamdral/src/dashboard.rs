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

//! Admin dashboard aggregation. Four collections feed the dashboard —
//! regular products, the stores tree, partner stores and best sellers —
//! each through its own subscription, with no atomic cross-collection
//! snapshot. The aggregator is an explicit state machine over which
//! sources have reported at least once, so consumers can tell a partial
//! render from a converged one instead of guessing.

use serde_json::Value;
use tokio::sync::watch;
use tracing::debug;

use hyamdral_common::error::Result;
use hyamdral_store::{ContentStore, collection, paths};

use crate::catalog::best_seller::BestSellerItem;
use crate::catalog::product::Product;
use crate::metrics::{self, EstimatedMetrics};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AggregationState {
    /// No source has reported yet.
    #[default]
    Loading,
    /// Some sources have reported; figures may still shift.
    Partial,
    /// Every source has delivered at least one snapshot.
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Products,
    Stores,
    Partners,
    BestSellers,
}

const SOURCE_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_products: usize,
    pub total_visits: i64,
    pub total_stores: usize,
    pub total_clicks: i64,
}

/// Entry in the recent-activity feed, derived from the newest products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub text: String,
    pub time: String,
}

/// Best-seller row with estimated view/click figures attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopProduct {
    pub name: String,
    pub price: String,
    pub store_logo: String,
    pub views: i64,
    pub clicks: i64,
}

/// Everything one dashboard render needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardView {
    pub state: AggregationState,
    pub stats: DashboardStats,
    pub activities: Vec<ActivityEntry>,
    pub top_products: Vec<TopProduct>,
}

pub struct Dashboard<E> {
    estimator: E,
    reported: [bool; SOURCE_COUNT],
    products: Vec<Product>,
    store_count: usize,
    partner_count: usize,
    best_sellers: Vec<BestSellerItem>,
}

impl<E: EstimatedMetrics> Dashboard<E> {
    pub fn new(estimator: E) -> Self {
        Self {
            estimator,
            reported: [false; SOURCE_COUNT],
            products: Vec::new(),
            store_count: 0,
            partner_count: 0,
            best_sellers: Vec::new(),
        }
    }

    pub fn state(&self) -> AggregationState {
        let seen = self.reported.iter().filter(|r| **r).count();
        match seen {
            0 => AggregationState::Loading,
            SOURCE_COUNT => AggregationState::Ready,
            _ => AggregationState::Partial,
        }
    }

    pub fn apply_products(&mut self, node: Option<&Value>) {
        self.products = collection::normalize(node);
        self.mark(Source::Products);
    }

    /// The stores tree counts its `top` and `others` children together;
    /// either side may be absent and then counts as zero.
    pub fn apply_stores(&mut self, node: Option<&Value>) {
        let top = collection::records(node.and_then(|n| n.get("top"))).len();
        let others = collection::records(node.and_then(|n| n.get("others"))).len();
        self.store_count = top + others;
        self.mark(Source::Stores);
    }

    pub fn apply_partners(&mut self, node: Option<&Value>) {
        self.partner_count = collection::records(node).len();
        self.mark(Source::Partners);
    }

    pub fn apply_best_sellers(&mut self, node: Option<&Value>) {
        self.best_sellers = collection::normalize(node);
        self.mark(Source::BestSellers);
    }

    fn mark(&mut self, source: Source) {
        self.reported[source as usize] = true;
        debug!(source = ?source, state = ?self.state(), "dashboard source reported");
    }

    /// Recomputed from scratch on every call; sources that have not
    /// reported contribute zero rather than blocking.
    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            total_products: self.products.len(),
            total_visits: metrics::total_visits(self.products.len()),
            total_stores: self.store_count + self.partner_count,
            total_clicks: metrics::total_clicks(self.products.len()),
        }
    }

    /// The four newest products, newest first.
    pub fn recent_activity(&self) -> Vec<ActivityEntry> {
        self.products
            .iter()
            .rev()
            .take(4)
            .map(|product| ActivityEntry {
                text: format!("Шинэ бараа нэмэгдлээ: {}", product.name),
                time: "Өнөөдөр".to_owned(),
            })
            .collect()
    }

    /// First five best sellers with estimated view/click counts. The
    /// estimates are recomputed per call: with the synthetic estimator
    /// they differ between renders by design.
    pub fn top_products(&self) -> Vec<TopProduct> {
        self.best_sellers
            .iter()
            .take(5)
            .map(|item| TopProduct {
                name: item.name.clone(),
                price: item.price.clone(),
                store_logo: item.store_logo.clone(),
                views: self.estimator.views(item.sold_count),
                clicks: self.estimator.clicks(item.sold_count),
            })
            .collect()
    }

    pub fn view(&self) -> DashboardView {
        DashboardView {
            state: self.state(),
            stats: self.stats(),
            activities: self.recent_activity(),
            top_products: self.top_products(),
        }
    }

    /// One-shot refresh from current snapshots of all four sources.
    pub async fn refresh(&mut self, store: &ContentStore) -> Result<()> {
        let products = store.snapshot(paths::CATEGORIES_PRODUCTS).await?;
        self.apply_products(products.as_ref());
        let stores = store.snapshot(paths::STORES).await?;
        self.apply_stores(stores.as_ref());
        let partners = store.snapshot(paths::HOME_PARTNERS).await?;
        self.apply_partners(partners.as_ref());
        let best_sellers = store.snapshot(paths::HOME_BEST_SELLERS).await?;
        self.apply_best_sellers(best_sellers.as_ref());
        Ok(())
    }
}

/// Long-lived dashboard: subscribes to all four sources and publishes a
/// fresh [`DashboardView`] after every delivery. Returns the receiving
/// end; the feeding task exits when the receiver is dropped or the store
/// goes away.
pub async fn live<E>(store: ContentStore, estimator: E) -> Result<watch::Receiver<DashboardView>>
where
    E: EstimatedMetrics + Send + 'static,
{
    let mut products = store.subscribe(paths::CATEGORIES_PRODUCTS).await?;
    let mut stores = store.subscribe(paths::STORES).await?;
    let mut partners = store.subscribe(paths::HOME_PARTNERS).await?;
    let mut best_sellers = store.subscribe(paths::HOME_BEST_SELLERS).await?;

    let mut dashboard = Dashboard::new(estimator);
    dashboard.apply_products(products.snapshot().as_ref());
    dashboard.apply_stores(stores.snapshot().as_ref());
    dashboard.apply_partners(partners.snapshot().as_ref());
    dashboard.apply_best_sellers(best_sellers.snapshot().as_ref());

    let (tx, rx) = watch::channel(dashboard.view());
    tokio::spawn(async move {
        loop {
            tokio::select! {
                Some(node) = products.updated() => dashboard.apply_products(node.as_ref()),
                Some(node) = stores.updated() => dashboard.apply_stores(node.as_ref()),
                Some(node) = partners.updated() => dashboard.apply_partners(node.as_ref()),
                Some(node) = best_sellers.updated() => dashboard.apply_best_sellers(node.as_ref()),
                else => break,
            }
            if tx.send(dashboard.view()).is_err() {
                break;
            }
        }
    });
    Ok(rx)
}
