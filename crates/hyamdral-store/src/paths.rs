// hyamdral-store
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

//! Canonical content store paths. These strings are part of the data
//! contract with existing deployments and must not change.

use crate::error::{Result, StoreError};

pub const GENERAL: &str = "content/general";
pub const HOME_HERO: &str = "content/home/hero";
pub const HOME_BEST_SELLERS: &str = "content/home/bestSellers";
pub const HOME_PARTNERS: &str = "content/home/partners";
pub const HOME_FLASH_SALES: &str = "content/home/flashSales";
pub const FEATURED_PANEL: &str = "content/featured/panel";
pub const FEATURED_PRODUCTS: &str = "content/featured/products";
pub const STORES: &str = "content/stores";
pub const STORES_TOP: &str = "content/stores/top";
pub const STORES_OTHERS: &str = "content/stores/others";
pub const CATEGORIES_PANEL: &str = "content/categories/panel";
pub const CATEGORIES_MAIN: &str = "content/categories/main";
pub const CATEGORIES_SUB: &str = "content/categories/sub";
pub const CATEGORIES_PRODUCTS: &str = "content/categories/products";

pub fn user(uid: &str) -> String {
    format!("users/{uid}")
}

/// Path of a keyed record inside a collection node.
pub fn child(collection: &str, key: &str) -> String {
    format!("{collection}/{key}")
}

/// Splits a path into segments. Empty paths, leading/trailing slashes and
/// empty segments are rejected.
pub(crate) fn split(path: &str) -> Result<Vec<&str>> {
    if path.is_empty() {
        return Err(StoreError::InvalidPath(path.to_owned()));
    }
    let segments: Vec<&str> = path.split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(StoreError::InvalidPath(path.to_owned()));
    }
    Ok(segments)
}

/// True when one path addresses a node at, above or below the other, i.e.
/// a write to `a` changes the snapshot visible at `b` or vice versa.
pub(crate) fn intersects(a: &str, b: &str) -> bool {
    a == b
        || a.strip_prefix(b).is_some_and(|rest| rest.starts_with('/'))
        || b.strip_prefix(a).is_some_and(|rest| rest.starts_with('/'))
}
