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

//! Catalog collections: one module per content store collection, each with
//! its record type and the read/write operations the admin screens use.
//! Records never store their own key; the key is injected as `id` when a
//! collection is normalized on read.

pub mod best_seller;
pub mod category_panel;
pub mod featured_banner;
pub mod featured_product;
pub mod flash_sale;
pub mod general;
pub mod hero;
pub mod main_category;
pub mod other_store;
pub mod partner;
pub mod product;
pub mod sub_category;
pub mod top_store;
pub mod user;

mod pricing;

pub use pricing::derived_discount;
