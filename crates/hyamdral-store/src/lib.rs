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

//! Client for the hierarchical content store backing the Hyamdral catalog.
//!
//! The store is a JSON document tree addressed by slash-separated paths
//! (`content/categories/main`, `users/{uid}`, ...). Every collection is a
//! node whose children are individually keyed records. Writes are
//! last-write-wins whole-document overwrites, with two narrow field-merge
//! flows (`update`). Readers either take a point-in-time `snapshot` or hold
//! a live [`Subscription`] that yields a fresh snapshot after every
//! intersecting write.

pub mod collection;
pub mod error;
pub mod paths;
mod store;
mod tree;

pub use collection::{normalize, record, records};
pub use error::{Result, StoreError};
pub use store::{ContentStore, Subscription};
