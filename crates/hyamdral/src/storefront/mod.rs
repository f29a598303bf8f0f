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

//! Read-side view assembly. Each page joins the collections it needs from
//! whatever has streamed in so far; references that do not resolve render
//! raw rather than failing, and a page assembled between two collection
//! deliveries simply shows the partially-joined state until the next
//! recompute.

pub mod category_page;
pub mod featured_page;
pub mod home;
pub mod product_detail;
pub mod stores_page;
