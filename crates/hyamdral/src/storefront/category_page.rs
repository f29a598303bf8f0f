use hyamdral_common::error::Result;
use hyamdral_store::{ContentStore, collection, paths};
use serde::Deserialize;

use crate::catalog::category_panel::{self, CategoryPanel};
use crate::catalog::main_category::MainCategory;
use crate::catalog::sub_category::{self, SubCategory};
use crate::data::lenient_i64;

/// A product is highlighted on the category page once its discount
/// reaches this threshold.
const HIGHLIGHT_DISCOUNT: i64 = 20;

/// Stock panel copy used when a category has no decorative panel of its
/// own.
const FALLBACK_DESCRIPTION: &str = "Шилдэг брэнд, чанартай бүтээгдэхүүнүүд.";

/// Category-page product as rendered: the display image falls back from
/// `mainImage` to the legacy `image` field, and the highlight flag is
/// derived from the discount.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayProduct {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub store: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sub_category: String,
    #[serde(default)]
    pub original_price: String,
    #[serde(default)]
    pub price: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub discount: i64,
    #[serde(default)]
    pub main_image: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    pub description: String,
}

impl DisplayProduct {
    pub fn image(&self) -> &str {
        if self.main_image.is_empty() {
            &self.image
        } else {
            &self.main_image
        }
    }

    pub fn is_featured(&self) -> bool {
        self.discount >= HIGHLIGHT_DISCOUNT
    }
}

/// Panel header for the active category. Either the stored panel, or a
/// synthesized stand-in carrying the category's own name (or the raw id
/// when even the category is unknown) and no cover image.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub name: String,
    pub description: String,
    pub cover_image: Option<String>,
}

/// Products for one category selection, split into highlighted deals and
/// the rest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductSelection<'a> {
    pub highlights: Vec<&'a DisplayProduct>,
    pub regular: Vec<&'a DisplayProduct>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryPage {
    pub categories: Vec<MainCategory>,
    pub sub_categories: Vec<SubCategory>,
    pub panels: Vec<CategoryPanel>,
    pub products: Vec<DisplayProduct>,
}

impl CategoryPage {
    /// Assembles the page from the current snapshots of its four
    /// collections. Only active categories and subcategories are kept;
    /// products and panels pass through unfiltered.
    pub async fn load(store: &ContentStore) -> Result<Self> {
        let main = store.snapshot(paths::CATEGORIES_MAIN).await?;
        let sub = store.snapshot(paths::CATEGORIES_SUB).await?;
        let panels = store.snapshot(paths::CATEGORIES_PANEL).await?;
        let products = store.snapshot(paths::CATEGORIES_PRODUCTS).await?;

        let categories = collection::normalize::<MainCategory>(main.as_ref())
            .into_iter()
            .filter(|category| category.status.is_active())
            .collect();
        let sub_categories = collection::normalize::<SubCategory>(sub.as_ref())
            .into_iter()
            .filter(|sub| sub.status.is_active())
            .collect();

        Ok(Self {
            categories,
            sub_categories,
            panels: collection::normalize(panels.as_ref()),
            products: collection::normalize(products.as_ref()),
        })
    }

    /// The category selected by default: the first active one.
    pub fn default_category(&self) -> Option<&MainCategory> {
        self.categories.first()
    }

    pub fn panel_for(&self, category_id: &str) -> PanelView {
        match category_panel::for_category(&self.panels, category_id) {
            Some(panel) => PanelView {
                name: panel.name.clone(),
                description: panel.description.clone(),
                cover_image: (!panel.cover_image.is_empty()).then(|| panel.cover_image.clone()),
            },
            None => PanelView {
                name: crate::catalog::main_category::display_name(&self.categories, category_id)
                    .to_owned(),
                description: FALLBACK_DESCRIPTION.to_owned(),
                cover_image: None,
            },
        }
    }

    pub fn sub_categories_of(&self, category_id: &str) -> Vec<&SubCategory> {
        sub_category::by_parent(&self.sub_categories, category_id)
    }

    /// Products of the category, optionally narrowed to one subcategory,
    /// partitioned into highlights and the rest.
    pub fn selection(&self, category_id: &str, sub_category: Option<&str>) -> ProductSelection<'_> {
        let mut selection = ProductSelection::default();
        for product in self
            .products
            .iter()
            .filter(|p| p.category == category_id)
            .filter(|p| sub_category.is_none_or(|sub| p.sub_category == sub))
        {
            if product.is_featured() {
                selection.highlights.push(product);
            } else {
                selection.regular.push(product);
            }
        }
        selection
    }
}
