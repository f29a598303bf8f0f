//! Admin operations: the form-level layer between the admin screens and
//! the raw catalog CRUD. Saves are validated and derived fields are
//! recomputed here, so a record can only reach the content store in a
//! shape the storefront knows how to render. Every operation returns a
//! `Result` the caller must handle; there are no fire-and-forget writes.

use hyamdral_common::error::{HyamdralError, Result};
use hyamdral_store::ContentStore;
use std::path::Path;
use tracing::debug;

use crate::auth::AuthProvider;
use crate::catalog::featured_product::{FeaturedProduct, MAX_GALLERY_IMAGES};
use crate::catalog::flash_sale::FlashSale;
use crate::catalog::hero::HeroSlide;
use crate::catalog::main_category::MainCategory;
use crate::catalog::product::Product;
use crate::catalog::sub_category::SubCategory;
use crate::catalog::{self, derived_discount};
use crate::filter::matches_query;
use crate::media;

/*
Categories
*/

/// Creates or overwrites a main category under its semantic code. The
/// code is the storage key: it cannot be empty and never changes on edit.
pub async fn save_main_category(
    id: &str,
    category: &MainCategory,
    store: &ContentStore,
) -> Result<()> {
    let id = id.trim();
    if id.is_empty() {
        return Err(HyamdralError::Validation("ID оруулна уу".to_owned()));
    }
    catalog::main_category::upsert(id, category, store).await
}

/// Saves a subcategory, new or existing. The parent must name an
/// existing main category.
pub async fn save_sub_category(
    id: Option<&str>,
    sub: &SubCategory,
    store: &ContentStore,
) -> Result<String> {
    let parents = catalog::main_category::list(store).await?;
    if !parents.iter().any(|parent| parent.id == sub.parent_id) {
        return Err(HyamdralError::Validation(
            "Үндсэн ангилал олдсонгүй".to_owned(),
        ));
    }
    match id {
        Some(id) => {
            catalog::sub_category::save(id, sub, store).await?;
            Ok(id.to_owned())
        }
        None => catalog::sub_category::create(sub, store).await,
    }
}

/// Admin table search: main categories match on name or code.
pub fn search_main_categories<'a>(
    categories: &'a [MainCategory],
    query: &str,
) -> Vec<&'a MainCategory> {
    categories
        .iter()
        .filter(|category| matches_query(query, &[&category.name, &category.id]))
        .collect()
}

/// Admin table search: subcategories match on name, optionally narrowed
/// to one parent category.
pub fn search_sub_categories<'a>(
    subs: &'a [SubCategory],
    query: &str,
    parent: Option<&str>,
) -> Vec<&'a SubCategory> {
    subs.iter()
        .filter(|sub| matches_query(query, &[&sub.name]))
        .filter(|sub| parent.is_none_or(|parent| sub.parent_id == parent))
        .collect()
}

/*
Products
*/

/// Saves a regular product. The discount is not taken from the form: it
/// is derived from the price pair on every save.
pub async fn save_product(
    id: Option<&str>,
    mut product: Product,
    store: &ContentStore,
) -> Result<String> {
    product.discount =
        derived_discount(&product.price, &product.original_price).unwrap_or_default();
    match id {
        Some(id) => {
            catalog::product::save(id, &product, store).await?;
            Ok(id.to_owned())
        }
        None => catalog::product::create(&product, store).await,
    }
}

pub fn search_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| matches_query(query, &[&product.name]))
        .collect()
}

/// Category column of the product table: the raw category code joined
/// with the resolved subcategory name. A reference that resolves to
/// nothing renders as-is instead of failing.
pub fn category_label(product: &Product, subs: &[SubCategory]) -> String {
    format!(
        "{} / {}",
        product.category,
        catalog::sub_category::display_name(subs, &product.sub_category)
    )
}

/*
Featured products
*/

pub async fn save_featured_product(
    id: Option<&str>,
    mut product: FeaturedProduct,
    store: &ContentStore,
) -> Result<String> {
    if product.gallery.len() > MAX_GALLERY_IMAGES {
        return Err(HyamdralError::Validation(
            "Дээд тал нь 6 зураг оруулах боломжтой.".to_owned(),
        ));
    }
    product.discount =
        derived_discount(&product.price, &product.original_price).unwrap_or_default();
    match id {
        Some(id) => {
            catalog::featured_product::save(id, &product, store).await?;
            Ok(id.to_owned())
        }
        None => catalog::featured_product::create(&product, store).await,
    }
}

/*
Flash sales
*/

pub async fn save_flash_sale(
    id: Option<&str>,
    mut sale: FlashSale,
    store: &ContentStore,
) -> Result<String> {
    sale.discount_percent = derived_discount(&sale.price, &sale.old_price).unwrap_or_default();
    match id {
        Some(id) => {
            catalog::flash_sale::save(id, &sale, store).await?;
            Ok(id.to_owned())
        }
        None => catalog::flash_sale::create(&sale, store).await,
    }
}

/*
Hero slides
*/

/// A slide without an image never reaches the store.
pub async fn save_hero_slide(
    id: Option<&str>,
    slide: &HeroSlide,
    store: &ContentStore,
) -> Result<String> {
    if slide.image.is_empty() {
        return Err(HyamdralError::Validation("Зураг оруулна уу".to_owned()));
    }
    match id {
        Some(id) => {
            catalog::hero::save(id, slide, store).await?;
            Ok(id.to_owned())
        }
        None => catalog::hero::create(slide, store).await,
    }
}

/*
Profile
*/

/// Avatar change: inline the picked file, persist it on the profile
/// document (field merge) and push it to the auth principal's photo. On
/// any failure the stored avatar is left as it was.
pub async fn change_avatar<A: AuthProvider>(
    auth: &A,
    store: &ContentStore,
    uid: &str,
    image: &Path,
) -> Result<String> {
    let data_uri = media::inline_image(image).await?;
    catalog::user::set_avatar(uid, &data_uri, store).await?;
    auth.update_profile(uid, None, Some(&data_uri))
        .await
        .map_err(HyamdralError::Auth)?;
    debug!(uid, "avatar updated");
    Ok(data_uri)
}

#[cfg(test)]
mod test_categories {
    use super::*;
    use crate::data::{IconTag, Status};

    fn category(name: &str) -> MainCategory {
        MainCategory {
            id: String::new(),
            name: name.to_owned(),
            icon: IconTag::Zap,
            status: Status::Active,
        }
    }

    #[tokio::test]
    async fn a_subcategory_filters_under_its_new_parent() {
        let store = ContentStore::new();
        save_main_category("TECH", &category("Технологи"), &store)
            .await
            .unwrap();

        let sub = SubCategory {
            id: String::new(),
            name: "Утас".to_owned(),
            parent_id: "TECH".to_owned(),
            status: Status::Active,
        };
        save_sub_category(None, &sub, &store).await.unwrap();

        let subs = catalog::sub_category::list(&store).await.unwrap();
        let tech_subs = catalog::sub_category::by_parent(&subs, "TECH");
        assert_eq!(tech_subs.len(), 1);
        assert_eq!(tech_subs[0].name, "Утас");
        assert!(catalog::sub_category::by_parent(&subs, "FASHION").is_empty());
    }

    #[tokio::test]
    async fn blank_category_codes_are_rejected() {
        let store = ContentStore::new();
        let err = save_main_category("   ", &category("Нэргүй"), &store)
            .await
            .unwrap_err();
        assert!(matches!(err, HyamdralError::Validation(_)));
        assert!(catalog::main_category::list(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn subcategories_need_an_existing_parent() {
        let store = ContentStore::new();
        let orphan = SubCategory {
            id: String::new(),
            name: "Эзэнгүй".to_owned(),
            parent_id: "GHOST".to_owned(),
            status: Status::Active,
        };
        let err = save_sub_category(None, &orphan, &store).await.unwrap_err();
        assert!(matches!(err, HyamdralError::Validation(_)));
        assert!(catalog::sub_category::list(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn category_search_matches_name_or_code() {
        let store = ContentStore::new();
        save_main_category("TECH", &category("Технологи"), &store)
            .await
            .unwrap();
        save_main_category("FASHION", &category("Загвар"), &store)
            .await
            .unwrap();
        let all = catalog::main_category::list(&store).await.unwrap();

        assert_eq!(search_main_categories(&all, "техно").len(), 1);
        assert_eq!(search_main_categories(&all, "fash").len(), 1);
        assert_eq!(search_main_categories(&all, "").len(), 2);
    }

    #[tokio::test]
    async fn subcategory_search_combines_text_and_parent_filter() {
        let store = ContentStore::new();
        save_main_category("TECH", &category("Технологи"), &store)
            .await
            .unwrap();
        save_main_category("FASHION", &category("Загвар"), &store)
            .await
            .unwrap();
        for (name, parent) in [("Утас", "TECH"), ("Чихэвч", "TECH"), ("Гутал", "FASHION")] {
            let sub = SubCategory {
                id: String::new(),
                name: name.to_owned(),
                parent_id: parent.to_owned(),
                status: Status::Active,
            };
            save_sub_category(None, &sub, &store).await.unwrap();
        }
        let subs = catalog::sub_category::list(&store).await.unwrap();

        assert_eq!(search_sub_categories(&subs, "", None).len(), 3);
        assert_eq!(search_sub_categories(&subs, "", Some("TECH")).len(), 2);
        assert_eq!(search_sub_categories(&subs, "гут", Some("TECH")).len(), 0);
        assert_eq!(search_sub_categories(&subs, "гут", Some("FASHION")).len(), 1);
    }
}

#[cfg(test)]
mod test_products {
    use super::*;

    #[tokio::test]
    async fn discounts_are_recomputed_on_save() {
        let store = ContentStore::new();
        let product = Product {
            name: "Зурагт".to_owned(),
            original_price: "100,000".to_owned(),
            price: "75,000".to_owned(),
            // A stale form value that must not survive the save.
            discount: 99,
            ..Default::default()
        };
        let key = save_product(None, product, &store).await.unwrap();

        let listed = catalog::product::list(&store).await.unwrap();
        assert_eq!(listed[0].id, key);
        assert_eq!(listed[0].discount, 25);

        // Comma-free prices derive identically.
        let plain = Product {
            name: "Зурагт 2".to_owned(),
            original_price: "100000".to_owned(),
            price: "75000".to_owned(),
            ..Default::default()
        };
        save_product(None, plain, &store).await.unwrap();
        let listed = catalog::product::list(&store).await.unwrap();
        assert_eq!(listed[1].discount, 25);
    }

    #[tokio::test]
    async fn missing_original_price_zeroes_the_discount() {
        let store = ContentStore::new();
        let product = Product {
            name: "Шинэ бараа".to_owned(),
            price: "50,000".to_owned(),
            discount: 40,
            ..Default::default()
        };
        save_product(None, product, &store).await.unwrap();
        assert_eq!(catalog::product::list(&store).await.unwrap()[0].discount, 0);
    }

    #[test]
    fn unresolved_category_references_render_raw() {
        let product = Product {
            name: "Зурагт".to_owned(),
            category: "GONE".to_owned(),
            sub_category: "sub-missing".to_owned(),
            ..Default::default()
        };
        // No categories loaded at all: both halves fall back to raw ids.
        assert_eq!(category_label(&product, &[]), "GONE / sub-missing");
    }

    #[test]
    fn product_search_is_case_insensitive() {
        let products = vec![
            Product {
                name: "Galaxy S24".to_owned(),
                ..Default::default()
            },
            Product {
                name: "Чихэвч".to_owned(),
                ..Default::default()
            },
        ];
        assert_eq!(search_products(&products, "galaxy").len(), 1);
        assert_eq!(search_products(&products, "").len(), 2);
    }
}

#[cfg(test)]
mod test_featured {
    use super::*;

    #[tokio::test]
    async fn oversized_galleries_never_reach_the_store() {
        let store = ContentStore::new();
        let product = FeaturedProduct {
            name: "Цаг".to_owned(),
            gallery: (0..7).map(|i| format!("data:{i}")).collect(),
            ..Default::default()
        };
        let err = save_featured_product(None, product, &store)
            .await
            .unwrap_err();
        assert!(matches!(err, HyamdralError::Validation(_)));
        assert!(
            catalog::featured_product::list(&store)
                .await
                .unwrap()
                .is_empty()
        );
    }
}


#[cfg(test)]
mod test_hero {
    use super::*;

    #[tokio::test]
    async fn slides_without_an_image_are_rejected() {
        let store = ContentStore::new();
        let slide = HeroSlide {
            title: "Зураггүй".to_owned(),
            is_active: true,
            ..Default::default()
        };
        let err = save_hero_slide(None, &slide, &store).await.unwrap_err();
        assert!(matches!(err, HyamdralError::Validation(_)));
        assert!(catalog::hero::list(&store).await.unwrap().is_empty());
    }
}
