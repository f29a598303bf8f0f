use hyamdral_common::error::Result;
use hyamdral_store::ContentStore;

use crate::catalog::other_store::{self, Branch};
use crate::catalog::top_store;
use crate::filter::matches_query;

/// One row of the merged store directory: showcased stores first, the
/// rest after, each keeping its tier flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryStore {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub description: String,
    pub link: String,
    pub cover_image: String,
    pub deals_count: i64,
    pub branches: Vec<Branch>,
    pub is_top: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreSort {
    #[default]
    Default,
    /// Stores carry no stored rating; every entry ties at zero and the
    /// stable sort keeps arrival order. Kept for interface parity with
    /// the directory's sort menu.
    Rating,
    Deals,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreDirectory {
    pub top: Vec<DirectoryStore>,
    pub others: Vec<DirectoryStore>,
}

impl StoreDirectory {
    pub async fn load(store: &ContentStore) -> Result<Self> {
        let top = top_store::list(store)
            .await?
            .into_iter()
            .map(|s| DirectoryStore {
                id: s.id,
                name: s.name,
                logo: s.logo,
                description: s.description,
                link: s.link,
                cover_image: s.cover_image,
                deals_count: 0,
                branches: Vec::new(),
                is_top: true,
            })
            .collect();
        let others = other_store::list(store)
            .await?
            .into_iter()
            .map(|s| DirectoryStore {
                id: s.id,
                name: s.name,
                logo: s.logo,
                description: s.description,
                link: s.site_link,
                cover_image: String::new(),
                deals_count: s.deals_count,
                branches: s.branches,
                is_top: false,
            })
            .collect();
        Ok(Self { top, others })
    }

    /// All stores in directory order: showcased tier first.
    pub fn all(&self) -> Vec<&DirectoryStore> {
        self.top.iter().chain(self.others.iter()).collect()
    }

    /// Name search plus sort, mirroring the directory's filter bar.
    pub fn process(&self, query: &str, sort: StoreSort) -> Vec<&DirectoryStore> {
        let mut result: Vec<&DirectoryStore> = self
            .all()
            .into_iter()
            .filter(|store| matches_query(query, &[&store.name]))
            .collect();
        match sort {
            StoreSort::Default => {}
            // Ratings are all unset; the tie-broken stable sort is a
            // no-op but mirrors the menu option.
            StoreSort::Rating => result.sort_by_key(|_| std::cmp::Reverse(0)),
            StoreSort::Deals => result.sort_by_key(|store| std::cmp::Reverse(store.deals_count)),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::seeded_store;

    #[tokio::test]
    async fn directory_merges_tiers_in_order() {
        let store = seeded_store().await;
        let directory = StoreDirectory::load(&store).await.unwrap();

        let all = directory.all();
        assert_eq!(all.len(), 3);
        assert!(all[0].is_top);
        assert_eq!(all[0].name, "Emart");
        assert!(!all[2].is_top);
    }

    #[tokio::test]
    async fn search_and_deal_sort_work_together() {
        let store = seeded_store().await;
        let directory = StoreDirectory::load(&store).await.unwrap();

        let found = directory.process("но", StoreSort::Default);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Номин");

        let by_deals = directory.process("", StoreSort::Deals);
        assert!(by_deals[0].deals_count >= by_deals[1].deals_count);

        // Rating sort ties everywhere: arrival order is preserved.
        let by_rating = directory.process("", StoreSort::Rating);
        assert_eq!(by_rating[0].name, "Emart");
    }
}
