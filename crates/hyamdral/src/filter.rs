//! In-memory filtering and sorting for already-fetched lists. Everything
//! here is pure: callers get a new list and the source is never mutated.

/// Parses a currency-formatted price string (`"1,299,000₮"`) to an
/// integer. Thousands separators and the tugrik glyph are stripped, then
/// the leading numeric prefix is taken. Anything unparsable yields 0 —
/// legacy-compatible behavior that range filters rely on, even though it
/// makes malformed prices match a zero lower bound.
pub fn parse_price(raw: &str) -> i64 {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && *c != '₮').collect();
    let trimmed = cleaned.trim();

    let mut chars = trimmed.char_indices();
    let mut end = 0;
    if let Some((_, first)) = chars.next() {
        if first.is_ascii_digit() || first == '-' || first == '+' {
            end = first.len_utf8();
            for (idx, c) in chars {
                if !c.is_ascii_digit() {
                    break;
                }
                end = idx + c.len_utf8();
            }
        }
    }
    trimmed[..end].parse().unwrap_or(0)
}

/// Case-insensitive substring search over one or more fields. An empty
/// query matches everything.
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let needle = query.to_lowercase();
    needle.is_empty()
        || fields
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
}

/// Inclusive price bound where either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl PriceRange {
    pub fn new(min: Option<i64>, max: Option<i64>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: i64) -> bool {
        self.min.is_none_or(|min| price >= min) && self.max.is_none_or(|max| price <= max)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Preserve arrival order.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
}

/// Stable sort by parsed price. `SortKey::Default` leaves the list in
/// arrival order.
pub fn sort_by_price<T>(items: &mut [T], key: SortKey, price_of: impl Fn(&T) -> i64) {
    match key {
        SortKey::Default => {}
        SortKey::PriceAsc => items.sort_by_key(|item| price_of(item)),
        SortKey::PriceDesc => items.sort_by_key(|item| std::cmp::Reverse(price_of(item))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_price_strips_separators_and_currency() {
        assert_eq!(parse_price("1,299,000₮"), 1_299_000);
        assert_eq!(parse_price("75000"), 75_000);
        assert_eq!(parse_price(" 45,000 "), 45_000);
    }

    #[test]
    fn parse_price_takes_the_leading_numeric_prefix() {
        assert_eq!(parse_price("120 мянга"), 120);
        assert_eq!(parse_price("99.9"), 99);
        assert_eq!(parse_price("-500"), -500);
    }

    #[test]
    fn unparsable_prices_are_zero() {
        assert_eq!(parse_price(""), 0);
        assert_eq!(parse_price("үнэгүй"), 0);
        assert_eq!(parse_price("₮"), 0);
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches_query("", &["Galaxy S24"]));
        assert!(matches_query("galaxy", &["Galaxy S24"]));
        assert!(matches_query("TECH", &["Гутал", "tech"]));
        assert!(!matches_query("phone", &["Гутал"]));
    }

    #[test]
    fn range_bounds_are_inclusive_and_optional() {
        let range = PriceRange::new(Some(10_000), Some(50_000));
        assert!(range.contains(10_000));
        assert!(range.contains(50_000));
        assert!(!range.contains(9_999));

        let open_top = PriceRange::new(Some(10_000), None);
        assert!(open_top.contains(i64::MAX));

        assert!(PriceRange::default().contains(-5));
    }

    #[test]
    fn range_filtering_is_idempotent() {
        let prices = vec!["5,000₮", "45,000₮", "120,000₮", "bad"];
        let range = PriceRange::new(Some(1_000), Some(100_000));

        let once: Vec<&str> = prices
            .iter()
            .copied()
            .filter(|p| range.contains(parse_price(p)))
            .collect();
        let twice: Vec<&str> = once
            .iter()
            .copied()
            .filter(|p| range.contains(parse_price(p)))
            .collect();
        assert_eq!(once, twice);
        assert_eq!(once, vec!["5,000₮", "45,000₮"]);
    }

    #[test]
    fn price_sort_is_stable_and_default_preserves_order() {
        let mut items = vec![("b", "20,000"), ("a", "10,000"), ("c", "20,000")];
        sort_by_price(&mut items, SortKey::Default, |(_, p)| parse_price(p));
        assert_eq!(items[0].0, "b");

        sort_by_price(&mut items, SortKey::PriceAsc, |(_, p)| parse_price(p));
        assert_eq!(
            items.iter().map(|(n, _)| *n).collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );

        sort_by_price(&mut items, SortKey::PriceDesc, |(_, p)| parse_price(p));
        assert_eq!(
            items.iter().map(|(n, _)| *n).collect::<Vec<_>>(),
            vec!["b", "c", "a"]
        );
    }
}
