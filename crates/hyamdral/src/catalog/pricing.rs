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

/// Discount percentage derived from the sale/original price pair:
/// `round((old − new) / old × 100)`. The stored discount is never
/// authoritative; it is recomputed from the prices on every save. Returns
/// `None` unless the original price parses to a positive number.
pub fn derived_discount(price: &str, original_price: &str) -> Option<i64> {
    let new = leading_decimal(price)?;
    let old = leading_decimal(original_price)?;
    if old > 0.0 {
        Some((((old - new) / old) * 100.0).round() as i64)
    } else {
        None
    }
}

/// Decimal prefix of a comma-separated price string, `parseFloat` style.
fn leading_decimal(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    let trimmed = cleaned.trim();

    let mut end = 0;
    let mut seen_dot = false;
    for (idx, c) in trimmed.char_indices() {
        let accepted = c.is_ascii_digit()
            || (idx == 0 && (c == '-' || c == '+'))
            || (c == '.' && !seen_dot);
        if !accepted {
            break;
        }
        if c == '.' {
            seen_dot = true;
        }
        end = idx + c.len_utf8();
    }
    trimmed[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_off_is_twenty_five_percent() {
        assert_eq!(derived_discount("75000", "100000"), Some(25));
        assert_eq!(derived_discount("75,000", "100,000"), Some(25));
    }

    #[test]
    fn rounding_is_to_the_nearest_percent() {
        // 1 - 29999/45000 = 33.33..%
        assert_eq!(derived_discount("29,999", "45,000"), Some(33));
        // 1 - 119000/140000 = 15%
        assert_eq!(derived_discount("119,000", "140,000"), Some(15));
    }

    #[test]
    fn missing_or_zero_original_price_yields_nothing() {
        assert_eq!(derived_discount("75000", ""), None);
        assert_eq!(derived_discount("75000", "0"), None);
        assert_eq!(derived_discount("", "100000"), None);
    }

    #[test]
    fn markup_produces_a_negative_discount() {
        assert_eq!(derived_discount("120000", "100000"), Some(-20));
    }
}
