//! Address string helpers for the geocoding fallback chain.

/// Canonical query for addresses recognized as being in Hanoi.
const HANOI_CANONICAL: &str = "Hà Nội";

/// Spellings that mark an address as being in Hanoi.
const HANOI_SPELLINGS: &[&str] = &["hà nội", "ha noi", "hanoi"];

/// Simplify an address by dropping street-level detail.
///
/// Splits on commas, trims each segment, and keeps only the last 3
/// segments (ward/district/city level). An address with fewer than 3
/// segments cannot be simplified and is returned trimmed but otherwise
/// unchanged.
pub fn simplify(address: &str) -> String {
    let segments: Vec<&str> = address.split(',').map(str::trim).collect();

    if segments.len() < 3 {
        return address.trim().to_string();
    }

    segments[segments.len() - 3..].join(", ")
}

/// City-level last-resort query for the multi-source chain.
///
/// Addresses recognized as Hanoi collapse to the canonical city name;
/// anything else falls back to the last comma-separated segment.
pub fn city_fallback(address: &str) -> String {
    let lowered = address.to_lowercase();
    if HANOI_SPELLINGS.iter().any(|s| lowered.contains(s)) {
        return HANOI_CANONICAL.to_string();
    }

    address
        .rsplit(',')
        .next()
        .map(str::trim)
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_segments_keep_last_three() {
        assert_eq!(
            simplify("123 X St, Y Ward, Z District, W City"),
            "Y Ward, Z District, W City"
        );
    }

    #[test]
    fn three_segments_are_renormalized_but_kept() {
        assert_eq!(
            simplify("709 Nguyen Xien,District,City"),
            "709 Nguyen Xien, District, City"
        );
    }

    #[test]
    fn two_segments_are_unchanged() {
        assert_eq!(simplify("Y Ward, Z District"), "Y Ward, Z District");
    }

    #[test]
    fn one_segment_is_unchanged() {
        assert_eq!(simplify("  Hanoi  "), "Hanoi");
    }

    #[test]
    fn segments_are_trimmed() {
        assert_eq!(simplify("a ,  b , c ,  d"), "b, c, d");
    }

    #[test]
    fn hanoi_spellings_collapse_to_canonical() {
        assert_eq!(city_fallback("709 Nguyen Xien, Thanh Xuan, Ha Noi"), "Hà Nội");
        assert_eq!(city_fallback("somewhere in Hanoi"), "Hà Nội");
        assert_eq!(city_fallback("Phố Huế, Hà Nội"), "Hà Nội");
    }

    #[test]
    fn unrecognized_city_uses_last_segment() {
        assert_eq!(city_fallback("12 Le Loi, District 1, Sai Gon"), "Sai Gon");
    }

    #[test]
    fn city_fallback_on_single_segment() {
        assert_eq!(city_fallback("Da Nang"), "Da Nang");
    }
}
