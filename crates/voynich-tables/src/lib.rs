//! Page classification for Voynich folio identifiers.
//!
//! Folio identifiers arrive spelled the way the transcriptions spell them:
//! `1r`, `67r2`, `85v3`, or the symbolic `rose`. Every lookup funnels through
//! [`base_page_number`], which strips trailing non-digits until only digits
//! remain, so all four classifications treat suffixed and symbolic names the
//! same way. Lookups are total: unmapped pages yield [`Lookup::Unknown`] (or
//! `false`), never an error.
//!
//! ```rust
//! use voynich_tables::{language_hand, quire, section};
//! use voynich_types::{LanguageHand, Lookup, Quire, Section};
//!
//! assert_eq!(quire("67r2"), Lookup::Known(Quire(9)));
//! assert_eq!(section("103v"), Lookup::Known(Section::Recipes));
//! assert_eq!(language_hand("rose"), Lookup::Rose);
//! ```

mod data;

pub use data::PageRange;

use voynich_types::{LanguageHand, Lookup, Quire, ROSE_FOLIO, Section, SpecialGroup};

use data::{LANGUAGE_HANDS, QUIRES, SECTIONS, SPECIAL_GROUPS, STAR_COUNTS, ZODIAC_NAMES};

/// Numeric page of a folio identifier.
///
/// Trailing characters are dropped one at a time until the remainder is all
/// ASCII digits. Returns `None` for `rose`, for identifiers with no leading
/// digits, and for numbers that do not fit in a `u32`.
pub fn base_page_number(folio: &str) -> Option<u32> {
    if folio == ROSE_FOLIO {
        return None;
    }
    let mut number = folio;
    while !number.is_empty() && !number.bytes().all(|b| b.is_ascii_digit()) {
        let cut = number.char_indices().next_back().map_or(0, |(idx, _)| idx);
        number = &number[..cut];
    }
    number.parse().ok()
}

/// Quire (physical gathering) containing the folio.
pub fn quire(folio: &str) -> Lookup<Quire> {
    classify(folio, QUIRES)
}

/// Thematic section of the folio.
pub fn section(folio: &str) -> Lookup<Section> {
    classify(folio, SECTIONS)
}

/// Scribal language hand of the folio.
pub fn language_hand(folio: &str) -> Lookup<LanguageHand> {
    classify(folio, LANGUAGE_HANDS)
}

/// Whether the folio belongs to a named special group. `rose` never does.
pub fn is_special(group: SpecialGroup, folio: &str) -> bool {
    let Some(number) = base_page_number(folio) else {
        return false;
    };
    SPECIAL_GROUPS
        .iter()
        .find(|(candidate, _)| *candidate == group)
        .is_some_and(|(_, parts)| parts.iter().any(|ranges| in_ranges(ranges, number)))
}

/// Descriptive name of an astrological/cosmological page, if it has one.
pub fn zodiac_name(folio: &str) -> Option<&'static str> {
    ZODIAC_NAMES
        .iter()
        .find(|(id, _)| *id == folio)
        .map(|(_, name)| *name)
}

/// Hand-counted number of stars on a recipe page. Sparse: absence means no data.
pub fn star_count(folio: &str) -> Option<u32> {
    STAR_COUNTS
        .iter()
        .find(|(id, _)| *id == folio)
        .map(|(_, count)| *count)
}

fn classify<T: Copy>(folio: &str, table: &[(T, &[PageRange])]) -> Lookup<T> {
    if folio == ROSE_FOLIO {
        return Lookup::Rose;
    }
    let Some(number) = base_page_number(folio) else {
        return Lookup::Unknown;
    };
    table
        .iter()
        .find(|(_, ranges)| in_ranges(ranges, number))
        .map_or(Lookup::Unknown, |(value, _)| Lookup::Known(*value))
}

fn in_ranges(ranges: &[PageRange], number: u32) -> bool {
    ranges.iter().any(|range| range.contains(number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_page_strips_trailing_suffixes() {
        assert_eq!(base_page_number("1r"), Some(1));
        assert_eq!(base_page_number("67r2"), Some(67));
        assert_eq!(base_page_number("116v"), Some(116));
        assert_eq!(base_page_number("42"), Some(42));
        assert_eq!(base_page_number("rose"), None);
        assert_eq!(base_page_number(""), None);
        assert_eq!(base_page_number("r12"), None);
        assert_eq!(base_page_number("99999999999r"), None);
    }

    #[test]
    fn quires_cover_numbered_leaves() {
        assert_eq!(quire("1r"), Lookup::Known(Quire(1)));
        assert_eq!(quire("8v"), Lookup::Known(Quire(1)));
        assert_eq!(quire("9r"), Lookup::Known(Quire(2)));
        assert_eq!(quire("66r"), Lookup::Known(Quire(8)));
        assert_eq!(quire("116r"), Lookup::Known(Quire(20)));
        assert_eq!(quire("117r"), Lookup::Unknown);
        assert_eq!(quire("rose"), Lookup::Rose);
    }

    #[test]
    fn sections_follow_manuscript_layout() {
        assert_eq!(section("1v"), Lookup::Known(Section::Herbal));
        assert_eq!(section("90r1"), Lookup::Known(Section::Herbal));
        assert_eq!(section("88r"), Lookup::Known(Section::Pharmaceutical));
        assert_eq!(section("70v2"), Lookup::Known(Section::Astrological));
        assert_eq!(section("78r"), Lookup::Known(Section::Balneological));
        assert_eq!(section("86v4"), Lookup::Known(Section::Cosmological));
        assert_eq!(section("58r"), Lookup::Known(Section::Mixed));
        assert_eq!(section("97r"), Lookup::Unknown);
        assert_eq!(section("rose"), Lookup::Rose);
    }

    #[test]
    fn language_hands_match_currier_assignment() {
        assert_eq!(language_hand("2r"), Lookup::Known(LanguageHand::A1));
        assert_eq!(language_hand("26r"), Lookup::Known(LanguageHand::B2));
        assert_eq!(language_hand("93r"), Lookup::Known(LanguageHand::A4));
        assert_eq!(language_hand("104r"), Lookup::Known(LanguageHand::BX));
        assert_eq!(language_hand("66r"), Lookup::Known(LanguageHand::B));
        assert_eq!(language_hand("58v"), Lookup::Known(LanguageHand::A));
        assert_eq!(
            language_hand("72r1"),
            Lookup::Known(LanguageHand::BUncertain)
        );
        assert_eq!(language_hand("59r"), Lookup::Unknown);
    }

    #[test]
    fn special_groups_are_total() {
        assert!(is_special(SpecialGroup::HerbalA, "25v"));
        assert!(!is_special(SpecialGroup::HerbalA, "26r"));
        assert!(is_special(SpecialGroup::HerbalB, "26r"));
        assert!(is_special(SpecialGroup::JustA, "58r"));
        assert!(is_special(SpecialGroup::JustB, "70r1"));
        assert!(!is_special(SpecialGroup::JustA, "70r1"));
        assert!(is_special(SpecialGroup::AllAB, "116r"));
        assert!(!is_special(SpecialGroup::AllAB, "rose"));
        assert!(!is_special(SpecialGroup::AllAB, "xyz"));
    }

    #[test]
    fn malformed_identifiers_are_unknown() {
        for folio in ["", "r", "fold", "ñ", "-3"] {
            assert_eq!(quire(folio), Lookup::Unknown);
            assert_eq!(section(folio), Lookup::Unknown);
            assert_eq!(language_hand(folio), Lookup::Unknown);
        }
    }

    #[test]
    fn names_and_star_counts_are_sparse() {
        assert_eq!(zodiac_name("73v"), Some("Sagittarius"));
        assert_eq!(zodiac_name("68v2"), Some("68v2"));
        assert_eq!(zodiac_name("1r"), None);
        assert_eq!(star_count("103r"), Some(19));
        assert_eq!(star_count("109r"), None);
    }
}
