//! Hand-curated page groupings (after the layout notes at voynich.nu).
//!
//! Pages are the numeric part of a folio identifier; recto/verso suffixes and
//! foldout panel numbers are stripped before lookup. Gaps are intentional:
//! missing leaves simply belong to no range.

use voynich_types::{LanguageHand, Quire, Section, SpecialGroup};

/// Inclusive run of page numbers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageRange {
    pub first: u32,
    pub last: u32,
}

impl PageRange {
    pub fn contains(self, page: u32) -> bool {
        (self.first..=self.last).contains(&page)
    }
}

const fn span(first: u32, last: u32) -> PageRange {
    PageRange { first, last }
}

const fn page(n: u32) -> PageRange {
    PageRange { first: n, last: n }
}

pub(crate) static QUIRES: &[(Quire, &[PageRange])] = &[
    (Quire(1), &[span(1, 8)]),
    (Quire(2), &[span(9, 16)]),
    (Quire(3), &[span(17, 24)]),
    (Quire(4), &[span(25, 32)]),
    (Quire(5), &[span(33, 40)]),
    (Quire(6), &[span(41, 48)]),
    (Quire(7), &[span(49, 56)]),
    (Quire(8), &[span(57, 66)]),
    (Quire(9), &[span(67, 68)]),
    (Quire(10), &[span(69, 70)]),
    (Quire(11), &[span(71, 72)]),
    (Quire(12), &[span(73, 74)]),
    (Quire(13), &[span(75, 84)]),
    (Quire(14), &[span(85, 86)]),
    (Quire(15), &[span(87, 90)]),
    (Quire(16), &[span(91, 92)]),
    (Quire(17), &[span(93, 96)]),
    (Quire(18), &[span(97, 98)]),
    (Quire(19), &[span(99, 102)]),
    (Quire(20), &[span(103, 116)]),
];

pub(crate) static SECTIONS: &[(Section, &[PageRange])] = &[
    (
        Section::Herbal,
        &[span(1, 56), page(87), page(90), span(93, 96)],
    ),
    (Section::Astrological, &[span(67, 74)]),
    (Section::Balneological, &[span(75, 84)]),
    (Section::Cosmological, &[span(85, 86)]),
    (
        Section::Pharmaceutical,
        &[span(88, 89), span(99, 102)],
    ),
    (Section::Recipes, &[span(103, 116)]),
    (Section::Mixed, &[span(57, 66)]),
];

const HAND_A1: &[PageRange] = &[
    span(1, 25),
    span(27, 30),
    page(32),
    span(35, 38),
    page(42),
    span(44, 45),
    page(47),
    page(49),
    span(51, 54),
    page(56),
];

const HAND_B2: &[PageRange] = &[
    page(26),
    page(31),
    span(33, 34),
    span(39, 41),
    page(43),
    page(46),
    page(48),
    page(50),
    page(55),
    page(57),
    span(75, 84),
];

const HAND_A4: &[PageRange] = &[
    span(87, 88),
    page(93),
    page(96),
    span(99, 101),
];

const HAND_BX: &[PageRange] = &[span(103, 106)];

const HAND_B: &[PageRange] = &[page(66), span(107, 116)];

const HAND_A: &[PageRange] = &[page(58), span(89, 90), page(102)];

const HAND_B_UNCERTAIN: &[PageRange] = &[span(67, 74)];

pub(crate) static LANGUAGE_HANDS: &[(LanguageHand, &[PageRange])] = &[
    (LanguageHand::A1, HAND_A1),
    (LanguageHand::B2, HAND_B2),
    (LanguageHand::A4, HAND_A4),
    (LanguageHand::BX, HAND_BX),
    (LanguageHand::B, HAND_B),
    (LanguageHand::A, HAND_A),
    (LanguageHand::BUncertain, HAND_B_UNCERTAIN),
];

const HERBAL_B: &[PageRange] = &[
    page(26),
    page(31),
    span(33, 34),
    span(39, 41),
    page(43),
    page(46),
    page(48),
    page(50),
    page(55),
];

/// Page sets of the special groups; the A/B unions reuse the hand tables.
pub(crate) static SPECIAL_GROUPS: &[(SpecialGroup, &[&[PageRange]])] = &[
    (SpecialGroup::HerbalRecipeAB, &[&[span(107, 116), span(1, 25)]]),
    (
        SpecialGroup::HerbalAB,
        &[&[span(1, 56), page(87), page(90), span(93, 96)]],
    ),
    (SpecialGroup::HerbalBalneoAB, &[&[span(1, 25), span(75, 84)]]),
    (SpecialGroup::HerbalFakeAB, &[&[span(13, 25), span(1, 12)]]),
    (SpecialGroup::HerbalAstroAB, &[&[span(1, 12), span(67, 74)]]),
    (
        SpecialGroup::PharmaRecipeAB,
        &[&[span(88, 89), span(99, 102), span(103, 116)]],
    ),
    (SpecialGroup::AllAB, &[&[span(1, 116)]]),
    (SpecialGroup::HerbalA, &[&[span(1, 25)]]),
    (SpecialGroup::HerbalB, &[HERBAL_B]),
    (SpecialGroup::JustA, &[HAND_A1, HAND_A4, HAND_A]),
    (
        SpecialGroup::JustB,
        &[HAND_B2, HAND_BX, HAND_B, HAND_B_UNCERTAIN],
    ),
];

pub(crate) static ZODIAC_NAMES: &[(&str, &str)] = &[
    ("70v2", "Pisces"),
    ("70v1", "Aries (Dark)"),
    ("71r", "Aries (Light)"),
    ("71v", "Taurus (Light)"),
    ("72r1", "Taurus (Dark)"),
    ("72r2", "Gemini"),
    ("72r3", "Cancer"),
    ("72v3", "Leo"),
    ("72v2", "Virgo"),
    ("72v1", "Libra"),
    ("73r", "Scorpio"),
    ("73v", "Sagittarius"),
    ("67r1", "67r1"),
    ("67r2", "67r2"),
    ("68r1", "68r1"),
    ("68r2", "68r2"),
    ("68r3", "68r3"),
    ("68v2", "68v2"),
];

// Counted by hand from the recipe pages; 109r-110v are missing leaves.
pub(crate) static STAR_COUNTS: &[(&str, u32)] = &[
    ("103r", 19),
    ("103v", 14),
    ("104r", 13),
    ("104v", 13),
    ("105r", 10),
    ("105v", 10),
    ("106r", 16),
    ("106v", 14),
    ("107r", 15),
    ("107v", 15),
    ("108r", 16),
    ("108v", 16),
    ("111r", 17),
    ("111v", 19),
    ("112r", 12),
    ("112v", 13),
    ("113r", 16),
    ("113v", 15),
    ("114r", 13),
    ("114v", 12),
    ("115r", 13),
    ("115v", 13),
    ("116r", 10),
];
