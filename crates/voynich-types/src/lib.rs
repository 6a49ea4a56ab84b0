//! Shared vocabulary for Voynich transcription corpora.
//!
//! The transcription files come in two competing encodings (EVA and
//! Voynich-101) and the tooling also accepts plain natural-language text for
//! comparison. [`Dialect`] names those three inputs; the rest of this crate
//! describes what a parsed line can carry ([`Feature`]) and the page
//! classifications answered by the reference tables ([`Quire`], [`Section`],
//! [`LanguageHand`], [`SpecialGroup`]), all wrapped in [`Lookup`] so that the
//! symbolic `rose` folio and unmapped pages stay distinguishable.
//!
//! ```rust
//! use voynich_types::{Dialect, FeatureKind, Lookup, Section};
//!
//! assert_eq!(Dialect::from_flags("EVA", true), Dialect::Eva);
//! assert_eq!(FeatureKind::from_name("plant"), Some(FeatureKind::Plant));
//! assert_eq!(Lookup::Known(Section::Herbal).to_string(), "Herbal");
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Identifier of the symbolic foldout page that has no page number.
pub const ROSE_FOLIO: &str = "rose";

/// Transcription encoding of an input file.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Dialect {
    /// European Voynich Alphabet, with line-type codes and `{...}` annotations.
    #[default]
    Eva,
    /// Voynich-101, with label lines marked by non-numeric line indices.
    V101,
    /// Plain natural-language reference text (not a manuscript transcription).
    Natural,
}

impl Dialect {
    /// Map the legacy `(transcription, voynich)` pair onto a dialect.
    ///
    /// Non-manuscript input is always [`Dialect::Natural`]; any transcription
    /// name other than `EVA` is treated as Voynich-101.
    pub fn from_flags(transcription: &str, voynich: bool) -> Self {
        if !voynich {
            Dialect::Natural
        } else if transcription == "EVA" {
            Dialect::Eva
        } else {
            Dialect::V101
        }
    }

    /// Whether lines carry a `<locator>` and manuscript content.
    pub fn is_manuscript(self) -> bool {
        !matches!(self, Dialect::Natural)
    }

    /// The "gallows" glyphs of this encoding. Natural text is checked
    /// against the EVA set so it can serve as a baseline for the manuscript.
    pub fn gallows(self) -> &'static str {
        match self {
            Dialect::Eva | Dialect::Natural => "fkptFKPT",
            Dialect::V101 => "fghjklruvFGHJKLRUV",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dialect::Eva => "eva",
            Dialect::V101 => "v101",
            Dialect::Natural => "natural",
        })
    }
}

/// Returned when a dialect name is not one of `eva`, `v101` or `natural`.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unknown dialect {0:?} (expected eva, v101 or natural)")]
pub struct UnknownDialect(pub String);

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "eva" => Ok(Dialect::Eva),
            "v101" | "voyn_101" | "voyn101" => Ok(Dialect::V101),
            "natural" | "text" => Ok(Dialect::Natural),
            _ => Err(UnknownDialect(s.to_string())),
        }
    }
}

/// Kinds of inline `{...}` annotation kept by the EVA parser.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum FeatureKind {
    Diagram,
    Figure,
    Plant,
    Pond,
    Star,
}

impl FeatureKind {
    /// Parse the annotation keyword between the braces.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "diagram" => Some(FeatureKind::Diagram),
            "figure" => Some(FeatureKind::Figure),
            "plant" => Some(FeatureKind::Plant),
            "pond" => Some(FeatureKind::Pond),
            "star" => Some(FeatureKind::Star),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FeatureKind::Diagram => "diagram",
            FeatureKind::Figure => "figure",
            FeatureKind::Plant => "plant",
            FeatureKind::Pond => "pond",
            FeatureKind::Star => "star",
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An illustration reference found inside a line.
///
/// `offset` counts characters in the line text as it stood when the
/// annotation was removed, so earlier annotations on the same line are
/// already gone.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Feature {
    pub kind: FeatureKind,
    pub offset: usize,
}

/// Result of a page classification.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Lookup<T> {
    /// The symbolic [`ROSE_FOLIO`] page.
    Rose,
    Known(T),
    /// No table entry covers the page, or the identifier has no page number.
    Unknown,
}

impl<T> Lookup<T> {
    pub fn known(self) -> Option<T> {
        match self {
            Lookup::Known(value) => Some(value),
            Lookup::Rose | Lookup::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Lookup::Known(_))
    }
}

impl<T: fmt::Display> fmt::Display for Lookup<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Rose => f.write_str(ROSE_FOLIO),
            Lookup::Known(value) => value.fmt(f),
            Lookup::Unknown => f.write_str("Unknown"),
        }
    }
}

/// Physical gathering of consecutive folios, numbered from 1.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Quire(pub u8);

impl fmt::Display for Quire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.0)
    }
}

/// Thematic section of the manuscript.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Section {
    Herbal,
    Astrological,
    Balneological,
    Cosmological,
    Pharmaceutical,
    Recipes,
    Mixed,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Herbal,
        Section::Astrological,
        Section::Balneological,
        Section::Cosmological,
        Section::Pharmaceutical,
        Section::Recipes,
        Section::Mixed,
    ];
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Section::Herbal => "Herbal",
            Section::Astrological => "Astrological",
            Section::Balneological => "Balneological",
            Section::Cosmological => "Cosmological",
            Section::Pharmaceutical => "Pharmaceutical",
            Section::Recipes => "Recipes",
            Section::Mixed => "Mixed",
        })
    }
}

/// Scribal "language" classification (Currier A/B and refinements).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LanguageHand {
    A1,
    B2,
    A4,
    BX,
    B,
    A,
    /// Pages tentatively assigned to B (`B?`).
    BUncertain,
}

impl LanguageHand {
    pub const ALL: [LanguageHand; 7] = [
        LanguageHand::A1,
        LanguageHand::B2,
        LanguageHand::A4,
        LanguageHand::BX,
        LanguageHand::B,
        LanguageHand::A,
        LanguageHand::BUncertain,
    ];
}

impl fmt::Display for LanguageHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LanguageHand::A1 => "A1",
            LanguageHand::B2 => "B2",
            LanguageHand::A4 => "A4",
            LanguageHand::BX => "BX",
            LanguageHand::B => "B",
            LanguageHand::A => "A",
            LanguageHand::BUncertain => "B?",
        })
    }
}

/// Named page subsets used to compare A and B material.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SpecialGroup {
    HerbalRecipeAB,
    HerbalAB,
    HerbalBalneoAB,
    HerbalFakeAB,
    HerbalAstroAB,
    PharmaRecipeAB,
    AllAB,
    HerbalA,
    HerbalB,
    JustA,
    JustB,
}

impl SpecialGroup {
    pub const ALL: [SpecialGroup; 11] = [
        SpecialGroup::HerbalRecipeAB,
        SpecialGroup::HerbalAB,
        SpecialGroup::HerbalBalneoAB,
        SpecialGroup::HerbalFakeAB,
        SpecialGroup::HerbalAstroAB,
        SpecialGroup::PharmaRecipeAB,
        SpecialGroup::AllAB,
        SpecialGroup::HerbalA,
        SpecialGroup::HerbalB,
        SpecialGroup::JustA,
        SpecialGroup::JustB,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SpecialGroup::HerbalRecipeAB => "HerbalRecipeAB",
            SpecialGroup::HerbalAB => "HerbalAB",
            SpecialGroup::HerbalBalneoAB => "HerbalBalneoAB",
            SpecialGroup::HerbalFakeAB => "HerbalFakeAB",
            SpecialGroup::HerbalAstroAB => "HerbalAstroAB",
            SpecialGroup::PharmaRecipeAB => "PharmaRecipeAB",
            SpecialGroup::AllAB => "AllAB",
            SpecialGroup::HerbalA => "HerbalA",
            SpecialGroup::HerbalB => "HerbalB",
            SpecialGroup::JustA => "JustA",
            SpecialGroup::JustB => "JustB",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|group| group.name() == name)
    }
}

impl fmt::Display for SpecialGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialect_from_legacy_flags() {
        assert_eq!(Dialect::from_flags("EVA", true), Dialect::Eva);
        assert_eq!(Dialect::from_flags("V101", true), Dialect::V101);
        assert_eq!(Dialect::from_flags("anything", true), Dialect::V101);
        assert_eq!(Dialect::from_flags("EVA", false), Dialect::Natural);
        assert_eq!(Dialect::default(), Dialect::Eva);
    }

    #[test]
    fn dialect_parses_names() {
        assert_eq!("EVA".parse::<Dialect>(), Ok(Dialect::Eva));
        assert_eq!(" v101 ".parse::<Dialect>(), Ok(Dialect::V101));
        assert_eq!("natural".parse::<Dialect>(), Ok(Dialect::Natural));
        let err = "klingon".parse::<Dialect>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown dialect \"klingon\" (expected eva, v101 or natural)"
        );
    }

    #[test]
    fn natural_text_shares_eva_gallows() {
        assert_eq!(Dialect::Natural.gallows(), Dialect::Eva.gallows());
        assert_ne!(Dialect::V101.gallows(), Dialect::Eva.gallows());
    }

    #[test]
    fn every_hand_is_listed_once() {
        let names: Vec<String> = LanguageHand::ALL.iter().map(|h| h.to_string()).collect();
        assert_eq!(names, ["A1", "B2", "A4", "BX", "B", "A", "B?"]);
    }

    #[test]
    fn feature_kinds_are_a_closed_set() {
        for kind in ["diagram", "figure", "plant", "pond", "star"] {
            let parsed = FeatureKind::from_name(kind).unwrap();
            assert_eq!(parsed.as_str(), kind);
        }
        assert_eq!(FeatureKind::from_name("Plant"), None);
        assert_eq!(FeatureKind::from_name("fold"), None);
    }

    #[test]
    fn lookup_display_uses_sentinels() {
        assert_eq!(Lookup::<Quire>::Rose.to_string(), "rose");
        assert_eq!(Lookup::<Quire>::Unknown.to_string(), "Unknown");
        assert_eq!(Lookup::Known(Quire(13)).to_string(), "Q13");
        assert_eq!(Lookup::Known(LanguageHand::BUncertain).to_string(), "B?");
    }

    #[test]
    fn special_group_names_round_trip() {
        for group in SpecialGroup::ALL {
            assert_eq!(SpecialGroup::from_name(group.name()), Some(group));
        }
        assert_eq!(SpecialGroup::from_name("Nope"), None);
    }
}
