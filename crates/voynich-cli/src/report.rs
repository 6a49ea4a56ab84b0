use std::cmp::Reverse;

use serde::Serialize;
use voynich_corpus::Parsed;
use voynich_stats::{is_gallows_word, mark_word_boundaries, ngrams, text_entropy};
use voynich_tables::{language_hand, section};
use voynich_types::{Dialect, LanguageHand, Lookup, Section};

const PREVIEW_CHARS: usize = 80;

#[derive(Debug, Clone, Copy)]
pub struct NgramWindow {
    pub min: usize,
    pub max: usize,
    pub top: usize,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub dialect: String,
    pub complete: bool,
    pub error: Option<String>,
    pub lines_read: usize,
    pub folios: usize,
    pub lines: usize,
    pub preview: String,
    pub entropy: f64,
    pub words: usize,
    pub gallows_words: usize,
    pub groups: Vec<GroupEntropy>,
    pub top_ngrams: Vec<NgramCount>,
}

#[derive(Debug, Serialize)]
pub struct GroupEntropy {
    pub group: String,
    pub folios: usize,
    pub entropy: f64,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct NgramCount {
    pub ngram: String,
    pub count: usize,
}

pub fn build(parsed: &Parsed, dialect: Dialect, window: NgramWindow) -> Report {
    let corpus = &parsed.corpus;
    let text = corpus.full_text();
    let words: Vec<&str> = text.split_whitespace().collect();
    let gallows_words = words
        .iter()
        .filter(|word| is_gallows_word(dialect, word))
        .count();

    let mut groups = Vec::new();
    if dialect.is_manuscript() {
        for wanted in Section::ALL {
            let keep = |id: &str| section(id) == Lookup::Known(wanted);
            push_group(&mut groups, wanted.to_string(), parsed, keep);
        }
        for wanted in LanguageHand::ALL {
            let keep = |id: &str| language_hand(id) == Lookup::Known(wanted);
            push_group(&mut groups, format!("hand {wanted}"), parsed, keep);
        }
    }

    let marked = mark_word_boundaries(text);
    let mut top_ngrams: Vec<NgramCount> = ngrams(&marked, window.min, window.max)
        .into_iter()
        .map(|(ngram, count)| NgramCount { ngram, count })
        .collect();
    top_ngrams.sort_by(|a, b| {
        Reverse(a.count)
            .cmp(&Reverse(b.count))
            .then_with(|| a.ngram.cmp(&b.ngram))
    });
    top_ngrams.truncate(window.top);

    Report {
        dialect: dialect.to_string(),
        complete: parsed.is_complete(),
        error: parsed.error.as_ref().map(ToString::to_string),
        lines_read: parsed.lines_read,
        folios: corpus.folio_count(),
        lines: corpus.line_count(),
        preview: text.chars().take(PREVIEW_CHARS).collect(),
        entropy: round3(text_entropy(text)),
        words: words.len(),
        gallows_words,
        groups,
        top_ngrams,
    }
}

fn push_group<F>(groups: &mut Vec<GroupEntropy>, group: String, parsed: &Parsed, keep: F)
where
    F: Fn(&str) -> bool + Copy,
{
    let folios = parsed.corpus.folios_where(keep).count();
    if folios == 0 {
        return;
    }
    let text = parsed.corpus.text_where(keep);
    groups.push(GroupEntropy {
        group,
        folios,
        entropy: round3(text_entropy(&text)),
    });
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use voynich_corpus::{ParserConfig, parse_str};

    const WINDOW: NgramWindow = NgramWindow {
        min: 3,
        max: 3,
        top: 2,
    };

    #[test]
    fn reports_sections_and_top_ngrams() {
        let input = "<f1r.P1>ol.dy.ol.dy=\n<f75r.P1>qokedy.ol\n";
        let parsed = parse_str(input, &ParserConfig::default());
        let report = build(&parsed, Dialect::Eva, WINDOW);

        assert!(report.complete);
        assert_eq!(report.folios, 2);
        assert_eq!(report.words, 6);
        assert_eq!(report.gallows_words, 1);
        let names: Vec<&str> = report.groups.iter().map(|g| g.group.as_str()).collect();
        assert_eq!(names, ["Herbal", "Balneological", "hand A1", "hand B2"]);
        assert_eq!(
            report.top_ngrams[0],
            NgramCount {
                ngram: "l_d".to_string(),
                count: 2
            }
        );
    }

    #[test]
    fn natural_text_has_no_manuscript_groups() {
        let parsed = parse_str("To be, or not to be\n", &ParserConfig::new(Dialect::Natural));
        let report = build(&parsed, Dialect::Natural, WINDOW);
        assert!(report.groups.is_empty());
        assert_eq!(report.preview, "to be or not to be ");
        assert_eq!(report.gallows_words, 3);
    }

    #[test]
    fn serializes_partial_parse() {
        let parsed = parse_str("<f1r.P1>daiin\nbroken\n", &ParserConfig::default());
        let report = build(&parsed, Dialect::Eva, WINDOW);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["complete"], false);
        assert_eq!(json["lines_read"], 2);
        assert!(json["error"].as_str().unwrap().contains("line 2"));
    }
}
