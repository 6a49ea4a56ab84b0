//! Single-pass, order-dependent scan of a transcription into a [`Corpus`].
//!
//! Manuscript lines look like `<f67r2.S1.3;H>text{figure}.more=`: a locator
//! (ignored prefix character, folio, line type or index) and the content.
//! The scan carries the open folio, its line counter and the paragraph marker
//! from one line to the next, so line order matters. The first malformed
//! line stops the scan; everything built before it is kept and the error is
//! reported next to the partial corpus in [`Parsed`].

use thiserror::Error;
use tracing::{debug, warn};
use voynich_types::{Dialect, Feature, FeatureKind};

use crate::corpus::{Corpus, Line};
use crate::glyph;

/// Folios whose star lines hold several space-separated star names.
const MULTI_STAR_FOLIOS: &[&str] = &["68v2"];

/// Parser settings chosen once per input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParserConfig {
    pub dialect: Dialect,
    /// Joins multiple end lines or labels of one folio.
    pub separator: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::Eva,
            separator: "|".to_string(),
        }
    }
}

impl ParserConfig {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

/// Why a scan stopped early. Line numbers are 1-based.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    #[error("line {line}: no '>' between locator and text")]
    MissingContent { line: usize },
    #[error("line {line}: locator has no line type or index field")]
    MissingLineType { line: usize },
    #[error("line {line}: empty line type in locator")]
    EmptyLineType { line: usize },
    #[error("line {line}: '{{' without a closing '}}'")]
    UnclosedAnnotation { line: usize },
}

/// Outcome of a scan: the corpus built so far and, if the scan stopped
/// early, the reason.
#[derive(Clone, Debug, Default)]
pub struct Parsed {
    pub corpus: Corpus,
    pub error: Option<ParseError>,
    /// Physical input lines consumed, including a failing one.
    pub lines_read: usize,
}

impl Parsed {
    /// Whether the whole input was consumed.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Parse transcription text that is already in memory.
pub fn parse_str(input: &str, config: &ParserConfig) -> Parsed {
    let mut lines: Vec<&str> = input.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    parse_lines(lines, config)
}

/// Parse a sequence of raw lines (with or without trailing `\r`).
pub fn parse_lines<'a, I>(lines: I, config: &ParserConfig) -> Parsed
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scanner = Scanner::new(config);
    let mut error = None;
    for raw in lines {
        if let Err(err) = scanner.feed(raw) {
            warn!("parse stopped early: {err}");
            error = Some(err);
            break;
        }
    }
    let lines_read = scanner.lines_read;
    Parsed {
        corpus: scanner.finish(),
        error,
        lines_read,
    }
}

struct Locator<'a> {
    folio: &'a str,
    /// EVA line type (`P1`, `S2`, `L1`, ...) or Voynich-101 line index.
    field: &'a str,
}

struct Scanner<'c> {
    config: &'c ParserConfig,
    corpus: Corpus,
    lines_read: usize,
    folio: Option<String>,
    line_on_folio: usize,
    paragraph_marker: Option<String>,
    paragraph_starts: Vec<usize>,
}

impl<'c> Scanner<'c> {
    fn new(config: &'c ParserConfig) -> Self {
        Self {
            config,
            corpus: Corpus::default(),
            lines_read: 0,
            folio: None,
            line_on_folio: 0,
            paragraph_marker: None,
            paragraph_starts: Vec::new(),
        }
    }

    fn feed(&mut self, raw: &str) -> Result<(), ParseError> {
        self.lines_read += 1;
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        match self.config.dialect {
            Dialect::Eva => self.feed_eva(raw),
            Dialect::V101 => self.feed_v101(raw),
            Dialect::Natural => {
                self.feed_natural(raw);
                Ok(())
            }
        }
    }

    fn feed_eva(&mut self, raw: &str) -> Result<(), ParseError> {
        let lineno = self.lines_read;
        let (locator, content) = split_locator(raw, lineno)?;
        let line_type = locator.field;
        let Some(kind) = line_type.chars().next() else {
            return Err(ParseError::EmptyLineType { line: lineno });
        };
        self.enter_folio(locator.folio);
        self.line_on_folio += 1;

        let mut text = glyph::fold_eva(content);
        let features = extract_features(&mut text, lineno)?;

        if kind == 'P' {
            if self.paragraph_marker.as_deref() != Some(line_type) {
                self.paragraph_starts.push(self.line_on_folio);
            }
            self.paragraph_marker = Some(line_type.to_string());
        }

        let end_of_paragraph = text.ends_with('=');
        let text = glyph::normalize_eva(&text);
        let star = is_star_line(locator.folio, kind);
        if star {
            let folio = self.corpus.folio_mut(locator.folio);
            if MULTI_STAR_FOLIOS.contains(&locator.folio) {
                text.split_whitespace().for_each(|name| folio.push_star(name));
            } else {
                folio.push_star(&text);
            }
        }

        let line = Line {
            text,
            features,
            end_of_paragraph,
            star,
            label: false,
        };
        self.corpus
            .push_line(locator.folio, line, &self.config.separator);
        Ok(())
    }

    fn feed_v101(&mut self, raw: &str) -> Result<(), ParseError> {
        let (locator, content) = split_locator(raw, self.lines_read)?;
        self.enter_folio(locator.folio);
        self.line_on_folio += 1;

        let trimmed = content.trim_matches(|c| matches!(c, ' ' | '\r' | '\n'));
        let end_of_paragraph = trimmed.ends_with('=');
        let label = locator.field.trim().parse::<i64>().is_err();
        let text = glyph::normalize_v101(&trimmed.replace(['=', '-'], ""));

        let line = Line {
            text,
            features: Vec::new(),
            end_of_paragraph,
            star: false,
            label,
        };
        self.corpus
            .push_line(locator.folio, line, &self.config.separator);
        Ok(())
    }

    fn feed_natural(&mut self, raw: &str) {
        let text = glyph::normalize_natural(raw);
        if text.is_empty() {
            return;
        }
        let folio = self.lines_read.to_string();
        let line = Line {
            text,
            ..Line::default()
        };
        self.corpus.push_line(&folio, line, &self.config.separator);
    }

    /// Switch the open folio, committing the previous one's paragraph starts.
    fn enter_folio(&mut self, folio: &str) {
        if self.folio.as_deref() == Some(folio) {
            return;
        }
        self.commit_paragraphs();
        // A folio seen earlier resumes its own numbering.
        let resumed = self.corpus.folio(folio);
        self.line_on_folio = resumed.map_or(0, |f| f.lines().len());
        self.paragraph_starts = resumed.map_or_else(Vec::new, |f| f.paragraph_starts().to_vec());
        self.paragraph_marker = None;
        self.folio = Some(folio.to_string());
    }

    fn commit_paragraphs(&mut self) {
        // A folio whose first line failed to parse never got a record.
        if let Some(open) = self.folio.take()
            && self.corpus.folio(&open).is_some()
        {
            debug!(
                folio = %open,
                paragraphs = self.paragraph_starts.len(),
                "committing folio"
            );
            let starts = std::mem::take(&mut self.paragraph_starts);
            self.corpus.folio_mut(&open).set_paragraph_starts(starts);
        }
    }

    fn finish(mut self) -> Corpus {
        self.commit_paragraphs();
        self.corpus
    }
}

fn split_locator(raw: &str, lineno: usize) -> Result<(Locator<'_>, &str), ParseError> {
    let mut segments = raw.split('>');
    let head = segments.next().unwrap_or_default();
    let content = segments
        .next()
        .ok_or(ParseError::MissingContent { line: lineno })?;

    let mut fields = head.trim_matches('<').split('.');
    let mut folio = fields.next().unwrap_or_default().chars();
    folio.next();
    let field = fields
        .next()
        .ok_or(ParseError::MissingLineType { line: lineno })?;

    Ok((
        Locator {
            folio: folio.as_str(),
            field,
        },
        content,
    ))
}

/// Strip every `{...}` annotation from `text`, keeping recognised kinds that
/// do not open the line.
///
/// Offsets are measured in characters in the text as it stands when each
/// annotation is removed.
fn extract_features(text: &mut String, lineno: usize) -> Result<Vec<Feature>, ParseError> {
    let mut features = Vec::new();
    while let Some(open) = text.find('{') {
        let close = text[open..]
            .find('}')
            .map(|rel| open + rel)
            .ok_or(ParseError::UnclosedAnnotation { line: lineno })?;
        let offset = text[..open].chars().count();
        if offset > 0
            && let Some(kind) = FeatureKind::from_name(&text[open + 1..close])
        {
            features.push(Feature { kind, offset });
        }
        text.replace_range(open..=close, "");
    }
    Ok(features)
}

/// Star/label lines: line type `S`, plus the astronomical pages whose labels
/// were transcribed under other line types.
fn is_star_line(folio: &str, kind: char) -> bool {
    kind == 'S'
        || matches!(
            (folio, kind),
            ("67r2", 'L' | 'X' | 'Z') | ("67v2", 'F') | ("67v1" | "68r3" | "68v1", 'X')
        )
}
