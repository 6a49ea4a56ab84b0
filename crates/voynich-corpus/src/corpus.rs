use std::collections::HashMap;

use voynich_types::Feature;

/// One physical transcription line after normalization.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Line {
    pub text: String,
    /// Illustration references removed from the line, in removal order.
    pub features: Vec<Feature>,
    /// The raw line ended with the `=` paragraph terminator.
    pub end_of_paragraph: bool,
    /// EVA star/label line (line type `S` or one of the known exceptions).
    pub star: bool,
    /// Voynich-101 label line (non-numeric line index).
    pub label: bool,
}

/// Everything parsed for one page, in document order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Folio {
    id: String,
    lines: Vec<Line>,
    paragraph_starts: Vec<usize>,
    end_lines: Option<String>,
    labels: Option<String>,
    stars: Vec<String>,
}

impl Folio {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Texts of the lines in document order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(|line| line.text.as_str())
    }

    /// Feature lists aligned with [`Folio::lines`].
    pub fn features(&self) -> impl Iterator<Item = &[Feature]> + '_ {
        self.lines.iter().map(|line| line.features.as_slice())
    }

    /// 1-based positions of the lines that open a paragraph.
    pub fn paragraph_starts(&self) -> &[usize] {
        &self.paragraph_starts
    }

    /// Paragraph-final lines joined with the configured separator.
    pub fn end_lines(&self) -> Option<&str> {
        self.end_lines.as_deref()
    }

    /// Label lines joined with the configured separator (Voynich-101 only).
    pub fn labels(&self) -> Option<&str> {
        self.labels.as_deref()
    }

    pub fn stars(&self) -> &[String] {
        &self.stars
    }

    pub(crate) fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub(crate) fn set_paragraph_starts(&mut self, starts: Vec<usize>) {
        self.paragraph_starts = starts;
    }

    pub(crate) fn push_star(&mut self, star: &str) {
        self.stars.push(star.to_string());
    }

    fn push_line(&mut self, line: Line, separator: &str) {
        if line.end_of_paragraph {
            append_joined(&mut self.end_lines, &line.text, separator);
        }
        if line.label {
            append_joined(&mut self.labels, &line.text, separator);
        }
        self.lines.push(line);
    }
}

/// The parsed transcription: folios in first-appearance order plus the
/// flattened text of every retained line.
///
/// Built once by the parser; read-only afterwards.
#[derive(Clone, Debug, Default)]
pub struct Corpus {
    folios: Vec<Folio>,
    positions: HashMap<String, usize>,
    full_text: String,
}

impl Corpus {
    /// Fetch a folio by identifier.
    pub fn folio(&self, id: &str) -> Option<&Folio> {
        self.positions.get(id).map(|&idx| &self.folios[idx])
    }

    /// Iterate over folios in the order they first appeared in the input.
    pub fn folios(&self) -> impl Iterator<Item = &Folio> + '_ {
        self.folios.iter()
    }

    /// Folios whose identifier satisfies `keep`, e.g. a section lookup.
    pub fn folios_where<'a, F>(&'a self, keep: F) -> impl Iterator<Item = &'a Folio> + 'a
    where
        F: Fn(&str) -> bool + 'a,
    {
        self.folios.iter().filter(move |folio| keep(folio.id()))
    }

    /// Space-joined text of the folios selected by `keep`, in parse order
    /// within each folio.
    pub fn text_where<F>(&self, keep: F) -> String
    where
        F: Fn(&str) -> bool,
    {
        let mut out = String::new();
        for folio in self.folios.iter().filter(|folio| keep(folio.id())) {
            for text in folio.texts() {
                out.push_str(text);
                out.push(' ');
            }
        }
        out
    }

    /// Every retained line's text followed by a single space, in parse order.
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    pub fn folio_count(&self) -> usize {
        self.folios.len()
    }

    /// Number of retained lines across all folios.
    pub fn line_count(&self) -> usize {
        self.folios.iter().map(Folio::line_count).sum()
    }

    /// Lines of a folio, or an empty slice when the folio is absent.
    pub fn lines(&self, id: &str) -> &[Line] {
        self.folio(id).map(Folio::lines).unwrap_or(&[])
    }

    pub fn paragraph_starts(&self, id: &str) -> &[usize] {
        self.folio(id).map(Folio::paragraph_starts).unwrap_or(&[])
    }

    pub fn end_lines(&self, id: &str) -> Option<&str> {
        self.folio(id).and_then(Folio::end_lines)
    }

    pub fn labels(&self, id: &str) -> Option<&str> {
        self.folio(id).and_then(Folio::labels)
    }

    pub fn stars(&self, id: &str) -> &[String] {
        self.folio(id).map(Folio::stars).unwrap_or(&[])
    }

    pub(crate) fn folio_mut(&mut self, id: &str) -> &mut Folio {
        let idx = match self.positions.get(id) {
            Some(&idx) => idx,
            None => {
                self.folios.push(Folio::new(id));
                self.positions.insert(id.to_string(), self.folios.len() - 1);
                self.folios.len() - 1
            }
        };
        &mut self.folios[idx]
    }

    pub(crate) fn push_line(&mut self, folio: &str, line: Line, separator: &str) {
        self.full_text.push_str(&line.text);
        self.full_text.push(' ');
        self.folio_mut(folio).push_line(line, separator);
    }
}

fn append_joined(slot: &mut Option<String>, text: &str, separator: &str) {
    match slot {
        Some(existing) => {
            existing.push_str(separator);
            existing.push_str(text);
        }
        None => *slot = Some(text.to_string()),
    }
}
