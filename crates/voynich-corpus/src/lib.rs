//! Parse Voynich manuscript transcriptions into a per-folio corpus.
//!
//! Input files are line-oriented: each line is `<LOCATOR>CONTENT`, where the
//! locator names the folio and the line type (EVA) or line index
//! (Voynich-101). Plain natural-language text is accepted too, one synthetic
//! folio per non-empty line, so the same statistics can be run on a reference
//! text.
//!
//! Parsing is best-effort: a malformed line stops the scan, but the corpus
//! built so far is returned alongside the error in [`Parsed`].
//!
//! # Example
//! ```no_run
//! use voynich_corpus::{Corpus, LoadMode, ParserConfig};
//! use voynich_types::Dialect;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ParserConfig::new(Dialect::Eva).with_separator("|");
//! let parsed = Corpus::load_with_mode("eva_takeshi.txt", &config, LoadMode::Owned)?;
//! if let Some(err) = &parsed.error {
//!     eprintln!("partial parse: {err}");
//! }
//! for folio in parsed.corpus.folios() {
//!     println!("{}: {} lines", folio.id(), folio.lines().len());
//! }
//! # Ok(()) }
//! ```

mod corpus;
pub mod glyph;
mod parser;
mod source;

use std::path::Path;

use anyhow::Result;
use tracing::info;

pub use corpus::{Corpus, Folio, Line};
pub use parser::{ParseError, Parsed, ParserConfig, parse_lines, parse_str};
pub use source::{LoadMode, UnknownLoadMode, decode_latin1};

impl Corpus {
    /// Parse a transcription file, memory-mapping it.
    pub fn load(path: impl AsRef<Path>, config: &ParserConfig) -> Result<Parsed> {
        Self::load_with_mode(path, config, LoadMode::Mmap)
    }

    /// Parse a transcription file choosing how it is read.
    ///
    /// I/O failures are errors; a malformed line is not, see [`Parsed::error`].
    pub fn load_with_mode(
        path: impl AsRef<Path>,
        config: &ParserConfig,
        mode: LoadMode,
    ) -> Result<Parsed> {
        let path = path.as_ref();
        info!("processing {} as {}", path.display(), config.dialect);
        let text = source::read_latin1(path, mode)?;
        let parsed = parse_str(&text, config);
        info!(
            "total of {} lines in {} ({} folios, {} retained lines)",
            parsed.lines_read,
            path.display(),
            parsed.corpus.folio_count(),
            parsed.corpus.line_count()
        );
        Ok(parsed)
    }
}
