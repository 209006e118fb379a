/// This crate turns a plain-text document into an HTML tag cloud of its
/// most frequent terms.
pub mod cloud;

/// Tag Cloud Generator
/// The top-level struct of this crate, driving the whole pipeline:
/// tokenize → count → select top N → scale weights → render.
///
/// It holds only the separator configuration; every run recomputes its
/// selection from scratch, so the generator can be reused across documents.
///
/// The I/O ends of the pipeline are traits (`DocumentSource`,
/// `RendererSink`), so the same core works against files, stdin, in-memory
/// strings, or any custom renderer.
pub use cloud::TagCloudGenerator;

/// Per-run statistics returned by `TagCloudGenerator::generate`:
/// distinct terms seen, total occurrences counted, entries rendered.
pub use cloud::CloudSummary;

/// Parse a requested term count from user input, rejecting anything that is
/// not a non-negative integer before processing starts.
pub use cloud::parse_requested;

/// Term Frequency structure
/// Counts occurrences of each lowercased term within one document over a
/// single forward pass. Backed by an insertion-ordered map, so iteration
/// order is deterministic.
pub use cloud::term::TermFrequency;

/// Separator Set and tokenizer entry point
/// The immutable set of characters treated as word boundaries. Its
/// `tokens()` method yields a lazy iterator of maximal word/separator runs
/// whose concatenation reproduces the input exactly.
pub use cloud::tokenizer::{SeparatorSet, Token, Tokens};

/// Top-N selection
/// `select_top` picks the N most frequent terms with a deterministic
/// alphabetical tie-break at the boundary and returns them alphabetically
/// ordered together with the min/max count of the selected subset.
pub use cloud::select::{select_top, RankedTerm, Selection};

/// Weight scaling
/// Maps each selected term's count to a font-size class in
/// `[0, MAX_WEIGHT]` by linear interpolation over the selected subset;
/// all-equal counts collapse to `DEFAULT_WEIGHT`.
pub use cloud::scale::{weigh, weight_for, DEFAULT_WEIGHT, MAX_WEIGHT};

/// Document sources
/// The reading end of the pipeline: a file, stdin, or an in-memory string.
pub use cloud::source::{DocumentSource, FileSource, StdinSource, StringSource};

/// Renderer sinks
/// The writing end of the pipeline: the classic HTML page or a JSON
/// document of the (term, count, weight) triples.
pub use cloud::render::{HtmlRenderer, JsonRenderer, RendererSink, DEFAULT_STYLESHEET};

/// Error taxonomy
/// `Read` (source failed), `InvalidRequest` (bad term count),
/// `Write` (sink failed, with retry context). All terminal for a run.
pub use cloud::error::{CloudError, Result};
