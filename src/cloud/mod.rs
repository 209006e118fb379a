pub mod error;
pub mod render;
pub mod scale;
pub mod select;
pub mod source;
pub mod term;
pub mod tokenizer;

use self::error::{CloudError, Result};
use self::render::RendererSink;
use self::select::select_top;
use self::source::DocumentSource;
use self::term::TermFrequency;
use self::tokenizer::SeparatorSet;

/// TagCloudGenerator
/// Owns the separator configuration and drives one document through the
/// pipeline: read → count → select → weigh → render.
///
/// A single run is one linear, synchronous pass. The generator keeps no
/// state between runs; every selection is recomputed from scratch.
#[derive(Debug, Clone, Default)]
pub struct TagCloudGenerator {
    separators: SeparatorSet,
}

/// Per-run statistics, reported for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloudSummary {
    /// Distinct lowercase terms in the document.
    pub distinct_terms: usize,
    /// Total word occurrences counted.
    pub total_terms: u64,
    /// Entries actually handed to the renderer: min(requested, distinct).
    pub rendered_terms: usize,
}

impl TagCloudGenerator {
    /// Generator with the default separator set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator with a custom separator set.
    pub fn with_separators(separators: SeparatorSet) -> Self {
        TagCloudGenerator { separators }
    }

    #[inline]
    pub fn separators(&self) -> &SeparatorSet {
        &self.separators
    }

    /// Run the whole pipeline for one document.
    ///
    /// The source is read exactly once; a read failure aborts before any
    /// counting result exists. A sink failure is reported with the label and
    /// requested count attached so the caller can retry the render.
    pub fn generate<S, R>(
        &self,
        label: &str,
        requested: usize,
        source: &mut S,
        sink: &mut R,
    ) -> Result<CloudSummary>
    where
        S: DocumentSource,
        R: RendererSink,
    {
        let text = source.read_all().map_err(CloudError::Read)?;

        let mut freq = TermFrequency::new();
        freq.add_text(&text, &self.separators);

        let selection = select_top(&freq, requested);
        let entries = scale::weigh(&selection);

        sink.render(label, requested, &entries)
            .map_err(|source| CloudError::Write {
                label: label.to_string(),
                requested,
                source,
            })?;

        Ok(CloudSummary {
            distinct_terms: freq.term_num(),
            total_terms: freq.total_term_count(),
            rendered_terms: entries.len(),
        })
    }
}

/// Parse a requested term count from user input.
///
/// Rejects anything that is not a non-negative integer (so also negatives)
/// before any processing starts.
pub fn parse_requested(input: &str) -> Result<usize> {
    input
        .trim()
        .parse::<usize>()
        .map_err(|_| CloudError::InvalidRequest(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::render::{HtmlRenderer, RendererSink};
    use super::select::RankedTerm;
    use super::source::{DocumentSource, StringSource};
    use super::*;

    /// Sink that records what the pipeline hands over.
    #[derive(Default)]
    struct CapturingSink {
        label: String,
        requested: usize,
        entries: Vec<RankedTerm>,
    }

    impl RendererSink for CapturingSink {
        fn render(
            &mut self,
            label: &str,
            requested: usize,
            entries: &[RankedTerm],
        ) -> io::Result<()> {
            self.label = label.to_string();
            self.requested = requested;
            self.entries = entries.to_vec();
            Ok(())
        }
    }

    struct FailingSource;

    impl DocumentSource for FailingSource {
        fn read_all(&mut self) -> io::Result<String> {
            Err(io::Error::new(io::ErrorKind::NotFound, "gone"))
        }
    }

    struct FailingSink;

    impl RendererSink for FailingSink {
        fn render(&mut self, _: &str, _: usize, _: &[RankedTerm]) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn end_to_end_scenario() {
        let generator = TagCloudGenerator::new();
        let mut source = StringSource::new("the cat sat on the mat. THE CAT ran.");
        let mut sink = CapturingSink::default();

        let summary = generator
            .generate("fixture", 3, &mut source, &mut sink)
            .unwrap();

        assert_eq!(summary.distinct_terms, 6);
        assert_eq!(summary.total_terms, 9);
        assert_eq!(summary.rendered_terms, 3);
        assert_eq!(sink.label, "fixture");
        assert_eq!(sink.requested, 3);
        // "the"(3) and "cat"(2) win; the 1-count tie breaks to "mat";
        // output is alphabetical, weights interpolate between min=1 and max=3
        assert_eq!(
            sink.entries,
            vec![
                RankedTerm {
                    term: "cat".to_string(),
                    count: 2,
                    weight: 24,
                },
                RankedTerm {
                    term: "mat".to_string(),
                    count: 1,
                    weight: 0,
                },
                RankedTerm {
                    term: "the".to_string(),
                    count: 3,
                    weight: 48,
                },
            ]
        );
    }

    #[test]
    fn zero_requested_reaches_the_sink_as_empty() {
        let generator = TagCloudGenerator::new();
        let mut source = StringSource::new("words words words");
        let mut sink = CapturingSink::default();
        let summary = generator
            .generate("doc", 0, &mut source, &mut sink)
            .unwrap();
        assert_eq!(summary.rendered_terms, 0);
        assert!(sink.entries.is_empty());
    }

    #[test]
    fn separator_only_document_renders_empty_for_any_requested() {
        let generator = TagCloudGenerator::new();
        for requested in [0, 1, 50] {
            let mut source = StringSource::new(" .,!? \t\n ");
            let mut sink = CapturingSink::default();
            let summary = generator
                .generate("blank", requested, &mut source, &mut sink)
                .unwrap();
            assert_eq!(summary.distinct_terms, 0);
            assert!(sink.entries.is_empty());
        }
    }

    #[test]
    fn read_failure_maps_to_read_error() {
        let generator = TagCloudGenerator::new();
        let mut sink = CapturingSink::default();
        let err = generator
            .generate("doc", 5, &mut FailingSource, &mut sink)
            .unwrap_err();
        assert!(matches!(err, CloudError::Read(_)));
        // nothing was rendered
        assert!(sink.entries.is_empty());
    }

    #[test]
    fn write_failure_keeps_label_and_requested() {
        let generator = TagCloudGenerator::new();
        let mut source = StringSource::new("one two two");
        let err = generator
            .generate("report.txt", 2, &mut source, &mut FailingSink)
            .unwrap_err();
        match err {
            CloudError::Write {
                label, requested, ..
            } => {
                assert_eq!(label, "report.txt");
                assert_eq!(requested, 2);
            }
            other => panic!("expected Write, got {:?}", other),
        }
    }

    #[test]
    fn generate_into_html() {
        let generator = TagCloudGenerator::new();
        let mut source = StringSource::new("alpha alpha beta");
        let mut out = Vec::new();
        let mut sink = HtmlRenderer::new(&mut out);
        generator
            .generate("mini", 2, &mut source, &mut sink)
            .unwrap();
        let html = String::from_utf8(out).unwrap();
        assert!(html.contains("Top 2 Words in mini"));
        assert!(html.contains(">alpha</span>"));
        assert!(html.contains(">beta</span>"));
    }

    #[test]
    fn parse_requested_accepts_non_negative_integers() {
        assert_eq!(parse_requested("0").unwrap(), 0);
        assert_eq!(parse_requested(" 25 ").unwrap(), 25);
    }

    #[test]
    fn parse_requested_rejects_everything_else() {
        for bad in ["-1", "ten", "3.5", ""] {
            let err = parse_requested(bad).unwrap_err();
            assert!(matches!(err, CloudError::InvalidRequest(_)), "{:?}", bad);
        }
    }

    #[test]
    fn custom_separators_change_the_word_boundaries() {
        let generator =
            TagCloudGenerator::with_separators(SeparatorSet::from_chars("|"));
        let mut source = StringSource::new("a b|a b|c");
        let mut sink = CapturingSink::default();
        generator.generate("doc", 10, &mut source, &mut sink).unwrap();
        let terms: Vec<&str> = sink.entries.iter().map(|e| e.term.as_str()).collect();
        assert_eq!(terms, vec!["a b", "c"]);
    }
}
