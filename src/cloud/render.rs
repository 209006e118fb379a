use std::io::{self, Write};

use serde::Serialize;

use super::select::RankedTerm;

/// Stylesheet used when no other href is configured.
pub const DEFAULT_STYLESHEET: &str = "http://www.cse.ohio-state.edu/software/2231\
/web-sw2/assignments/projects/tag-cloud-generator/data/tagcloud.css";

/// A collaborator that accepts the finished term list.
///
/// The core has no opinion on the output format; it only hands over the
/// document label, the requested count and the ordered
/// (term, count, weight) entries.
pub trait RendererSink {
    fn render(&mut self, label: &str, requested: usize, entries: &[RankedTerm]) -> io::Result<()>;
}

impl<T: RendererSink + ?Sized> RendererSink for Box<T> {
    fn render(&mut self, label: &str, requested: usize, entries: &[RankedTerm]) -> io::Result<()> {
        (**self).render(label, requested, entries)
    }
}

/// Emits the tag cloud as an HTML page.
///
/// One span per term, `class="f{weight}"` selecting the font size and a
/// `title` tooltip carrying the raw count. Term text and label are escaped.
pub struct HtmlRenderer<W: Write> {
    out: W,
    stylesheet: String,
}

impl<W: Write> HtmlRenderer<W> {
    pub fn new(out: W) -> Self {
        HtmlRenderer {
            out,
            stylesheet: DEFAULT_STYLESHEET.to_string(),
        }
    }

    /// Use a custom stylesheet href instead of [`DEFAULT_STYLESHEET`].
    pub fn with_stylesheet<S: Into<String>>(mut self, href: S) -> Self {
        self.stylesheet = href.into();
        self
    }

    fn header(&mut self, label: &str, requested: usize) -> io::Result<()> {
        let title = format!("Top {} Words in {}", requested, escape(label));
        writeln!(self.out, "<html>")?;
        writeln!(self.out, "<head>")?;
        writeln!(self.out, "<title>{}</title>", title)?;
        writeln!(
            self.out,
            "<link href=\"{}\" rel=\"stylesheet\" type=\"text/css\">",
            self.stylesheet
        )?;
        writeln!(self.out, "</head>")?;
        writeln!(self.out, "<body>")?;
        writeln!(self.out, "<h2>{}</h2>", title)?;
        writeln!(self.out, "<hr>")?;
        writeln!(self.out, "<div class=\"cdiv\">")?;
        writeln!(self.out, "<p class=\"cbox\">")
    }

    fn footer(&mut self) -> io::Result<()> {
        writeln!(self.out, "</p>")?;
        writeln!(self.out, "</div>")?;
        writeln!(self.out, "</body>")?;
        writeln!(self.out, "</html>")?;
        self.out.flush()
    }
}

impl<W: Write> RendererSink for HtmlRenderer<W> {
    fn render(&mut self, label: &str, requested: usize, entries: &[RankedTerm]) -> io::Result<()> {
        self.header(label, requested)?;
        for entry in entries {
            writeln!(
                self.out,
                "<span style=\"cursor:default\" class=\"f{}\" title=\"count: {}\">{}</span>",
                entry.weight,
                entry.count,
                escape(&entry.term)
            )?;
        }
        self.footer()
    }
}

#[derive(Serialize)]
struct CloudDocument<'a> {
    label: &'a str,
    requested: usize,
    terms: &'a [RankedTerm],
}

/// Emits the term list as a pretty-printed JSON document.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        JsonRenderer { out }
    }
}

impl<W: Write> RendererSink for JsonRenderer<W> {
    fn render(&mut self, label: &str, requested: usize, entries: &[RankedTerm]) -> io::Result<()> {
        let doc = CloudDocument {
            label,
            requested,
            terms: entries,
        };
        serde_json::to_writer_pretty(&mut self.out, &doc).map_err(io::Error::from)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
