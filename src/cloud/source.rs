use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// A collaborator that produces the raw document text.
///
/// The pipeline calls [`read_all`](DocumentSource::read_all) exactly once per
/// run; a failure aborts the run before any counts are exposed.
pub trait DocumentSource {
    fn read_all(&mut self) -> io::Result<String>;
}

impl<T: DocumentSource + ?Sized> DocumentSource for Box<T> {
    fn read_all(&mut self) -> io::Result<String> {
        (**self).read_all()
    }
}

/// Reads the whole file at a path.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileSource {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for FileSource {
    fn read_all(&mut self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }
}

/// Reads standard input to EOF. Used by the CLI when the input is `-`.
#[derive(Debug, Default)]
pub struct StdinSource;

impl DocumentSource for StdinSource {
    fn read_all(&mut self) -> io::Result<String> {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    }
}

/// Wraps a string already in memory. Handy for embedding and tests.
#[derive(Debug, Clone)]
pub struct StringSource {
    text: String,
}

impl StringSource {
    pub fn new<S: Into<String>>(text: S) -> Self {
        StringSource { text: text.into() }
    }
}

impl DocumentSource for StringSource {
    fn read_all(&mut self) -> io::Result<String> {
        Ok(self.text.clone())
    }
}
