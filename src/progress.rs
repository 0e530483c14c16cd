// src/progress.rs
use std::fmt;
use std::path::Path;

/// Classification of a human-readable status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Success,
    Info,
    Warning,
    Error,
}

impl Status {
    pub fn tag(self) -> &'static str {
        match self {
            Status::Success => "[SUCCESS]",
            Status::Info => "[INFO]",
            Status::Warning => "[WARNING]",
            Status::Error => "[ERROR]",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Observability sink threaded through every pipeline stage.
/// The CLI uses [`crate::log::TracingProgress`]; tests record into a Vec.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn status(&mut self, _status: Status, _msg: &str) {}

    /// Called after a CSV file has been fully written.
    fn file_written(&mut self, _path: &Path) {}

    fn success(&mut self, msg: &str) { self.status(Status::Success, msg) }
    fn info(&mut self, msg: &str) { self.status(Status::Info, msg) }
    fn warn(&mut self, msg: &str) { self.status(Status::Warning, msg) }
    fn error(&mut self, msg: &str) { self.status(Status::Error, msg) }
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Keeps every status line in memory, in emission order.
#[derive(Default, Debug)]
pub struct Recorder {
    pub lines: Vec<(Status, String)>,
    pub files: Vec<std::path::PathBuf>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines rendered the way the console shows them: `[INFO] Found 2 paragraphs.`
    pub fn rendered(&self) -> Vec<String> {
        self.lines.iter().map(|(st, msg)| format!("{st} {msg}")).collect()
    }

    pub fn contains(&self, status: Status, needle: &str) -> bool {
        self.lines.iter().any(|(st, msg)| *st == status && msg.contains(needle))
    }
}

impl Progress for Recorder {
    fn status(&mut self, status: Status, msg: &str) {
        self.lines.push((status, s!(msg)));
    }

    fn file_written(&mut self, path: &Path) {
        self.files.push(path.to_path_buf());
    }
}
