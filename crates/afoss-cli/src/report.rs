//! # Console Report
//!
//! The glyph-prefixed progress and diagnostic lines the CLI prints. Progress
//! goes to the `out` stream, problems to `err`. These lines are for people,
//! not parsers; structured diagnostics go through `tracing`.

use std::io::{self, Write};
use std::path::Path;

use afoss_catalog::{FolderError, FolderOutcome};

/// Pair of output streams the report is written to.
pub struct Console<'a> {
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Self { out, err }
    }

    pub fn found(&mut self, count: usize) -> io::Result<()> {
        writeln!(self.out, "\n📦 Found {count} project(s)\n")
    }

    /// Header line for a folder followed by its result lines.
    pub fn folder(&mut self, outcome: &FolderOutcome, record_file: &str) -> io::Result<()> {
        writeln!(self.out, "  → {}/{}", outcome.folder, record_file)?;
        match &outcome.result {
            Ok(_) => writeln!(self.out, "    ✅ Valid\n"),
            Err(FolderError::Invalid(violations)) => {
                for violation in violations {
                    writeln!(self.err, "    ❌ {violation}")?;
                }
                writeln!(self.out)
            }
            Err(other) => writeln!(self.err, "    ❌ {other}\n"),
        }
    }

    pub fn validation_failed(&mut self) -> io::Result<()> {
        writeln!(
            self.err,
            "❌ Validation failed. Fix the errors above and try again.\n"
        )
    }

    /// A fatal problem with the run environment.
    pub fn fatal(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.err, "❌ {message}")
    }

    pub fn generated(&mut self, path: &Path, count: usize) -> io::Result<()> {
        writeln!(self.out, "✅ Generated {}", path.display())?;
        writeln!(self.out, "   {count} project(s) written\n")
    }

    pub fn readme_updated(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out, "✅ Updated {} project list\n", path.display())
    }

    pub fn warn(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "⚠️  {message}")
    }

    pub fn up_to_date(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out, "✅ {} is up to date", path.display())
    }

    pub fn stale(&mut self, path: &Path) -> io::Result<()> {
        writeln!(
            self.err,
            "❌ {} is out of date; run `afoss build` to regenerate it",
            path.display()
        )
    }
}
