//! Output formatting for human and JSON modes
//!
//! Reports render either as tagged, line-oriented text or as pretty-printed
//! JSON. Human output is written to any `io::Write` so it can be captured.

use std::io::{self, IsTerminal, Write};

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{
    BuildConfigOutcome, ExistenceResult, SourceReport, StructureReport, Summary, ValidationReport,
};

/// Width of the `=` rule between sections
pub const RULE_WIDTH: usize = 50;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Status tag at the start of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Check passed
    Ok,
    /// Expected path absent
    Missing,
    /// Category failed
    Error,
    /// Non-fatal finding
    Warning,
}

impl Tag {
    /// Bracketed label, e.g. `[OK]`
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Missing => "[MISSING]",
            Self::Error => "[ERROR]",
            Self::Warning => "[WARNING]",
        }
    }

    fn paint(self, color: bool) -> String {
        if !color {
            return self.label().to_string();
        }
        match self {
            Self::Ok => self.label().green().to_string(),
            Self::Missing | Self::Error => self.label().red().bold().to_string(),
            Self::Warning => self.label().yellow().to_string(),
        }
    }
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn write_existence<W: Write>(
    out: &mut W,
    result: &ExistenceResult,
    color: bool,
) -> io::Result<()> {
    let tag = if result.exists { Tag::Ok } else { Tag::Missing };
    writeln!(out, "{} {}: {}", tag.paint(color), result.item.description, result.item.path)
}

fn write_source<W: Write>(out: &mut W, report: &SourceReport, color: bool) -> io::Result<()> {
    if report.passed() {
        let tag = Tag::Ok.paint(color);
        return writeln!(out, "{tag} {}: heuristic check passed", report.file);
    }
    writeln!(
        out,
        "{} {}: {} issue(s) found:",
        Tag::Warning.paint(color),
        report.file,
        report.issues.len()
    )?;
    for issue in &report.issues {
        writeln!(out, "   - {}", issue.message())?;
    }
    Ok(())
}

fn write_build<W: Write>(
    out: &mut W,
    outcome: &BuildConfigOutcome,
    color: bool,
) -> io::Result<()> {
    match outcome {
        BuildConfigOutcome::DescriptorMissing { path } => {
            writeln!(out, "{} Build descriptor missing: {path}", Tag::Error.paint(color))
        },
        BuildConfigOutcome::Unreadable { path, reason } => writeln!(
            out,
            "{} Failed to read build descriptor {path}: {reason}",
            Tag::Error.paint(color)
        ),
        BuildConfigOutcome::Checked {
            path,
            missing_plugins,
            missing_dependencies,
        } => {
            if !missing_plugins.is_empty() {
                writeln!(
                    out,
                    "{} Missing plugins: [{}]",
                    Tag::Warning.paint(color),
                    missing_plugins.join(", ")
                )?;
            }
            if !missing_dependencies.is_empty() {
                writeln!(
                    out,
                    "{} Missing dependencies: [{}]",
                    Tag::Warning.paint(color),
                    missing_dependencies.join(", ")
                )?;
            }
            if outcome.passed() {
                writeln!(out, "{} Build configuration complete: {path}", Tag::Ok.paint(color))?;
            }
            Ok(())
        },
    }
}

fn summary_line<W: Write>(
    out: &mut W,
    ok: bool,
    pass: &str,
    fail: &str,
    color: bool,
) -> io::Result<()> {
    if ok {
        writeln!(out, "{} {pass}", Tag::Ok.paint(color))
    } else {
        writeln!(out, "{} {fail}", Tag::Error.paint(color))
    }
}

impl Summary {
    /// Write the summary section and the final verdict
    pub fn write_human<W: Write>(self, out: &mut W, color: bool) -> io::Result<()> {
        writeln!(out, "Summary:")?;
        summary_line(
            out,
            self.structure_ok,
            "Project structure complete",
            "Project structure has problems",
            color,
        )?;
        summary_line(
            out,
            self.syntax_ok,
            "Source heuristics passed",
            "Source heuristics found issues",
            color,
        )?;
        summary_line(
            out,
            self.config_ok,
            "Build configuration valid",
            "Build configuration needs attention",
            color,
        )?;

        let verdict = if color && self.overall_ok() {
            self.verdict().green().bold().to_string()
        } else if color {
            self.verdict().red().bold().to_string()
        } else {
            self.verdict().to_string()
        };
        writeln!(out, "\n{verdict}")
    }
}

impl ValidationReport {
    /// Render to stdout based on output mode
    pub fn render(&self, mode: OutputMode) -> io::Result<()> {
        let stdout = io::stdout();
        let color = stdout.is_terminal();
        let mut out = stdout.lock();
        match mode {
            OutputMode::Human => self.write_human(&mut out, color),
            OutputMode::Json => write_json(&mut out, self),
        }
    }

    /// Write the sectioned human-readable report
    pub fn write_human<W: Write>(&self, out: &mut W, color: bool) -> io::Result<()> {
        writeln!(out, "Android project validation")?;
        writeln!(out, "{}", rule())?;
        for result in &self.structure {
            write_existence(out, result, color)?;
        }

        writeln!(out, "\n{}", rule())?;
        if self.sources.is_empty() {
            writeln!(out, "No source files to scan.")?;
        }
        for report in &self.sources {
            write_source(out, report, color)?;
        }

        writeln!(out, "\n{}", rule())?;
        write_build(out, &self.build, color)?;

        writeln!(out, "\n{}", rule())?;
        self.summary.write_human(out, color)
    }
}

impl StructureReport {
    /// Render to stdout based on output mode
    pub fn render(&self, mode: OutputMode) -> io::Result<()> {
        let stdout = io::stdout();
        let color = stdout.is_terminal();
        let mut out = stdout.lock();
        match mode {
            OutputMode::Human => self.write_human(&mut out, color),
            OutputMode::Json => write_json(&mut out, self),
        }
    }

    /// Write numbered sections, one status line per expected path
    pub fn write_human<W: Write>(&self, out: &mut W, color: bool) -> io::Result<()> {
        writeln!(out, "=== Android project structure check ===")?;
        for (index, group) in self.groups.iter().enumerate() {
            writeln!(out, "\n{}. {}:", index + 1, group.title)?;
            for result in &group.results {
                write_existence(out, result, color)?;
            }
        }
        writeln!(out, "\n=== Check complete ===")
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) -> io::Result<()> {
        let mut out = io::stdout().lock();
        match mode {
            OutputMode::Human => writeln!(out, "{}", self.message),
            OutputMode::Json => write_json(&mut out, self),
        }
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}
