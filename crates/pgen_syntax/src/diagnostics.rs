//! Diagnostics for the Java frontend.
//!
//! Lexer and parser errors are collected as [`CompileError`] values and rendered with source context through
//! `miette`'s graphical handler.

use std::fmt;

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, NamedSource, SourceSpan};

use crate::ast::Span;

/// A syntax-level error with location information
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct CompileError {
    pub message: String,
    pub span: Span,
    pub kind: ErrorKind,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn new(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: ErrorKind::Error,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn syntax(message: String, span: Span) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            ..Self::new(message, span)
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Error,
    Syntax,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Error => write!(f, "error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
        }
    }
}

/// Adapter that lets `miette` render a [`CompileError`] against its source file.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{kind}: {message}")]
struct SourceReport {
    kind: ErrorKind,
    message: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("here")]
    at: SourceSpan,
    #[help]
    help: Option<String>,
}

impl SourceReport {
    fn new(file_name: &str, source: &str, error: &CompileError) -> Self {
        let start = error.span.start.min(source.len());
        let len = error.span.end.min(source.len()).saturating_sub(start);

        let mut help_lines: Vec<String> = error.notes.iter().map(|n| format!("note: {n}")).collect();
        help_lines.extend(error.hints.iter().map(|h| format!("hint: {h}")));

        Self {
            kind: error.kind,
            message: error.message.clone(),
            src: NamedSource::new(file_name, source.to_string()),
            at: SourceSpan::new(start.into(), len),
            help: (!help_lines.is_empty()).then(|| help_lines.join("\n")),
        }
    }
}

/// Render an error with a source excerpt, without ANSI colors.
pub fn format_error(file_name: &str, source: &str, error: &CompileError) -> String {
    let report = SourceReport::new(file_name, source, error);
    let mut out = String::new();
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    if handler.render_report(&mut out, &report).is_err() {
        // Fall back to the plain one-line form.
        let (line, col) = line_col(source, error.span.start);
        return format!("{file_name}:{line}:{col}: {error}");
    }
    out
}

/// 1-based line and column of a byte offset.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let prefix = source.get(..offset).unwrap_or(source);
    let line = prefix.matches('\n').count() + 1;
    let line_start = prefix.rfind('\n').map(|i| i + 1).unwrap_or(0);
    (line, offset - line_start + 1)
}
