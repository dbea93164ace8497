//! Print document model
//!
//! A document is an ordered sequence of formatting directives. Directives
//! are stateless commands; the printer itself is stateful (bold and
//! alignment toggles persist on the device), so directive order must be
//! preserved all the way to the wire.

use crate::encoding::codepage_width;

/// A single formatting/printing command, independent of the byte encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Raw text in the document's character set
    Text(String),
    /// Single line feed
    Newline,
    /// Center horizontal alignment
    AlignCenter,
    /// Left horizontal alignment (device default)
    AlignLeft,
    /// Emphasis on/off
    Bold(bool),
    /// Double character height on/off
    DoubleHeight(bool),
    /// Full paper cut
    Cut,
}

/// An ordered, immutable sequence of directives representing one print job.
///
/// Built fresh per print request and never mutated after hand-off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    directives: Vec<Directive>,
}

impl Document {
    /// The directives in document order
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Number of directives
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Human-readable projection of the document (text and line feeds only).
    ///
    /// Used to trace a job when printing falls back to simulation.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for directive in &self.directives {
            match directive {
                Directive::Text(s) => out.push_str(s),
                Directive::Newline => out.push('\n'),
                _ => {}
            }
        }
        out
    }
}

/// Fluent document builder
///
/// Accumulates directives for one print job. The configured paper width in
/// characters drives the separator and two-column helpers.
///
/// Common widths:
/// - 58mm paper: 32 characters
/// - 80mm paper: 48 characters
pub struct DocumentBuilder {
    directives: Vec<Directive>,
    width: usize,
}

impl DocumentBuilder {
    /// Create a new builder with the specified paper width in characters
    pub fn new(width: usize) -> Self {
        Self {
            directives: Vec::with_capacity(64),
            width,
        }
    }

    /// Get the configured paper width
    pub fn width(&self) -> usize {
        self.width
    }

    // === Text Output ===

    /// Write raw text
    pub fn text(&mut self, s: &str) -> &mut Self {
        self.directives.push(Directive::Text(s.to_string()));
        self
    }

    /// Write text followed by newline
    pub fn line(&mut self, s: &str) -> &mut Self {
        self.text(s);
        self.newline()
    }

    /// Write empty line
    pub fn newline(&mut self) -> &mut Self {
        self.directives.push(Directive::Newline);
        self
    }

    /// Write multiple empty lines
    pub fn feed(&mut self, lines: u8) -> &mut Self {
        for _ in 0..lines {
            self.newline();
        }
        self
    }

    // === Alignment ===

    /// Align text to center
    pub fn center(&mut self) -> &mut Self {
        self.directives.push(Directive::AlignCenter);
        self
    }

    /// Align text to left (default)
    pub fn left(&mut self) -> &mut Self {
        self.directives.push(Directive::AlignLeft);
        self
    }

    // === Text Style ===

    /// Enable bold text
    pub fn bold(&mut self) -> &mut Self {
        self.directives.push(Directive::Bold(true));
        self
    }

    /// Disable bold text
    pub fn bold_off(&mut self) -> &mut Self {
        self.directives.push(Directive::Bold(false));
        self
    }

    /// Double height
    pub fn double_height(&mut self) -> &mut Self {
        self.directives.push(Directive::DoubleHeight(true));
        self
    }

    /// Reset to normal height
    pub fn normal_height(&mut self) -> &mut Self {
        self.directives.push(Directive::DoubleHeight(false));
        self
    }

    // === Separators ===

    /// Print a line of '=' characters
    pub fn sep_double(&mut self) -> &mut Self {
        let sep = "=".repeat(self.width);
        self.line(&sep)
    }

    /// Print a line of '-' characters
    pub fn sep_single(&mut self) -> &mut Self {
        let sep = "-".repeat(self.width);
        self.line(&sep)
    }

    // === Layout Helpers ===

    /// Print left and right text on the same line
    ///
    /// Left text is left-aligned, right text is right-aligned,
    /// with spaces filling the gap.
    pub fn line_lr(&mut self, left: &str, right: &str) -> &mut Self {
        let lw = codepage_width(left);
        let rw = codepage_width(right);

        if lw + rw >= self.width {
            // Too long, just print with space
            self.text(left);
            self.text(" ");
            self.line(right);
        } else {
            let spaces = self.width - lw - rw;
            self.text(left);
            self.text(&" ".repeat(spaces));
            self.line(right);
        }
        self
    }

    // === Paper Control ===

    /// Cut paper (full cut)
    pub fn cut(&mut self) -> &mut Self {
        self.directives.push(Directive::Cut);
        self
    }

    // === Build ===

    /// Finalize the document
    pub fn build(self) -> Document {
        Document {
            directives: self.directives,
        }
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new(32)
    }
}
