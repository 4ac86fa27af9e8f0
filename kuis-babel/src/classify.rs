//! Line classification
//!
//!     Each line of the intermediate text is assigned exactly one [`LineKind`], checked in this
//!     order:
//!
//!     | Kind       | Rule                                                    |
//!     |------------|---------------------------------------------------------|
//!     | `Question` | digits followed by a period at the start (`1.`, `12.`)  |
//!     | `Option`   | one of `A`-`E` followed by a period at the start (`B.`) |
//!     | `Labeled`  | contains `Jawaban:` or `Pembahasan:` anywhere           |
//!     | `Other`    | anything else                                           |
//!
//!     "Start" means after the line's indentation: the renderer writes options as `\tA. ...`.
//!     Classification only ever looks at the one line it is given.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Marker that introduces the answer line.
pub const ANSWER_MARKER: &str = "Jawaban:";

/// Marker that introduces the explanation line.
pub const EXPLANATION_MARKER: &str = "Pembahasan:";

static QUESTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*[0-9]+\.").expect("valid question pattern"));

static OPTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*[A-E]\.").expect("valid option pattern"));

/// Category of one line of intermediate text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Question,
    Option,
    /// Carries an answer or explanation marker.
    Labeled,
    Other,
}

impl LineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineKind::Question => "question",
            LineKind::Option => "option",
            LineKind::Labeled => "labeled",
            LineKind::Other => "other",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a single line.
pub fn classify_line(line: &str) -> LineKind {
    if QUESTION_PATTERN.is_match(line) {
        LineKind::Question
    } else if OPTION_PATTERN.is_match(line) {
        LineKind::Option
    } else if line.contains(ANSWER_MARKER) || line.contains(EXPLANATION_MARKER) {
        LineKind::Labeled
    } else {
        LineKind::Other
    }
}
