//! Line classification listing
//!
//! Shows how the document builder sees an intermediate text file: one output line per input line,
//! prefixed with its category. Lines are split exactly the way the builder splits them, so a
//! trailing newline shows up as a final empty `other` line (styled as a question paragraph).
//!
//! Example: `kuis classify questions.md`
//!
//! ```text
//! question  1. 2+2=?
//! option    	A. 3
//! labeled   	Jawaban: B
//! ```

use kuis_babel::classify_line;

/// Width of the category column (longest category name plus padding).
const KIND_COLUMN: usize = 10;

/// Render the classification listing for `source`.
pub fn classify_listing(source: &str) -> String {
    let mut output = String::new();
    for line in source.split('\n') {
        let kind = classify_line(line);
        output.push_str(&format!("{:<width$}{line}\n", kind.as_str(), width = KIND_COLUMN));
    }
    output
}
