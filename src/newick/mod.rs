//! Newick export of dendrograms.
//!
//! Export collaborators (tree viewers, phylogenetics tools) commonly read the
//! Newick format, so a clustered axis can be handed over as Newick string:
//! * [`to_newick`] - one dendrogram to a string
//! * [`write_newick_file`] - several dendrograms to a file, one per line
//!
//! # Format
//! * `tree ::= node ';'`
//! * `node ::= leaf | '(' node ',' node ')' [branch_length]`
//! * `leaf ::= label [branch_length]`
//! * `branch_length ::= ':' number`
//!
//! Labels containing Newick delimiters are wrapped in single quotes (see
//! [escape_label]).

pub mod writer;

pub use writer::{NewickStyle, to_newick, write_newick_file};

/// Characters that end an unquoted label
const SPECIAL_CHARS: [char; 11] = [',', ';', '\t', '\n', '\r', '(', ')', ':', '[', ']', '\''];

/// Escapes a label for safe use in Newick strings.
///
/// Labels containing delimiters are wrapped in single quotes, with internal
/// single quotes doubled. Otherwise spaces are replaced with underscores.
/// Labels that are already properly quoted are returned as-is.
///
/// # Examples
/// ```
/// # use heatorder::newick::escape_label;
/// assert_eq!(escape_label("Pukeko"), "Pukeko");
/// assert_eq!(escape_label("Gene (mouse)"), "'Gene (mouse)'");
/// assert_eq!(escape_label("sample 12"), "sample_12");
/// assert_eq!(escape_label("'already quoted'"), "'already quoted'");
/// assert_eq!(escape_label("Baillon's Crake"), "'Baillon''s Crake'");
/// assert_eq!(escape_label(""), "''");
/// ```
pub fn escape_label(label: &str) -> String {
    if label.is_empty() {
        // Empty labels would vanish in the Newick string
        return "''".to_string();
    }

    if is_quoted(label) {
        return label.to_string();
    }

    if label.contains(SPECIAL_CHARS) {
        format!("'{}'", label.replace('\'', "''"))
    } else {
        label.replace(' ', "_")
    }
}

/// Checks whether a label is wrapped in single quotes with every internal
/// single quote doubled.
fn is_quoted(label: &str) -> bool {
    if !(label.len() >= 2 && label.starts_with('\'') && label.ends_with('\'')) {
        return false;
    }

    let inner = &label[1..label.len() - 1];
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch == '\'' && chars.next() != Some('\'') {
            return false;
        }
    }

    true
}
