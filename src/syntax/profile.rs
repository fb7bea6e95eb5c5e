//! Syntax profiles: the static file-type database.

use bitflags::bitflags;

bitflags! {
    /// Optional highlighting passes enabled for a file type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SyntaxFlags: u8 {
        /// Highlight numeric literals.
        const NUMBERS = 0b0001;
        /// Highlight string and character literals.
        const STRINGS = 0b0010;
    }
}

/// Highlighting rules for one file type.
///
/// Keyword entries ending in `|` are secondary (type) keywords; the `|` is
/// not part of the matched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxProfile {
    /// Short file-type name shown in the status line.
    pub filetype: &'static str,
    /// Filename patterns. Patterns starting with `.` must end the filename;
    /// others may appear anywhere in it.
    pub filematch: &'static [&'static str],
    /// Keyword table.
    pub keywords: &'static [&'static str],
    /// Single-line comment marker.
    pub line_comment: Option<&'static str>,
    /// Block comment open and close markers.
    pub block_comment: Option<(&'static str, &'static str)>,
    /// Enabled passes.
    pub flags: SyntaxFlags,
}

const C_EXTENSIONS: &[&str] = &[".c", ".h", ".cpp"];
const C_KEYWORDS: &[&str] = &[
    "switch", "if", "while", "for", "break", "continue", "return", "else", "struct", "union",
    "typedef", "static", "enum", "class", "case", "int|", "long|", "double|", "float|", "char|",
    "unsigned|", "signed|", "void|",
];

const RUST_EXTENSIONS: &[&str] = &[".rs"];
const RUST_KEYWORDS: &[&str] = &[
    "fn", "let", "mut", "if", "else", "match", "while", "loop", "for", "in", "return", "break",
    "continue", "struct", "enum", "impl", "trait", "pub", "use", "mod", "const", "static", "as",
    "where", "self", "Self", "crate", "super", "unsafe", "move", "ref", "type", "i8|", "i16|",
    "i32|", "i64|", "isize|", "u8|", "u16|", "u32|", "u64|", "usize|", "f32|", "f64|", "bool|",
    "char|", "str|", "String|", "Vec|", "Option|", "Result|",
];

/// The highlight database, searched in order by [`SyntaxProfile::for_filename`].
pub static HLDB: &[SyntaxProfile] = &[
    SyntaxProfile {
        filetype: "c",
        filematch: C_EXTENSIONS,
        keywords: C_KEYWORDS,
        line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        flags: SyntaxFlags::NUMBERS.union(SyntaxFlags::STRINGS),
    },
    SyntaxProfile {
        filetype: "rust",
        filematch: RUST_EXTENSIONS,
        keywords: RUST_KEYWORDS,
        line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        flags: SyntaxFlags::NUMBERS.union(SyntaxFlags::STRINGS),
    },
];

impl SyntaxProfile {
    /// Select the profile for a filename, if any entry matches.
    pub fn for_filename(filename: &str) -> Option<&'static Self> {
        HLDB.iter().find(|profile| profile.matches(filename))
    }

    /// Check whether this profile applies to `filename`.
    pub fn matches(&self, filename: &str) -> bool {
        self.filematch.iter().any(|pattern| {
            if pattern.starts_with('.') {
                filename.ends_with(pattern)
            } else {
                filename.contains(pattern)
            }
        })
    }
}
