//! Upper-camel case conversion for declared schema names.
//!
//! Words are delimited by underscores that precede a lowercase letter and by
//! uppercase letters. Runs of uppercase letters and digits are copied as-is,
//! so acronyms and numeric suffixes survive (`myJSON` -> `MyJSON`). Any other
//! underscore is kept literally (`my_Field` -> `My_Field`), as is `.`. Other
//! characters outside the identifier alphabet become `_`.

use crate::Identifier;

/// Classification of a [`NameSegment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// A letter followed by a (possibly empty) lowercase run, e.g. "foo", "Bar".
    Word,
    /// Consecutive uppercase letters that do not start a word, e.g. "JSON".
    AcronymRun,
    /// Consecutive digits.
    DigitRun,
    /// A character copied literally: `_` not followed by a lowercase letter,
    /// or anything outside the identifier alphabet.
    Separator,
}

/// A slice of a declared name produced by [`segments`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameSegment<'a> {
    pub text: &'a str,
    pub kind: SegmentKind,
}

impl NameSegment<'_> {
    /// A separator after which the next word keeps its casing (e.g. `.`).
    fn is_literal_break(&self) -> bool {
        self.kind == SegmentKind::Separator && self.text != "_"
    }
}

/// Split a declared name into case-conversion segments.
///
/// Underscores that act as word boundaries are dropped. A leading underscore
/// is always reported as a separator.
pub fn segments(s: &str) -> Vec<NameSegment<'_>> {
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let offset = |i: usize| chars.get(i).map_or(s.len(), |&(at, _)| at);

    let mut out = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i].1;
        let (len, kind) = if c == '_' {
            let boundary = i > 0
                && chars
                    .get(i + 1)
                    .is_some_and(|&(_, next)| next.is_ascii_lowercase());
            if boundary {
                i += 1;
                continue;
            }
            (1, SegmentKind::Separator)
        } else if c.is_ascii_digit() {
            (run(&chars[i..], |c| c.is_ascii_digit()), SegmentKind::DigitRun)
        } else if c.is_ascii_uppercase() {
            let upper = run(&chars[i..], |c| c.is_ascii_uppercase());
            let starts_word = chars
                .get(i + upper)
                .is_some_and(|&(_, next)| next.is_ascii_lowercase());
            match (upper, starts_word) {
                (1, _) => (
                    1 + run(&chars[i + 1..], |c| c.is_ascii_lowercase()),
                    SegmentKind::Word,
                ),
                // the last capital begins the next word: "PDFTemplate"
                (n, true) => (n - 1, SegmentKind::AcronymRun),
                (n, false) => (n, SegmentKind::AcronymRun),
            }
        } else if c.is_ascii_lowercase() {
            (run(&chars[i..], |c| c.is_ascii_lowercase()), SegmentKind::Word)
        } else {
            (1, SegmentKind::Separator)
        };

        out.push(NameSegment {
            text: &s[offset(i)..offset(i + len)],
            kind,
        });
        i += len;
    }
    out
}

fn run(chars: &[(usize, char)], pred: impl Fn(char) -> bool) -> usize {
    chars.iter().take_while(|&&(_, c)| pred(c)).count()
}

/// Convert a declared schema name to UpperCamelCase.
///
/// A leading underscore becomes `X`, and `X` is prepended whenever the result
/// would otherwise not start with a letter (leading digit, empty input).
///
/// ```
/// use protoname_core::to_upper_camel;
///
/// assert_eq!(to_upper_camel("foo_bar"), "FooBar");
/// assert_eq!(to_upper_camel("PDFTemplate"), "PDFTemplate");
/// assert_eq!(to_upper_camel("_my_field_name_2"), "XMyFieldName_2");
/// ```
pub fn to_upper_camel(s: &str) -> Identifier {
    let mut out = String::with_capacity(s.len() + 1);
    let mut prev: Option<NameSegment<'_>> = None;

    for (idx, seg) in segments(s).into_iter().enumerate() {
        match seg.kind {
            SegmentKind::Separator if idx == 0 && seg.text == "_" => out.push('X'),
            SegmentKind::Word if !prev.is_some_and(|p| p.is_literal_break()) => {
                let mut chars = seg.text.chars();
                if let Some(first) = chars.next() {
                    out.push(first.to_ascii_uppercase());
                    out.push_str(chars.as_str());
                }
            }
            SegmentKind::Separator if !matches!(seg.text, "_" | ".") => out.push('_'),
            _ => out.push_str(seg.text),
        }
        prev = Some(seg);
    }

    if !out.starts_with(|c: char| c.is_ascii_alphabetic()) {
        out.insert(0, 'X');
    }
    Identifier::from_converted(out)
}
