//! Plain-text rendering of a body: drop everything between `<` and `>`.

use std::io::{self, Write};

/// Removes tags from `body`, keeping the text between them.
///
/// Not an HTML parser: entities are left as-is, and every `<` and `>` is
/// dropped, including a stray `>` outside any tag.
pub fn strip_tags(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut in_tag = false;
    for c in body.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Writes the tag-stripped body to `out`.
pub fn show<W: Write>(body: &str, out: &mut W) -> io::Result<()> {
    out.write_all(strip_tags(body).as_bytes())?;
    out.flush()
}
