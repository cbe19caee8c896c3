//! Element nesting depth of raw XML text
//!
//! The parser descends recursively, so the depth has to be known before it
//! runs. This is a cheap byte scan: it does not check well-formedness, it only
//! gives an upper bound on how deep the parsed tree can get.

use super::find;

/// Upper bound on the element nesting depth of `text`.
///
/// Entity replacement text declared in a DOCTYPE is counted on top of the
/// depth of the document body, since a reference can open elements wherever
/// it appears.
pub fn nesting_depth(text: &str) -> usize {
    let (body, entities) = scan(text.as_bytes());
    body.saturating_add(entities)
}

#[allow(clippy::indexing_slicing)]
fn scan(bytes: &[u8]) -> (usize, usize) {
    let mut depth = 0usize;
    let mut max = 0usize;
    let mut entities = 0usize;
    let mut pos = 0;

    while let Some(offset) = bytes[pos..].iter().position(|&b| b == b'<') {
        let start = pos + offset;
        let rest = &bytes[start..];

        pos = if rest.starts_with(b"<!--") {
            skip_past(bytes, start + 4, b"-->")
        } else if rest.starts_with(b"<![CDATA[") {
            skip_past(bytes, start + 9, b"]]>")
        } else if rest.starts_with(b"<?") {
            skip_past(bytes, start + 2, b"?>")
        } else if rest.starts_with(b"<!") {
            let (end, declared) = skip_declaration(bytes, start + 2);
            entities = entities.saturating_add(declared);
            end
        } else if rest.starts_with(b"</") {
            depth = depth.saturating_sub(1);
            skip_past(bytes, start + 2, b">")
        } else {
            let (end, self_closing) = skip_start_tag(bytes, start + 1);
            max = max.max(depth + 1);
            if !self_closing {
                depth += 1;
            }
            end
        };
    }

    (max, entities)
}

fn skip_past(bytes: &[u8], from: usize, needle: &[u8]) -> usize {
    match bytes.get(from..).and_then(|tail| find(tail, needle)) {
        Some(at) => from + at + needle.len(),
        None => bytes.len(),
    }
}

/// Skips to the `>` closing a start tag, stepping over quoted values.
/// Returns the position after it and whether the tag was `<x/>`.
#[allow(clippy::indexing_slicing)]
fn skip_start_tag(bytes: &[u8], from: usize) -> (usize, bool) {
    let mut quote = None;
    for (i, &b) in bytes.iter().enumerate().skip(from) {
        match (quote, b) {
            (Some(q), _) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(b),
            (None, b'>') => return (i + 1, i > from && bytes[i - 1] == b'/'),
            (None, _) => {}
        }
    }
    (bytes.len(), false)
}

/// Skips a `<!...>` declaration, including a DOCTYPE internal subset.
///
/// Also returns the nesting depth found inside quoted literals, which is
/// where entity replacement text lives. Each character reference may turn
/// into a `<` once the literal is expanded, so those count as one level each.
#[allow(clippy::indexing_slicing)]
fn skip_declaration(bytes: &[u8], from: usize) -> (usize, usize) {
    let mut brackets = 0usize;
    let mut literals = 0usize;
    let mut i = from;

    while i < bytes.len() {
        match bytes[i] {
            q @ (b'"' | b'\'') => {
                let end = bytes[i + 1..]
                    .iter()
                    .position(|&b| b == q)
                    .map_or(bytes.len(), |at| i + 1 + at);
                let literal = &bytes[i + 1..end];
                let (body, _) = scan(literal);
                let char_refs = literal.windows(2).filter(|w| *w == b"&#").count();
                literals = literals.saturating_add(body).saturating_add(char_refs);
                i = end + 1;
                continue;
            }
            b'<' if bytes[i..].starts_with(b"<!--") => {
                i = skip_past(bytes, i + 4, b"-->");
                continue;
            }
            b'[' => brackets += 1,
            b']' => brackets = brackets.saturating_sub(1),
            b'>' if brackets == 0 => return (i + 1, literals),
            _ => {}
        }
        i += 1;
    }

    (bytes.len(), literals)
}
