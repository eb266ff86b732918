//! Byte-level cursor helpers shared by the extractor passes.
//!
//! All functions take an exclusive `limit` and never look past it.

use text_size::{TextRange, TextSize};

pub(crate) fn range(start: usize, end: usize) -> TextRange {
    TextRange::new(TextSize::new(start as u32), TextSize::new(end as u32))
}

pub(crate) fn skip_ws(bytes: &[u8], mut pos: usize, limit: usize) -> usize {
    while pos < limit && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

#[inline]
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

/// End of the identifier starting at `pos`, if one starts there.
pub(crate) fn ident_end(bytes: &[u8], pos: usize, limit: usize) -> Option<usize> {
    if pos >= limit || !is_ident_start(bytes[pos]) {
        return None;
    }
    let mut end = pos + 1;
    while end < limit && is_ident_continue(bytes[end]) {
        end += 1;
    }
    Some(end)
}

/// End of a run of word bytes (identifier or number) starting at `pos`.
pub(crate) fn word_end(bytes: &[u8], mut pos: usize, limit: usize) -> usize {
    while pos < limit && (is_ident_continue(bytes[pos]) || bytes[pos] == b'\'') {
        pos += 1;
    }
    pos
}

/// Index of the bracket closing the one at `open`, counting nesting of
/// the same bracket kind.
pub(crate) fn matching_close(bytes: &[u8], open: usize, limit: usize) -> Option<usize> {
    let (open_byte, close_byte) = match bytes.get(open)? {
        b'(' => (b'(', b')'),
        b'[' => (b'[', b']'),
        b'{' => (b'{', b'}'),
        _ => return None,
    };
    let mut depth = 0usize;
    for (i, &b) in bytes.iter().enumerate().take(limit).skip(open) {
        if b == open_byte {
            depth += 1;
        } else if b == close_byte {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}

/// Split `start..end` on `separator` bytes that are not nested inside any
/// bracket pair.
pub(crate) fn split_top_level(
    bytes: &[u8],
    start: usize,
    end: usize,
    separator: u8,
) -> Vec<(usize, usize)> {
    let mut pieces = Vec::new();
    let mut depth = 0i32;
    let mut piece_start = start;
    for (i, &b) in bytes.iter().enumerate().take(end).skip(start) {
        match b {
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth -= 1,
            _ if b == separator && depth <= 0 => {
                pieces.push((piece_start, i));
                piece_start = i + 1;
            }
            _ => {}
        }
    }
    pieces.push((piece_start, end));
    pieces
}

/// First `[...]` group in `text`, as written.
pub(crate) fn first_bracket_group(text: &str) -> Option<&str> {
    let open = text.find('[')?;
    let close = matching_close(text.as_bytes(), open, text.len())?;
    Some(&text[open..=close])
}

/// Copy of `text` with every bracketed group replaced by spaces, keeping
/// byte offsets.
pub(crate) fn mask_brackets(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut depth = 0usize;
    for c in text.chars() {
        let masked = match c {
            '[' => {
                depth += 1;
                true
            }
            ']' if depth > 0 => {
                depth -= 1;
                true
            }
            _ => depth > 0,
        };
        if masked {
            out.extend(std::iter::repeat_n(' ', c.len_utf8()));
        } else {
            out.push(c);
        }
    }
    out
}
