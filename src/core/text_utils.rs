//! Text manipulation utilities for working with HDL source code.

/// Check if a character may start an identifier.
#[inline]
pub fn is_identifier_start(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_start(c)
}

/// Check if a character is considered part of a word (identifier).
///
/// Uses Unicode Standard Annex #31 rules plus `$`, which Verilog allows
/// after the first character.
#[inline]
pub fn is_word_character(c: char) -> bool {
    c == '$' || unicode_ident::is_xid_continue(c)
}

/// Find the boundaries of a word at the given position.
///
/// Returns `Some((start, end))` where `start` is the character index of the word start
/// and `end` is the character index after the last word character.
/// Returns `None` if there is no word at the position.
pub fn find_word_boundaries(chars: &[char], position: usize) -> Option<(usize, usize)> {
    if position >= chars.len() || !is_word_character(chars[position]) {
        return None;
    }

    let mut start = position;
    while start > 0 && is_word_character(chars[start - 1]) {
        start -= 1;
    }

    let mut end = position;
    while end < chars.len() && is_word_character(chars[end]) {
        end += 1;
    }

    Some((start, end))
}

/// Extract the word (identifier) at the cursor position in a line of text.
///
/// `position` is a byte column, matching [`crate::base::Position`].
///
/// # Example
/// ```
/// use veriscan::core::text_utils::extract_word_at_cursor;
///
/// let line = "  fifo u_fifo (.clk(clk));";
/// assert_eq!(extract_word_at_cursor(line, 3), Some("fifo".to_string()));
/// assert_eq!(extract_word_at_cursor(line, 9), Some("u_fifo".to_string()));
/// assert_eq!(extract_word_at_cursor(line, 1), None);
/// ```
pub fn extract_word_at_cursor(line: &str, position: usize) -> Option<String> {
    let char_position = line.get(..position)?.chars().count();
    let chars: Vec<char> = line.chars().collect();
    let (start, end) = find_word_boundaries(&chars, char_position)?;
    let word: String = chars[start..end].iter().collect();
    word.chars()
        .next()
        .is_some_and(is_identifier_start)
        .then_some(word)
}

/// Return the last identifier token in `text`, with its byte offset.
pub fn last_identifier(text: &str) -> Option<(usize, &str)> {
    let mut last = None;
    let mut chars = text.char_indices().peekable();
    while let Some((start, c)) = chars.next() {
        if is_word_character(c) {
            let mut end = start + c.len_utf8();
            while let Some(&(i, next)) = chars.peek() {
                if !is_word_character(next) {
                    break;
                }
                end = i + next.len_utf8();
                chars.next();
            }
            if is_identifier_start(c) {
                last = Some((start, &text[start..end]));
            }
        }
    }
    last
}

/// Normalize a net expression for equality comparison by removing all
/// whitespace.
pub fn normalize_net_expression(expression: &str) -> String {
    expression.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Replace every byte of `line` except newlines with a space.
pub fn blank_line(line: &str, out: &mut String) {
    out.extend(line.bytes().map(|b| if b == b'\n' { '\n' } else { ' ' }));
}
