//! Comment, string and attribute removal.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Code,
    LineComment,
    BlockComment,
    Attribute,
    String,
}

/// Blank out comments, string literals and `(* ... *)` attributes.
///
/// Every removed byte becomes a space except `\n`, which is kept, so the
/// output has the same length and line structure as the input. Unterminated
/// block comments, attributes and strings run to the end of the text.
pub fn sanitize(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut mode = Mode::Code;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        let next = bytes.get(i + 1).copied();

        match mode {
            Mode::Code => match (b, next) {
                (b'/', Some(b'/')) => {
                    mode = Mode::LineComment;
                    out.extend_from_slice(b"  ");
                    i += 2;
                    continue;
                }
                (b'/', Some(b'*')) => {
                    mode = Mode::BlockComment;
                    out.extend_from_slice(b"  ");
                    i += 2;
                    continue;
                }
                (b'(', Some(b'*')) if !is_star_event_control(bytes, i) => {
                    mode = Mode::Attribute;
                    out.extend_from_slice(b"  ");
                    i += 2;
                    continue;
                }
                (b'"', _) => {
                    mode = Mode::String;
                    out.push(b' ');
                }
                _ => out.push(b),
            },
            Mode::LineComment => {
                if b == b'\n' {
                    mode = Mode::Code;
                }
                out.push(blank(b));
            }
            Mode::BlockComment | Mode::Attribute => {
                let close = if mode == Mode::BlockComment { b'/' } else { b')' };
                if b == b'*' && next == Some(close) {
                    mode = Mode::Code;
                    out.extend_from_slice(b"  ");
                    i += 2;
                    continue;
                }
                out.push(blank(b));
            }
            Mode::String => match b {
                b'\\' => {
                    out.push(b' ');
                    if let Some(escaped) = next {
                        out.push(blank(escaped));
                        i += 2;
                        continue;
                    }
                }
                b'"' => {
                    mode = Mode::Code;
                    out.push(b' ');
                }
                _ => out.push(blank(b)),
            },
        }
        i += 1;
    }

    // Only whole characters are ever replaced, so the buffer stays valid UTF-8.
    String::from_utf8(out)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

/// `@(*)` and `@(* )` are event controls, not attributes.
fn is_star_event_control(bytes: &[u8], open: usize) -> bool {
    let mut j = open + 2;
    while matches!(bytes.get(j), Some(b' ' | b'\t')) {
        j += 1;
    }
    bytes.get(j) == Some(&b')')
}

#[inline]
fn blank(b: u8) -> u8 {
    if b == b'\n' { b'\n' } else { b' ' }
}
