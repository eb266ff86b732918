//! Port declarations from the module header and from non-ANSI body
//! declarations.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::keywords::KeywordDenylist;
use super::scan::{first_bracket_group, ident_end, mask_brackets, range, split_top_level};
use super::syntax::{PortDirection, PortSyntax};
use crate::core::text_utils::last_identifier;

static BODY_PORT_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^[ \t]*(input|output|inout|ref)\b([^;]*);")
        .expect("body port declaration pattern is valid")
});

static SUBROUTINE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(task|function|endtask|endfunction)\b")
        .expect("subroutine boundary pattern is valid")
});

/// Parse the header port list between `start` and `end` (exclusive of the
/// surrounding parentheses).
///
/// A fragment without a direction keyword inherits the direction of the
/// previous fragment, as in `input a, b`.
pub(crate) fn parse_port_list(
    text: &str,
    start: usize,
    end: usize,
    denylist: &KeywordDenylist,
) -> Vec<PortSyntax> {
    let mut inherited = None;
    split_top_level(text.as_bytes(), start, end, b',')
        .into_iter()
        .filter_map(|(frag_start, frag_end)| {
            parse_port_fragment(text, frag_start, frag_end, &mut inherited, denylist)
        })
        .collect()
}

fn parse_port_fragment(
    text: &str,
    start: usize,
    end: usize,
    inherited: &mut Option<PortDirection>,
    denylist: &KeywordDenylist,
) -> Option<PortSyntax> {
    let bytes = text.as_bytes();
    let fragment = &text[start..end];
    let mut cursor = start + (fragment.len() - fragment.trim_start().len());

    let keyword = ident_end(bytes, cursor, end).and_then(|word_end| {
        let direction = PortDirection::from_keyword(&text[cursor..word_end])?;
        Some((word_end, direction))
    });
    let direction = match keyword {
        Some((word_end, direction)) => {
            cursor = word_end;
            *inherited = Some(direction);
            direction
        }
        None => inherited.unwrap_or_default(),
    };

    let declaration = without_default(&text[cursor..end]);
    let masked = mask_brackets(declaration);
    let Some((offset, name)) = last_identifier(&masked) else {
        trace!("skipping port fragment without a name: {:?}", fragment.trim());
        return None;
    };
    if denylist.contains(name) {
        trace!("skipping port fragment ending in keyword: {:?}", fragment.trim());
        return None;
    }

    let name_start = cursor + offset;
    Some(PortSyntax {
        name: name.to_string(),
        name_range: range(name_start, name_start + name.len()),
        direction,
        range: first_bracket_group(declaration).map(str::to_string),
    })
}

/// Fill in direction and range for ports the header left `Unknown`, using
/// `input [3:0] a, b;` style declarations in the module body.
pub(crate) fn apply_body_declarations(
    text: &str,
    body_start: usize,
    body_end: usize,
    ports: &mut [PortSyntax],
) {
    if !ports.iter().any(|port| port.direction == PortDirection::Unknown) {
        return;
    }
    let body = &text[body_start..body_end];
    let subroutines = subroutine_regions(body);
    for caps in BODY_PORT_DECL.captures_iter(body) {
        let (Some(keyword), Some(list)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        if subroutines.iter().any(|&(s, e)| s <= keyword.start() && keyword.start() < e) {
            continue;
        }
        let Some(direction) = PortDirection::from_keyword(keyword.as_str()) else {
            continue;
        };
        let pieces = split_top_level(body.as_bytes(), list.start(), list.end(), b',');
        let shared_range = pieces
            .first()
            .and_then(|&(s, e)| first_bracket_group(&body[s..e]));

        for (piece_start, piece_end) in pieces {
            let piece = &body[piece_start..piece_end];
            let piece = without_default(piece);
            let masked = mask_brackets(piece);
            let Some((_, name)) = last_identifier(&masked) else {
                continue;
            };
            for port in ports
                .iter_mut()
                .filter(|port| port.direction == PortDirection::Unknown && port.name == name)
            {
                port.direction = direction;
                if port.range.is_none() {
                    port.range = shared_range.map(str::to_string);
                }
            }
        }
    }
}

/// Cut a declaration at its `= default`, ignoring `=` inside `[...]`.
fn without_default(declaration: &str) -> &str {
    mask_brackets(declaration)
        .find('=')
        .map_or(declaration, |i| &declaration[..i])
}

/// Byte ranges of `task ... endtask` and `function ... endfunction` bodies.
///
/// Prototypes such as `import "DPI-C" function ...;` have no body and open
/// no region. An unterminated subroutine runs to the end of `body`.
fn subroutine_regions(body: &str) -> Vec<(usize, usize)> {
    let mut regions = Vec::new();
    let mut open = None;
    for found in SUBROUTINE_BOUNDARY.find_iter(body) {
        let word = found.as_str().to_ascii_lowercase();
        match (open, word.starts_with("end")) {
            (None, false) => {
                let line_start = body[..found.start()].rfind('\n').map_or(0, |i| i + 1);
                let lead = body[line_start..found.start()].to_ascii_lowercase();
                let prototype = ["import", "export", "extern"]
                    .iter()
                    .any(|word| lead.contains(word));
                if !prototype {
                    open = Some(found.start());
                }
            }
            (Some(start), true) => {
                regions.push((start, found.end()));
                open = None;
            }
            _ => {}
        }
    }
    if let Some(start) = open {
        regions.push((start, body.len()));
    }
    regions
}
