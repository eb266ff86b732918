//! Instantiation detection inside a module body.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::keywords::KeywordDenylist;
use super::scan::{ident_end, matching_close, range, skip_ws, word_end};
use super::syntax::{BindingSyntax, InstanceSyntax};

/// `[label :] TYPE` at the start of a line; the rest of the candidate is
/// walked by hand so parameter lists of any depth can be skipped.
static INSTANCE_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:[A-Za-z_][A-Za-z0-9_$]*[ \t]*:[ \t]*)?([A-Za-z_][A-Za-z0-9_$]*)")
        .expect("instance pattern is valid")
});

/// Find instantiations between `body_start` and `body_end`.
pub(crate) fn find_instances(
    text: &str,
    body_start: usize,
    body_end: usize,
    denylist: &KeywordDenylist,
) -> Vec<InstanceSyntax> {
    let mut instances = Vec::new();
    let mut resume = body_start;

    for caps in INSTANCE_START.captures_iter(&text[body_start..body_end]) {
        let Some(type_match) = caps.get(1) else {
            continue;
        };
        let type_start = body_start + type_match.start();
        if type_start < resume {
            continue;
        }
        let type_end = body_start + type_match.end();
        let candidate = parse_instance(text, type_start, type_end, body_end, denylist);
        if let Some((instance, end)) = candidate {
            resume = end;
            instances.push(instance);
        }
    }
    instances
}

fn parse_instance(
    text: &str,
    type_start: usize,
    type_end: usize,
    limit: usize,
    denylist: &KeywordDenylist,
) -> Option<(InstanceSyntax, usize)> {
    let bytes = text.as_bytes();
    let module_type = &text[type_start..type_end];
    if denylist.contains(module_type) {
        return None;
    }

    let pos = skip_ws(bytes, type_end, limit);
    let name_start = skip_parameters(bytes, pos, limit)?;
    let name_end = ident_end(bytes, name_start, limit)?;
    let instance_name = &text[name_start..name_end];
    if denylist.contains(instance_name) {
        trace!("rejecting {module_type} {instance_name}: keyword instance name");
        return None;
    }

    let mut pos = skip_ws(bytes, name_end, limit);
    if bytes.get(pos) == Some(&b'[') {
        pos = skip_ws(bytes, matching_close(bytes, pos, limit)? + 1, limit);
    }
    let open = skip_parameters(bytes, pos, limit)?;
    if open >= limit || bytes[open] != b'(' {
        return None;
    }
    let Some(close) = matching_close(bytes, open, limit) else {
        trace!("rejecting {module_type} {instance_name}: unbalanced port list");
        return None;
    };

    let instance = InstanceSyntax {
        module_type: module_type.to_string(),
        type_range: range(type_start, type_end),
        instance_name: instance_name.to_string(),
        name_range: range(name_start, name_end),
        bindings: parse_bindings(text, open + 1, close),
    };
    Some((instance, close + 1))
}

/// Skip `#(...)` or a single-token `#N` at `pos`; returns `pos` unchanged
/// when there is no parameter assignment.
fn skip_parameters(bytes: &[u8], pos: usize, limit: usize) -> Option<usize> {
    if pos >= limit || bytes[pos] != b'#' {
        return Some(pos);
    }
    let pos = skip_ws(bytes, pos + 1, limit);
    if bytes.get(pos) == Some(&b'(') {
        let close = matching_close(bytes, pos, limit)?;
        return Some(skip_ws(bytes, close + 1, limit));
    }
    let end = word_end(bytes, pos, limit);
    (end > pos).then(|| skip_ws(bytes, end, limit))
}

/// Named connections inside an instance's parentheses. Positional
/// connections and `.*` produce no bindings.
fn parse_bindings(text: &str, start: usize, end: usize) -> Vec<BindingSyntax> {
    let bytes = text.as_bytes();
    let mut bindings = Vec::new();
    let mut expect_binding = true;
    let mut pos = start;

    while pos < end {
        match bytes[pos] {
            b'(' | b'[' | b'{' => {
                pos = matching_close(bytes, pos, end).map_or(end, |close| close + 1);
                expect_binding = false;
                continue;
            }
            b',' => expect_binding = true,
            b'.' if expect_binding => {
                expect_binding = false;
                if let Some((binding, next)) = parse_binding(text, pos, end) {
                    bindings.push(binding);
                    pos = next;
                    continue;
                }
            }
            b if b.is_ascii_whitespace() => {}
            _ => expect_binding = false,
        }
        pos += 1;
    }
    bindings
}

fn parse_binding(text: &str, dot: usize, end: usize) -> Option<(BindingSyntax, usize)> {
    let bytes = text.as_bytes();
    let port_start = skip_ws(bytes, dot + 1, end);
    let port_end = ident_end(bytes, port_start, end)?;
    let port = &text[port_start..port_end];
    let port_range = range(port_start, port_end);

    let open = skip_ws(bytes, port_end, end);
    if open >= end || bytes[open] != b'(' {
        let binding = BindingSyntax {
            port: port.to_string(),
            port_range,
            expression: port.to_string(),
            expression_range: port_range,
        };
        return Some((binding, port_end));
    }

    let close = matching_close(bytes, open, end)?;
    let inner = &text[open + 1..close];
    let expression = inner.trim();
    let expression_start = open + 1 + (inner.len() - inner.trim_start().len());
    let binding = BindingSyntax {
        port: port.to_string(),
        port_range,
        expression: expression.to_string(),
        expression_range: range(expression_start, expression_start + expression.len()),
    };
    Some((binding, close + 1))
}
