//! Module span detection and header parsing.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::instance::find_instances;
use super::keywords::KeywordDenylist;
use super::ports::{apply_body_declarations, parse_port_list};
use super::scan::{matching_close, range, skip_ws};
use super::syntax::{ModuleSyntax, PortSyntax};

static MODULE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^[ \t]*((?:macro)?module)[ \t]+(?:(?:automatic|static)[ \t]+)?([A-Za-z_][A-Za-z0-9_$]*)",
    )
    .expect("module header pattern is valid")
});

static ENDMODULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bendmodule\b").expect("endmodule pattern is valid"));

struct Header<'t> {
    keyword_start: usize,
    name: &'t str,
    name_start: usize,
    name_end: usize,
}

pub(crate) fn find_modules(text: &str, denylist: &KeywordDenylist) -> Vec<ModuleSyntax> {
    let headers: Vec<Header<'_>> = MODULE_HEADER
        .captures_iter(text)
        .filter_map(|caps| {
            let keyword = caps.get(1)?;
            let name = caps.get(2)?;
            Some(Header {
                keyword_start: keyword.start(),
                name: name.as_str(),
                name_start: name.start(),
                name_end: name.end(),
            })
        })
        .collect();

    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let next_start = headers
                .get(i + 1)
                .map_or(text.len(), |next| next.keyword_start);
            let module_end = ENDMODULE
                .find(&text[header.name_end..next_start])
                .map_or(next_start, |m| header.name_end + m.start());
            build_module(text, header, module_end, denylist)
        })
        .collect()
}

fn build_module(
    text: &str,
    header: &Header<'_>,
    module_end: usize,
    denylist: &KeywordDenylist,
) -> ModuleSyntax {
    let (mut ports, body_start) = parse_header(text, header, module_end, denylist);
    apply_body_declarations(text, body_start, module_end, &mut ports);
    let instances = find_instances(text, body_start, module_end, denylist);

    trace!(
        "module {}: {} port(s), {} instance(s)",
        header.name,
        ports.len(),
        instances.len()
    );

    ModuleSyntax {
        name: header.name.to_string(),
        header_range: range(header.keyword_start, header.name_end),
        name_range: range(header.name_start, header.name_end),
        body_range: range(body_start, module_end),
        ports,
        instances,
    }
}

/// Parse `[#(...)] [( ports )] [;]` after the module name.
///
/// Returns the ports and the offset where the body starts. An unbalanced
/// parameter or port list yields no ports and a body starting right after
/// the name.
fn parse_header(
    text: &str,
    header: &Header<'_>,
    limit: usize,
    denylist: &KeywordDenylist,
) -> (Vec<PortSyntax>, usize) {
    let bytes = text.as_bytes();
    let unterminated = || {
        trace!("module {}: unterminated header", header.name);
        (Vec::new(), header.name_end)
    };

    let mut pos = skip_ws(bytes, header.name_end, limit);
    if pos < limit && bytes[pos] == b'#' {
        let open = skip_ws(bytes, pos + 1, limit);
        let Some(close) = matching_close(bytes, open, limit) else {
            return unterminated();
        };
        pos = skip_ws(bytes, close + 1, limit);
    }

    let mut ports = Vec::new();
    if pos < limit && bytes[pos] == b'(' {
        let Some(close) = matching_close(bytes, pos, limit) else {
            return unterminated();
        };
        ports = parse_port_list(text, pos + 1, close, denylist);
        pos = skip_ws(bytes, close + 1, limit);
    }

    if pos < limit && bytes[pos] == b';' {
        pos += 1;
    }
    (ports, pos)
}
