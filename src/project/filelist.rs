//! Initial defines from filelist and command-line style sources.
//!
//! Recognized forms, one or more per line:
//!
//! - `+define+A+B=1` (values are ignored)
//! - `-DNAME` and `-DNAME=value`
//! - `-D NAME`
//! - `` `define NAME body``
//!
//! Everything else on a line (source paths, `+incdir+`, other options) is
//! ignored, as are `//` and `#` comments.

use tracing::trace;

use crate::syntax::DefineSet;

/// Collect every define named in `text`.
pub fn parse_defines(text: &str) -> DefineSet {
    let mut defines = DefineSet::new();
    for line in text.lines() {
        let line = strip_comment(line).trim();
        if let Some(rest) = line.strip_prefix("`define") {
            if let Some(name) = rest.split_whitespace().next().and_then(define_name) {
                defines.insert(name);
            }
            continue;
        }

        let mut tokens = line.split_whitespace();
        while let Some(token) = tokens.next() {
            if let Some(list) = token.strip_prefix("+define+") {
                defines.extend(list.split('+').filter_map(define_name));
            } else if token == "-D" {
                if let Some(name) = tokens.next().and_then(define_name) {
                    defines.insert(name);
                }
            } else if let Some(name) = token.strip_prefix("-D").and_then(define_name) {
                defines.insert(name);
            } else {
                trace!("filelist token ignored: {}", token);
            }
        }
    }
    defines
}

/// The name part of `NAME` or `NAME=value`.
fn define_name(item: &str) -> Option<&str> {
    let name = item.split('=').next().unwrap_or_default().trim();
    (!name.is_empty()).then_some(name)
}

fn strip_comment(line: &str) -> &str {
    let end = [line.find("//"), line.find('#')]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(line.len());
    &line[..end]
}
