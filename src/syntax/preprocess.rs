//! Line-oriented conditional compilation.
//!
//! Only bare-identifier conditions are supported; macro bodies are never
//! substituted and `` `include`` is not followed.

use tracing::debug;

use super::DefineSet;
use crate::core::text_utils::{blank_line, is_word_character};

/// One `` `ifdef``/`` `ifndef`` nesting level.
#[derive(Debug, Clone, Copy)]
struct Frame {
    /// Whether the enclosing context was active when this frame was pushed.
    parent_active: bool,
    /// Whether the current branch of this frame is active.
    active: bool,
    /// Whether some branch of this frame has already been taken.
    taken: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive<'a> {
    Define(&'a str),
    Undef(&'a str),
    Ifdef(&'a str),
    Ifndef(&'a str),
    Elsif(&'a str),
    Else,
    Endif,
    Other,
}

impl<'a> Directive<'a> {
    /// Recognize `` `word rest`` at the start of a line (after indentation).
    fn parse(line: &'a str) -> Option<Self> {
        let rest = line.trim_start_matches([' ', '\t']).strip_prefix('`')?;
        let word_len = rest
            .find(|c: char| !is_word_character(c))
            .unwrap_or(rest.len());
        if word_len == 0 {
            return None;
        }
        let (word, tail) = rest.split_at(word_len);
        let arg = first_word(tail);
        Some(match word {
            "define" => Directive::Define(arg),
            "undef" => Directive::Undef(arg),
            "ifdef" => Directive::Ifdef(arg),
            "ifndef" => Directive::Ifndef(arg),
            "elsif" => Directive::Elsif(arg),
            "else" => Directive::Else,
            "endif" => Directive::Endif,
            _ => Directive::Other,
        })
    }
}

fn first_word(text: &str) -> &str {
    let text = text.trim_start();
    let len = text
        .find(|c: char| !is_word_character(c))
        .unwrap_or(text.len());
    &text[..len]
}

fn continues(line: &str) -> bool {
    line.trim_end().ends_with('\\')
}

/// Blank inactive conditional regions and every directive line.
///
/// `defines` is updated by active `` `define``/`` `undef`` lines so callers can
/// carry it into the next file. The output has the same length and newline
/// offsets as `text`. Malformed nesting never fails: a stray `` `endif`` is
/// ignored and unclosed frames simply end with the text.
pub fn preprocess(text: &str, defines: &mut DefineSet) -> String {
    let mut out = String::with_capacity(text.len());
    let mut stack: Vec<Frame> = Vec::new();
    let mut in_define_body = false;

    for line in text.split_inclusive('\n') {
        if in_define_body {
            in_define_body = continues(line);
            blank_line(line, &mut out);
            continue;
        }

        let active = stack.last().is_none_or(|frame| frame.active);
        let Some(directive) = Directive::parse(line) else {
            if active {
                out.push_str(line);
            } else {
                blank_line(line, &mut out);
            }
            continue;
        };

        match directive {
            Directive::Define(name) => {
                in_define_body = continues(line);
                if active && !name.is_empty() {
                    defines.insert(name);
                }
            }
            Directive::Undef(name) => {
                if active {
                    defines.remove(name);
                }
            }
            Directive::Ifdef(name) | Directive::Ifndef(name) => {
                let defined = defines.contains(name);
                let condition = if matches!(directive, Directive::Ifdef(_)) {
                    defined
                } else {
                    !defined
                };
                let taken = active && condition;
                stack.push(Frame {
                    parent_active: active,
                    active: taken,
                    taken,
                });
            }
            Directive::Elsif(name) => match stack.last_mut() {
                Some(frame) => enter_branch(frame, defines.contains(name)),
                None => debug!("`elsif {} without matching `ifdef", name),
            },
            Directive::Else => match stack.last_mut() {
                Some(frame) => enter_branch(frame, true),
                None => debug!("`else without matching `ifdef"),
            },
            Directive::Endif => {
                if stack.pop().is_none() {
                    debug!("`endif without matching `ifdef");
                }
            }
            Directive::Other => {}
        }
        blank_line(line, &mut out);
    }

    if !stack.is_empty() {
        debug!("{} conditional block(s) left open at end of text", stack.len());
    }
    out
}

fn enter_branch(frame: &mut Frame, condition: bool) {
    if !frame.parent_active || frame.taken {
        frame.active = false;
    } else {
        frame.active = condition;
        frame.taken = condition;
    }
}
