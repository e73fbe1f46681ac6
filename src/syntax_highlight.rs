pub mod overlay;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// Simple regex-free Verilog syntax highlighter
/// This provides keyword, literal, comment and operator highlighting
pub struct VerilogHighlighter;

impl VerilogHighlighter {
    /// Highlight a single line and return styled spans
    pub fn highlight(text: &str) -> Vec<Span<'static>> {
        let mut in_block_comment = false;
        highlight_line(text, &mut in_block_comment)
    }

    /// Highlight a buffer line by line
    ///
    /// Block comments carry over from one line to the next.
    pub fn highlight_lines(lines: &[String]) -> Vec<Vec<Span<'static>>> {
        let mut in_block_comment = false;
        lines
            .iter()
            .map(|line| highlight_line(line, &mut in_block_comment))
            .collect()
    }
}

fn comment_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

fn collect(chars: &[char]) -> String {
    chars.iter().collect()
}

fn highlight_line(text: &str, in_block_comment: &mut bool) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        // Inside /* ... */ (possibly opened on an earlier line)
        if *in_block_comment {
            let start = i;
            while i < chars.len() {
                if chars[i] == '*' && chars.get(i + 1) == Some(&'/') {
                    i += 2;
                    *in_block_comment = false;
                    break;
                }
                i += 1;
            }
            spans.push(Span::styled(collect(&chars[start..i]), comment_style()));
            continue;
        }

        // Skip whitespace (keep it unstyled)
        if chars[i].is_whitespace() {
            let start = i;
            while i < chars.len() && chars[i].is_whitespace() {
                i += 1;
            }
            spans.push(Span::raw(collect(&chars[start..i])));
            continue;
        }

        // Line comment runs to the end of the line
        if chars[i] == '/' && chars.get(i + 1) == Some(&'/') {
            spans.push(Span::styled(collect(&chars[i..]), comment_style()));
            break;
        }

        if chars[i] == '/' && chars.get(i + 1) == Some(&'*') {
            *in_block_comment = true;
            let start = i;
            i += 2;
            while i < chars.len() {
                if chars[i] == '*' && chars.get(i + 1) == Some(&'/') {
                    i += 2;
                    *in_block_comment = false;
                    break;
                }
                i += 1;
            }
            spans.push(Span::styled(collect(&chars[start..i]), comment_style()));
            continue;
        }

        // String literals (double-quoted)
        if chars[i] == '"' {
            let start = i;
            i += 1;
            while i < chars.len() {
                if chars[i] == '\\' && i + 1 < chars.len() {
                    i += 2; // Skip escaped character
                } else if chars[i] == '"' {
                    i += 1;
                    break;
                } else {
                    i += 1;
                }
            }
            spans.push(Span::styled(
                collect(&chars[start..i]),
                Style::default().fg(Color::Green),
            ));
            continue;
        }

        // Compiler directives (`define, `timescale, macro uses)
        if chars[i] == '`' {
            let start = i;
            i += 1;
            while i < chars.len() && is_identifier_char(chars[i]) {
                i += 1;
            }
            spans.push(Span::styled(
                collect(&chars[start..i]),
                Style::default().fg(Color::LightRed),
            ));
            continue;
        }

        // System tasks and functions ($display, $finish)
        if chars[i] == '$' && chars.get(i + 1).is_some_and(|c| is_identifier_start(*c)) {
            let start = i;
            i += 1;
            while i < chars.len() && is_identifier_char(chars[i]) {
                i += 1;
            }
            spans.push(Span::styled(
                collect(&chars[start..i]),
                Style::default().fg(Color::Blue),
            ));
            continue;
        }

        // Numbers, sized (4'b1010, 8'hFF) or unsized ('d12, 42)
        if chars[i].is_ascii_digit() || (chars[i] == '\'' && is_base_at(&chars, i + 1)) {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '_') {
                i += 1;
            }
            if i < chars.len() && chars[i] == '\'' && is_base_at(&chars, i + 1) {
                i += 1;
                if matches!(chars[i], 's' | 'S') {
                    i += 1;
                }
                i += 1; // base letter
                while i < chars.len() && is_based_digit(chars[i]) {
                    i += 1;
                }
            } else if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '_') {
                    i += 1;
                }
            }
            spans.push(Span::styled(
                collect(&chars[start..i]),
                Style::default().fg(Color::Cyan),
            ));
            continue;
        }

        // Operators and punctuation
        if is_operator(chars[i]) {
            let start = i;
            i += 1;
            // Longest match first (<<<, ===, <=, ...)
            for len in [3, 2] {
                if start + len <= chars.len() {
                    let candidate = collect(&chars[start..start + len]);
                    if is_multi_char_operator(&candidate) {
                        i = start + len;
                        break;
                    }
                }
            }

            spans.push(Span::styled(
                collect(&chars[start..i]),
                Style::default().fg(Color::Magenta),
            ));
            continue;
        }

        // Keywords and identifiers
        if is_identifier_start(chars[i]) {
            let start = i;
            while i < chars.len() && is_identifier_char(chars[i]) {
                i += 1;
            }

            let word = collect(&chars[start..i]);
            if is_keyword(&word) {
                spans.push(Span::styled(word, Style::default().fg(Color::Yellow)));
            } else if is_net_type(&word) {
                spans.push(Span::styled(word, Style::default().fg(Color::LightBlue)));
            } else {
                spans.push(Span::raw(word));
            }
            continue;
        }

        // Single character we don't recognize
        spans.push(Span::raw(chars[i].to_string()));
        i += 1;
    }

    spans
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '$'
}

/// Whether a base specifier (`b`, `o`, `d`, `h`, optionally signed) starts at `i`
fn is_base_at(chars: &[char], i: usize) -> bool {
    match chars.get(i) {
        Some('s' | 'S') => matches!(
            chars.get(i + 1),
            Some('b' | 'B' | 'o' | 'O' | 'd' | 'D' | 'h' | 'H')
        ),
        Some(c) => matches!(c, 'b' | 'B' | 'o' | 'O' | 'd' | 'D' | 'h' | 'H'),
        None => false,
    }
}

fn is_based_digit(ch: char) -> bool {
    ch.is_ascii_hexdigit() || matches!(ch, '_' | 'x' | 'X' | 'z' | 'Z' | '?')
}

/// Check if a character is an operator
fn is_operator(ch: char) -> bool {
    matches!(
        ch,
        '=' | '!' | '<' | '>' | '+' | '-' | '*' | '/' | '%' | '&' | '|' | '^' | '~' | '?' | ':'
            | '(' | ')' | '[' | ']' | '{' | '}' | ',' | ';' | '@' | '#' | '.'
    )
}

/// Check if a string is a multi-character operator
fn is_multi_char_operator(op: &str) -> bool {
    matches!(
        op,
        "===" | "!==" | "<<<" | ">>>" | "==" | "!=" | "<=" | ">=" | "&&" | "||" | "<<" | ">>"
            | "**" | "~&" | "~|" | "~^" | "^~" | "->" | "+:" | "-:"
    )
}

/// Check if a word is a Verilog keyword
fn is_keyword(word: &str) -> bool {
    matches!(
        word,
        // Structure
        "module" | "endmodule" | "macromodule" | "primitive" | "endprimitive" |
        "function" | "endfunction" | "task" | "endtask" | "generate" | "endgenerate" |
        "genvar" | "parameter" | "localparam" | "defparam" | "specify" | "endspecify" |

        // Ports
        "input" | "output" | "inout" |

        // Procedural blocks and statements
        "always" | "initial" | "assign" | "deassign" | "force" | "release" |
        "begin" | "end" | "fork" | "join" | "if" | "else" |
        "case" | "casex" | "casez" | "endcase" | "default" |
        "for" | "while" | "repeat" | "forever" | "wait" | "disable" |

        // Events
        "posedge" | "negedge" | "or" | "and" | "not" |

        // Modifiers
        "signed" | "unsigned" | "automatic"
    )
}

/// Check if a word names a data or net type
fn is_net_type(word: &str) -> bool {
    matches!(
        word,
        "wire" | "reg" | "integer" | "real" | "realtime" | "time" | "tri" | "tri0" | "tri1" |
        "wand" | "wor" | "triand" | "trior" | "supply0" | "supply1" | "event"
    )
}

#[cfg(test)]
#[path = "syntax_highlight_tests/unit_tests.rs"]
mod unit_tests;
