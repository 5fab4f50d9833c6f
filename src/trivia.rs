use crate::doc::{CommentKind, Doc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriviaKind {
    EndOfLine,
    Whitespace,
    LineComment,
    DocComment,
    BlockComment,
    DisabledText,
    Directive,
    Region,
    Shebang,
    SkippedTokens,
}

#[derive(Debug)]
pub struct Trivia {
    pub kind: TriviaKind,
    pub text: String,
}

impl Trivia {
    pub fn new(kind: TriviaKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn end_of_line() -> Self {
        Self::new(TriviaKind::EndOfLine, "\n")
    }

    pub fn whitespace(text: impl Into<String>) -> Self {
        Self::new(TriviaKind::Whitespace, text)
    }

    pub fn line_comment(text: impl Into<String>) -> Self {
        Self::new(TriviaKind::LineComment, text)
    }

    pub fn doc_comment(text: impl Into<String>) -> Self {
        Self::new(TriviaKind::DocComment, text)
    }

    pub fn block_comment(text: impl Into<String>) -> Self {
        Self::new(TriviaKind::BlockComment, text)
    }

    pub fn disabled_text(text: impl Into<String>) -> Self {
        Self::new(TriviaKind::DisabledText, text)
    }

    pub fn directive(text: impl Into<String>) -> Self {
        Self::new(TriviaKind::Directive, text)
    }

    pub fn region(text: impl Into<String>) -> Self {
        Self::new(TriviaKind::Region, text)
    }
}

pub fn format_leading(trivia: &[Trivia], skip_last_hard_line: bool) -> Doc {
    let mut parts = vec![];

    // Blank lines are dropped until the first comment or directive shows up,
    // so a scope never opens with an artificial empty line.
    let mut keep_blank_lines = false;

    for (i, atom) in trivia.iter().enumerate() {
        if keep_blank_lines && atom.kind == TriviaKind::EndOfLine {
            parts.push(Doc::HardLine);
        }
        if !matches!(atom.kind, TriviaKind::EndOfLine | TriviaKind::Whitespace) {
            keep_blank_lines = true;
        }
        match atom.kind {
            TriviaKind::LineComment => {
                parts.push(Doc::leading_comment(
                    trim_line_end(&atom.text),
                    CommentKind::Line,
                ));
            }
            TriviaKind::DocComment => {
                // Documentation comments always occupy a line of their own.
                parts.push(Doc::leading_comment(
                    trim_line_end(&atom.text),
                    CommentKind::Line,
                ));
                parts.push(Doc::HardLine);
            }
            TriviaKind::BlockComment => {
                parts.push(Doc::leading_comment(
                    trim_line_end(&atom.text),
                    CommentKind::Block,
                ));
            }
            TriviaKind::DisabledText => {
                // Disabled code keeps its own layout, line by line, at column 0.
                for line in trim_line_end(&atom.text).split('\n') {
                    parts.push(Doc::LiteralLine);
                    parts.push(Doc::text(line.trim_end_matches('\r')));
                }
            }
            TriviaKind::Directive => {
                // The trailing hard line here is the one a following
                // LiteralLine trims; a genuine blank line between two
                // directives survives as its own hard line.
                parts.push(Doc::LiteralLine);
                parts.push(Doc::text(trim_line_end(&atom.text)));
                parts.push(Doc::HardLine);
            }
            TriviaKind::Region => {
                // Region markers keep their original leading indentation
                // character for character.
                let mut text = trim_line_end(&atom.text).to_string();
                if i > 0 && trivia[i - 1].kind == TriviaKind::Whitespace {
                    text = format!("{}{}", trivia[i - 1].text, text);
                }
                parts.push(Doc::LiteralLine);
                parts.push(Doc::text(text));
                parts.push(Doc::HardLine);
            }
            // Line endings are handled above; whitespace and trivia kinds
            // this formatter does not special-case render nothing.
            _ => {}
        }
    }

    if skip_last_hard_line && matches!(parts.last(), Some(Doc::HardLine)) {
        parts.pop();
    }

    if parts.is_empty() {
        Doc::Null
    } else {
        Doc::concat(parts)
    }
}

// For trivia ahead of a closing-brace style token: the trivia aligns with
// the body above it, one indent level deeper than the token itself.
pub fn format_leading_aligned(trivia: &[Trivia]) -> Doc {
    let printed = format_leading(trivia, true);
    if printed.is_null() {
        printed
    } else {
        Doc::concat(vec![Doc::indent(printed), Doc::HardLine])
    }
}

pub fn format_trailing(trivia: &[Trivia]) -> Doc {
    let mut parts = vec![];
    for atom in trivia {
        match atom.kind {
            TriviaKind::LineComment | TriviaKind::DocComment => {
                parts.push(Doc::trailing_comment(
                    trim_line_end(&atom.text),
                    CommentKind::Line,
                ));
            }
            TriviaKind::BlockComment => {
                parts.push(Doc::text(" "));
                parts.push(Doc::trailing_comment(
                    trim_line_end(&atom.text),
                    CommentKind::Block,
                ));
            }
            // Line endings and whitespace carry no information once the
            // printer lays out the line itself.
            _ => {}
        }
    }
    if parts.is_empty() {
        Doc::Null
    } else {
        Doc::concat(parts)
    }
}

pub fn format_token(
    text: impl Into<String>,
    leading: &[Trivia],
    trailing: &[Trivia],
    before_if_no_leading: Option<Doc>,
    after_if_no_trailing: Option<Doc>,
) -> Doc {
    let mut parts = vec![];

    let leading = format_leading(leading, false);
    if !leading.is_null() {
        parts.push(leading);
    } else if let Some(before) = before_if_no_leading {
        parts.push(before);
    }

    parts.push(Doc::text(text));

    let trailing = format_trailing(trailing);
    if !trailing.is_null() {
        parts.push(trailing);
    } else if let Some(after) = after_if_no_trailing {
        parts.push(after);
    }

    Doc::concat(parts)
}

fn trim_line_end(text: &str) -> &str {
    text.trim_end_matches(['\n', '\r'])
}
