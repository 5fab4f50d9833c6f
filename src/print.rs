use crate::config::FormatConfig;
use crate::doc::{CommentKind, Doc, GroupId};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Flat,
    Break,
}

pub(crate) fn print(doc: &Doc, config: &FormatConfig) -> String {
    log::debug!(
        "print: line_width={} indent_size={}",
        config.line_width,
        config.indent_size
    );
    Printer::new(config).run(doc)
}

#[derive(Debug)]
struct Printer<'a> {
    config: &'a FormatConfig,
    buffer: String,
    // Width already consumed on the current line, pending indentation included.
    column: usize,
    // Indentation to emit before the next visible text. Kept out of the
    // buffer until then so blank lines never carry trailing spaces.
    pending_indent: usize,
    // The buffer ends with a line break emitted by a break point, which a
    // literal line may trim. Line breaks inside literal text never qualify.
    trim_pending: bool,
    group_modes: HashMap<GroupId, Mode>,
}

impl<'a> Printer<'a> {
    fn new(config: &'a FormatConfig) -> Self {
        Self {
            config,
            buffer: String::new(),
            column: 0,
            pending_indent: 0,
            trim_pending: false,
            group_modes: HashMap::new(),
        }
    }

    fn run(mut self, root: &Doc) -> String {
        let mut work = vec![(root, 0_usize, Mode::Break)];
        while let Some((doc, indent, mode)) = work.pop() {
            match doc {
                Doc::Null => {}
                Doc::Text(text) => self.push_text(text),
                Doc::Concat(docs) => {
                    for child in docs.iter().rev() {
                        work.push((child, indent, mode));
                    }
                }
                Doc::Indent(content) => work.push((content.as_ref(), indent + 1, mode)),
                Doc::Line => match mode {
                    Mode::Flat => self.push_text(" "),
                    Mode::Break => self.break_line(indent),
                },
                Doc::SoftLine => {
                    if mode == Mode::Break {
                        self.break_line(indent);
                    }
                }
                Doc::HardLine => self.break_line(indent),
                Doc::LiteralLine => self.literal_line(),
                Doc::Group { content, id } => {
                    let chosen = if content.forces_break() {
                        Mode::Break
                    } else if mode == Mode::Flat || self.fits(content) {
                        Mode::Flat
                    } else {
                        Mode::Break
                    };
                    if chosen == Mode::Break {
                        log::trace!("group breaks at column {}", self.column);
                    }
                    if let Some(id) = id {
                        self.group_modes.insert(*id, chosen);
                    }
                    work.push((content.as_ref(), indent, chosen));
                }
                Doc::IfBreak {
                    broken,
                    flat,
                    group,
                } => {
                    let resolved = match group {
                        Some(id) => *self.group_modes.get(id).unwrap_or_else(|| {
                            panic!("conditional content refers to unknown group {id:?}")
                        }),
                        None => mode,
                    };
                    let branch = match resolved {
                        Mode::Break => broken,
                        Mode::Flat => flat,
                    };
                    work.push((branch.as_ref(), indent, mode));
                }
                Doc::LeadingComment { text, .. } => self.push_text(text),
                Doc::TrailingComment { text, kind } => {
                    if *kind == CommentKind::Line {
                        self.push_text(" ");
                    }
                    self.push_text(text);
                }
            }
        }
        self.buffer
    }

    // Flat measurement of a group's content against the remaining width.
    // Aborts as soon as the budget is exceeded or an unconditional break is
    // found, so the work per group is bounded by the line width.
    fn fits(&self, content: &Doc) -> bool {
        let mut remaining = self.config.line_width.saturating_sub(self.column);
        let mut work = vec![content];
        while let Some(doc) = work.pop() {
            match doc {
                Doc::Null | Doc::SoftLine => {}
                Doc::Text(text) => {
                    if text.len() > remaining {
                        return false;
                    }
                    remaining -= text.len();
                }
                Doc::Line => {
                    if remaining < 1 {
                        return false;
                    }
                    remaining -= 1;
                }
                Doc::HardLine | Doc::LiteralLine => return false,
                Doc::Concat(docs) => work.extend(docs.iter().rev()),
                Doc::Indent(content) => work.push(content.as_ref()),
                Doc::Group { content, .. } => work.push(content.as_ref()),
                Doc::IfBreak {
                    broken,
                    flat,
                    group,
                } => {
                    // A group still being measured has no recorded mode yet;
                    // its conditional content measures flat.
                    let recorded = (*group).and_then(|id| self.group_modes.get(&id).copied());
                    let branch = match recorded {
                        Some(Mode::Break) => broken,
                        _ => flat,
                    };
                    work.push(branch.as_ref());
                }
                Doc::LeadingComment { text, kind } | Doc::TrailingComment { text, kind } => {
                    if *kind == CommentKind::Line || text.contains('\n') {
                        return false;
                    }
                    if text.len() > remaining {
                        return false;
                    }
                    remaining -= text.len();
                }
            }
        }
        true
    }

    fn push_text(&mut self, text: &str) {
        if self.pending_indent > 0 {
            let spaces = " ".repeat(self.pending_indent);
            self.buffer.push_str(&spaces);
            self.pending_indent = 0;
        }
        self.buffer.push_str(text);
        self.trim_pending = false;
        // Comment text may span lines; the column restarts after its last one.
        match text.rfind('\n') {
            Some(pos) => self.column = text.len() - pos - 1,
            None => self.column += text.len(),
        }
    }

    fn break_line(&mut self, indent: usize) {
        self.trim_line_end();
        self.buffer.push('\n');
        self.trim_pending = true;
        let indent_width = indent * self.config.indent_size;
        self.pending_indent = indent_width;
        self.column = indent_width;
    }

    // A literal line trims at most one pending line break just before it and
    // emits its own with zero indentation, regardless of the indent stack.
    fn literal_line(&mut self) {
        self.trim_line_end();
        if self.trim_pending {
            self.buffer.pop();
            self.trim_pending = false;
        }
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.pending_indent = 0;
        self.column = 0;
    }

    fn trim_line_end(&mut self) {
        while self.buffer.ends_with(' ') {
            self.buffer.pop();
        }
    }
}
