#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    Line,
    Block,
}

#[derive(Debug, PartialEq)]
pub enum Doc {
    Null,
    Text(String),
    Concat(Vec<Doc>),
    Line,
    SoftLine,
    HardLine,
    LiteralLine,
    Indent(Box<Doc>),
    Group {
        content: Box<Doc>,
        id: Option<GroupId>,
    },
    IfBreak {
        broken: Box<Doc>,
        flat: Box<Doc>,
        group: Option<GroupId>,
    },
    LeadingComment {
        text: String,
        kind: CommentKind,
    },
    TrailingComment {
        text: String,
        kind: CommentKind,
    },
}

impl Doc {
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        debug_assert!(!text.contains('\n'), "text must not contain line breaks");
        Self::Text(text)
    }

    pub fn concat(docs: Vec<Doc>) -> Self {
        Self::Concat(docs)
    }

    pub fn group(content: Doc) -> Self {
        Self::Group {
            content: Box::new(content),
            id: None,
        }
    }

    pub fn group_with_id(id: GroupId, content: Doc) -> Self {
        Self::Group {
            content: Box::new(content),
            id: Some(id),
        }
    }

    pub fn indent(content: Doc) -> Self {
        Self::Indent(Box::new(content))
    }

    pub fn if_break(broken: Doc, flat: Doc) -> Self {
        Self::IfBreak {
            broken: Box::new(broken),
            flat: Box::new(flat),
            group: None,
        }
    }

    pub fn if_break_in(group: GroupId, broken: Doc, flat: Doc) -> Self {
        Self::IfBreak {
            broken: Box::new(broken),
            flat: Box::new(flat),
            group: Some(group),
        }
    }

    pub fn leading_comment(text: impl Into<String>, kind: CommentKind) -> Self {
        Self::LeadingComment {
            text: text.into(),
            kind,
        }
    }

    pub fn trailing_comment(text: impl Into<String>, kind: CommentKind) -> Self {
        Self::TrailingComment {
            text: text.into(),
            kind,
        }
    }

    pub fn is_null(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Concat(docs) => docs.is_empty(),
            _ => false,
        }
    }

    // A line break that can never be flattened forces every group around it,
    // up to the root, to render broken. Single-line comments count because
    // they commandeer the rest of their line.
    pub fn forces_break(&self) -> bool {
        match self {
            Self::HardLine | Self::LiteralLine => true,
            Self::LeadingComment { kind, .. } | Self::TrailingComment { kind, .. } => {
                *kind == CommentKind::Line
            }
            Self::Concat(docs) => docs.iter().any(Doc::forces_break),
            Self::Indent(content) => content.forces_break(),
            Self::Group { content, .. } => content.forces_break(),
            Self::IfBreak { broken, flat, .. } => broken.forces_break() && flat.forces_break(),
            Self::Null | Self::Text(_) | Self::Line | Self::SoftLine => false,
        }
    }
}
