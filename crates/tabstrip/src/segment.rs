//! Rendered output of a tab header pass.

use std::fmt;

use ratatui::text::{Line, Span};

/// Intent attached to a label segment.
///
/// Plain data: nothing happens when a segment carrying it is drawn. The
/// embedding application decides what a click on the label means.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TabAction {
    /// Make the named tab active.
    Activate(String),
}

impl fmt::Display for TabAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Activate(name) => write!(f, "activate_tab('{name}')"),
        }
    }
}

/// One styled run of text plus the action it stands for, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledSegment {
    pub span: Span<'static>,
    pub action: Option<TabAction>,
}

impl StyledSegment {
    /// Blank run of `width` unstyled cells.
    pub fn pad(width: usize) -> Self {
        Self {
            span: Span::raw(" ".repeat(width)),
            action: None,
        }
    }

    pub fn label(span: Span<'static>, action: TabAction) -> Self {
        Self {
            span,
            action: Some(action),
        }
    }

    pub fn is_pad(&self) -> bool {
        self.action.is_none()
    }
}

/// Collapse segments into a drawable line, dropping the action metadata.
pub fn segments_to_line(segments: Vec<StyledSegment>) -> Line<'static> {
    Line::from(
        segments
            .into_iter()
            .map(|segment| segment.span)
            .collect::<Vec<_>>(),
    )
}
