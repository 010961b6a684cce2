// ── Tab layout errors ──
//
// Raised at construction or when switching the active tab. Rendering
// itself never fails: degenerate geometry still produces output.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabError {
    #[error("no tabs supplied, cannot pick an active tab")]
    EmptyInput,

    #[error("unknown tab: {name}")]
    UnknownTab { name: String },
}
