//! `tabstrip`: a horizontal row of tab labels for ratatui.
//!
//! [`TabHeaders`] lays a set of [`Tab`]s out across a fixed-width row,
//! spreading the free space as uniform padding around every label. The
//! active tab is drawn as-is; every other tab is dimmed. Each render
//! records the column range of every label so that mouse clicks can be
//! mapped back to a tab name via [`TabHeaders::tab_at`].
//!
//! ```
//! use tabstrip::{Tab, TabHeaders};
//!
//! let mut headers = TabHeaders::from_tabs([Tab::new("One"), Tab::new("Two")])?;
//! let segments = headers.render(40);
//! assert_eq!(segments.len(), 6);
//! // free space 40 - 6 = 34 gives a pad of 9 around each label
//! assert_eq!(headers.active_range(), Some(9..12));
//! assert_eq!(headers.tab_at(10), Some("One"));
//! assert_eq!(headers.tab_at(13), None);
//! # Ok::<(), tabstrip::TabError>(())
//! ```

pub mod cells;
pub mod error;
pub mod headers;
pub mod opacity;
pub mod segment;
pub mod tab;
pub mod theme;

pub use error::TabError;
pub use headers::{DEFAULT_INACTIVE_OPACITY, LayoutOptions, TabHeaders};
pub use segment::{StyledSegment, TabAction, segments_to_line};
pub use tab::Tab;
