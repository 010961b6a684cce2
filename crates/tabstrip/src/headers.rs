//! Tab header layout, rendering, and the per-render column range cache.

use std::ops::Range;

use indexmap::IndexMap;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::Widget;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cells::cell_width;
use crate::error::TabError;
use crate::opacity;
use crate::segment::{StyledSegment, TabAction, segments_to_line};
use crate::tab::Tab;
use crate::theme;

pub const DEFAULT_INACTIVE_OPACITY: f32 = 0.5;

/// Optional knobs for [`TabHeaders::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    /// Name of the initially active tab. First tab when unset.
    #[serde(default)]
    pub active: Option<String>,

    /// Fixed render width in cells. Falls back to the width of each render
    /// call when unset (or zero).
    #[serde(default)]
    pub width: Option<u16>,

    /// Fixed pad before and after each label. Computed from free space when
    /// unset.
    #[serde(default)]
    pub tab_padding: Option<u16>,

    /// Opacity of every non-active tab, clamped to `0.0..=1.0`. NaN and
    /// infinities fall back to [`DEFAULT_INACTIVE_OPACITY`].
    #[serde(default = "default_inactive_opacity")]
    pub inactive_opacity: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            active: None,
            width: None,
            tab_padding: None,
            inactive_opacity: DEFAULT_INACTIVE_OPACITY,
        }
    }
}

fn default_inactive_opacity() -> f32 {
    DEFAULT_INACTIVE_OPACITY
}

/// A row of tab headers with one active tab.
///
/// Every [`render`](Self::render) rebuilds the range cache from scratch, so
/// [`ranges`](Self::ranges) and [`tab_at`](Self::tab_at) always describe the
/// most recent render. Before the first render the cache is empty.
#[derive(Debug, Clone)]
pub struct TabHeaders {
    /// Insertion order is render order. Duplicate names keep the slot of the
    /// first occurrence and the value of the last.
    tabs: IndexMap<String, Tab>,
    active: String,
    width: Option<u16>,
    tab_padding: Option<u16>,
    inactive_opacity: f32,
    ranges: IndexMap<String, Range<usize>>,
    /// Screen column the last render started at.
    origin: u16,
}

impl TabHeaders {
    pub fn new(
        tabs: impl IntoIterator<Item = Tab>,
        options: LayoutOptions,
    ) -> Result<Self, TabError> {
        let mut by_name = IndexMap::new();
        for tab in tabs {
            if let Some(previous) = by_name.insert(tab.name().to_owned(), tab) {
                debug!(name = previous.name(), "duplicate tab name, keeping the later tab");
            }
        }

        let active = match options.active {
            Some(name) if by_name.contains_key(&name) => name,
            Some(name) => return Err(TabError::UnknownTab { name }),
            None => by_name
                .keys()
                .next()
                .cloned()
                .ok_or(TabError::EmptyInput)?,
        };

        Ok(Self {
            tabs: by_name,
            active,
            width: options.width.filter(|width| *width > 0),
            tab_padding: options.tab_padding,
            inactive_opacity: sanitize_opacity(options.inactive_opacity),
            ranges: IndexMap::new(),
            origin: 0,
        })
    }

    /// Layout with default options: first tab active, padding fills the row.
    pub fn from_tabs(tabs: impl IntoIterator<Item = Tab>) -> Result<Self, TabError> {
        Self::new(tabs, LayoutOptions::default())
    }

    pub fn active_name(&self) -> &str {
        &self.active
    }

    /// Switch the active tab. Takes effect on the next render.
    pub fn set_active(&mut self, name: &str) -> Result<(), TabError> {
        if !self.tabs.contains_key(name) {
            return Err(TabError::UnknownTab {
                name: name.to_owned(),
            });
        }
        name.clone_into(&mut self.active);
        Ok(())
    }

    pub fn tabs(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.values()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Always false: construction rejects an empty tab list.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn inactive_opacity(&self) -> f32 {
        self.inactive_opacity
    }

    /// Label range of the active tab from the last render.
    ///
    /// `None` until a render has included the active tab.
    pub fn active_range(&self) -> Option<Range<usize>> {
        self.ranges.get(&self.active).cloned()
    }

    /// Label ranges of every tab from the last render, in render order.
    ///
    /// Columns count from the start of the rendered row, not the screen.
    pub fn ranges(&self) -> &IndexMap<String, Range<usize>> {
        &self.ranges
    }

    /// Name of the tab whose label covers screen `column`, if any.
    ///
    /// Padding cells belong to no tab. When drawn as a widget, the area's
    /// `x` is taken off first; after a bare [`render`](Self::render) the row
    /// starts at column 0.
    pub fn tab_at(&self, column: u16) -> Option<&str> {
        let column = usize::from(column.checked_sub(self.origin)?);
        self.ranges
            .iter()
            .find(|(_, range)| range.contains(&column))
            .map(|(name, _)| name.as_str())
    }

    /// Pad placed on both sides of every label for a row `width` cells wide.
    ///
    /// A fixed `tab_padding` wins. Otherwise the free space is split evenly
    /// per tab and halved, rounding up. Labels wider than the row give no
    /// padding at all.
    pub fn label_pad(&self, width: u16) -> usize {
        if let Some(padding) = self.tab_padding {
            return usize::from(padding);
        }

        let total: usize = self.tabs.values().map(|tab| cell_width(tab.label())).sum();
        let total = i64::try_from(total).unwrap_or(i64::MAX);
        let count = i64::try_from(self.tabs.len()).unwrap_or(i64::MAX).max(1);
        let free_space = i64::from(width) - total;
        if free_space < 0 {
            debug!(width, total, "tab labels overflow the available width");
        }

        let pad = (free_space.div_euclid(count) + 1).div_euclid(2);
        usize::try_from(pad).unwrap_or(0)
    }

    /// Lay the tabs out across `available_width` cells.
    ///
    /// A fixed width set at construction overrides `available_width`.
    /// Returns, per tab: leading pad, label, trailing pad. The label of every
    /// inactive tab is dimmed. The range cache is replaced wholesale.
    pub fn render(&mut self, available_width: u16) -> Vec<StyledSegment> {
        let width = self.width.unwrap_or(available_width);
        let label_pad = self.label_pad(width);
        trace!(width, label_pad, active = %self.active, "rendering tab headers");

        let mut segments = Vec::with_capacity(self.tabs.len() * 3);
        let mut ranges = IndexMap::with_capacity(self.tabs.len());
        let mut column = label_pad;

        for (name, tab) in &self.tabs {
            segments.push(StyledSegment::pad(label_pad));

            let label = Span::styled(tab.label().to_owned(), theme::tab_chip());
            let label_width = cell_width(tab.label());
            ranges.insert(name.clone(), column..column + label_width);
            column += label_width + label_pad * 2;

            let label = if *name == self.active {
                label
            } else {
                opacity::dim(label, self.inactive_opacity)
            };
            segments.push(StyledSegment::label(
                label,
                TabAction::Activate(name.clone()),
            ));

            segments.push(StyledSegment::pad(label_pad));
        }

        self.ranges = ranges;
        self.origin = 0;
        segments
    }
}

impl Widget for &mut TabHeaders {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let line = segments_to_line(TabHeaders::render(self, area.width));
        self.origin = area.x;
        line.render(area, buf);
    }
}

fn sanitize_opacity(opacity: f32) -> f32 {
    if opacity.is_finite() {
        opacity.clamp(0.0, 1.0)
    } else {
        debug!(opacity, "non-finite inactive opacity, using default");
        DEFAULT_INACTIVE_OPACITY
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::style::Color;

    use super::*;

    fn one_two_three() -> Vec<Tab> {
        vec![Tab::new("One"), Tab::new("Two"), Tab::new("Three")]
    }

    fn row_text(buf: &Buffer) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, buf.area.top())].symbol())
            .collect()
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn first_tab_is_active_by_default() {
        let headers = TabHeaders::from_tabs(one_two_three()).unwrap();
        assert_eq!(headers.active_name(), "One");
        assert_eq!(headers.len(), 3);
        assert!((headers.inactive_opacity() - DEFAULT_INACTIVE_OPACITY).abs() < f32::EPSILON);
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = TabHeaders::from_tabs(Vec::new()).unwrap_err();
        assert_eq!(err, TabError::EmptyInput);
    }

    #[test]
    fn unknown_active_tab_is_rejected() {
        let options = LayoutOptions {
            active: Some("Four".into()),
            ..LayoutOptions::default()
        };
        let err = TabHeaders::new(one_two_three(), options).unwrap_err();
        assert_eq!(
            err,
            TabError::UnknownTab {
                name: "Four".into()
            }
        );
    }

    #[test]
    fn duplicate_names_keep_first_slot_and_last_value() {
        let headers = TabHeaders::from_tabs([
            Tab::named("First", "a"),
            Tab::new("b"),
            Tab::named("Second", "a"),
        ])
        .unwrap();

        let labels: Vec<&str> = headers.tabs().map(Tab::label).collect();
        assert_eq!(labels, vec!["Second", "b"]);
        assert_eq!(headers.active_name(), "a");
    }

    #[test]
    fn opacity_is_clamped() {
        let options = LayoutOptions {
            inactive_opacity: 4.0,
            ..LayoutOptions::default()
        };
        let headers = TabHeaders::new(one_two_three(), options).unwrap();
        assert!((headers.inactive_opacity() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn non_finite_opacity_uses_default() {
        for opacity in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let options = LayoutOptions {
                active: Some("Two".into()),
                inactive_opacity: opacity,
                ..LayoutOptions::default()
            };
            let mut headers = TabHeaders::new(one_two_three(), options).unwrap();
            assert!((headers.inactive_opacity() - DEFAULT_INACTIVE_OPACITY).abs() < f32::EPSILON);

            let segments = headers.render(30);
            assert_eq!(segments[1].span.style.fg, Some(Color::Rgb(139, 139, 139)));
        }
    }

    // ── Active tab ───────────────────────────────────────────────────

    #[test]
    fn set_active_switches_tab() {
        let mut headers = TabHeaders::from_tabs(one_two_three()).unwrap();
        headers.set_active("Three").unwrap();
        assert_eq!(headers.active_name(), "Three");
    }

    #[test]
    fn set_active_rejects_unknown_and_keeps_previous() {
        let mut headers = TabHeaders::from_tabs(one_two_three()).unwrap();
        let err = headers.set_active("Four").unwrap_err();
        assert!(matches!(err, TabError::UnknownTab { .. }));
        assert_eq!(headers.active_name(), "One");
    }

    // ── Padding ──────────────────────────────────────────────────────

    #[test]
    fn padding_fills_free_space() {
        let headers = TabHeaders::from_tabs(one_two_three()).unwrap();
        // free = 30 - 11 = 19; (19 / 3 + 1) / 2 = 3
        assert_eq!(headers.label_pad(30), 3);
        // free = 31 - 11 = 20; (20 / 3 + 1) / 2 = 3
        assert_eq!(headers.label_pad(31), 3);
        // free = 35 - 11 = 24; (24 / 3 + 1) / 2 = 4
        assert_eq!(headers.label_pad(35), 4);
    }

    #[test]
    fn fixed_padding_wins() {
        let options = LayoutOptions {
            tab_padding: Some(1),
            ..LayoutOptions::default()
        };
        let headers = TabHeaders::new(one_two_three(), options).unwrap();
        assert_eq!(headers.label_pad(200), 1);
    }

    #[test]
    fn overflowing_labels_get_no_padding() {
        let headers = TabHeaders::from_tabs(one_two_three()).unwrap();
        assert_eq!(headers.label_pad(4), 0);
        assert_eq!(headers.label_pad(0), 0);
    }

    // ── Rendering and range cache ────────────────────────────────────

    #[test]
    fn ranges_are_empty_before_first_render() {
        let headers = TabHeaders::from_tabs(one_two_three()).unwrap();
        assert!(headers.ranges().is_empty());
        assert_eq!(headers.active_range(), None);
    }

    #[test]
    fn three_tabs_in_thirty_columns() {
        let options = LayoutOptions {
            active: Some("Two".into()),
            ..LayoutOptions::default()
        };
        let mut headers = TabHeaders::new(one_two_three(), options).unwrap();
        headers.render(30);

        insta::assert_debug_snapshot!(headers.ranges(), @r#"
        {
            "One": 3..6,
            "Two": 12..15,
            "Three": 21..26,
        }
        "#);
        assert_eq!(headers.active_range(), Some(12..15));
    }

    #[test]
    fn only_inactive_labels_are_dimmed() {
        let options = LayoutOptions {
            active: Some("Two".into()),
            ..LayoutOptions::default()
        };
        let mut headers = TabHeaders::new(one_two_three(), options).unwrap();
        let segments = headers.render(30);
        assert_eq!(segments.len(), 9);

        let labels: Vec<&StyledSegment> = segments.iter().filter(|s| !s.is_pad()).collect();
        let dimmed = Some(Color::Rgb(139, 139, 139));
        assert_eq!(labels[0].span.style.fg, dimmed);
        assert_eq!(labels[1].span.style, theme::tab_chip());
        assert_eq!(labels[2].span.style.fg, dimmed);
    }

    #[test]
    fn labels_carry_activation_directive() {
        let mut headers = TabHeaders::from_tabs(one_two_three()).unwrap();
        let actions: Vec<String> = headers
            .render(30)
            .iter()
            .filter_map(|s| s.action.as_ref().map(ToString::to_string))
            .collect();
        assert_eq!(
            actions,
            vec![
                "activate_tab('One')",
                "activate_tab('Two')",
                "activate_tab('Three')"
            ]
        );
    }

    #[test]
    fn pads_surround_every_label() {
        let mut headers = TabHeaders::from_tabs(one_two_three()).unwrap();
        let segments = headers.render(30);
        for triple in segments.chunks(3) {
            assert!(triple[0].is_pad());
            assert!(!triple[1].is_pad());
            assert!(triple[2].is_pad());
            assert_eq!(triple[0].span.content, "   ");
            assert_eq!(triple[2].span.content, "   ");
        }
    }

    #[test]
    fn render_is_idempotent() {
        let mut headers = TabHeaders::from_tabs(one_two_three()).unwrap();
        let first = headers.render(47);
        let first_ranges = headers.ranges().clone();
        let second = headers.render(47);
        assert_eq!(first, second);
        assert_eq!(&first_ranges, headers.ranges());
    }

    #[test]
    fn range_width_matches_label_cells() {
        let tabs = vec![Tab::new("日本語"), Tab::named("e\u{301}te", "ete"), Tab::new("x")];
        for padding in [None, Some(0), Some(2)] {
            let options = LayoutOptions {
                tab_padding: padding,
                ..LayoutOptions::default()
            };
            let mut headers = TabHeaders::new(tabs.clone(), options).unwrap();
            headers.render(40);
            let widths: Vec<usize> = headers.ranges().values().map(ExactSizeIterator::len).collect();
            assert_eq!(widths, vec![6, 3, 1]);
        }
    }

    #[test]
    fn ranges_increase_without_overlap() {
        let tabs = ["a", "bbbbbbbb", "cc", "d", "eeeee"].map(Tab::new);
        let mut headers = TabHeaders::from_tabs(tabs).unwrap();
        for width in [0, 10, 19, 64, 200] {
            headers.render(width);
            let ranges: Vec<&Range<usize>> = headers.ranges().values().collect();
            assert_eq!(ranges.len(), 5);
            for pair in ranges.windows(2) {
                assert!(pair[0].end <= pair[1].start, "{pair:?} at width {width}");
            }
        }
    }

    #[test]
    fn single_tab_starts_at_pad() {
        let mut headers = TabHeaders::from_tabs([Tab::new("Hello")]).unwrap();
        // 2 * 2 + 5
        headers.render(9);
        assert_eq!(headers.label_pad(9), 2);
        assert_eq!(headers.active_range(), Some(2..7));
    }

    #[test]
    fn fixed_width_overrides_available_width() {
        let options = LayoutOptions {
            width: Some(30),
            ..LayoutOptions::default()
        };
        let mut headers = TabHeaders::new(one_two_three(), options).unwrap();
        headers.render(120);
        assert_eq!(headers.ranges()["Three"], 21..26);
    }

    #[test]
    fn zero_fixed_width_means_unset() {
        let options = LayoutOptions {
            width: Some(0),
            ..LayoutOptions::default()
        };
        let mut headers = TabHeaders::new(one_two_three(), options).unwrap();
        headers.render(30);
        assert_eq!(headers.ranges()["One"], 3..6);
    }

    #[test]
    fn active_range_follows_active_tab() {
        let mut headers = TabHeaders::from_tabs(one_two_three()).unwrap();
        headers.render(30);
        headers.set_active("Three").unwrap();
        // cache still reflects the last render, which included "Three"
        assert_eq!(headers.active_range(), Some(21..26));
    }

    // ── Hit testing ──────────────────────────────────────────────────

    #[test]
    fn tab_at_maps_label_columns() {
        let mut headers = TabHeaders::from_tabs(one_two_three()).unwrap();
        headers.render(30);

        assert_eq!(headers.tab_at(3), Some("One"));
        assert_eq!(headers.tab_at(5), Some("One"));
        assert_eq!(headers.tab_at(12), Some("Two"));
        assert_eq!(headers.tab_at(25), Some("Three"));
    }

    #[test]
    fn tab_at_ignores_padding() {
        let mut headers = TabHeaders::from_tabs(one_two_three()).unwrap();
        headers.render(30);

        assert_eq!(headers.tab_at(0), None);
        assert_eq!(headers.tab_at(6), None);
        assert_eq!(headers.tab_at(11), None);
        assert_eq!(headers.tab_at(26), None);
    }

    #[test]
    fn tab_at_before_render_is_none() {
        let headers = TabHeaders::from_tabs(one_two_three()).unwrap();
        assert_eq!(headers.tab_at(4), None);
    }

    // ── Widget ───────────────────────────────────────────────────────

    #[test]
    fn widget_draws_row_and_fills_cache() {
        let mut headers = TabHeaders::from_tabs(one_two_three()).unwrap();
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        Widget::render(&mut headers, area, &mut buf);

        assert_eq!(row_text(&buf), "   One      Two      Three    ");
        assert_eq!(buf[(3, 0)].fg, theme::CHIP_FG);
        assert_eq!(buf[(3, 0)].bg, theme::CHIP_BG);
        assert_eq!(buf[(12, 0)].fg, Color::Rgb(139, 139, 139));
        assert_eq!(headers.tab_at(13), Some("Two"));
    }

    #[test]
    fn widget_hit_test_accounts_for_area_offset() {
        let mut headers = TabHeaders::from_tabs(one_two_three()).unwrap();
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 1));
        Widget::render(&mut headers, Rect::new(10, 0, 30, 1), &mut buf);

        assert_eq!(buf[(13, 0)].symbol(), "O");
        assert_eq!(headers.tab_at(13), Some("One"));
        assert_eq!(headers.tab_at(22), Some("Two"));
        assert_eq!(headers.tab_at(31), Some("Three"));
        assert_eq!(headers.tab_at(5), None);
        assert_eq!(headers.tab_at(16), None);
        // ranges stay relative to the row
        assert_eq!(headers.ranges()["One"], 3..6);
    }

    #[test]
    fn bare_render_resets_widget_offset() {
        let mut headers = TabHeaders::from_tabs(one_two_three()).unwrap();
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 1));
        Widget::render(&mut headers, Rect::new(10, 0, 30, 1), &mut buf);
        headers.render(30);
        assert_eq!(headers.tab_at(3), Some("One"));
    }

    #[test]
    fn widget_ignores_empty_area() {
        let mut headers = TabHeaders::from_tabs(one_two_three()).unwrap();
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        Widget::render(&mut headers, area, &mut buf);
        assert!(headers.ranges().is_empty());
    }
}
