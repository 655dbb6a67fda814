// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toggleable pill legend.
//!
//! Each category-set member gets one pill (rounded swatch + label) with
//! active/inactive styling. Desktop stacks pills in a column; the mobile
//! layout wraps them into rows bounded by a maximum width. The same layout
//! pass drives both mark generation and click hit-testing, so pills always
//! hit-test exactly where they render.

use kurbo::{Point, Rect};
use peniko::{Brush, Color};
use strata_core::{Mark, MarkId, RectMark, TextAnchor, TextBaseline, TextMark};

use crate::measure::TextMeasurer;
use crate::z_order;

const LABEL_ID_BASE: u64 = 1000;

const INACTIVE_PILL: Color = Color::from_rgb8(0xcc, 0xcc, 0xcc);
const INACTIVE_TEXT: Color = Color::from_rgb8(0x77, 0x77, 0x77);

/// One legend entry.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    /// Category label.
    pub label: String,
    /// Category color (used when active).
    pub color: Color,
    /// Whether the category is currently in the active selection.
    pub active: bool,
}

/// How pills are arranged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LegendArrangement {
    /// A vertical column (desktop).
    Column,
    /// Left-to-right rows wrapping at `max_width` (mobile).
    Wrap {
        /// Maximum row width before wrapping.
        max_width: f64,
    },
}

/// A resolved pill position (used for marks and hit-testing).
#[derive(Clone, Debug, PartialEq)]
pub struct LegendSlot {
    /// Index into the legend's item list.
    pub item: usize,
    /// Pill rectangle in scene coordinates.
    pub rect: Rect,
}

/// A pill legend specification.
#[derive(Clone, Debug)]
pub struct LegendSpec {
    /// Stable-id base; each generated mark uses a deterministic offset.
    pub id_base: u64,
    /// Items in display order.
    ///
    /// Display order is the caller's choice; the stacked chart shows the
    /// category set reversed so the topmost band lists first.
    pub items: Vec<LegendItem>,
    /// Pill arrangement.
    pub arrangement: LegendArrangement,
    /// Pill height.
    pub pill_height: f64,
    /// Horizontal padding inside a pill.
    pub pill_padding: f64,
    /// Gap between pills.
    pub spacing: f64,
    /// Label font size.
    pub font_size: f64,
}

impl LegendSpec {
    /// Creates a column legend with the default pill metrics.
    pub fn new(id_base: u64, items: Vec<LegendItem>) -> Self {
        Self {
            id_base,
            items,
            arrangement: LegendArrangement::Column,
            pill_height: 24.0,
            pill_padding: 8.0,
            spacing: 10.0,
            font_size: 14.0,
        }
    }

    /// Sets the arrangement.
    pub fn with_arrangement(mut self, arrangement: LegendArrangement) -> Self {
        self.arrangement = arrangement;
        self
    }

    /// Computes pill rectangles for the given origin.
    pub fn layout(&self, origin: (f64, f64), measurer: &dyn TextMeasurer) -> Vec<LegendSlot> {
        let (ox, oy) = origin;
        let mut out = Vec::with_capacity(self.items.len());
        match self.arrangement {
            LegendArrangement::Column => {
                let mut y = oy;
                for (i, item) in self.items.iter().enumerate() {
                    let (w, _) = measurer.measure(&item.label, self.font_size);
                    let pill_w = w + 2.0 * self.pill_padding;
                    out.push(LegendSlot {
                        item: i,
                        rect: Rect::new(ox, y, ox + pill_w, y + self.pill_height),
                    });
                    y += self.pill_height + self.spacing;
                }
            }
            LegendArrangement::Wrap { max_width } => {
                let mut x = 0.0;
                let mut y = oy;
                for (i, item) in self.items.iter().enumerate() {
                    let (w, _) = measurer.measure(&item.label, self.font_size);
                    let pill_w = w + 2.0 * self.pill_padding;
                    let advance = pill_w + self.spacing;
                    if x > 0.0 && x + advance > max_width {
                        x = 0.0;
                        y += self.pill_height + self.spacing;
                    }
                    out.push(LegendSlot {
                        item: i,
                        rect: Rect::new(ox + x, y, ox + x + pill_w, y + self.pill_height),
                    });
                    x += advance;
                }
            }
        }
        out
    }

    /// Returns the label of the pill containing `point`, if any.
    pub fn hit<'a>(
        &'a self,
        origin: (f64, f64),
        measurer: &dyn TextMeasurer,
        point: Point,
    ) -> Option<&'a str> {
        self.layout(origin, measurer)
            .iter()
            .find(|slot| slot.rect.contains(point))
            .map(|slot| self.items[slot.item].label.as_str())
    }

    /// Generates pill and label marks for the given origin.
    pub fn marks(&self, origin: (f64, f64), measurer: &dyn TextMeasurer) -> Vec<Mark> {
        let mut out = Vec::with_capacity(self.items.len() * 2);
        for slot in self.layout(origin, measurer) {
            let item = &self.items[slot.item];
            let pill_fill = if item.active {
                item.color.with_alpha(0.8)
            } else {
                INACTIVE_PILL.with_alpha(0.8)
            };
            let text_fill = if item.active {
                peniko::color::palette::css::WHITE
            } else {
                INACTIVE_TEXT
            };

            out.push(Mark::rect(
                MarkId::from_raw(self.id_base + slot.item as u64),
                z_order::LEGEND_SWATCHES,
                RectMark {
                    rect: slot.rect,
                    fill: Brush::Solid(pill_fill),
                    corner_radius: self.pill_height / 2.0,
                },
            ));
            out.push(Mark::text(
                MarkId::from_raw(self.id_base + LABEL_ID_BASE + slot.item as u64),
                z_order::LEGEND_LABELS,
                TextMark {
                    pos: Point::new(
                        slot.rect.x0 + self.pill_padding,
                        slot.rect.y0 + self.pill_height / 2.0,
                    ),
                    text: item.label.clone(),
                    font_size: self.font_size,
                    fill: Brush::Solid(text_fill),
                    anchor: TextAnchor::Start,
                    baseline: TextBaseline::Middle,
                    angle: 0.0,
                },
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::HeuristicTextMeasurer;
    use peniko::color::palette::css;
    use strata_core::MarkPayload;

    fn items() -> Vec<LegendItem> {
        ["N64", "SNES", "NES"]
            .into_iter()
            .map(|label| LegendItem {
                label: label.into(),
                color: css::CORNFLOWER_BLUE,
                active: true,
            })
            .collect()
    }

    #[test]
    fn column_layout_stacks_vertically() {
        let spec = LegendSpec::new(0x100, items());
        let slots = spec.layout((10.0, 20.0), &HeuristicTextMeasurer);
        assert_eq!(slots.len(), 3);
        assert!(slots.iter().all(|s| s.rect.x0 == 10.0));
        assert_eq!(slots[1].rect.y0, 20.0 + 24.0 + 10.0);
    }

    #[test]
    fn wrap_layout_breaks_rows_at_max_width() {
        let spec = LegendSpec::new(0x100, items())
            .with_arrangement(LegendArrangement::Wrap { max_width: 90.0 });
        let slots = spec.layout((0.0, 0.0), &HeuristicTextMeasurer);
        let rows: Vec<f64> = slots.iter().map(|s| s.rect.y0).collect();
        assert!(
            rows.windows(2).any(|w| w[1] > w[0]),
            "expected at least one wrapped row, got {rows:?}"
        );
    }

    #[test]
    fn hit_testing_matches_layout() {
        let spec = LegendSpec::new(0x100, items());
        let measurer = HeuristicTextMeasurer;
        let slots = spec.layout((10.0, 20.0), &measurer);
        let inside = slots[1].rect.center();
        assert_eq!(spec.hit((10.0, 20.0), &measurer, inside), Some("SNES"));
        assert_eq!(
            spec.hit((10.0, 20.0), &measurer, Point::new(-5.0, -5.0)),
            None
        );
    }

    #[test]
    fn inactive_items_render_grey_pills() {
        let mut legend_items = items();
        legend_items[0].active = false;
        let spec = LegendSpec::new(0x100, legend_items);
        let marks = spec.marks((0.0, 0.0), &HeuristicTextMeasurer);
        let MarkPayload::Rect(pill) = &marks[0].payload else {
            panic!("expected the first mark to be a pill rect");
        };
        let Brush::Solid(color) = &pill.fill else {
            panic!("expected a solid pill fill");
        };
        let rgba = color.to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b), (0xcc, 0xcc, 0xcc));
    }
}
