// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart frame layout: margins, plot rectangle, legend origin.
//!
//! The frame uses fixed margins with a single mobile switch, mirroring the
//! host page it was designed for: narrow containers drop the right-hand
//! legend column and reserve extra space below the plot instead.

use kurbo::Rect;

/// A width/height pair in scene coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in scene coordinates.
    pub width: f64,
    /// Height in scene coordinates.
    pub height: f64,
}

/// Per-side margins around the plot rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    /// Space above the plot.
    pub top: f64,
    /// Space to the right of the plot.
    pub right: f64,
    /// Space below the plot.
    pub bottom: f64,
    /// Space to the left of the plot.
    pub left: f64,
}

/// Resolved chart frame for a container size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartFrame {
    /// The container size the frame was computed for.
    pub view: Size,
    /// Whether the mobile layout is in effect.
    pub is_mobile: bool,
    /// Margins around the plot.
    pub margin: Margin,
    /// The plot rectangle in scene coordinates.
    pub plot: Rect,
}

impl ChartFrame {
    /// Computes the frame for a container, switching to the mobile layout
    /// below `mobile_breakpoint`.
    pub fn new(view: Size, mobile_breakpoint: f64) -> Self {
        let is_mobile = view.width < mobile_breakpoint;
        let margin = Margin {
            top: 70.0,
            right: if is_mobile { 20.0 } else { 150.0 },
            bottom: if is_mobile { 100.0 } else { 50.0 },
            left: 80.0,
        };
        let plot = Rect::new(
            margin.left,
            margin.top,
            (view.width - margin.right).max(margin.left),
            (view.height - margin.bottom).max(margin.top),
        );
        Self {
            view,
            is_mobile,
            margin,
            plot,
        }
    }

    /// Returns the plot width.
    pub fn plot_width(&self) -> f64 {
        self.plot.width()
    }

    /// Returns the plot height.
    pub fn plot_height(&self) -> f64 {
        self.plot.height()
    }

    /// Returns the legend origin: a right-hand column on desktop, a row
    /// strip under the plot on mobile.
    pub fn legend_origin(&self) -> (f64, f64) {
        if self.is_mobile {
            (self.margin.left, self.plot.y1 + 30.0)
        } else {
            (self.plot.x1 + 20.0, self.margin.top)
        }
    }

    /// Returns the horizontal space available to the legend.
    pub fn legend_max_width(&self) -> f64 {
        if self.is_mobile {
            self.plot_width()
        } else {
            self.margin.right - 20.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_frame_reserves_a_legend_column() {
        let frame = ChartFrame::new(
            Size {
                width: 1200.0,
                height: 600.0,
            },
            800.0,
        );
        assert!(!frame.is_mobile);
        assert_eq!(frame.margin.right, 150.0);
        assert_eq!(frame.plot, Rect::new(80.0, 70.0, 1050.0, 550.0));
        assert_eq!(frame.legend_origin(), (1070.0, 70.0));
    }

    #[test]
    fn narrow_frame_switches_to_mobile() {
        let frame = ChartFrame::new(
            Size {
                width: 400.0,
                height: 600.0,
            },
            800.0,
        );
        assert!(frame.is_mobile);
        assert_eq!(frame.margin.right, 20.0);
        assert_eq!(frame.margin.bottom, 100.0);
        let (x, y) = frame.legend_origin();
        assert_eq!(x, 80.0);
        assert_eq!(y, frame.plot.y1 + 30.0);
        assert_eq!(frame.legend_max_width(), frame.plot_width());
    }

    #[test]
    fn tiny_containers_never_produce_negative_plots() {
        let frame = ChartFrame::new(
            Size {
                width: 50.0,
                height: 50.0,
            },
            800.0,
        );
        assert!(frame.plot_width() >= 0.0);
        assert!(frame.plot_height() >= 0.0);
    }
}
