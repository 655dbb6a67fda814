// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sequential category palette derived from one base color.
//!
//! Categories are colored by interpolating from a darkened to a brightened
//! variant of the configured base color, in category-set order. Color
//! assignment depends only on the fixed category set, so toggling a
//! category never shifts its color.

use peniko::Color;

// Channel gain for one darken/brighten step (matches the conventional
// 0.7 gamma-free RGB scaling).
const STEP: f64 = 0.7;
const SPREAD: f64 = 1.5;

/// Returns one color per category, darkest first.
pub fn category_colors(base: [u8; 3], count: usize) -> Vec<Color> {
    let dark = scale_rgb(base, STEP.powf(SPREAD));
    let bright = scale_rgb(base, STEP.powf(-SPREAD));

    (0..count)
        .map(|i| {
            let t = if count <= 1 {
                0.5
            } else {
                i as f64 / (count - 1) as f64
            };
            lerp_rgb(dark, bright, t)
        })
        .collect()
}

fn scale_rgb(rgb: [u8; 3], k: f64) -> [f64; 3] {
    [
        (f64::from(rgb[0]) * k).clamp(0.0, 255.0),
        (f64::from(rgb[1]) * k).clamp(0.0, 255.0),
        (f64::from(rgb[2]) * k).clamp(0.0, 255.0),
    ]
}

fn lerp_rgb(a: [f64; 3], b: [f64; 3], t: f64) -> Color {
    let channel = |i: usize| {
        let v = (a[i] + (b[i] - a[i]) * t).round().clamp(0.0, 255.0);
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "clamped to the u8 range"
        )]
        {
            v as u8
        }
    };
    Color::from_rgb8(channel(0), channel(1), channel(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_color_per_category() {
        assert_eq!(category_colors([0x2d, 0x46, 0x92], 5).len(), 5);
        assert!(category_colors([0x2d, 0x46, 0x92], 0).is_empty());
    }

    #[test]
    fn colors_run_dark_to_bright() {
        let colors = category_colors([0x2d, 0x46, 0x92], 3);
        let luma = |c: &Color| {
            let rgba = c.to_rgba8();
            u32::from(rgba.r) + u32::from(rgba.g) + u32::from(rgba.b)
        };
        assert!(luma(&colors[0]) < luma(&colors[1]));
        assert!(luma(&colors[1]) < luma(&colors[2]));
    }

    #[test]
    fn palette_is_stable_for_a_fixed_set() {
        let a = category_colors([0x1f, 0x77, 0xb4], 4);
        let b = category_colors([0x1f, 0x77, 0xb4], 4);
        assert_eq!(a, b);
    }

    #[test]
    fn single_category_uses_the_midpoint() {
        let one = category_colors([100, 100, 100], 1);
        let three = category_colors([100, 100, 100], 3);
        assert_eq!(one[0], three[1]);
    }
}
