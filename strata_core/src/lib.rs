// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal retained mark/scene runtime for Strata charts.
//!
//! This crate is the narrow waist between chart generation and rendering:
//! - **Marks** are plain data: a stable [`MarkId`], a z-index, and a payload
//!   (rect, text, or path).
//! - A [`Scene`] retains the previous render's marks and diffs each new mark
//!   set into [`MarkDiff`]s (enter/update/exit).
//!
//! Chart layers regenerate their full mark list on every state change; the
//! scene diff is what a renderer applies, and what a transition system can
//! animate. Text shaping is out of scope; text marks store unshaped strings.

mod mark;
mod scene;

pub use mark::{Mark, MarkId, MarkPayload, PathMark, RectMark, TextAnchor, TextBaseline, TextMark};
pub use scene::{MarkDiff, Scene};
