// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained scene state and mark diffing.

use hashbrown::HashMap;
use kurbo::Rect;

use crate::mark::{Mark, MarkId, MarkPayload};

/// A change produced by [`Scene::tick`].
#[derive(Clone, Debug, PartialEq)]
pub enum MarkDiff {
    /// A mark not present in the previous render.
    Enter {
        /// The mark identity.
        id: MarkId,
        /// Render order.
        z_index: i32,
        /// The new payload.
        new: Box<MarkPayload>,
        /// Payload bounds, when computable without text metrics.
        bounds: Option<Rect>,
    },
    /// A mark whose payload or z-index changed since the previous render.
    Update {
        /// The mark identity.
        id: MarkId,
        /// The new render order.
        new_z_index: i32,
        /// The new payload.
        new: Box<MarkPayload>,
        /// New payload bounds, when computable without text metrics.
        bounds: Option<Rect>,
    },
    /// A mark present in the previous render but absent from this one.
    Exit {
        /// The mark identity.
        id: MarkId,
    },
}

/// Retained marks from the most recent render.
///
/// `tick` treats the given mark list as the complete desired scene: marks
/// retained from the previous tick but absent now produce `Exit` diffs.
/// Unchanged marks produce no diff at all.
#[derive(Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, (i32, MarkPayload)>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self {
            marks: HashMap::new(),
        }
    }

    /// Returns the number of retained marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if the scene retains no marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Drops all retained marks without emitting diffs.
    ///
    /// Full rebuilds use this: the renderer resets alongside the scene, so
    /// the next `tick` re-enters everything.
    pub fn clear(&mut self) {
        self.marks.clear();
    }

    /// Replaces the scene contents with `marks` and returns the changes.
    ///
    /// If the list contains duplicate ids, the last occurrence wins. Diffs
    /// are ordered deterministically: exits first (by id), then
    /// enters/updates sorted by `(z_index, id)`.
    pub fn tick(&mut self, marks: Vec<Mark>) -> Vec<MarkDiff> {
        let mut next: HashMap<MarkId, (i32, MarkPayload)> = HashMap::with_capacity(marks.len());
        for mark in marks {
            next.insert(mark.id, (mark.z_index, mark.payload));
        }

        let mut exits: Vec<MarkId> = self
            .marks
            .keys()
            .filter(|id| !next.contains_key(*id))
            .copied()
            .collect();
        exits.sort();

        let mut changed: Vec<(MarkId, i32, MarkPayload)> = Vec::new();
        for (id, (z, payload)) in &next {
            match self.marks.get(id) {
                Some(prev) if prev.0 == *z && prev.1 == *payload => {}
                _ => changed.push((*id, *z, payload.clone())),
            }
        }
        changed.sort_by_key(|(id, z, _)| (*z, *id));

        let mut out: Vec<MarkDiff> = exits.iter().map(|&id| MarkDiff::Exit { id }).collect();
        for (id, z_index, payload) in changed {
            let bounds = payload.bounds();
            let new = Box::new(payload);
            if self.marks.contains_key(&id) {
                out.push(MarkDiff::Update {
                    id,
                    new_z_index: z_index,
                    new,
                    bounds,
                });
            } else {
                out.push(MarkDiff::Enter {
                    id,
                    z_index,
                    new,
                    bounds,
                });
            }
        }

        self.marks = next;
        out
    }
}
