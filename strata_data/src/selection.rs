// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The set of categories currently included in the stacked rendering.

/// Per-category active flags over a fixed category set.
///
/// Stacking order is the category-set order; storing flags (rather than a
/// mutable list) makes reactivation restore a category's original stacking
/// position by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveSelection {
    labels: Vec<String>,
    active: Vec<bool>,
}

impl ActiveSelection {
    /// Creates a selection with every category active.
    pub fn all(labels: &[String]) -> Self {
        Self {
            labels: labels.to_vec(),
            active: vec![true; labels.len()],
        }
    }

    /// Returns the full category set in stacking order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns `true` if the category at `ix` is active.
    pub fn is_active(&self, ix: usize) -> bool {
        self.active.get(ix).copied().unwrap_or(false)
    }

    /// Returns active category indices in stacking order.
    pub fn active_indices(&self) -> Vec<usize> {
        self.active
            .iter()
            .enumerate()
            .filter_map(|(ix, &on)| on.then_some(ix))
            .collect()
    }

    /// Returns the number of active categories.
    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|&&on| on).count()
    }

    /// Flips a category's membership.
    ///
    /// Returns the new state (`true` = active), or `None` for an unknown
    /// label.
    pub fn toggle(&mut self, label: &str) -> Option<bool> {
        let ix = self.labels.iter().position(|l| l == label)?;
        self.active[ix] = !self.active[ix];
        Some(self.active[ix])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        vec!["NES".into(), "SNES".into(), "N64".into()]
    }

    #[test]
    fn toggling_off_then_on_restores_original_position() {
        let mut sel = ActiveSelection::all(&labels());
        assert_eq!(sel.active_indices(), vec![0, 1, 2]);

        assert_eq!(sel.toggle("SNES"), Some(false));
        assert_eq!(sel.active_indices(), vec![0, 2]);

        assert_eq!(sel.toggle("SNES"), Some(true));
        assert_eq!(sel.active_indices(), vec![0, 1, 2]);
    }

    #[test]
    fn unknown_label_is_rejected() {
        let mut sel = ActiveSelection::all(&labels());
        assert_eq!(sel.toggle("GameCube"), None);
        assert_eq!(sel.active_count(), 3);
    }

    #[test]
    fn empty_selection_is_allowed() {
        let mut sel = ActiveSelection::all(&labels());
        for label in labels() {
            sel.toggle(&label);
        }
        assert_eq!(sel.active_count(), 0);
        assert!(sel.active_indices().is_empty());
    }
}
