//! Authoritative window-membership, focus, and minimize/maximize state for the
//! desktop shell.
//!
//! The store tracks at most one window per application id. Stacking order is
//! insertion order and is never rewritten by focus changes; the active window
//! is emphasized by the rendering layer, not raised. Window geometry is owned
//! by each surface (see [`crate::surface`]), never by this store.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ApplicationId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejected window-manager operations.
///
/// The dispatch layer logs these and drops them, so the user-visible outcome
/// of targeting a closed id is a silent no-op.
pub enum WindowManagerError {
    /// The target application has no open window.
    #[error("no open window for application `{0}`")]
    NotOpen(ApplicationId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Shared window-management state for one desktop session.
///
/// Fields are private so every transition goes through the operations below,
/// which keep the store's invariants:
/// - the active id, if any, is open and not minimized,
/// - the minimized and maximized sets are subsets of the open set,
/// - an application id appears at most once in the open order.
pub struct WindowManagerState {
    open_order: Vec<ApplicationId>,
    active: Option<ApplicationId>,
    minimized: BTreeSet<ApplicationId>,
    maximized: BTreeSet<ApplicationId>,
}

impl WindowManagerState {
    /// Opens `app_id`, or re-activates it when it is already open.
    ///
    /// A first open appends the id to the stacking order with cleared
    /// minimized/maximized flags. Re-opening a minimized window un-minimizes
    /// it. In every case the id becomes active. Ids unknown to the
    /// application registry are tracked all the same.
    pub fn open(&mut self, app_id: ApplicationId) {
        if self.is_open(&app_id) {
            self.minimized.remove(&app_id);
        } else {
            // Flag sets only ever hold open ids, so a first open starts with
            // both flags clear.
            self.open_order.push(app_id.clone());
        }
        self.active = Some(app_id);
    }

    /// Closes the window for `app_id`, dropping it from the stacking order and
    /// from both flag sets.
    ///
    /// When the closed window was active, the first remaining non-minimized
    /// entry of the stacking order becomes active, or none.
    pub fn close(&mut self, app_id: &ApplicationId) -> Result<(), WindowManagerError> {
        if !self.is_open(app_id) {
            return Err(WindowManagerError::NotOpen(app_id.clone()));
        }
        self.open_order.retain(|id| id != app_id);
        self.minimized.remove(app_id);
        self.maximized.remove(app_id);
        if self.active.as_ref() == Some(app_id) {
            self.active = self.first_visible();
        }
        Ok(())
    }

    /// Toggles minimization for `app_id`.
    ///
    /// Un-minimizing also activates the window. Minimizing the active window
    /// hands focus to the first other open, non-minimized id, or none.
    pub fn minimize(&mut self, app_id: &ApplicationId) -> Result<(), WindowManagerError> {
        if !self.is_open(app_id) {
            return Err(WindowManagerError::NotOpen(app_id.clone()));
        }
        if self.minimized.remove(app_id) {
            self.active = Some(app_id.clone());
        } else {
            self.minimized.insert(app_id.clone());
            if self.active.as_ref() == Some(app_id) {
                self.active = self.first_visible();
            }
        }
        Ok(())
    }

    /// Toggles the maximized flag for `app_id`.
    ///
    /// Purely a membership toggle: geometry snapshotting and viewport fill are
    /// the window surface's job, driven by reading [`Self::is_maximized`].
    pub fn maximize(&mut self, app_id: &ApplicationId) -> Result<(), WindowManagerError> {
        if !self.is_open(app_id) {
            return Err(WindowManagerError::NotOpen(app_id.clone()));
        }
        if !self.maximized.remove(app_id) {
            self.maximized.insert(app_id.clone());
        }
        Ok(())
    }

    /// Makes `app_id` the active window without touching the stacking order or
    /// either flag set.
    ///
    /// Focusing a minimized window is a no-op (unlike [`Self::open`], focus
    /// never un-minimizes, and a minimized id must not become active).
    pub fn focus(&mut self, app_id: &ApplicationId) -> Result<(), WindowManagerError> {
        if !self.is_open(app_id) {
            return Err(WindowManagerError::NotOpen(app_id.clone()));
        }
        if !self.minimized.contains(app_id) {
            self.active = Some(app_id.clone());
        }
        Ok(())
    }

    pub fn is_open(&self, app_id: &ApplicationId) -> bool {
        self.open_order.iter().any(|id| id == app_id)
    }

    pub fn is_active(&self, app_id: &ApplicationId) -> bool {
        self.active.as_ref() == Some(app_id)
    }

    pub fn is_minimized(&self, app_id: &ApplicationId) -> bool {
        self.minimized.contains(app_id)
    }

    pub fn is_maximized(&self, app_id: &ApplicationId) -> bool {
        self.maximized.contains(app_id)
    }

    /// Open application ids in stacking order (oldest first, top last).
    pub fn stack_order(&self) -> &[ApplicationId] {
        &self.open_order
    }

    /// Position of `app_id` within the stacking order, used as the render
    /// z-index.
    pub fn stack_position(&self, app_id: &ApplicationId) -> Option<usize> {
        self.open_order.iter().position(|id| id == app_id)
    }

    /// The currently focused application id, if any window is active.
    pub fn active_application(&self) -> Option<&ApplicationId> {
        self.active.as_ref()
    }

    fn first_visible(&self) -> Option<ApplicationId> {
        self.open_order
            .iter()
            .find(|id| !self.minimized.contains(*id))
            .cloned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Operations accepted by [`apply_window_action`] to mutate
/// [`WindowManagerState`].
pub enum WindowAction {
    /// Open or re-activate an application window.
    Open(ApplicationId),
    /// Close an application window.
    Close(ApplicationId),
    /// Toggle minimization of an application window.
    Minimize(ApplicationId),
    /// Toggle maximization of an application window.
    Maximize(ApplicationId),
    /// Focus an application window.
    Focus(ApplicationId),
}

/// Applies one [`WindowAction`] to the window-manager state.
///
/// # Errors
///
/// Returns [`WindowManagerError::NotOpen`] when the action targets an id with
/// no open window (opening is total and never fails).
pub fn apply_window_action(
    state: &mut WindowManagerState,
    action: WindowAction,
) -> Result<(), WindowManagerError> {
    match action {
        WindowAction::Open(app_id) => {
            state.open(app_id);
            Ok(())
        }
        WindowAction::Close(app_id) => state.close(&app_id),
        WindowAction::Minimize(app_id) => state.minimize(&app_id),
        WindowAction::Maximize(app_id) => state.maximize(&app_id),
        WindowAction::Focus(app_id) => state.focus(&app_id),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn id(raw: &str) -> ApplicationId {
        ApplicationId::new(raw)
    }

    fn ids(raw: &[&str]) -> Vec<ApplicationId> {
        raw.iter().map(|r| id(r)).collect()
    }

    fn assert_invariants(state: &WindowManagerState) {
        if let Some(active) = state.active_application() {
            assert!(state.is_open(active), "active id must be open");
            assert!(
                !state.is_minimized(active),
                "active id must not be minimized"
            );
        }
        for entry in &state.minimized {
            assert!(state.is_open(entry), "minimized set must be ⊆ open order");
        }
        for entry in &state.maximized {
            assert!(state.is_open(entry), "maximized set must be ⊆ open order");
        }
        let mut seen = state.stack_order().to_vec();
        seen.sort();
        seen.dedup();
        assert_eq!(
            seen.len(),
            state.stack_order().len(),
            "open order must not contain duplicates"
        );
    }

    #[test]
    fn open_from_empty_tracks_and_activates() {
        let mut state = WindowManagerState::default();
        state.open(id("mail"));

        assert_eq!(state.stack_order(), ids(&["mail"]).as_slice());
        assert!(state.is_active(&id("mail")));
        assert!(!state.is_minimized(&id("mail")));
        assert_invariants(&state);
    }

    #[test]
    fn second_open_appends_and_takes_focus() {
        let mut state = WindowManagerState::default();
        state.open(id("mail"));
        state.open(id("notes"));

        assert_eq!(state.stack_order(), ids(&["mail", "notes"]).as_slice());
        assert!(state.is_active(&id("notes")));
        assert_invariants(&state);
    }

    #[test]
    fn minimizing_active_window_hands_focus_to_first_visible() {
        let mut state = WindowManagerState::default();
        state.open(id("mail"));
        state.open(id("notes"));

        state.minimize(&id("notes")).expect("minimize");

        assert!(state.is_minimized(&id("notes")));
        assert!(state.is_active(&id("mail")));
        assert_invariants(&state);
    }

    #[test]
    fn reopening_minimized_window_restores_without_duplicate() {
        let mut state = WindowManagerState::default();
        state.open(id("mail"));
        state.open(id("notes"));
        state.minimize(&id("notes")).expect("minimize");

        state.open(id("notes"));

        assert!(!state.is_minimized(&id("notes")));
        assert!(state.is_active(&id("notes")));
        assert_eq!(state.stack_order().len(), 2);
        assert_invariants(&state);
    }

    #[test]
    fn minimize_toggle_restores_and_activates() {
        let mut state = WindowManagerState::default();
        state.open(id("photos"));
        state.open(id("music"));
        state.minimize(&id("photos")).expect("minimize");
        assert!(state.is_active(&id("music")));

        state.minimize(&id("photos")).expect("restore");

        assert!(!state.is_minimized(&id("photos")));
        assert!(state.is_active(&id("photos")));
        assert_invariants(&state);
    }

    #[test]
    fn closing_inactive_window_leaves_focus_alone() {
        let mut state = WindowManagerState::default();
        state.open(id("mail"));
        state.open(id("notes"));

        state.close(&id("mail")).expect("close");
        assert_eq!(state.stack_order(), ids(&["notes"]).as_slice());
        assert!(state.is_active(&id("notes")));

        state.close(&id("notes")).expect("close");
        assert!(state.stack_order().is_empty());
        assert_eq!(state.active_application(), None);
        assert_invariants(&state);
    }

    #[test]
    fn closing_active_window_activates_first_remaining_entry() {
        let mut state = WindowManagerState::default();
        state.open(id("mail"));
        state.open(id("photos"));
        state.open(id("notes"));
        assert!(state.is_active(&id("notes")));

        state.close(&id("notes")).expect("close");

        assert_eq!(state.active_application(), Some(&id("mail")));
        assert_invariants(&state);
    }

    #[test]
    fn closing_active_window_skips_minimized_successors() {
        let mut state = WindowManagerState::default();
        state.open(id("mail"));
        state.open(id("photos"));
        state.open(id("notes"));
        state.minimize(&id("mail")).expect("minimize");
        state.focus(&id("notes")).expect("focus");

        state.close(&id("notes")).expect("close");

        // "mail" is first in the stacking order but minimized; a minimized id
        // must never become active.
        assert_eq!(state.active_application(), Some(&id("photos")));
        assert_invariants(&state);
    }

    #[test]
    fn closing_active_window_with_only_minimized_survivors_clears_focus() {
        let mut state = WindowManagerState::default();
        state.open(id("mail"));
        state.open(id("notes"));
        state.minimize(&id("mail")).expect("minimize");

        state.close(&id("notes")).expect("close");

        assert_eq!(state.active_application(), None);
        assert!(state.is_open(&id("mail")));
        assert_invariants(&state);
    }

    #[test]
    fn maximize_is_a_pure_membership_toggle() {
        let mut state = WindowManagerState::default();
        state.open(id("mail"));
        state.open(id("notes"));
        let before = state.clone();

        state.maximize(&id("mail")).expect("maximize");
        assert!(state.is_maximized(&id("mail")));
        // Maximizing neither refocuses nor reorders.
        assert_eq!(state.active_application(), Some(&id("notes")));
        assert_eq!(state.stack_order(), before.stack_order());

        state.maximize(&id("mail")).expect("restore");
        assert_eq!(state, before);
        assert_invariants(&state);
    }

    #[test]
    fn focus_changes_active_id_without_reordering_the_stack() {
        let mut state = WindowManagerState::default();
        state.open(id("mail"));
        state.open(id("photos"));
        state.open(id("notes"));

        state.focus(&id("mail")).expect("focus");

        assert!(state.is_active(&id("mail")));
        assert_eq!(
            state.stack_order(),
            ids(&["mail", "photos", "notes"]).as_slice()
        );
        assert_invariants(&state);
    }

    #[test]
    fn focus_on_minimized_window_is_ignored() {
        let mut state = WindowManagerState::default();
        state.open(id("mail"));
        state.open(id("notes"));
        state.minimize(&id("mail")).expect("minimize");

        state.focus(&id("mail")).expect("focus");

        assert!(state.is_minimized(&id("mail")));
        assert!(state.is_active(&id("notes")));
        assert_invariants(&state);
    }

    #[test]
    fn open_tracks_ids_unknown_to_the_registry() {
        let mut state = WindowManagerState::default();
        state.open(id("not-a-registered-app"));

        assert!(state.is_open(&id("not-a-registered-app")));
        assert!(state.is_active(&id("not-a-registered-app")));
        assert_invariants(&state);
    }

    #[test]
    fn operations_on_unopened_ids_are_rejected_without_mutation() {
        let mut state = WindowManagerState::default();
        state.open(id("mail"));
        let before = state.clone();

        for action in [
            WindowAction::Close(id("notes")),
            WindowAction::Minimize(id("notes")),
            WindowAction::Maximize(id("notes")),
            WindowAction::Focus(id("notes")),
        ] {
            let result = apply_window_action(&mut state, action);
            assert_eq!(result, Err(WindowManagerError::NotOpen(id("notes"))));
            assert_eq!(state, before);
        }
    }

    #[test]
    fn reopening_a_visible_window_only_refocuses() {
        let mut state = WindowManagerState::default();
        state.open(id("mail"));
        state.open(id("notes"));
        state.maximize(&id("mail")).expect("maximize");

        state.open(id("mail"));

        assert!(state.is_active(&id("mail")));
        // Re-open keeps the maximized flag; only a first open clears it.
        assert!(state.is_maximized(&id("mail")));
        assert_eq!(state.stack_order(), ids(&["mail", "notes"]).as_slice());
        assert_invariants(&state);
    }

    #[test]
    fn first_open_after_close_starts_with_cleared_flags() {
        let mut state = WindowManagerState::default();
        state.open(id("mail"));
        state.maximize(&id("mail")).expect("maximize");
        state.close(&id("mail")).expect("close");

        state.open(id("mail"));

        assert!(!state.is_maximized(&id("mail")));
        assert!(!state.is_minimized(&id("mail")));
        assert_invariants(&state);
    }

    #[test]
    fn stack_position_mirrors_open_order() {
        let mut state = WindowManagerState::default();
        state.open(id("mail"));
        state.open(id("notes"));

        assert_eq!(state.stack_position(&id("mail")), Some(0));
        assert_eq!(state.stack_position(&id("notes")), Some(1));
        assert_eq!(state.stack_position(&id("photos")), None);
    }
}
