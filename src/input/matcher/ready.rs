//! Ready-candidate recomputation and stroke lifecycle transitions.

use crate::input::events::{InputEvent, MouseButton};
use crate::input::shortcut::election_order;
use log::{debug, info};

use super::ShortcutMatcher;
use super::core::RunningStroke;

impl ShortcutMatcher {
    /// Rebuilds the list of stroke shortcuts whose modifiers match the held
    /// state, then elects its head as the ready shortcut.
    ///
    /// While a stroke runs the list is still rebuilt, so the next stroke is
    /// staged, but nothing is elected until the running stroke ends.
    pub(super) fn prepare_ready_shortcuts(&mut self) {
        let mut candidates: Vec<usize> = self
            .stroke_shortcuts
            .iter()
            .enumerate()
            .filter(|(_, shortcut)| shortcut.match_ready(&self.keys, &self.buttons))
            .map(|(index, _)| index)
            .collect();
        candidates.sort_by(|&a, &b| {
            election_order(
                (self.stroke_shortcuts[a].priority, a),
                (self.stroke_shortcuts[b].priority, b),
            )
        });
        self.ready_shortcuts = candidates;

        if self.running.is_none() {
            self.try_activate_ready_shortcut();
        }
    }

    /// Makes the head of the candidate list the ready shortcut, swapping
    /// cursor hints when it changes. Suppression withdraws the ready shortcut.
    pub(super) fn try_activate_ready_shortcut(&mut self) {
        let head = if self.suppressed {
            None
        } else {
            self.ready_shortcuts.first().copied()
        };
        if head == self.ready_shortcut {
            return;
        }

        if let Some(previous) = self.ready_shortcut.take() {
            self.deactivate_ready(previous);
        }
        if let Some(next) = head {
            self.activate_ready(next);
            self.ready_shortcut = Some(next);
        }
    }

    fn activate_ready(&mut self, index: usize) {
        let shortcut = &self.stroke_shortcuts[index];
        let mode = shortcut.mode;
        let action = &mut self.actions[shortcut.action.index()];
        action.activate(mode);
        let cursor = action.cursor(mode);
        debug!("'{}' ready ({})", action.name(), shortcut);
        self.show_cursor(cursor);
    }

    pub(super) fn deactivate_ready(&mut self, index: usize) {
        let shortcut = &self.stroke_shortcuts[index];
        let mode = shortcut.mode;
        let action = &mut self.actions[shortcut.action.index()];
        action.deactivate(mode);
        debug!("'{}' no longer ready", action.name());
        self.show_cursor(None);
    }

    /// Elects the best ready candidate completed by `button` and begins it.
    ///
    /// Returns whether a stroke started.
    pub(super) fn try_run_ready_shortcut(
        &mut self,
        button: MouseButton,
        event: &InputEvent,
    ) -> bool {
        let Some(index) = self
            .ready_shortcuts
            .iter()
            .copied()
            .find(|&index| self.stroke_shortcuts[index].match_begin(&self.buttons, button))
        else {
            return false;
        };

        match self.ready_shortcut.take() {
            // Already active, its cursor carries over into the stroke.
            Some(ready) if ready == index => {}
            Some(ready) => {
                self.deactivate_ready(ready);
                self.activate_ready(index);
            }
            None => self.activate_ready(index),
        }

        let shortcut = &self.stroke_shortcuts[index];
        let mode = shortcut.mode;
        let action = &mut self.actions[shortcut.action.index()];
        info!("Starting '{}' ({})", action.name(), shortcut);
        action.begin(mode, event);
        self.running = Some(RunningStroke {
            shortcut: index,
            trigger: button,
        });
        true
    }

    /// Ends the running stroke. `event` is `None` for a forced end.
    pub(super) fn end_running_shortcut(&mut self, event: Option<&InputEvent>) {
        let Some(running) = self.running.take() else {
            return;
        };
        let shortcut = &self.stroke_shortcuts[running.shortcut];
        let mode = shortcut.mode;
        let action = &mut self.actions[shortcut.action.index()];
        match event {
            Some(_) => info!("Ending '{}' ({})", action.name(), shortcut),
            None => info!(
                "Force-ending '{}' (started by {})",
                action.name(),
                running.trigger
            ),
        }
        action.end(event);
        action.deactivate(mode);
        self.show_cursor(None);
    }
}
