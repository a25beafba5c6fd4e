use crate::input::events::{InputEvent, Key};
use crate::input::shortcut::{Trigger, election_order};
use log::{debug, info};

use super::ShortcutMatcher;

impl ShortcutMatcher {
    /// Handles a key press.
    ///
    /// Fires the best single-action shortcut whose modifiers equal the keys
    /// held before this press, then restages the ready stroke.
    ///
    /// Returns whether the event was handled and should be eaten.
    pub fn key_pressed(&mut self, key: Key) -> bool {
        let mut consumed = false;

        if self.keys.contains(key) {
            // Auto-repeat, or a release we never saw.
            debug!("Key {key} pressed while already held");
        } else if self.running.is_none() {
            consumed = self.try_run_single_action(Trigger::Key(key), &InputEvent::KeyPress(key));
        }

        self.keys.press(key);
        self.prepare_ready_shortcuts();
        consumed
    }

    /// Handles a key release.
    ///
    /// Keys define eligibility, buttons define duration: releasing a
    /// modifier never ends a running stroke.
    pub fn key_released(&mut self, key: Key) -> bool {
        if !self.keys.release(key) {
            debug!("Key {key} released but was never pressed; ignoring");
            return false;
        }
        self.prepare_ready_shortcuts();
        false
    }

    /// Runs the best single-action shortcut matching `trigger` against the
    /// held state. Returns whether one fired.
    pub(super) fn try_run_single_action(&mut self, trigger: Trigger, event: &InputEvent) -> bool {
        if self.suppressed {
            return false;
        }

        let Some(index) = self
            .single_shortcuts
            .iter()
            .enumerate()
            .filter(|(_, shortcut)| shortcut.matches(&self.keys, &self.buttons, trigger))
            .min_by(|(a, sa), (b, sb)| election_order((sa.priority, *a), (sb.priority, *b)))
            .map(|(index, _)| index)
        else {
            return false;
        };

        let shortcut = &self.single_shortcuts[index];
        let mode = shortcut.mode;
        let action = &mut self.actions[shortcut.action.index()];
        info!("Running '{}' ({})", action.name(), shortcut);
        action.begin(mode, event);
        action.end(Some(event));
        true
    }
}
