use crate::input::events::{InputEvent, MouseButton, PointerEvent, WheelAction};
use crate::input::shortcut::Trigger;
use log::debug;

use super::ShortcutMatcher;

impl ShortcutMatcher {
    /// Handles a mouse button press.
    ///
    /// # Behavior
    /// - While a stroke runs: the press is forwarded only if the running
    ///   action accepts extra buttons.
    /// - Otherwise: starts the best ready stroke completed by `button`, or
    ///   fires a single action triggered by `button`.
    ///
    /// Returns whether the event was handled and should be eaten.
    pub fn button_pressed(&mut self, button: MouseButton, pointer: PointerEvent) -> bool {
        let event = InputEvent::ButtonPress { button, pointer };

        if self.buttons.contains(button) {
            debug!("Button {button} pressed while already held");
        }

        let consumed = if let Some(running) = self.running {
            let action_id = self.stroke_shortcuts[running.shortcut].action;
            let action = &mut self.actions[action_id.index()];
            if action.accepts_extra_buttons() {
                action.input_event(&event);
                true
            } else {
                false
            }
        } else if self.suppressed {
            false
        } else {
            // Candidates are stale after registration or a reset.
            self.prepare_ready_shortcuts();
            self.try_run_ready_shortcut(button, &event)
                || self.try_run_single_action(Trigger::Button(button), &event)
        };

        self.buttons.press(button);
        self.prepare_ready_shortcuts();
        consumed
    }

    /// Handles a mouse button release.
    ///
    /// Releasing any button of the running stroke ends it. Other releases
    /// are forwarded to the running stroke as continuation input. A release
    /// for a button that was never pressed is ignored.
    pub fn button_released(&mut self, button: MouseButton, pointer: PointerEvent) -> bool {
        if !self.buttons.release(button) {
            debug!("Button {button} released but was never pressed; ignoring");
            return false;
        }

        let event = InputEvent::ButtonRelease { button, pointer };
        let consumed = match self.running {
            Some(running) if self.stroke_shortcuts[running.shortcut].match_end(button) => {
                self.end_running_shortcut(Some(&event));
                true
            }
            Some(running) => {
                let action_id = self.stroke_shortcuts[running.shortcut].action;
                self.actions[action_id.index()].input_event(&event);
                true
            }
            None => false,
        };

        self.prepare_ready_shortcuts();
        consumed
    }

    /// Handles pointer motion: forwarded to the running stroke, if any.
    pub fn mouse_moved(&mut self, pointer: PointerEvent) -> bool {
        let Some(running) = self.running else {
            return false;
        };
        let action_id = self.stroke_shortcuts[running.shortcut].action;
        self.actions[action_id.index()].input_event(&InputEvent::Motion(pointer));
        true
    }

    /// Handles one wheel tick.
    ///
    /// Only single-action shortcuts react to the wheel, and never while a
    /// stroke runs.
    pub fn wheel_event(&mut self, wheel: WheelAction, pointer: PointerEvent) -> bool {
        if self.running.is_some() {
            return false;
        }
        let event = InputEvent::Wheel {
            action: wheel,
            pointer,
        };
        self.try_run_single_action(Trigger::Wheel(wheel), &event)
    }
}
