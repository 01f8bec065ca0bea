//! Ordering of the consultation popup and the floating contact button.
//!
//! The popup opens by itself once, a while after the page loads. The contact
//! button only appears after that popup has been dismissed, and from then on
//! it is the way to bring the popup back.

use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupPhase {
    #[default]
    Hidden,
    AutoShown,
    Dismissed,
    ContactButtonEnabled,
    Reopened,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupEvent {
    AutoOpenElapsed,
    Close,
    ContactRevealElapsed,
    OpenFromContact,
}

impl PopupPhase {
    pub fn next(self, event: PopupEvent) -> Self {
        use PopupEvent::*;
        use PopupPhase::*;
        match (self, event) {
            (Hidden, AutoOpenElapsed) => AutoShown,
            (AutoShown, Close) => Dismissed,
            (Dismissed, ContactRevealElapsed) => ContactButtonEnabled,
            (ContactButtonEnabled, OpenFromContact) => Reopened,
            (Reopened, Close) => ContactButtonEnabled,
            (phase, _) => phase,
        }
    }

    pub fn popup_open(self) -> bool {
        matches!(self, PopupPhase::AutoShown | PopupPhase::Reopened)
    }

    pub fn contact_button_visible(self) -> bool {
        self == PopupPhase::ContactButtonEnabled
    }
}

/// Reducer wrapper so components can drive the sequence with `use_reducer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PopupSequence {
    pub phase: PopupPhase,
}

impl Reducible for PopupSequence {
    type Action = PopupEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.phase.next(action);
        if next == self.phase {
            return self;
        }
        log::debug!("popup sequence {:?} -> {:?}", self.phase, next);
        Rc::new(Self { phase: next })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PopupEvent::*;
    use PopupPhase::*;

    fn run(events: &[PopupEvent]) -> PopupPhase {
        events.iter().fold(Hidden, |phase, event| phase.next(*event))
    }

    #[test]
    fn full_sequence() {
        assert_eq!(run(&[AutoOpenElapsed]), AutoShown);
        assert_eq!(run(&[AutoOpenElapsed, Close]), Dismissed);
        assert_eq!(
            run(&[AutoOpenElapsed, Close, ContactRevealElapsed]),
            ContactButtonEnabled
        );
        assert_eq!(
            run(&[AutoOpenElapsed, Close, ContactRevealElapsed, OpenFromContact]),
            Reopened
        );
        assert_eq!(
            run(&[AutoOpenElapsed, Close, ContactRevealElapsed, OpenFromContact, Close]),
            ContactButtonEnabled
        );
    }

    #[test]
    fn contact_button_waits_for_dismissal() {
        assert!(!run(&[ContactRevealElapsed]).contact_button_visible());
        assert!(!run(&[OpenFromContact]).popup_open());
        assert!(!run(&[AutoOpenElapsed, ContactRevealElapsed]).contact_button_visible());
        assert!(!run(&[AutoOpenElapsed, Close]).contact_button_visible());
    }

    #[test]
    fn auto_open_fires_once() {
        let phase = run(&[AutoOpenElapsed, Close, ContactRevealElapsed, AutoOpenElapsed]);
        assert_eq!(phase, ContactButtonEnabled);
        assert!(!phase.popup_open());
    }

    #[test]
    fn popup_and_button_never_both_shown() {
        for phase in [Hidden, AutoShown, Dismissed, ContactButtonEnabled, Reopened] {
            assert!(!(phase.popup_open() && phase.contact_button_visible()));
        }
    }

    #[test]
    fn reducer_keeps_identity_on_ignored_events() {
        let state = Rc::new(PopupSequence::default());
        let same = state.clone().reduce(Close);
        assert!(Rc::ptr_eq(&state, &same));
        let moved = state.reduce(AutoOpenElapsed);
        assert_eq!(moved.phase, AutoShown);
    }
}
