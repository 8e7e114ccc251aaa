use std::rc::Rc;

use yew::prelude::*;

use crate::config;
use crate::session::record::SessionRecord;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub session: Option<SessionRecord>,
    pub menu_open: bool,
    pub mobile_open: bool,
    pub scrolled: bool,
}

pub enum NavAction {
    /// Storage was (re)read; `None` means signed out.
    SessionLoaded(Option<SessionRecord>),
    ToggleMenu,
    CloseMenu,
    ToggleMobile,
    CloseMobile,
    /// A pointer went down somewhere on the page.
    PointerDown { inside: bool },
    Scrolled(f64),
}

impl NavState {
    pub fn new(session: Option<SessionRecord>) -> Self {
        Self {
            session,
            ..Self::default()
        }
    }

    pub fn signed_in(&self) -> bool {
        self.session.is_some()
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NavAction::SessionLoaded(session) => {
                if session.is_none() {
                    next.menu_open = false;
                }
                next.session = session;
            }
            // the trigger isn't rendered without a session, but a stale callback
            // could still fire after a cross-tab sign-out
            NavAction::ToggleMenu => next.menu_open = next.session.is_some() && !self.menu_open,
            NavAction::CloseMenu => next.menu_open = false,
            NavAction::ToggleMobile => next.mobile_open = !self.mobile_open,
            NavAction::CloseMobile => next.mobile_open = false,
            NavAction::PointerDown { inside } => {
                if !inside {
                    next.menu_open = false;
                }
            }
            NavAction::Scrolled(offset) => next.scrolled = offset > config::SCROLL_THRESHOLD_PX,
        }

        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> SessionRecord {
        SessionRecord {
            name: "Ana Torres".to_string(),
            avatar_url: "/u/ana.png".to_string(),
        }
    }

    fn apply(state: NavState, actions: impl IntoIterator<Item = NavAction>) -> NavState {
        let mut state = Rc::new(state);
        for action in actions {
            state = state.reduce(action);
        }
        (*state).clone()
    }

    #[test]
    fn toggle_flips_once_per_call() {
        let start = NavState::new(Some(ana()));
        let once = apply(start.clone(), [NavAction::ToggleMenu]);
        assert!(once.menu_open);
        let twice = apply(start.clone(), [NavAction::ToggleMenu, NavAction::ToggleMenu]);
        assert!(!twice.menu_open);
        let thrice = apply(start, [NavAction::ToggleMenu, NavAction::ToggleMenu, NavAction::ToggleMenu]);
        assert!(thrice.menu_open);
    }

    #[test]
    fn toggle_without_session_keeps_menu_closed() {
        let state = apply(NavState::new(None), [NavAction::ToggleMenu, NavAction::ToggleMenu, NavAction::ToggleMenu]);
        assert!(!state.signed_in());
        assert!(!state.menu_open);
    }

    #[test]
    fn outside_pointer_closes_open_menu() {
        let state = apply(
            NavState::new(Some(ana())),
            [NavAction::ToggleMenu, NavAction::PointerDown { inside: false }],
        );
        assert!(!state.menu_open);
    }

    #[test]
    fn inside_pointer_leaves_menu_alone() {
        let open = apply(
            NavState::new(Some(ana())),
            [NavAction::ToggleMenu, NavAction::PointerDown { inside: true }],
        );
        assert!(open.menu_open);

        let closed = apply(NavState::new(Some(ana())), [NavAction::PointerDown { inside: true }]);
        assert!(!closed.menu_open);
    }

    #[test]
    fn unchanged_state_is_not_reallocated() {
        let state = Rc::new(NavState::new(Some(ana())));
        let same = state.clone().reduce(NavAction::PointerDown { inside: false });
        assert!(Rc::ptr_eq(&state, &same));
        let changed = state.clone().reduce(NavAction::ToggleMenu);
        assert!(!Rc::ptr_eq(&state, &changed));
    }

    #[test]
    fn losing_session_closes_menu() {
        let state = apply(
            NavState::new(Some(ana())),
            [NavAction::ToggleMenu, NavAction::SessionLoaded(None)],
        );
        assert!(!state.signed_in());
        assert!(!state.menu_open);
    }

    #[test]
    fn reloaded_session_keeps_open_menu() {
        let renamed = SessionRecord {
            name: "Ana María Torres".to_string(),
            ..ana()
        };
        let state = apply(
            NavState::new(Some(ana())),
            [NavAction::ToggleMenu, NavAction::SessionLoaded(Some(renamed.clone()))],
        );
        assert!(state.menu_open);
        assert_eq!(state.session, Some(renamed));
    }

    #[test]
    fn mobile_menu_is_independent_of_session() {
        let state = apply(NavState::new(None), [NavAction::ToggleMobile]);
        assert!(state.mobile_open);
        let state = apply(state, [NavAction::ToggleMenu, NavAction::CloseMobile]);
        assert!(!state.mobile_open);
        assert!(!state.menu_open);
    }

    #[test]
    fn scrolled_only_past_threshold() {
        let at = apply(NavState::default(), [NavAction::Scrolled(config::SCROLL_THRESHOLD_PX)]);
        assert!(!at.scrolled);
        let past = apply(at, [NavAction::Scrolled(config::SCROLL_THRESHOLD_PX + 1.0)]);
        assert!(past.scrolled);
        let back = apply(past, [NavAction::Scrolled(0.0)]);
        assert!(!back.scrolled);
    }

    #[test]
    fn close_menu_is_idempotent() {
        let state = apply(
            NavState::new(Some(ana())),
            [NavAction::ToggleMenu, NavAction::CloseMenu, NavAction::CloseMenu],
        );
        assert!(!state.menu_open);
    }
}
