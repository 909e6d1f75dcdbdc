use std::rc::Rc;

use log::{debug, warn};
use web_sys::window;
use yew::prelude::*;

use crate::config;

/// Open/closed state of the mobile navigation panel. Attribute values are
/// derived from it on every render; nothing else stores the flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuAction {
    Toggle,
    Set(bool),
    /// Viewport resized to this width in CSS pixels.
    Resized(f64),
}

impl MenuState {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn after_resize(self, width: f64) -> Self {
        if width > config::MENU_BREAKPOINT_PX {
            Self { open: false }
        } else {
            self
        }
    }

    /// `aria-expanded` of the toggle button.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    /// `aria-hidden` of the panel.
    pub fn aria_hidden(&self) -> &'static str {
        if self.open { "false" } else { "true" }
    }

    pub fn body_overflow(&self) -> &'static str {
        if self.open { "hidden" } else { "" }
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            MenuAction::Toggle => self.toggled(),
            MenuAction::Set(open) => MenuState { open },
            MenuAction::Resized(width) => self.after_resize(width),
        };
        if next == *self {
            return self;
        }
        debug!("menu {}", if next.open { "opened" } else { "closed" });
        Rc::new(next)
    }
}

/// Action for a window `keydown` with this `KeyboardEvent.key`.
pub fn key_action(key: &str) -> Option<MenuAction> {
    (key == "Escape").then_some(MenuAction::Set(false))
}

/// Action for a click inside the mobile panel. Only clicks that land on or
/// inside an `<a>` close it.
pub fn panel_click_action(on_link: bool) -> Option<MenuAction> {
    on_link.then_some(MenuAction::Set(false))
}

/// Shared through context so in-page links can close the menu.
pub type MenuContext = UseReducerHandle<MenuState>;

/// Mirrors the menu state into `body.style.overflow`.
pub fn lock_body_scroll(state: MenuState) {
    let body = window().and_then(|w| w.document()).and_then(|d| d.body());
    if let Some(body) = body {
        if let Err(err) = body.style().set_property("overflow", state.body_overflow()) {
            warn!("body scroll lock failed: {:?}", err);
        }
    } else {
        debug!("no document body, skipping scroll lock");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: MenuState, action: MenuAction) -> MenuState {
        *Rc::new(state).reduce(action)
    }

    #[test]
    fn starts_closed() {
        let state = MenuState::default();
        assert_eq!(state.aria_expanded(), "false");
        assert_eq!(state.aria_hidden(), "true");
        assert_eq!(state.body_overflow(), "");
    }

    #[test]
    fn toggling_twice_restores_attributes() {
        let start = MenuState::default();
        let opened = apply(start, MenuAction::Toggle);
        assert_eq!(opened.aria_expanded(), "true");
        assert_eq!(opened.aria_hidden(), "false");
        assert_eq!(opened.body_overflow(), "hidden");
        let closed = apply(opened, MenuAction::Toggle);
        assert_eq!(closed.aria_expanded(), "false");
        assert_eq!(closed, start);
    }

    #[test]
    fn set_forces_state() {
        let open = MenuState { open: true };
        assert_eq!(apply(open, MenuAction::Set(false)), MenuState::default());
        assert_eq!(apply(MenuState::default(), MenuAction::Set(false)), MenuState::default());
    }

    #[test]
    fn wide_resize_closes_open_menu() {
        let open = MenuState { open: true };
        assert_eq!(apply(open, MenuAction::Resized(821.0)).aria_expanded(), "false");
        assert_eq!(apply(open, MenuAction::Resized(1440.0)), MenuState::default());
    }

    #[test]
    fn narrow_resize_keeps_state() {
        let open = MenuState { open: true };
        assert_eq!(apply(open, MenuAction::Resized(820.0)), open);
        assert_eq!(apply(open, MenuAction::Resized(375.0)), open);
        assert_eq!(
            apply(MenuState::default(), MenuAction::Resized(375.0)),
            MenuState::default()
        );
    }

    #[test]
    fn escape_closes_other_keys_do_nothing() {
        assert_eq!(key_action("Escape"), Some(MenuAction::Set(false)));
        assert_eq!(key_action("Enter"), None);
        assert_eq!(key_action("Esc"), None);

        let open = MenuState { open: true };
        let action = key_action("Escape").unwrap();
        assert_eq!(apply(open, action).aria_expanded(), "false");
    }

    #[test]
    fn panel_closes_only_on_link_click() {
        assert_eq!(panel_click_action(true), Some(MenuAction::Set(false)));
        assert_eq!(panel_click_action(false), None);

        let open = MenuState { open: true };
        assert_eq!(apply(open, panel_click_action(true).unwrap()), MenuState::default());
    }

    #[test]
    fn unchanged_state_keeps_same_rc() {
        let state = Rc::new(MenuState::default());
        let next = state.clone().reduce(MenuAction::Set(false));
        assert!(Rc::ptr_eq(&state, &next));
    }
}
