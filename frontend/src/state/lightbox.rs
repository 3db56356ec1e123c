use std::rc::Rc;

use log::{debug, warn};
use yew::prelude::*;

use crate::error::SiteError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(usize),
}

/// Keys the overlay reacts to. Anything else is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl LightboxKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(LightboxKey::Escape),
            "ArrowLeft" => Some(LightboxKey::ArrowLeft),
            "ArrowRight" => Some(LightboxKey::ArrowRight),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxAction {
    Open(usize),
    Close,
    Next,
    Previous,
    Key(LightboxKey),
}

/// Open/closed overlay over a gallery of `len` images.
///
/// Navigation wraps in both directions. `next`, `previous` and `close` do
/// nothing while closed, so stray keyboard input can't reopen the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lightbox {
    state: LightboxState,
    len: usize,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self {
            state: LightboxState::Closed,
            len,
        }
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open(_))
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open(index) => Some(index),
            LightboxState::Closed => None,
        }
    }

    pub fn open(&mut self, index: usize) -> Result<(), SiteError> {
        if index >= self.len {
            return Err(SiteError::ImageIndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.state = LightboxState::Open(index);
        Ok(())
    }

    pub fn close(&mut self) {
        self.state = LightboxState::Closed;
    }

    pub fn next(&mut self) {
        if let LightboxState::Open(index) = self.state {
            self.state = LightboxState::Open((index + 1) % self.len);
        }
    }

    pub fn previous(&mut self) {
        if let LightboxState::Open(index) = self.state {
            self.state = LightboxState::Open((index + self.len - 1) % self.len);
        }
    }

    pub fn handle_key(&mut self, key: LightboxKey) {
        if !self.is_open() {
            return;
        }
        match key {
            LightboxKey::Escape => self.close(),
            LightboxKey::ArrowRight => self.next(),
            LightboxKey::ArrowLeft => self.previous(),
        }
    }

    pub fn apply(&mut self, action: LightboxAction) -> Result<(), SiteError> {
        match action {
            LightboxAction::Open(index) => self.open(index)?,
            LightboxAction::Close => self.close(),
            LightboxAction::Next => self.next(),
            LightboxAction::Previous => self.previous(),
            LightboxAction::Key(key) => self.handle_key(key),
        }
        Ok(())
    }
}

impl Reducible for Lightbox {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        if let Err(err) = next.apply(action) {
            warn!("Ignoring lightbox action {:?}: {}", action, err);
            return self;
        }
        if next == *self {
            return self;
        }
        debug!("Lightbox {:?} -> {:?}", self.state(), next.state());
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened(len: usize, index: usize) -> Lightbox {
        let mut lightbox = Lightbox::new(len);
        lightbox.open(index).unwrap();
        lightbox
    }

    #[test]
    fn next_n_times_returns_to_start() {
        for len in 1..=12 {
            for start in 0..len {
                let mut lightbox = opened(len, start);
                for _ in 0..len {
                    lightbox.next();
                }
                assert_eq!(lightbox.state(), LightboxState::Open(start));
            }
        }
    }

    #[test]
    fn previous_undoes_next() {
        for len in 1..=12 {
            for start in 0..len {
                let mut lightbox = opened(len, start);
                lightbox.next();
                lightbox.previous();
                assert_eq!(lightbox.current_index(), Some(start));
            }
        }
    }

    #[test]
    fn open_then_close_is_closed() {
        for index in 0..12 {
            let mut lightbox = opened(12, index);
            lightbox.close();
            assert_eq!(lightbox.state(), LightboxState::Closed);
            assert!(!lightbox.is_open());
        }
    }

    #[test]
    fn keys_do_nothing_while_closed() {
        let mut lightbox = Lightbox::new(12);
        for key in [
            LightboxKey::Escape,
            LightboxKey::ArrowLeft,
            LightboxKey::ArrowRight,
        ] {
            lightbox.handle_key(key);
            assert_eq!(lightbox, Lightbox::new(12));
        }
    }

    #[test]
    fn navigation_without_open_stays_closed() {
        let mut lightbox = Lightbox::new(5);
        lightbox.next();
        lightbox.previous();
        lightbox.close();
        assert_eq!(lightbox.state(), LightboxState::Closed);
    }

    #[test]
    fn twelve_image_walkthrough() {
        let mut lightbox = opened(12, 0);
        lightbox.next();
        assert_eq!(lightbox.state(), LightboxState::Open(1));
        lightbox.previous();
        lightbox.previous();
        assert_eq!(lightbox.state(), LightboxState::Open(11));
    }

    #[test]
    fn keyboard_bindings_while_open() {
        let mut lightbox = opened(3, 2);
        lightbox.handle_key(LightboxKey::ArrowRight);
        assert_eq!(lightbox.current_index(), Some(0));
        lightbox.handle_key(LightboxKey::ArrowLeft);
        assert_eq!(lightbox.current_index(), Some(2));
        lightbox.handle_key(LightboxKey::Escape);
        assert_eq!(lightbox.state(), LightboxState::Closed);
    }

    #[test]
    fn key_names_are_parsed() {
        assert_eq!(LightboxKey::from_key("Escape"), Some(LightboxKey::Escape));
        assert_eq!(
            LightboxKey::from_key("ArrowRight"),
            Some(LightboxKey::ArrowRight)
        );
        assert_eq!(
            LightboxKey::from_key("ArrowLeft"),
            Some(LightboxKey::ArrowLeft)
        );
        assert_eq!(LightboxKey::from_key("Enter"), None);
        assert_eq!(LightboxKey::from_key("escape"), None);
    }

    #[test]
    fn out_of_range_open_is_rejected() {
        let mut lightbox = Lightbox::new(4);
        let err = lightbox.open(4).unwrap_err();
        assert!(matches!(
            err,
            SiteError::ImageIndexOutOfRange { index: 4, len: 4 }
        ));
        assert_eq!(lightbox.state(), LightboxState::Closed);
    }

    #[test]
    fn empty_gallery_never_opens() {
        let mut lightbox = Lightbox::new(0);
        assert!(lightbox.open(0).is_err());
        lightbox.next();
        assert!(!lightbox.is_open());
    }

    #[test]
    fn single_image_wraps_onto_itself() {
        let mut lightbox = opened(1, 0);
        lightbox.next();
        assert_eq!(lightbox.current_index(), Some(0));
        lightbox.previous();
        assert_eq!(lightbox.current_index(), Some(0));
    }

    #[test]
    fn reducer_keeps_state_on_noop() {
        let closed = Rc::new(Lightbox::new(12));
        let after = closed.clone().reduce(LightboxAction::Key(LightboxKey::ArrowRight));
        assert!(Rc::ptr_eq(&closed, &after));

        let rejected = closed.clone().reduce(LightboxAction::Open(99));
        assert!(Rc::ptr_eq(&closed, &rejected));
    }

    #[test]
    fn reducer_applies_actions() {
        let lightbox = Rc::new(Lightbox::new(12))
            .reduce(LightboxAction::Open(0))
            .reduce(LightboxAction::Next)
            .reduce(LightboxAction::Previous)
            .reduce(LightboxAction::Previous);
        assert_eq!(lightbox.state(), LightboxState::Open(11));

        let lightbox = lightbox.reduce(LightboxAction::Close);
        assert_eq!(lightbox.state(), LightboxState::Closed);
    }
}
