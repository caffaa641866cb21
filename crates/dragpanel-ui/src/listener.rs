use std::rc::{Rc, Weak};

/// Side the panel left the screen through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisappearSide {
    Left,
    Right,
}

/// Notified once each time a sideways dismissal finishes settling.
pub trait DisappearListener {
    fn on_disappear(&self, side: DisappearSide);
}

impl<F: Fn(DisappearSide)> DisappearListener for F {
    fn on_disappear(&self, side: DisappearSide) {
        self(side)
    }
}

/// Non-owning listener slot. The registrant keeps the listener alive and
/// clears the slot before tearing it down; a listener dropped without being
/// cleared is skipped.
#[derive(Default)]
pub(crate) struct ListenerSlot {
    listener: Option<Weak<dyn DisappearListener>>,
}

impl ListenerSlot {
    pub(crate) fn set(&mut self, listener: &Rc<dyn DisappearListener>) {
        self.listener = Some(Rc::downgrade(listener));
    }

    pub(crate) fn clear(&mut self) {
        self.listener = None;
    }

    pub(crate) fn is_set(&self) -> bool {
        self.listener.is_some()
    }

    pub(crate) fn notify(&self, side: DisappearSide) {
        match self.listener.as_ref().and_then(Weak::upgrade) {
            Some(listener) => listener.on_disappear(side),
            None => log::debug!("no live disappear listener for {side:?}"),
        }
    }
}
