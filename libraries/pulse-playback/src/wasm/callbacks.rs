//! JavaScript callback slots
//!
//! Lookups hand back clones so no borrow of the slots is held while a
//! callback runs; a callback may register or replace callbacks itself.

use crate::PlayerEvent;

pub(crate) struct CallbackSlots<C> {
    pub on_event: Option<C>,
    pub on_track_change: Option<C>,
    pub on_state_change: Option<C>,
    pub on_error: Option<C>,
}

impl<C> Default for CallbackSlots<C> {
    fn default() -> Self {
        Self {
            on_event: None,
            on_track_change: None,
            on_state_change: None,
            on_error: None,
        }
    }
}

impl<C: Clone> CallbackSlots<C> {
    /// The catch-all listener and the listener specific to `event`
    pub fn for_event(&self, event: &PlayerEvent) -> (Option<C>, Option<C>) {
        let specific = match event {
            PlayerEvent::TrackChanged { .. } => self.on_track_change.clone(),
            PlayerEvent::StateChanged { .. } => self.on_state_change.clone(),
            PlayerEvent::PlaybackFailed { .. } => self.on_error.clone(),
            _ => None,
        };
        (self.on_event.clone(), specific)
    }

    pub fn error(&self) -> Option<C> {
        self.on_error.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayState;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Callback = Rc<dyn Fn()>;

    fn track_changed() -> PlayerEvent {
        PlayerEvent::TrackChanged {
            index: 0,
            title: "Kiss Me More".to_string(),
            artist: "Doja Cat ft. SZA".to_string(),
        }
    }

    #[test]
    fn callback_may_register_another() {
        let slots: Rc<RefCell<CallbackSlots<Callback>>> = Rc::default();
        let inner = Rc::clone(&slots);
        slots.borrow_mut().on_track_change = Some(Rc::new(move || {
            inner.borrow_mut().on_event = Some(Rc::new(|| {}));
        }));

        let (general, specific) = slots.borrow().for_event(&track_changed());
        assert!(general.is_none());
        specific.expect("track change listener")();

        assert!(slots.borrow().on_event.is_some());
    }

    #[test]
    fn events_route_to_their_listener() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut slots: CallbackSlots<Callback> = CallbackSlots::default();
        for (slot, name) in [
            (&mut slots.on_event, "event"),
            (&mut slots.on_state_change, "state"),
            (&mut slots.on_error, "error"),
        ] {
            let calls = Rc::clone(&calls);
            *slot = Some(Rc::new(move || calls.borrow_mut().push(name)));
        }

        let (general, specific) = slots.for_event(&PlayerEvent::StateChanged {
            state: PlayState::Playing,
        });
        general.expect("catch-all")();
        specific.expect("state listener")();

        let (_, specific) = slots.for_event(&PlayerEvent::LikeChanged { liked: true });
        assert!(specific.is_none());

        // No track change listener registered
        let (_, specific) = slots.for_event(&track_changed());
        assert!(specific.is_none());

        slots.error().expect("error listener")();
        assert_eq!(*calls.borrow(), vec!["event", "state", "error"]);
    }
}
