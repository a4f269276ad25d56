use leptos::ev::{self, EventDescriptor};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, MouseEvent};

use crate::domain::logging::LogComponent;
use crate::{log_debug, log_warn};

/// `addEventListener` flags. Gesture listeners never call `prevent_default`,
/// so they default to passive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerFlags {
    pub passive: bool,
    pub capture: bool,
}

impl Default for ListenerFlags {
    fn default() -> Self {
        Self { passive: true, capture: false }
    }
}

impl ListenerFlags {
    fn to_js(self) -> AddEventListenerOptions {
        let opts = AddEventListenerOptions::new();
        opts.set_passive(self.passive);
        opts.set_capture(self.capture);
        opts
    }
}

/// A window listener that stays attached until [`detach`](Self::detach).
/// Dropping it without detaching leaves a dangling JS callback.
pub struct WindowListener {
    event_name: String,
    callback: Closure<dyn FnMut(Event)>,
    flags: ListenerFlags,
}

impl WindowListener {
    pub fn attach<E>(event: E, flags: ListenerFlags, mut handler: impl FnMut(E::EventType) + 'static) -> Self
    where
        E: EventDescriptor + 'static,
        E::EventType: JsCast,
    {
        let event_name = event.name().into_owned();
        let callback: Closure<dyn FnMut(Event)> =
            Closure::new(move |raw: Event| handler(raw.unchecked_into::<E::EventType>()));

        let attached = web_sys::window().map(|window| {
            window.add_event_listener_with_callback_and_add_event_listener_options(
                &event_name,
                callback.as_ref().unchecked_ref(),
                &flags.to_js(),
            )
        });
        match attached {
            Some(Ok(())) => {
                log_debug!(LogComponent::Presentation("WindowListener"), "attached '{}'", event_name);
            }
            _ => {
                log_warn!(LogComponent::Presentation("WindowListener"), "could not attach '{}'", event_name);
            }
        }

        Self { event_name, callback, flags }
    }

    pub fn detach(self) {
        let detached = web_sys::window().map(|window| {
            window.remove_event_listener_with_callback_and_bool(
                &self.event_name,
                self.callback.as_ref().unchecked_ref(),
                self.flags.capture,
            )
        });
        match detached {
            Some(Ok(())) => {
                log_debug!(LogComponent::Presentation("WindowListener"), "detached '{}'", self.event_name);
            }
            _ => {
                log_warn!(LogComponent::Presentation("WindowListener"), "could not detach '{}'", self.event_name);
            }
        }
    }
}

/// Button release anywhere on the page, so a drag that leaves the canvas still ends
pub fn on_window_mouseup(handler: impl FnMut(MouseEvent) + 'static) -> WindowListener {
    WindowListener::attach(ev::mouseup, ListenerFlags::default(), handler)
}
