//! Raw input decoding: crossterm terminal events into `core_events::Event`.
//!
//! Synchronous by design: the control loop blocks in [`read_event`] and
//! applies each event completely before asking for the next. Undecodable or
//! meaningless input (mouse, focus, unsupported keys) is dropped silently at
//! this layer, with only a trace record.

mod key_token;

use anyhow::Result;
use core_events::Event;
use crossterm::event::{self as cevent, Event as CEvent};

/// Translate one crossterm event. `None` means "nothing for the editor".
pub fn translate(event: &CEvent) -> Option<Event> {
    match event {
        CEvent::Key(key) => {
            let mapped = key_token::map_key_event(key).map(Event::Key);
            if mapped.is_none() {
                log_dropped("key");
            }
            mapped
        }
        CEvent::Resize(width, height) => Some(Event::Resize {
            width: *width,
            height: *height,
        }),
        CEvent::Mouse(_) => None,
        CEvent::Paste(text) => {
            tracing::trace!(target: "input", len = text.len(), "paste_dropped");
            None
        }
        _ => {
            log_dropped("other");
            None
        }
    }
}

/// Block until the next event the editor cares about.
pub fn read_event() -> Result<Event> {
    loop {
        let raw = cevent::read()?;
        if let Some(ev) = translate(&raw) {
            return Ok(ev);
        }
    }
}

#[inline]
fn log_dropped(kind: &'static str) {
    tracing::trace!(target: "input", kind, "dropped");
}
