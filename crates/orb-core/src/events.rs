//! Typed session events and the bounded queue the transport posts them into.
//!
//! The voice-agent transport is an external collaborator; its callbacks run
//! off the render cadence. Instead of letting them write renderer state
//! directly, they post `SessionEvent`s through an [`EventSender`] and the
//! scene drains the queue once per tick, so all parameter writes happen on
//! the render thread in arrival order.

use std::sync::mpsc::{sync_channel, Receiver, SyncSender, TrySendError};

use crate::constants::EVENT_QUEUE_CAPACITY;

/// Who produced a conversation message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Transport role strings: `"assistant"` is the agent, anything else is
    /// treated as the user side.
    pub fn parse(role: &str) -> Self {
        if role == "assistant" {
            Role::Assistant
        } else {
            Role::User
        }
    }
}

/// State changes delivered by the voice-session transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    Message { role: Role },
    ModeChange { speaking: bool },
    StatusChange { status: String },
    Disconnected,
    Error { message: String },
}

impl SessionEvent {
    /// Build a `ModeChange` from the transport's mode string.
    pub fn mode_change(mode: &str) -> Self {
        SessionEvent::ModeChange {
            speaking: mode == "speaking",
        }
    }
}

/// Cloneable handle given to the transport glue.
#[derive(Clone)]
pub struct EventSender {
    tx: SyncSender<SessionEvent>,
}

impl EventSender {
    /// Post an event without blocking. If the renderer has stalled long
    /// enough to fill the queue the event is dropped with a warning; the
    /// next drained event re-establishes the visual state anyway.
    pub fn send(&self, event: SessionEvent) {
        match self.tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(ev)) => {
                log::warn!("session event queue full, dropping {ev:?}");
            }
            Err(TrySendError::Disconnected(_)) => {
                log::warn!("session event queue closed");
            }
        }
    }
}

/// Renderer-side end of the queue.
pub struct EventQueue {
    rx: Receiver<SessionEvent>,
}

impl EventQueue {
    pub fn new() -> (EventQueue, EventSender) {
        let (tx, rx) = sync_channel(EVENT_QUEUE_CAPACITY);
        (EventQueue { rx }, EventSender { tx })
    }

    /// Drain everything currently queued, in arrival order.
    pub fn drain(&self, out: &mut Vec<SessionEvent>) {
        while let Ok(ev) = self.rx.try_recv() {
            out.push(ev);
        }
    }
}
