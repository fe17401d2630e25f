// SPDX-License-Identifier: MPL-2.0
//! Subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval at which queued diagnostics are moved into the ring buffer.
pub const DIAGNOSTICS_TICK: Duration = Duration::from_secs(1);

/// Creates the periodic tick that drains the diagnostics channel.
pub fn create_tick_subscription() -> Subscription<Message> {
    time::every(DIAGNOSTICS_TICK).map(Message::Tick)
}
