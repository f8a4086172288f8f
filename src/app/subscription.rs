// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::config::ANIMATION_TICK_MS;
use super::page::Page;
use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Animation ticks, only while the home page is shown with the animation on.
///
/// Returning `Subscription::none()` on other pages tears the timer down.
pub fn create_animation_subscription(page: Page, animation_enabled: bool) -> Subscription<Message> {
    if animation_active(page, animation_enabled) {
        time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::AnimationTick)
    } else {
        Subscription::none()
    }
}

/// Whether a timer is running for the given state.
pub fn animation_active(page: Page, animation_enabled: bool) -> bool {
    page == Page::Home && animation_enabled
}
