// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Page components translate their messages into events; the handlers here
//! apply those events to the router and the locale store.

use super::page::{Page, Router};
use super::Message;
use crate::i18n::LocaleStore;
use crate::ui::widgets::NeuralNetwork;
use crate::ui::{expert_detail, experts, footer, header, home};
use iced::Task;

/// Mutable application state touched by `update`.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut LocaleStore,
    pub router: &'a mut Router,
    pub network: &'a mut NeuralNetwork,
}

/// Dispatches a top-level message.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Header(message) => match header::update(message) {
            header::Event::Navigate(page) => ctx.router.navigate(page),
            header::Event::ToggleLanguage => toggle_language(ctx.i18n),
        },
        Message::Footer(message) => match footer::update(message) {
            footer::Event::Navigate(page) => ctx.router.navigate(page),
        },
        Message::Home(message) => match home::update(message) {
            home::Event::Navigate(page) => ctx.router.navigate(page),
        },
        Message::Experts(message) => match experts::update(message) {
            experts::Event::SelectExpert(id) => ctx.router.select_expert(id),
        },
        Message::ExpertDetail(message) => match expert_detail::update(message) {
            expert_detail::Event::BackToList => ctx.router.back_to_list(),
        },
        Message::AnimationTick(_) => {
            // A tick can still be in flight right after leaving the page.
            if ctx.router.page() == Page::Home {
                ctx.network.advance();
            }
        }
    }
    Task::none()
}

/// Switches to the other locale. A persistence failure keeps the new locale
/// for this session and is only logged.
fn toggle_language(i18n: &mut LocaleStore) {
    if let Err(err) = i18n.toggle() {
        log::warn!("Failed to persist language preference: {}", err);
    }
}
