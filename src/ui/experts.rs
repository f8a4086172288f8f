// SPDX-License-Identifier: MPL-2.0
//! Experts list page: banner plus a grid of expert cards.

use crate::content::experts::{ExpertCard, CARDS};
use crate::content::PhotoSource;
use crate::i18n::LocaleStore;
use crate::ui::components::{self, content_width, photo, BOLD};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Horizontal;
use iced::widget::{button, text, Column, Container};
use iced::{Element, Length, Theme};

/// Cards per grid row.
pub const COLUMNS: usize = 4;

pub struct ViewContext<'a> {
    pub i18n: &'a LocaleStore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Select(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    SelectExpert(&'static str),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::Select(id) => Event::SelectExpert(id),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let cards = CARDS.iter().map(|card| expert_card(i18n, card)).collect();

    let grid = Container::new(content_width(components::grid(cards, COLUMNS)))
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::LG])
        .style(styles::container::section);

    Column::new()
        .width(Length::Fill)
        .push(components::banner(
            i18n.tr("experts.title"),
            i18n.tr("experts.subtitle"),
        ))
        .push(grid)
        .into()
}

fn expert_card<'a>(i18n: &'a LocaleStore, card: &'static ExpertCard) -> Element<'a, Message> {
    let locale = i18n.locale();
    let name = *card.name.get(locale);

    let body = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(photo::view(
            Some(PhotoSource::parse(card.photo)),
            name,
            sizing::PHOTO_CARD,
        ))
        .push(text(name).size(typography::BODY_LG).font(BOLD))
        .push(
            text(*card.position.get(locale))
                .size(typography::BODY_SM)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::of(theme).text_secondary),
                }),
        )
        .push(
            text(i18n.tr("experts.view"))
                .size(typography::BODY_SM)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::of(theme).brand_primary),
                }),
        );

    button(body)
        .width(Length::Fill)
        .padding(spacing::LG)
        .on_press(Message::Select(card.id))
        .style(styles::button::card)
        .into()
}
