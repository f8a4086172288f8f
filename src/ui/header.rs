// SPDX-License-Identifier: MPL-2.0
//! Site header.
//!
//! Three rows: a dark strip with secondary links and the language toggle, the
//! center's logo and title (navigates home), and the main navigation where
//! only the experts and news entries lead somewhere.

use crate::app::page::{NavItem, Page};
use crate::i18n::LocaleStore;
use crate::ui::components::{content_width, BOLD};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, rule, text, Column, Container, Row};
use iced::{Element, Length, Theme};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a LocaleStore,
    pub page: Page,
}

/// Messages emitted by the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    GoHome,
    OpenExperts,
    OpenNews,
    ToggleLanguage,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Navigate(Page),
    ToggleLanguage,
}

/// Process a header message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::GoHome => Event::Navigate(Page::Home),
        Message::OpenExperts => Event::Navigate(Page::ExpertsList),
        Message::OpenNews => Event::Navigate(Page::News),
        Message::ToggleLanguage => Event::ToggleLanguage,
    }
}

/// Render the header.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .width(Length::Fill)
        .push(build_top_strip(&ctx))
        .push(build_title_row(&ctx))
        .push(rule::horizontal(1))
        .push(build_main_nav(&ctx))
        .push(rule::horizontal(1))
        .into()
}

fn build_top_strip<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let mut links = Row::new().spacing(spacing::LG).align_y(Vertical::Center);
    for key in [
        "header.topNav.partnership",
        "header.topNav.announcements",
        "header.topNav.contacts",
        "header.topNav.about",
    ] {
        // Inert: no destination exists for these yet.
        links = links.push(
            button(text(i18n.tr(key)).size(typography::BODY_SM))
                .padding(0.0)
                .style(styles::button::on_dark_link),
        );
    }

    let toggle = button(
        text(i18n.locale().switch_label())
            .size(typography::BODY_SM)
            .font(BOLD),
    )
    .padding([spacing::XXS, spacing::MD])
    .on_press(Message::ToggleLanguage)
    .style(styles::button::language_toggle);

    let row = Row::new()
        .align_y(Vertical::Center)
        .height(Length::Fixed(sizing::HEADER_ROW_HEIGHT))
        .push(Container::new(links).width(Length::Fill))
        .push(toggle);

    Container::new(content_width(row))
        .width(Length::Fill)
        .padding([0.0, spacing::LG])
        .style(styles::container::banner)
        .into()
}

fn build_title_row<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let logo = Container::new(text("AI").size(typography::TITLE_SM).font(BOLD))
        .width(Length::Fixed(sizing::HEADER_ROW_HEIGHT + spacing::XS))
        .height(Length::Fixed(sizing::HEADER_ROW_HEIGHT + spacing::XS))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::avatar);

    let titles = Column::new()
        .spacing(spacing::XXS)
        .push(text(i18n.tr("header.title")).size(typography::BODY_LG).font(BOLD))
        .push(
            text(i18n.tr("header.subtitle"))
                .size(typography::BODY_SM)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::of(theme).text_secondary),
                }),
        );

    let brand = button(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(logo)
            .push(titles),
    )
    .padding(0.0)
    .on_press(Message::GoHome)
    .style(styles::button::nav_item(false));

    Container::new(content_width(brand))
        .width(Length::Fill)
        .padding([spacing::MD, spacing::LG])
        .style(styles::container::page)
        .into()
}

fn build_main_nav<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let highlight = ctx.page.nav_highlight();

    let entries = [
        ("header.mainNav.researchTopics", None, false),
        ("header.mainNav.publications", None, false),
        (
            "header.nav.news",
            Some(Message::OpenNews),
            highlight == Some(NavItem::News),
        ),
        ("header.mainNav.events", None, false),
        (
            "header.mainNav.experts",
            Some(Message::OpenExperts),
            highlight == Some(NavItem::Experts),
        ),
    ];

    let mut nav = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .height(Length::Fixed(sizing::HEADER_ROW_HEIGHT));
    for (key, message, active) in entries {
        nav = nav.push(
            button(text(i18n.tr(key)).size(typography::BODY))
                .padding([spacing::XS, spacing::SM])
                .on_press_maybe(message)
                .style(styles::button::nav_item(active)),
        );
    }

    Container::new(content_width(nav))
        .width(Length::Fill)
        .padding([0.0, spacing::LG])
        .style(styles::container::page)
        .into()
}
