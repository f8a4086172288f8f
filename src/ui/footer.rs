// SPDX-License-Identifier: MPL-2.0
//! Site footer: about text, contacts, quick links, and copyright.

use crate::app::page::Page;
use crate::i18n::LocaleStore;
use crate::ui::components::{content_width, BOLD};
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, rule, text, Column, Container, Row};
use iced::{Color, Element, Length, Theme};

/// Contextual data needed to render the footer.
pub struct ViewContext<'a> {
    pub i18n: &'a LocaleStore,
    /// Year printed in the copyright line.
    pub year: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Navigate(Page),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Navigate(Page),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::Navigate(page) => Event::Navigate(page),
    }
}

fn muted(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(Color {
            a: opacity::MUTED,
            ..palette::WHITE
        }),
    }
}

fn column_title<'a>(label: String) -> Element<'a, Message> {
    text(label).size(typography::BODY_LG).font(BOLD).into()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let about = Column::new()
        .spacing(spacing::SM)
        .push(column_title(i18n.tr("footer.about")))
        .push(text(i18n.tr("footer.aboutDescription")).size(typography::BODY_SM).style(muted));

    let contact = Column::new()
        .spacing(spacing::XS)
        .push(column_title(i18n.tr("footer.contact")))
        .push(text(i18n.tr("footer.address")).size(typography::BODY_SM).style(muted))
        .push(text(i18n.tr("footer.phone")).size(typography::BODY_SM).style(muted))
        .push(text(i18n.tr("footer.email")).size(typography::BODY_SM).style(muted));

    let mut links = Column::new()
        .spacing(spacing::XS)
        .push(column_title(i18n.tr("footer.quickLinks")));
    for (key, page) in [
        ("header.nav.home", Page::Home),
        ("header.nav.experts", Page::ExpertsList),
        ("header.nav.news", Page::News),
    ] {
        links = links.push(
            button(text(i18n.tr(key)).size(typography::BODY_SM))
                .padding(0.0)
                .on_press(Message::Navigate(page))
                .style(styles::button::on_dark_link),
        );
    }

    let follow = Column::new()
        .spacing(spacing::XS)
        .push(column_title(i18n.tr("footer.followUs")))
        .push(text("Facebook").size(typography::BODY_SM).style(muted))
        .push(text("LinkedIn").size(typography::BODY_SM).style(muted))
        .push(text("YouTube").size(typography::BODY_SM).style(muted));

    let columns = Row::new()
        .spacing(spacing::XL)
        .push(Container::new(about).width(Length::FillPortion(2)))
        .push(Container::new(contact).width(Length::FillPortion(1)))
        .push(Container::new(links).width(Length::FillPortion(1)))
        .push(Container::new(follow).width(Length::FillPortion(1)));

    let copyright = text(format!(
        "© {} {}. {}.",
        ctx.year,
        i18n.tr("header.title"),
        i18n.tr("footer.allRightsReserved")
    ))
    .size(typography::CAPTION)
    .style(muted);

    let body = Column::new()
        .spacing(spacing::LG)
        .push(columns)
        .push(rule::horizontal(1))
        .push(copyright);

    Container::new(content_width(body))
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::LG])
        .style(styles::container::banner)
        .into()
}
