// SPDX-License-Identifier: MPL-2.0
//! Home page: hero, objectives, activities, and results.

use crate::app::page::Page;
use crate::i18n::LocaleStore;
use crate::ui::components::{self, content_width, section_heading, BOLD};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::NeuralNetwork;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, Column, Container, Row};
use iced::{Color, Element, Length, Theme};

const TASKS: [&str; 4] = ["analyticalResearch", "consulting", "education", "strategy"];
const INITIATIVES: [&str; 4] = ["thinkTanks", "expertise", "publications", "partnership"];
const STATS: [&str; 4] = ["research", "partners", "publications", "programs"];

/// Contextual data needed to render the home page.
pub struct ViewContext<'a> {
    pub i18n: &'a LocaleStore,
    /// Present when the animation is enabled.
    pub network: Option<&'a NeuralNetwork>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    LearnMore,
    OurResearch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Navigate(Page),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::LearnMore => Event::Navigate(Page::ExpertsList),
        Message::OurResearch => Event::Navigate(Page::News),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .width(Length::Fill)
        .push(hero(&ctx))
        .push(tasks(ctx.i18n))
        .push(initiatives(ctx.i18n))
        .push(stats(ctx.i18n))
        .into()
}

fn secondary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::of(theme).text_secondary),
    }
}

fn hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(text(i18n.tr("hero.learnMore")).size(typography::BODY))
                .padding([spacing::SM, spacing::LG])
                .on_press(Message::LearnMore)
                .style(styles::button::primary),
        )
        .push(
            button(text(i18n.tr("hero.ourResearch")).size(typography::BODY))
                .padding([spacing::SM, spacing::LG])
                .on_press(Message::OurResearch)
                .style(styles::button::outline_on_dark),
        );

    let intro = Column::new()
        .spacing(spacing::LG)
        .width(Length::FillPortion(1))
        .push(text(i18n.tr("hero.title")).size(typography::DISPLAY).font(BOLD))
        .push(
            text(i18n.tr("hero.subtitle"))
                .size(typography::BODY_LG)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::of(theme).banner_text_muted),
                }),
        )
        .push(actions);

    let mut mission = Column::new()
        .spacing(spacing::MD)
        .push(text(i18n.tr("hero.mission")).size(typography::TITLE_SM).font(BOLD))
        .push(text(i18n.tr("hero.missionDescription")).size(typography::BODY));

    if let Some(network) = ctx.network {
        mission = mission.push(
            Container::new(network.view(sizing::NETWORK_CANVAS_HEIGHT))
                .width(Length::Fill)
                .style(styles::container::glass),
        );
    }

    mission = mission.push(components::badge(
        i18n.tr("hero.university"),
        Color {
            a: opacity::GLASS_STRONG,
            ..palette::WHITE
        },
        palette::WHITE,
    ));

    let mission_card = Container::new(mission)
        .width(Length::FillPortion(1))
        .padding(spacing::XL)
        .style(styles::container::brand_gradient);

    let row = Row::new()
        .spacing(spacing::XXL)
        .align_y(Vertical::Center)
        .push(intro)
        .push(mission_card);

    Container::new(content_width(row))
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::LG])
        .style(styles::container::banner)
        .into()
}

fn numbered_marker<'a>(index: usize) -> Element<'a, Message> {
    Container::new(
        text(format!("{:02}", index + 1))
            .size(typography::BODY_LG)
            .font(BOLD),
    )
    .width(Length::Fixed(spacing::XXL))
    .height(Length::Fixed(spacing::XXL))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::avatar)
    .into()
}

fn tasks<'a>(i18n: &'a LocaleStore) -> Element<'a, Message> {
    let cards = TASKS
        .iter()
        .enumerate()
        .map(|(index, task)| {
            let body = Column::new()
                .spacing(spacing::SM)
                .push(numbered_marker(index))
                .push(
                    text(i18n.tr(&format!("tasks.{}.title", task)))
                        .size(typography::TITLE_SM)
                        .font(BOLD),
                )
                .push(
                    text(i18n.tr(&format!("tasks.{}.description", task)))
                        .size(typography::BODY)
                        .style(secondary_text),
                );
            Container::new(body)
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(styles::container::card)
                .into()
        })
        .collect();

    section(
        section_heading(i18n.tr("tasks.title"), i18n.tr("tasks.subtitle")),
        components::grid(cards, 4),
        styles::container::page,
    )
}

fn initiatives<'a>(i18n: &'a LocaleStore) -> Element<'a, Message> {
    let cards = INITIATIVES
        .iter()
        .map(|initiative| {
            let tags = i18n
                .list(&format!("initiatives.{}.tags", initiative))
                .iter()
                .fold(Row::new().spacing(spacing::XS), |row, tag| {
                    row.push(components::badge(
                        tag.clone(),
                        palette::BLUE_100,
                        palette::BLUE_700,
                    ))
                })
                .wrap();

            let body = Column::new()
                .spacing(spacing::SM)
                .push(
                    text(i18n.tr(&format!("initiatives.{}.title", initiative)))
                        .size(typography::TITLE_SM)
                        .font(BOLD),
                )
                .push(
                    text(i18n.tr(&format!("initiatives.{}.description", initiative)))
                        .size(typography::BODY)
                        .style(secondary_text),
                )
                .push(tags);
            Container::new(body)
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(styles::container::card)
                .into()
        })
        .collect();

    section(
        section_heading(i18n.tr("initiatives.title"), i18n.tr("initiatives.subtitle")),
        components::grid(cards, 2),
        styles::container::section,
    )
}

fn stats<'a>(i18n: &'a LocaleStore) -> Element<'a, Message> {
    let figures = STATS
        .iter()
        .map(|stat| {
            Column::new()
                .spacing(spacing::XS)
                .width(Length::Fill)
                .align_x(Horizontal::Center)
                .push(
                    text(i18n.tr(&format!("stats.{}.number", stat)))
                        .size(typography::DISPLAY)
                        .font(BOLD)
                        .style(|theme: &Theme| text::Style {
                            color: Some(ColorScheme::of(theme).brand_primary),
                        }),
                )
                .push(
                    text(i18n.tr(&format!("stats.{}.label", stat)))
                        .size(typography::BODY_LG)
                        .font(BOLD),
                )
                .push(
                    text(i18n.tr(&format!("stats.{}.description", stat)))
                        .size(typography::BODY_SM)
                        .style(secondary_text),
                )
                .into()
        })
        .collect();

    section(
        section_heading(i18n.tr("stats.title"), i18n.tr("stats.subtitle")),
        components::grid(figures, 4),
        styles::container::page,
    )
}

fn section<'a>(
    heading: Column<'a, Message>,
    body: Column<'a, Message>,
    style: fn(&Theme) -> iced::widget::container::Style,
) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XXL)
        .push(heading)
        .push(body);

    Container::new(content_width(content))
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::LG])
        .style(style)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Dictionaries, Locale, MemoryStorage};

    fn store(locale: Locale) -> LocaleStore {
        let dictionaries = Dictionaries::embedded().expect("embedded dictionaries");
        LocaleStore::new(dictionaries, Box::new(MemoryStorage::new(Some(locale))))
    }

    #[test]
    fn calls_to_action_navigate() {
        assert_eq!(update(Message::LearnMore), Event::Navigate(Page::ExpertsList));
        assert_eq!(update(Message::OurResearch), Event::Navigate(Page::News));
    }

    #[test]
    fn every_home_key_is_translated() {
        let i18n = store(Locale::En);
        for task in TASKS {
            let key = format!("tasks.{}.title", task);
            assert_ne!(i18n.resolve(&key), key);
        }
        for initiative in INITIATIVES {
            assert_eq!(i18n.list(&format!("initiatives.{}.tags", initiative)).len(), 3);
        }
        for stat in STATS {
            let key = format!("stats.{}.number", stat);
            assert!(i18n.resolve(&key).ends_with('+'));
        }
    }

    #[test]
    fn home_view_renders_with_and_without_animation() {
        let i18n = store(Locale::Uk);
        let network = NeuralNetwork::random(12, 150.0);
        let _animated = view(ViewContext {
            i18n: &i18n,
            network: Some(&network),
        });
        let _still = view(ViewContext {
            i18n: &i18n,
            network: None,
        });
    }
}
