// SPDX-License-Identifier: MPL-2.0
//! Expert detail page and its not-found fallback.

use crate::content::experts::{ExpertProfile, ResearchPaper};
use crate::i18n::LocaleStore;
use crate::ui::components::{self, content_width, photo, BOLD};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, Column, Container, Row};
use iced::{Color, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a LocaleStore,
    pub profile: ExpertProfile<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    BackToList,
}

pub fn update(message: Message) -> Event {
    match message {
        Message::Back => Event::BackToList,
    }
}

fn secondary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::of(theme).text_secondary),
    }
}

fn on_gradient_muted(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(Color {
            a: opacity::MUTED,
            ..palette::WHITE
        }),
    }
}

fn heading<'a>(label: String) -> Element<'a, Message> {
    text(label).size(typography::TITLE_SM).font(BOLD).into()
}

fn card<'a>(content: impl Into<Element<'a, Message>>) -> Container<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
}

/// Render the profile of one expert.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let ViewContext { i18n, profile } = ctx;

    let back = button(text(format!("← {}", i18n.tr("experts.backToList"))).size(typography::BODY))
        .padding([spacing::XS, 0.0])
        .on_press(Message::Back)
        .style(styles::button::link);

    let content = Column::new()
        .spacing(spacing::XL)
        .push(back)
        .push(profile_header(i18n, &profile))
        .push(quick_stats(i18n, &profile))
        .push(
            Row::new()
                .spacing(spacing::XL)
                .push(
                    Column::new()
                        .spacing(spacing::XL)
                        .width(Length::FillPortion(1))
                        .push(card(
                            Column::new()
                                .spacing(spacing::SM)
                                .push(heading(i18n.tr("experts.education")))
                                .push(text(profile.education.clone()).size(typography::BODY)),
                        ))
                        .push(skills(i18n, profile.skills)),
                )
                .push(
                    Container::new(achievements(i18n, profile.achievements))
                        .width(Length::FillPortion(2)),
                ),
        )
        .push(publications(i18n, profile.papers));

    Container::new(content_width(content))
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::LG])
        .style(styles::container::section)
        .into()
}

fn profile_header<'a>(i18n: &'a LocaleStore, profile: &ExpertProfile<'a>) -> Element<'a, Message> {
    let portrait = photo::view(profile.photo, &profile.name, sizing::PHOTO_DETAIL);

    let details = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(text(profile.name.clone()).size(typography::TITLE_LG).font(BOLD))
        .push(text(profile.position.clone()).size(typography::BODY_LG))
        .push(
            text(profile.specialization.clone())
                .size(typography::BODY)
                .style(on_gradient_muted),
        )
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(
                    text(format!("{}:", i18n.tr("experts.contact")))
                        .size(typography::BODY)
                        .font(BOLD),
                )
                .push(text(profile.email.clone()).size(typography::BODY)),
        );

    Container::new(
        Row::new()
            .spacing(spacing::XL)
            .align_y(Vertical::Center)
            .push(portrait)
            .push(details),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .style(styles::container::brand_gradient)
    .into()
}

fn quick_stats<'a>(i18n: &'a LocaleStore, profile: &ExpertProfile<'a>) -> Element<'a, Message> {
    let stat = |value: String, label: String| -> Element<'a, Message> {
        card(
            Column::new()
                .spacing(spacing::XS)
                .width(Length::Fill)
                .align_x(Horizontal::Center)
                .push(
                    text(value)
                        .size(typography::TITLE_MD)
                        .font(BOLD)
                        .style(|theme: &Theme| text::Style {
                            color: Some(ColorScheme::of(theme).brand_primary),
                        }),
                )
                .push(text(label).size(typography::BODY_SM).style(secondary_text)),
        )
        .width(Length::FillPortion(1))
        .into()
    };

    Row::new()
        .spacing(spacing::LG)
        .push(stat(profile.experience.clone(), i18n.tr("experts.experience")))
        .push(stat(
            profile.publications_label(),
            i18n.tr("experts.publicationsCount"),
        ))
        .push(stat(
            profile.total_citations().to_string(),
            i18n.tr("experts.citations"),
        ))
        .into()
}

fn skills<'a>(i18n: &'a LocaleStore, skills: &'a [String]) -> Element<'a, Message> {
    let badges = skills
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, skill| {
            row.push(components::badge(
                skill.clone(),
                palette::BLUE_100,
                palette::BLUE_700,
            ))
        })
        .wrap();

    card(
        Column::new()
            .spacing(spacing::SM)
            .push(heading(i18n.tr("experts.keySkills")))
            .push(badges),
    )
    .into()
}

fn achievements<'a>(i18n: &'a LocaleStore, achievements: &'a [String]) -> Element<'a, Message> {
    let list = achievements.iter().fold(
        Column::new()
            .spacing(spacing::SM)
            .push(heading(i18n.tr("experts.achievements"))),
        |list, achievement| {
            list.push(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(Vertical::Center)
                    .push(
                        Container::new(Column::new())
                            .width(Length::Fixed(sizing::BULLET))
                            .height(Length::Fixed(sizing::BULLET))
                            .style(styles::container::bullet),
                    )
                    .push(text(achievement.as_str()).size(typography::BODY)),
            )
        },
    );

    card(list).into()
}

fn publications<'a>(i18n: &'a LocaleStore, papers: &'static [ResearchPaper]) -> Element<'a, Message> {
    let locale = i18n.locale();
    let citations_word = i18n.tr("experts.citationsText");

    let list = papers.iter().fold(
        Column::new()
            .spacing(spacing::MD)
            .push(heading(i18n.tr("experts.recentPublications"))),
        |list, paper| {
            list.push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(
                        text(*paper.title.get(locale))
                            .size(typography::BODY_LG)
                            .font(BOLD),
                    )
                    .push(
                        text(format!(
                            "{} · {} · {} {}",
                            paper.journal, paper.year, paper.citations, citations_word
                        ))
                        .size(typography::BODY_SM)
                        .style(secondary_text),
                    ),
            )
        },
    );

    card(list).into()
}

/// Shown when the selected id matches no expert.
pub fn not_found<'a>(i18n: &'a LocaleStore) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(text(i18n.tr("experts.expertNotFound")).size(typography::TITLE_MD).font(BOLD))
        .push(
            button(text(i18n.tr("experts.backButton")).size(typography::BODY))
                .padding([spacing::SM, spacing::LG])
                .on_press(Message::Back)
                .style(styles::button::primary),
        );

    Container::new(content_width(content).align_x(Horizontal::Center))
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::LG])
        .style(styles::container::page)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::experts;
    use crate::i18n::{Dictionaries, Locale, MemoryStorage};

    fn store(locale: Locale) -> LocaleStore {
        let dictionaries = Dictionaries::embedded().expect("embedded dictionaries");
        LocaleStore::new(dictionaries, Box::new(MemoryStorage::new(Some(locale))))
    }

    #[test]
    fn back_returns_to_list() {
        assert_eq!(update(Message::Back), Event::BackToList);
    }

    #[test]
    fn detail_renders_for_every_profiled_expert() {
        let i18n = store(Locale::En);
        for id in ["petrenko", "kovalenko", "melnyk", "shevchenko", "ivanenko", "bondarenko"] {
            let profile = experts::profile(&i18n, id).expect("known expert");
            let _element = view(ViewContext {
                i18n: &i18n,
                profile,
            });
        }
    }

    #[test]
    fn not_found_renders() {
        let i18n = store(Locale::Uk);
        let _element = not_found(&i18n);
    }
}
