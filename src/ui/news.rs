// SPDX-License-Identifier: MPL-2.0
//! News page: banner, featured article, and the latest articles grid.

use crate::content::news::{self, Article};
use crate::i18n::{Locale, LocaleStore};
use crate::ui::components::{self, content_width, section_heading, BOLD};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{text, Column, Container, Row};
use iced::{Element, Length, Theme};

/// Articles per grid row.
pub const COLUMNS: usize = 3;

pub struct ViewContext<'a> {
    pub i18n: &'a LocaleStore,
}

fn secondary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::of(theme).text_secondary),
    }
}

/// "Nov 5, 2024 · 6 min" style line.
fn meta_line(article: &Article, locale: Locale, minutes: &str) -> String {
    format!(
        "{} · {} {}",
        article.published_label(locale),
        article.read_minutes,
        minutes
    )
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let body = Column::new()
        .spacing(spacing::XXL)
        .push(featured(i18n))
        .push(latest(i18n));

    Column::new()
        .width(Length::Fill)
        .push(components::banner(
            i18n.tr("news.title"),
            i18n.tr("news.subtitle"),
        ))
        .push(
            Container::new(content_width(body))
                .width(Length::Fill)
                .padding([spacing::SECTION, spacing::LG])
                .style(styles::container::section),
        )
        .into()
}

fn featured<'a, Message: 'a>(i18n: &'a LocaleStore) -> Element<'a, Message> {
    let locale = i18n.locale();
    let article = news::featured();
    let minutes = i18n.tr("news.minutes");

    let labels = Row::new()
        .spacing(spacing::SM)
        .push(components::badge(
            i18n.tr("news.featuredNews"),
            palette::ORANGE_500,
            palette::WHITE,
        ))
        .push(components::badge(
            article.category.get(locale).to_string(),
            palette::BLUE_100,
            palette::BLUE_700,
        ));

    let tags = article
        .tags
        .get(locale)
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, tag| {
            row.push(components::badge(
                format!("#{}", tag),
                palette::GRAY_100,
                palette::GRAY_700,
            ))
        })
        .wrap();

    let content = Column::new()
        .spacing(spacing::MD)
        .push(labels)
        .push(
            text(*article.title.get(locale))
                .size(typography::TITLE_MD)
                .font(BOLD),
        )
        .push(
            text(*article.description.get(locale))
                .size(typography::BODY_LG)
                .style(secondary_text),
        )
        .push(
            text(meta_line(article, locale, &minutes))
                .size(typography::BODY_SM)
                .style(secondary_text),
        )
        .push(tags);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .style(styles::container::card)
        .into()
}

fn latest<'a, Message: 'a>(i18n: &'a LocaleStore) -> Element<'a, Message> {
    let locale = i18n.locale();
    let minutes = i18n.tr("news.minutes");

    let cards = news::latest()
        .into_iter()
        .map(|article| {
            let mut content = Column::new()
                .spacing(spacing::SM)
                .push(components::badge(
                    article.category.get(locale).to_string(),
                    palette::BLUE_100,
                    palette::BLUE_700,
                ))
                .push(
                    text(*article.title.get(locale))
                        .size(typography::TITLE_SM)
                        .font(BOLD),
                )
                .push(
                    text(*article.description.get(locale))
                        .size(typography::BODY)
                        .style(secondary_text),
                )
                .push(
                    text(meta_line(article, locale, &minutes))
                        .size(typography::CAPTION)
                        .style(secondary_text),
                );

            if let Some(author) = article.author {
                content = content.push(
                    text(*author.get(locale))
                        .size(typography::BODY_SM)
                        .font(BOLD),
                );
            }

            Container::new(content)
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(styles::container::card)
                .into()
        })
        .collect();

    Column::new()
        .spacing(spacing::XL)
        .push(section_heading(
            i18n.tr("news.latestNews"),
            i18n.tr("news.researchUpdates"),
        ))
        .push(components::grid(cards, COLUMNS))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Dictionaries, MemoryStorage};

    #[test]
    fn meta_line_uses_locale_date_format() {
        let article = news::featured();
        let line = meta_line(article, Locale::Uk, "хв");
        assert!(line.starts_with(&article.published_label(Locale::Uk)));
        assert!(line.ends_with(&format!("{} хв", article.read_minutes)));
    }

    #[test]
    fn latest_fills_two_full_rows() {
        assert_eq!(news::latest().len(), 2 * COLUMNS);
    }

    #[test]
    fn news_view_renders_in_both_locales() {
        for locale in Locale::ALL {
            let dictionaries = Dictionaries::embedded().expect("embedded dictionaries");
            let i18n = LocaleStore::new(dictionaries, Box::new(MemoryStorage::new(Some(locale))));
            let _element: Element<'_, ()> = view(ViewContext { i18n: &i18n });
        }
    }
}
