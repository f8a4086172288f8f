// SPDX-License-Identifier: MPL-2.0
//! News articles shown on the news page.

use super::Localized;
use crate::i18n::Locale;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Article {
    pub title: Localized<&'static str>,
    pub description: Localized<&'static str>,
    pub category: Localized<&'static str>,
    pub author: Option<Localized<&'static str>>,
    pub date: NaiveDate,
    pub read_minutes: u32,
    pub tags: Localized<&'static [&'static str]>,
}

impl Article {
    pub fn published_label(&self, locale: Locale) -> String {
        format_date(self.date, locale)
    }
}

/// Calendar date for the static tables. An invalid date fails compilation.
const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid article date"),
    }
}

const NO_TAGS: Localized<&'static [&'static str]> = Localized { uk: &[], en: &[] };

static FEATURED: Article = Article {
    title: Localized::new(
        "Щорічна конференція з ШІ | 15-16 листопада 2024",
        "Annual AI Conference | November 15-16, 2024",
    ),
    description: Localized::new(
        "Цьогорічна щорічна конференція зосереджена на 25-річчі досліджень штучного інтелекту та його впливі на українську економіку",
        "This year's annual conference focuses on 25 years of artificial intelligence research and its impact on Ukrainian economy",
    ),
    category: Localized::new("Щорічні заходи", "Annual Events"),
    author: None,
    date: ymd(2024, 11, 15),
    read_minutes: 8,
    tags: Localized {
        uk: &["штучний інтелект", "конференція", "дослідження"],
        en: &["artificial intelligence", "conference", "research"],
    },
};

static LATEST: [Article; 6] = [
    Article {
        title: Localized::new(
            "Новий центр досліджень ШІ відкривається в Києві",
            "New AI Research Center Opens in Kyiv",
        ),
        description: Localized::new(
            "Центр зосередиться на розробці рішень ШІ для сфер охорони здоров'я та освіти",
            "The center will focus on developing AI solutions for healthcare and education sectors",
        ),
        category: Localized::new("Дослідження", "Research"),
        author: Some(Localized::new("Д-р Марина Коваленко", "Dr. Marina Kovalenko")),
        date: ymd(2024, 11, 10),
        read_minutes: 5,
        tags: NO_TAGS,
    },
    Article {
        title: Localized::new(
            "Україна приєднується до глобальної ініціативи з етики ШІ",
            "Ukraine Joins Global AI Ethics Initiative",
        ),
        description: Localized::new(
            "Нове міжнародне партнерство має на меті встановити етичні керівні принципи для розвитку ШІ",
            "New international partnership aims to establish ethical guidelines for AI development",
        ),
        category: Localized::new("Етика", "Ethics"),
        author: Some(Localized::new("Катерина Шевченко", "Kateryna Shevchenko")),
        date: ymd(2024, 11, 8),
        read_minutes: 6,
        tags: NO_TAGS,
    },
    Article {
        title: Localized::new(
            "Прорив у квантових обчисленнях ШІ",
            "Breakthrough in Quantum AI Computing",
        ),
        description: Localized::new(
            "Українські дослідники досягають значної віхи в алгоритмах квантового машинного навчання",
            "Ukrainian researchers achieve significant milestone in quantum machine learning algorithms",
        ),
        category: Localized::new("Технології", "Technology"),
        author: Some(Localized::new("Д-р Віктор Іваненко", "Dr. Viktor Ivanenko")),
        date: ymd(2024, 11, 5),
        read_minutes: 7,
        tags: NO_TAGS,
    },
    Article {
        title: Localized::new(
            "ШІ в сільському господарстві: рішення для розумного фермерства",
            "AI in Agriculture: Smart Farming Solutions",
        ),
        description: Localized::new(
            "Нові інструменти на основі ШІ допомагають українським фермерам оптимізувати врожайність та зменшити вплив на довкілля",
            "New AI-powered tools help Ukrainian farmers optimize crop yields and reduce environmental impact",
        ),
        category: Localized::new("Застосування", "Applications"),
        author: Some(Localized::new("Проф. Олександр Петренко", "Prof. Oleksandr Petrenko")),
        date: ymd(2024, 11, 2),
        read_minutes: 4,
        tags: NO_TAGS,
    },
    Article {
        title: Localized::new(
            "Воркшоп з машинного навчання для студентів",
            "Machine Learning Workshop for Students",
        ),
        description: Localized::new(
            "Безкоштовна освітня програма знайомить молодь з основами штучного інтелекту",
            "Free educational program introduces young minds to the fundamentals of artificial intelligence",
        ),
        category: Localized::new("Освіта", "Education"),
        author: Some(Localized::new("Юлія Бондаренко", "Yulia Bondarenko")),
        date: ymd(2024, 10, 28),
        read_minutes: 3,
        tags: NO_TAGS,
    },
    Article {
        title: Localized::new(
            "Партнерство з європейськими центрами досліджень ШІ",
            "Partnership with European AI Research Centers",
        ),
        description: Localized::new(
            "Нова співпраця відкриває можливості для спільних дослідницьких проєктів та обміну знаннями",
            "New collaboration opens opportunities for joint research projects and knowledge exchange",
        ),
        category: Localized::new("Партнерства", "Partnerships"),
        author: Some(Localized::new("Д-р Андрій Мельник", "Dr. Andriy Melnyk")),
        date: ymd(2024, 10, 25),
        read_minutes: 5,
        tags: NO_TAGS,
    },
];

pub fn featured() -> &'static Article {
    &FEATURED
}

/// Latest articles, newest first.
pub fn latest() -> Vec<&'static Article> {
    let mut articles: Vec<_> = LATEST.iter().collect();
    articles.sort_by(|a, b| b.date.cmp(&a.date));
    articles
}

/// `DD.MM.YYYY` for Ukrainian, `Mon D, YYYY` for English.
pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    match locale {
        Locale::Uk => date.format("%d.%m.%Y").to_string(),
        Locale::En => date.format("%b %-d, %Y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_is_sorted_newest_first() {
        let latest = latest();
        assert_eq!(latest.len(), 6);
        for pair in latest.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn featured_has_tags_in_both_locales() {
        let featured = featured();
        assert_eq!(featured.tags.get(Locale::Uk).len(), 3);
        assert_eq!(featured.tags.get(Locale::En).len(), 3);
        assert!(featured.author.is_none());
    }

    #[test]
    fn formats_dates_per_locale() {
        let date = NaiveDate::from_ymd_opt(2024, 11, 5).unwrap();
        assert_eq!(format_date(date, Locale::Uk), "05.11.2024");
        assert_eq!(format_date(date, Locale::En), "Nov 5, 2024");
        let date = NaiveDate::from_ymd_opt(2024, 10, 28).unwrap();
        assert_eq!(format_date(date, Locale::En), "Oct 28, 2024");
    }

    #[test]
    fn published_label_matches_article_date() {
        let article = featured();
        assert_eq!(article.date, ymd(2024, 11, 15));
        assert_eq!(article.published_label(Locale::Uk), "15.11.2024");
        assert_eq!(article.published_label(Locale::En), "Nov 15, 2024");
    }
}
