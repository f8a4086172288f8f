// SPDX-License-Identifier: MPL-2.0
//! The experts directory: list cards, research papers, and profiles
//! assembled from the `expertsData` dictionary section.

use super::{Localized, PhotoSource};
use crate::i18n::LocaleStore;

/// Entry of the experts grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpertCard {
    pub id: &'static str,
    pub name: Localized<&'static str>,
    pub position: Localized<&'static str>,
    pub photo: &'static str,
}

/// A publication listed on an expert's detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResearchPaper {
    pub title: Localized<&'static str>,
    pub journal: &'static str,
    pub year: u16,
    pub citations: u32,
}

pub static CARDS: [ExpertCard; 8] = [
    ExpertCard {
        id: "petrenko",
        name: Localized::new("Проф. Олександр Петренко", "Prof. Oleksandr Petrenko"),
        position: Localized::new("Керівник центру", "Center Director"),
        photo: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=300&h=300&fit=crop&crop=face",
    },
    ExpertCard {
        id: "kovalenko",
        name: Localized::new("Д-р Марина Коваленко", "Dr. Marina Kovalenko"),
        position: Localized::new("Провідний науковий співробітник", "Lead Research Associate"),
        photo: "https://images.unsplash.com/photo-1580489944761-15a19d654956?w=400&h=400&fit=crop&crop=face",
    },
    ExpertCard {
        id: "melnyk",
        name: Localized::new("Д-р Андрій Мельник", "Dr. Andriy Melnyk"),
        position: Localized::new("Старший науковий співробітник", "Senior Research Associate"),
        photo: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=300&h=300&fit=crop&crop=face",
    },
    ExpertCard {
        id: "shevchenko",
        name: Localized::new("Катерина Шевченко", "Kateryna Shevchenko"),
        position: Localized::new("Молодший науковий співробітник", "Junior Research Associate"),
        photo: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=300&h=300&fit=crop&crop=face",
    },
    ExpertCard {
        id: "ivanenko",
        name: Localized::new("Д-р Віктор Іваненко", "Dr. Viktor Ivanenko"),
        position: Localized::new("Науковий співробітник", "Research Associate"),
        photo: "https://images.unsplash.com/photo-1560250097-0b93528c311a?w=300&h=300&fit=crop&crop=face",
    },
    ExpertCard {
        id: "bondarenko",
        name: Localized::new("Юлія Бондаренко", "Yulia Bondarenko"),
        position: Localized::new("Аналітик даних", "Data Analyst"),
        photo: "https://images.unsplash.com/photo-1551836022-deb4988cc6c0?w=300&h=300&fit=crop&crop=face",
    },
    ExpertCard {
        id: "artemenko",
        name: Localized::new("Анна Артеменко", "Anna Artemenko"),
        position: Localized::new("Аспірант", "PhD Student"),
        photo: "images/ExpertPhotos/artemenko.jpg",
    },
    ExpertCard {
        id: "franko",
        name: Localized::new("Анастасія Франко", "Anastasia Franko"),
        position: Localized::new("Спеціаліст з комунікацій", "Communications Specialist"),
        photo: "images/ExpertPhotos/franko.jpg",
    },
];

static PETRENKO_PAPERS: [ResearchPaper; 3] = [
    ResearchPaper {
        title: Localized::new(
            "Розвинені архітектури нейронних мереж для комп'ютерного зору",
            "Advanced Neural Network Architectures for Computer Vision",
        ),
        journal: "IEEE Transactions on Pattern Analysis",
        year: 2024,
        citations: 142,
    },
    ResearchPaper {
        title: Localized::new(
            "Застосування машинного навчання в українській промисловості",
            "Machine Learning Applications in Ukrainian Industry",
        ),
        journal: "Journal of AI Research",
        year: 2023,
        citations: 89,
    },
    ResearchPaper {
        title: Localized::new(
            "Етична структура ШІ для державних застосувань",
            "Ethical AI Framework for Government Applications",
        ),
        journal: "AI Ethics Quarterly",
        year: 2023,
        citations: 67,
    },
];

static KOVALENKO_PAPERS: [ResearchPaper; 2] = [
    ResearchPaper {
        title: Localized::new(
            "Трансформерні моделі для обробки української мови",
            "Transformer Models for Ukrainian Language Processing",
        ),
        journal: "Computational Linguistics",
        year: 2024,
        citations: 98,
    },
    ResearchPaper {
        title: Localized::new(
            "Аналіз настроїв у соціальних мережах: український контекст",
            "Sentiment Analysis in Social Media: Ukrainian Context",
        ),
        journal: "Language Resources and Evaluation",
        year: 2023,
        citations: 76,
    },
];

static MELNYK_PAPERS: [ResearchPaper; 2] = [
    ResearchPaper {
        title: Localized::new(
            "Виявлення об'єктів у реальному часі для автономних транспортних засобів",
            "Real-time Object Detection for Autonomous Vehicles",
        ),
        journal: "Computer Vision and Image Understanding",
        year: 2024,
        citations: 123,
    },
    ResearchPaper {
        title: Localized::new(
            "Роботичні системи зору в промислових застосуваннях",
            "Robotic Vision Systems in Industrial Applications",
        ),
        journal: "Robotics and Autonomous Systems",
        year: 2023,
        citations: 87,
    },
];

static SHEVCHENKO_PAPERS: [ResearchPaper; 2] = [
    ResearchPaper {
        title: Localized::new(
            "Етичні керівні принципи для впровадження ШІ в Україні",
            "Ethical Guidelines for AI Implementation in Ukraine",
        ),
        journal: "AI & Society",
        year: 2024,
        citations: 45,
    },
    ResearchPaper {
        title: Localized::new(
            "Виявлення упередженості в моделях машинного навчання",
            "Bias Detection in Machine Learning Models",
        ),
        journal: "Ethics in Information Technology",
        year: 2023,
        citations: 32,
    },
];

static IVANENKO_PAPERS: [ResearchPaper; 2] = [
    ResearchPaper {
        title: Localized::new(
            "Квантове машинне навчання для фінансового моделювання",
            "Quantum Machine Learning for Financial Modeling",
        ),
        journal: "Quantum Information Processing",
        year: 2024,
        citations: 76,
    },
    ResearchPaper {
        title: Localized::new(
            "Впровадження постквантової криптографії",
            "Post-Quantum Cryptography Implementation",
        ),
        journal: "Journal of Cryptology",
        year: 2023,
        citations: 64,
    },
];

static BONDARENKO_PAPERS: [ResearchPaper; 2] = [
    ResearchPaper {
        title: Localized::new(
            "Аналіз великих даних в українському державному секторі",
            "Big Data Analytics in Ukrainian Public Sector",
        ),
        journal: "Government Information Quarterly",
        year: 2024,
        citations: 34,
    },
    ResearchPaper {
        title: Localized::new(
            "Найкращі практики візуалізації даних для прийняття рішень",
            "Data Visualization Best Practices for Decision Making",
        ),
        journal: "Information Visualization",
        year: 2023,
        citations: 28,
    },
];

/// Research papers of `id`; empty for unknown ids.
pub fn papers(id: &str) -> &'static [ResearchPaper] {
    match id {
        "petrenko" => &PETRENKO_PAPERS,
        "kovalenko" => &KOVALENKO_PAPERS,
        "melnyk" => &MELNYK_PAPERS,
        "shevchenko" => &SHEVCHENKO_PAPERS,
        "ivanenko" => &IVANENKO_PAPERS,
        "bondarenko" => &BONDARENKO_PAPERS,
        _ => &[],
    }
}

/// Larger portrait used on the detail page.
pub fn detail_photo(id: &str) -> Option<PhotoSource> {
    let url = match id {
        "petrenko" => "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop&crop=face",
        "kovalenko" => "https://images.unsplash.com/photo-1580489944761-15a19d654956?w=400&h=400&fit=crop&crop=face",
        "melnyk" => "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&h=400&fit=crop&crop=face",
        "shevchenko" => "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=300&h=300&fit=crop&crop=face",
        "ivanenko" => "https://images.unsplash.com/photo-1560250097-0b93528c311a?w=400&h=400&fit=crop&crop=face",
        "bondarenko" => "https://images.unsplash.com/photo-1487412720507-e7ab37603c6f?w=400&h=400&fit=crop&crop=face",
        _ => return None,
    };
    Some(PhotoSource::parse(url))
}

/// An expert is known when the active dictionary holds its name.
pub fn is_known(store: &LocaleStore, id: &str) -> bool {
    store.lookup(&format!("expertsData.{}.name", id)).is_some()
}

/// Everything the detail page shows about one expert.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpertProfile<'a> {
    pub id: String,
    pub name: String,
    pub position: String,
    pub specialization: String,
    pub education: String,
    pub experience: String,
    pub email: String,
    pub achievements: &'a [String],
    pub skills: &'a [String],
    pub photo: Option<PhotoSource>,
    pub papers: &'static [ResearchPaper],
}

impl ExpertProfile<'_> {
    /// Publication count as displayed, e.g. `3+`.
    pub fn publications_label(&self) -> String {
        format!("{}+", self.papers.len())
    }

    pub fn total_citations(&self) -> u32 {
        self.papers.iter().map(|paper| paper.citations).sum()
    }
}

/// Builds the profile of `id`, or `None` when the expert is not known.
pub fn profile<'a>(store: &'a LocaleStore, id: &str) -> Option<ExpertProfile<'a>> {
    if !is_known(store, id) {
        return None;
    }
    let field = |name: &str| store.tr(&format!("expertsData.{}.{}", id, name));

    Some(ExpertProfile {
        id: id.to_string(),
        name: field("name"),
        position: field("position"),
        specialization: field("specialization"),
        education: field("education"),
        experience: field("experience"),
        email: field("email"),
        achievements: store.list(&format!("expertsData.{}.achievements", id)),
        skills: store.list(&format!("expertsData.{}.skills", id)),
        photo: detail_photo(id),
        papers: papers(id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Dictionaries, Locale, MemoryStorage};

    fn store() -> LocaleStore {
        LocaleStore::new(
            Dictionaries::embedded().expect("embedded dictionaries"),
            Box::new(MemoryStorage::default()),
        )
    }

    #[test]
    fn directory_lists_eight_unique_experts() {
        assert_eq!(CARDS.len(), 8);
        let mut ids: Vec<_> = CARDS.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn six_experts_have_profiles() {
        let store = store();
        let known: Vec<_> = CARDS.iter().filter(|c| is_known(&store, c.id)).collect();
        assert_eq!(known.len(), 6);
        assert!(!is_known(&store, "artemenko"));
        assert!(!is_known(&store, "franko"));
    }

    #[test]
    fn petrenko_profile_sums_citations() {
        let store = store();
        let profile = profile(&store, "petrenko").expect("known expert");
        assert_eq!(profile.name, "Проф. Олександр Петренко");
        assert_eq!(profile.publications_label(), "3+");
        assert_eq!(profile.total_citations(), 142 + 89 + 67);
        assert_eq!(profile.achievements.len(), 5);
        assert_eq!(profile.skills.len(), 8);
        assert!(profile.photo.is_some());
    }

    #[test]
    fn profile_follows_active_locale() {
        let mut store = store();
        store.override_session(Locale::En);
        let profile = profile(&store, "bondarenko").expect("known expert");
        assert_eq!(profile.name, "Yulia Bondarenko");
        assert_eq!(profile.position, "Data Analyst");
    }

    #[test]
    fn unknown_expert_has_no_profile() {
        let store = store();
        assert!(profile(&store, "unknown-id").is_none());
        assert!(papers("unknown-id").is_empty());
        assert!(detail_photo("franko").is_none());
    }

}
