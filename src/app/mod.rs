// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the pages.
//!
//! The `App` struct owns the locale store, the page router, and the home page
//! animation, and translates page events into router transitions or locale
//! changes. Views receive this state by reference through view contexts.

pub mod config;
mod message;
pub mod page;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use page::{Page, Route, Router};

use crate::content::experts;
use crate::i18n::{self, ConfigStorage, Locale, LocaleStore};
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::NeuralNetwork;
use chrono::Datelike;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;

/// Root Iced application state.
pub struct App {
    i18n: LocaleStore,
    router: Router,
    theme_mode: ThemeMode,
    network: NeuralNetwork,
    animation_enabled: bool,
    /// Year printed in the footer, fixed at start-up.
    year: i32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.locale())
            .field("router", &self.router)
            .field("animation_enabled", &self.animation_enabled)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the config file, the dictionaries,
    /// and the command-line `Flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        (Self::from_flags(flags), Task::none())
    }

    fn from_flags(flags: Flags) -> Self {
        paths::init_cli_overrides(flags.config_dir);

        let (config, _) = config::load();

        let dictionaries = i18n::load_dictionaries(flags.i18n_dir.as_deref().map(Path::new));
        let mut store = LocaleStore::new(dictionaries, Box::new(ConfigStorage::new()));

        if let Some(lang) = flags.lang.as_deref() {
            match lang.parse::<Locale>() {
                Ok(locale) => store.override_session(locale),
                Err(err) => log::warn!("ignoring --lang {:?}: {}", lang, err),
            }
        }

        let router = flags
            .page
            .as_deref()
            .map(|name| Router::starting_at(Page::from_name(name)))
            .unwrap_or_default();

        let network = NeuralNetwork::random(
            config.animation.node_count(),
            config.animation.connection_distance(),
        );

        log::debug!(
            "starting on {} in {}",
            router.page().as_str(),
            store.locale()
        );

        Self {
            i18n: store,
            router,
            theme_mode: config.general.theme_mode,
            network,
            animation_enabled: config.animation.enabled,
            year: chrono::Local::now().year(),
        }
    }

    /// Page title (or the expert's name on a detail page) followed by the
    /// center's title.
    fn title(&self) -> String {
        let i18n = &self.i18n;
        let page_title = match self.router.route(|id| experts::is_known(i18n, id)) {
            Route::ExpertDetail(id) => i18n.tr(&format!("expertsData.{}.name", id)),
            Route::ExpertNotFound => i18n.tr("experts.expertNotFound"),
            Route::ExpertsList => i18n.tr(Page::ExpertsList.title_key()),
            _ => i18n.tr(self.router.page().title_key()),
        };
        format!("{} - {}", page_title, i18n.tr("header.title"))
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_animation_subscription(self.router.page(), self.animation_enabled)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            router: &mut self.router,
            network: &mut self.network,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            router: &self.router,
            network: self.animation_enabled.then_some(&self.network),
            year: self.year,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_on(page: Page, locale: Locale) -> App {
        let dictionaries = i18n::Dictionaries::embedded().expect("embedded dictionaries");
        let store = LocaleStore::new(
            dictionaries,
            Box::new(i18n::MemoryStorage::new(Some(locale))),
        );
        App {
            i18n: store,
            router: Router::starting_at(page),
            theme_mode: ThemeMode::Light,
            network: NeuralNetwork::new(4, 150.0, || 0.3),
            animation_enabled: true,
            year: 2024,
        }
    }

    #[test]
    fn title_names_the_page() {
        let app = app_on(Page::News, Locale::En);
        assert_eq!(
            app.title(),
            format!("News and Research - {}", app.i18n.tr("header.title"))
        );
    }

    #[test]
    fn title_on_detail_page_names_the_expert() {
        let mut app = app_on(Page::ExpertsList, Locale::En);
        app.router.select_expert("petrenko");
        assert!(app.title().starts_with("Prof. Oleksandr Petrenko - "));

        app.router.select_expert("nobody");
        assert!(app.title().starts_with("Expert Not Found - "));
    }

    #[test]
    fn title_follows_the_locale() {
        let mut app = app_on(Page::Home, Locale::Uk);
        let ukrainian = app.title();
        let _ = app.update(Message::Header(crate::ui::header::Message::ToggleLanguage));
        assert_ne!(app.title(), ukrainian);
        assert!(app.title().starts_with("Home - "));
    }

    #[test]
    fn view_renders_and_theme_follows_mode() {
        let app = app_on(Page::Home, Locale::En);
        let _element = app.view();
        assert_eq!(app.theme(), Theme::Light);
    }
}
