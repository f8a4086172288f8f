// SPDX-License-Identifier: MPL-2.0
//! `ai_center` is the bilingual (Ukrainian/English) informational application
//! of the Center for Strategic Applications of Artificial Intelligence, built
//! with the Iced GUI framework.
//!
//! It is organised around two pieces of state: a [`i18n::LocaleStore`] that
//! resolves dotted dictionary keys for the active locale and persists the
//! user's choice, and an [`app::Router`] that decides which page is shown.

pub mod app;
pub mod content;
pub mod error;
pub mod i18n;
pub mod ui;
