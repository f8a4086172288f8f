// SPDX-License-Identifier: MPL-2.0
//! User interface pages and shared building blocks.
//!
//! Pages follow the Elm-style "state down, messages up" pattern: each takes a
//! `ViewContext` borrowed from the application and, when interactive, maps its
//! `Message` to an `Event` the application acts on.
//!
//! # Pages
//!
//! - [`home`] - Hero, objectives, activities, and results
//! - [`experts`] - Grid of expert cards
//! - [`expert_detail`] - One expert's profile, or the not-found state
//! - [`news`] - Featured and latest articles
//!
//! # Shared Infrastructure
//!
//! - [`header`] / [`footer`] - Site chrome around every page
//! - [`components`] - Reusable building blocks (banner, grid, photo)
//! - [`widgets`] - Custom Canvas widgets
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod expert_detail;
pub mod experts;
pub mod footer;
pub mod header;
pub mod home;
pub mod news;
pub mod styles;
pub mod theming;
pub mod widgets;
