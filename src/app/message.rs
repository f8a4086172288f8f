// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{expert_detail, experts, footer, header, home};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// page-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Footer(footer::Message),
    Home(home::Message),
    Experts(experts::Message),
    ExpertDetail(expert_detail::Message),
    /// Periodic tick driving the home page animation.
    AnimationTick(Instant),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override for this session (e.g. `en`, `uk-UA`).
    /// Not persisted.
    pub lang: Option<String>,
    /// Optional starting page (`home`, `experts`, `expert-detail`, `news`).
    pub page: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `AI_CENTER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional directory containing `uk.toml` and `en.toml` dictionaries.
    pub i18n_dir: Option<String>,
}
