// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Header, the routed page body, and the footer (hidden on the expert detail
//! page) inside a single scrollable column.

use super::page::{Route, Router};
use super::Message;
use crate::content::experts;
use crate::i18n::LocaleStore;
use crate::ui::styles;
use crate::ui::widgets::NeuralNetwork;
use crate::ui::{expert_detail, experts as experts_page, footer, header, home, news};
use iced::widget::{scrollable, Column, Container};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a LocaleStore,
    pub router: &'a Router,
    /// Present when the animation is enabled.
    pub network: Option<&'a NeuralNetwork>,
    pub year: i32,
}

/// Renders the current page with the site chrome around it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let mut page = Column::new().width(Length::Fill).push(
        header::view(header::ViewContext {
            i18n,
            page: ctx.router.page(),
        })
        .map(Message::Header),
    );

    page = page.push(view_body(&ctx));

    if ctx.router.footer_visible() {
        page = page.push(
            footer::view(footer::ViewContext {
                i18n,
                year: ctx.year,
            })
            .map(Message::Footer),
        );
    }

    Container::new(scrollable(page).width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}

fn view_body<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    match ctx.router.route(|id| experts::is_known(i18n, id)) {
        Route::Home => home::view(home::ViewContext {
            i18n,
            network: ctx.network,
        })
        .map(Message::Home),
        Route::ExpertsList => {
            experts_page::view(experts_page::ViewContext { i18n }).map(Message::Experts)
        }
        Route::ExpertDetail(id) => {
            let detail = match experts::profile(i18n, id) {
                Some(profile) => expert_detail::view(expert_detail::ViewContext { i18n, profile }),
                None => expert_detail::not_found(i18n),
            };
            detail.map(Message::ExpertDetail)
        }
        Route::ExpertNotFound => expert_detail::not_found(i18n).map(Message::ExpertDetail),
        Route::News => news::view(news::ViewContext { i18n }),
    }
}
