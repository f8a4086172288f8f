// SPDX-License-Identifier: MPL-2.0
//! Page enumeration and in-memory routing between pages.

/// Top-level pages the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    ExpertsList,
    ExpertDetail,
    News,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::ExpertsList, Page::ExpertDetail, Page::News];

    pub fn as_str(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::ExpertsList => "experts-list",
            Page::ExpertDetail => "expert-detail",
            Page::News => "news",
        }
    }

    /// Parses a page name; anything unrecognized is [`Page::Home`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "experts-list" | "experts" => Page::ExpertsList,
            "expert-detail" => Page::ExpertDetail,
            "news" => Page::News,
            _ => Page::Home,
        }
    }

    /// The footer is hidden only on the expert detail page.
    pub fn shows_footer(self) -> bool {
        self != Page::ExpertDetail
    }

    /// Header entry marked active for this page.
    pub fn nav_highlight(self) -> Option<NavItem> {
        match self {
            Page::ExpertsList | Page::ExpertDetail => Some(NavItem::Experts),
            Page::News => Some(NavItem::News),
            Page::Home => None,
        }
    }

    /// Dictionary key of the page title.
    pub fn title_key(self) -> &'static str {
        match self {
            Page::Home => "header.nav.home",
            Page::ExpertsList | Page::ExpertDetail => "experts.title",
            Page::News => "news.title",
        }
    }
}

/// Header navigation entries that can be highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Experts,
    News,
}

/// What the body of the window shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    Home,
    ExpertsList,
    ExpertDetail(&'a str),
    ExpertNotFound,
    News,
}

/// Current page plus the expert selected on the detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Router {
    page: Page,
    selected_expert: Option<String>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Router opened on `page`. The detail page has no selection yet and so
    /// renders the list.
    pub fn starting_at(page: Page) -> Self {
        Self {
            page,
            selected_expert: None,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn selected_expert(&self) -> Option<&str> {
        self.selected_expert.as_deref()
    }

    /// Sets the page. The selection survives only when staying on the
    /// detail page.
    pub fn navigate(&mut self, page: Page) {
        if page != Page::ExpertDetail {
            self.selected_expert = None;
        }
        log::debug!("navigate {} -> {}", self.page.as_str(), page.as_str());
        self.page = page;
    }

    pub fn select_expert(&mut self, id: impl Into<String>) {
        let id = id.into();
        log::debug!("select expert {}", id);
        self.selected_expert = Some(id);
        self.page = Page::ExpertDetail;
    }

    pub fn back_to_list(&mut self) {
        self.selected_expert = None;
        self.page = Page::ExpertsList;
    }

    pub fn footer_visible(&self) -> bool {
        self.page.shows_footer()
    }

    /// Resolves the view to render. `is_known` tells whether an expert id
    /// has profile data.
    pub fn route(&self, is_known: impl Fn(&str) -> bool) -> Route<'_> {
        match self.page {
            Page::Home => Route::Home,
            Page::ExpertsList => Route::ExpertsList,
            Page::News => Route::News,
            Page::ExpertDetail => match self.selected_expert.as_deref() {
                None => Route::ExpertsList,
                Some(id) if is_known(id) => Route::ExpertDetail(id),
                Some(_) => Route::ExpertNotFound,
            },
        }
    }
}
