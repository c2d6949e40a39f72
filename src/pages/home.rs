//! The listening-room page: header with theme switch, tabbed content, footer.

use leptos::prelude::*;

use crate::components::tab_group::Tabs;
use crate::components::theme_toggle::ThemeToggle;
use crate::config::SiteConfig;

/// Home page layout.
#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let title = config.title.clone();

    view! {
        <header class="site-header">
            <h1 class="site-header__title">{title.clone()}</h1>
            <ThemeToggle />
        </header>
        <main class="site-main">
            <Tabs tabs=config.tabs />
        </main>
        <footer class="site-footer">
            <span>{title}</span>
        </footer>
    }
}
