mod about;
mod avatar;
mod back_to_top;
mod contact;
mod education;
mod header;
mod hero;
pub mod hooks;
mod homepage;
mod loading;
mod services;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{config::PageConfig, content::Icon};

use back_to_top::BackToTop;
use header::Header;
use homepage::HomePage;
use loading::LoadingScreen;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        // dark until the stored preference says otherwise
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="font-inter">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(PageConfig::default());

    view! {
        <Title formatter=|title| format!("Dr. Hamoudi Benarba - {title}") />
        <Meta
            name="description"
            content="EFL/ESL educator, teacher trainer and researcher. Courses, training, consultation and translation."
        />

        <Router>
            <div class="min-h-screen bg-dark-50 dark:bg-dark-950 transition-colors duration-300">
                <LoadingScreen />
                <Header />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <BackToTop />
            </div>
        </Router>
    }
}

/// Page configuration provided by [`App`]; defaults outside of it.
pub(crate) fn page_config() -> PageConfig {
    use_context::<PageConfig>().unwrap_or_default()
}

/// `base` plus the classes that fade it in once `shown`.
pub(crate) fn reveal(base: &str, shown: bool) -> String {
    let state = if shown {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-5"
    };
    format!("{base} transition-all duration-500 {state}")
}

#[component]
pub(crate) fn IconView(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    match icon {
        Icon::Glyph(glyph) => view! {
            <span class=class aria-hidden="true">
                {glyph}
            </span>
        }
        .into_any(),
        Icon::Font(font) => view! { <i class=format!("{font} {class}") aria-hidden="true"></i> }
            .into_any(),
    }
}
