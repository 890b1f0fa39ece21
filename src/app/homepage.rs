use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    about::About, contact::Contact, education::Education, hero::Hero, services::Services,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="EFL/ESL Educator" />
        <Hero />
        <About />
        <Education />
        <Services />
        <Contact />
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::prelude::*;
    use leptos_meta::provide_meta_context;

    use super::HomePage;
    use crate::content::{NAVIGATION, SECTION_IDS};

    /// Ids of the rendered `<section>` elements, in document order.
    fn section_ids(html: &str) -> Vec<String> {
        html.split("<section")
            .skip(1)
            .filter_map(|rest| {
                let tag = &rest[..rest.find('>')?];
                let start = tag.find("id=\"")? + 4;
                let len = tag[start..].find('"')?;
                Some(tag[start..start + len].to_string())
            })
            .collect()
    }

    #[test]
    fn test_sections_render_in_nav_order() {
        let owner = Owner::new();
        let html = owner.with(|| {
            provide_meta_context();
            view! { <HomePage /> }.to_html()
        });

        let rendered = section_ids(&html);
        assert_eq!(rendered, SECTION_IDS);
        let hrefs: Vec<String> = rendered.iter().map(|id| format!("#{id}")).collect();
        let nav: Vec<&str> = NAVIGATION.iter().map(|item| item.href).collect();
        assert_eq!(hrefs, nav);
    }

    #[test]
    fn test_sections_start_hidden_before_reveal() {
        let owner = Owner::new();
        let html = owner.with(|| {
            provide_meta_context();
            view! { <HomePage /> }.to_html()
        });

        // nothing has intersected on the server
        assert!(html.contains("opacity-0 translate-y-5"));
        assert!(!html.contains("opacity-100 translate-y-0"));
    }
}
