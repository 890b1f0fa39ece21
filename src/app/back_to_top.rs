use leptos::prelude::*;

use super::{
    hooks::{scroll_to_top, use_scroll_threshold},
    page_config,
};

#[component]
pub fn BackToTop() -> impl IntoView {
    let visible = use_scroll_threshold(page_config().back_to_top_threshold);

    view! {
        <div class="fixed bottom-8 right-8 z-50 pointer-events-none">
            <button
                type="button"
                aria-label="Back to top"
                on:click=move |_| scroll_to_top()
                class=move || {
                    let state = if visible() {
                        "opacity-100 translate-y-0 pointer-events-auto"
                    } else {
                        "opacity-0 translate-y-2 pointer-events-none"
                    };
                    format!(
                        "group relative overflow-hidden rounded select-none text-dark-900 dark:text-white transition-all duration-200 ease-out focus:outline-none focus-visible:ring-2 focus-visible:ring-current/40 h-12 w-12 flex items-center justify-center md:block md:h-14 md:w-36 {state}",
                    )
                }
            >
                <span class="hidden md:flex absolute inset-0 items-center justify-center text-lg">
                    "Back to top"
                </span>
                <span class="text-2xl md:hidden" aria-hidden="true">
                    "↑"
                </span>
                <span class="absolute bottom-0 left-0 h-0.5 w-full origin-bottom-right scale-x-0 bg-current transition-transform duration-200 ease-out group-hover:origin-bottom-left group-hover:scale-x-100"></span>
            </button>
        </div>
    }
}
