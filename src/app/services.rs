use leptos::{html, prelude::*};

use crate::content::{tint, SERVICES};

use super::{
    hooks::{scroll_to_section, use_in_view},
    page_config, reveal, IconView,
};

#[component]
pub fn Services() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let in_view = use_in_view(section, page_config().reveal_margin);

    view! {
        <section id="services" node_ref=section class="relative py-32 sm:py-40">
            <div class="mx-auto max-w-7xl px-6 lg:px-8">
                <div class=move || reveal("mx-auto max-w-2xl text-center", in_view())>
                    <h2 class="font-playfair text-4xl font-bold tracking-tight text-dark-900 dark:text-white sm:text-5xl">
                        "Services"
                    </h2>
                    <p class="mt-6 text-lg leading-8 text-dark-600 dark:text-dark-300/90">
                        "Offering a range of expert services in education, language, and research."
                    </p>
                </div>

                <div class="mx-auto mt-20 max-w-7xl">
                    <div class="grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3">
                        {SERVICES
                            .iter()
                            .enumerate()
                            .map(|(i, service)| {
                                view! {
                                    <div
                                        class=move || {
                                            reveal(
                                                "group relative overflow-hidden rounded-xl bg-white/30 dark:bg-dark-900/30 p-8 backdrop-blur-sm hover:bg-white/50 dark:hover:bg-dark-900/50",
                                                in_view(),
                                            )
                                        }
                                        style=format!("transition-delay: {}ms", i * 100)
                                    >
                                        <div
                                            class="absolute left-0 top-0 h-1 w-0 transition-all duration-300 group-hover:w-full"
                                            style=format!("background-color: {}", service.color)
                                        ></div>
                                        <div class="mb-6 inline-flex">
                                            <div
                                                class="flex h-14 w-14 items-center justify-center rounded-lg text-2xl transition-all duration-300 group-hover:scale-110"
                                                style=format!("background-color: {}", tint(service.color))
                                            >
                                                <IconView icon=service.icon />
                                            </div>
                                        </div>
                                        <h3 class="text-xl font-bold text-dark-900 dark:text-white">
                                            {service.name}
                                        </h3>
                                        <p class="mt-3 text-base leading-relaxed text-dark-600 dark:text-dark-300/80">
                                            {service.description}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class=move || reveal("mx-auto mt-20 max-w-3xl text-center delay-500", in_view())>
                    <div class="rounded-2xl border border-dark-200/50 dark:border-dark-800/50 bg-white/20 dark:bg-dark-900/20 p-12 backdrop-blur-sm">
                        <h3 class="font-playfair text-2xl font-semibold text-dark-900 dark:text-white">
                            "Ready to Collaborate?"
                        </h3>
                        <p class="mt-4 text-base leading-relaxed text-dark-600 dark:text-dark-300/80">
                            "If you are interested in any of these services or have a specific inquiry, please don't hesitate to get in touch."
                        </p>
                        <a
                            href="#contact"
                            on:click=move |ev| {
                                ev.prevent_default();
                                scroll_to_section("#contact");
                            }
                            class="group mt-8 inline-flex items-center justify-center gap-2 rounded-lg bg-white/50 dark:bg-dark-900/50 px-8 py-3.5 text-base font-medium text-dark-900 dark:text-white ring-1 ring-dark-200 dark:ring-dark-700 backdrop-blur-sm transition-all duration-300 hover:bg-dark-100/50 dark:hover:bg-dark-800/50 hover:ring-dark-300 dark:hover:ring-dark-600"
                        >
                            <span class="transition-transform group-hover:scale-110" aria-hidden="true">
                                "💬"
                            </span>
                            "Contact Me"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
