use leptos::{either::Either, html, prelude::*};

use crate::{
    config::build_year,
    content::{tint, ContactMethod, CONTACT_METHODS, DEVELOPER_SITE, FULL_NAME},
};

use super::{hooks::use_in_view, page_config, reveal, IconView};

#[component]
pub fn Contact() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let in_view = use_in_view(section, page_config().reveal_margin);

    view! {
        <section id="contact" node_ref=section class="relative py-32 sm:py-40">
            <div class="mx-auto max-w-7xl px-6 lg:px-8">
                <div class=move || reveal("mx-auto max-w-2xl text-center", in_view())>
                    <h2 class="font-playfair text-4xl font-bold tracking-tight text-dark-900 dark:text-white sm:text-5xl">
                        "Contact me"
                    </h2>
                    <p class="mt-6 text-lg leading-8 text-dark-600 dark:text-dark-300/90">
                        "Let's discuss how we can work together on a collaboration research or if you're interested in one of my services"
                    </p>
                </div>

                <div class="mx-auto mt-20 max-w-4xl">
                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                        {CONTACT_METHODS
                            .iter()
                            .enumerate()
                            .map(|(i, method)| {
                                view! {
                                    <div
                                        class=move || reveal("", in_view())
                                        style=format!("transition-delay: {}ms", i * 100)
                                    >
                                        <ContactCard method />
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class=move || reveal("mx-auto mt-20 max-w-3xl text-center delay-300", in_view())>
                    <div class="rounded-2xl border border-dark-200/50 dark:border-dark-800/50 bg-white/20 dark:bg-dark-900/20 p-12 backdrop-blur-sm">
                        <h3 class="font-playfair text-2xl font-semibold text-dark-900 dark:text-white">
                            "Professional Inquiries"
                        </h3>
                        <p class="mt-4 text-base leading-relaxed text-dark-600 dark:text-dark-300/80">
                            "Whether you're looking for language instruction, teacher training, academic consultation, or translation services, I'm here to help. Feel free to reach out through any of the contact methods above, and I'll respond as soon as possible."
                        </p>
                    </div>
                </div>

                <Footer shown=in_view />
            </div>
        </section>
    }
}

#[component]
fn ContactCard(method: &'static ContactMethod) -> impl IntoView {
    let details = move || {
        view! {
            <div
                class="flex h-11 w-11 flex-shrink-0 items-center justify-center rounded-lg text-xl transition-all duration-300 group-hover:scale-110"
                style=format!("background-color: {}; color: {}", tint(method.color), method.color)
            >
                <IconView icon=method.icon />
            </div>
            <div class="min-w-0 flex-1">
                <h3 class="text-sm font-medium text-dark-400 transition-colors group-hover:text-dark-600 dark:group-hover:text-dark-300">
                    {method.name}
                </h3>
                <p class="mt-1 truncate text-base font-medium text-dark-900 dark:text-white">
                    {method.value}
                </p>
            </div>
        }
    };

    match method.href {
        Some(href) => {
            let new_tab = method.opens_new_tab();
            Either::Left(view! {
                <a
                    href=href
                    target=new_tab.then_some("_blank")
                    rel=new_tab.then_some("noopener noreferrer")
                    class="group relative flex items-center gap-5 rounded-xl bg-white/30 dark:bg-dark-900/30 p-6 backdrop-blur-sm transition-all duration-300 hover:bg-white/50 dark:hover:bg-dark-900/50"
                >
                    <div
                        class="absolute left-0 top-1/2 h-0 w-1 -translate-y-1/2 rounded-r-full transition-all duration-300 group-hover:h-3/4"
                        style=format!("background-color: {}", method.color)
                    ></div>
                    {details()}
                </a>
            })
        }
        None => Either::Right(view! {
            <div class="group relative flex items-center gap-5 rounded-xl bg-white/30 dark:bg-dark-900/30 p-6 backdrop-blur-sm">
                <div
                    class="absolute left-0 top-1/2 h-3/4 w-1 -translate-y-1/2 rounded-r-full opacity-40"
                    style=format!("background-color: {}", method.color)
                ></div>
                {details()}
            </div>
        }),
    }
}

#[component]
fn Footer(shown: Signal<bool>) -> impl IntoView {
    view! {
        <div class=move || {
            if shown() {
                "mx-auto mt-32 max-w-7xl transition-opacity duration-500 delay-500 opacity-100"
            } else {
                "mx-auto mt-32 max-w-7xl transition-opacity duration-500 delay-500 opacity-0"
            }
        }>
            <footer class="border-t border-dark-200/30 dark:border-dark-800/30 pt-8 text-center">
                <p class="text-sm text-dark-400">{build_year()} " - Dr. " {FULL_NAME}</p>
                <div class="group relative mt-4 inline-block">
                    <a
                        href=DEVELOPER_SITE
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-sm text-dark-400 underline decoration-dark-600 underline-offset-4 transition-all duration-300 hover:text-dark-900 dark:hover:text-white hover:decoration-dark-900 dark:hover:decoration-white"
                    >
                        "Dev."
                    </a>
                    <div class="pointer-events-none absolute bottom-full left-1/2 mb-3 -translate-x-1/2 translate-y-2 opacity-0 transition-all duration-300 ease-out group-hover:translate-y-0 group-hover:opacity-100">
                        <div class="relative rounded-lg bg-dark-700 px-4 py-2 shadow-xl ring-1 ring-white/10">
                            <p class="whitespace-nowrap text-sm font-medium text-white">
                                "Visit Developer"
                            </p>
                            <div class="absolute left-1/2 top-full -translate-x-1/2">
                                <div class="border-4 border-transparent border-t-dark-700"></div>
                            </div>
                        </div>
                    </div>
                </div>
            </footer>
        </div>
    }
}
