use leptos::{html, prelude::*};

use crate::content::{Stat, SOCIAL_LINKS, STATS};

use super::{
    avatar::AboutPortrait,
    hooks::{use_count_up, use_in_view},
    page_config, reveal, IconView,
};

#[component]
pub fn About() -> impl IntoView {
    let config = page_config();
    let section = NodeRef::<html::Section>::new();
    let stats = NodeRef::<html::Div>::new();
    let in_view = use_in_view(section, config.reveal_margin);
    let stats_in_view = use_in_view(stats, config.reveal_margin);

    view! {
        <section id="about" node_ref=section class="relative py-32 sm:py-40">
            <div class="mx-auto max-w-7xl px-6 lg:px-8">
                <div class=move || reveal("mx-auto max-w-2xl text-center", in_view())>
                    <h2 class="font-playfair text-4xl font-bold tracking-tight text-dark-900 dark:text-white sm:text-5xl">
                        "About Me"
                    </h2>
                </div>

                <div class="mx-auto mt-20 max-w-6xl">
                    <div class="grid grid-cols-1 gap-12 lg:grid-cols-2 lg:gap-16">
                        <div class=move || {
                            reveal("flex justify-center lg:justify-start delay-200", in_view())
                        }>
                            <AboutPortrait />
                        </div>

                        <div class=move || reveal("flex flex-col justify-center delay-300", in_view())>
                            <Bio />
                            <div class="mt-10 flex flex-wrap items-center gap-6">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|social| {
                                        view! {
                                            <a
                                                href=social.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="text-3xl text-dark-400 transition-all duration-300 hover:scale-110 hover:text-dark-900 dark:hover:text-white"
                                                aria-label=social.name
                                            >
                                                <IconView icon=social.icon />
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                                <div class="h-8 w-px bg-dark-300 dark:bg-dark-700"></div>
                                <a
                                    href=config.resume_path
                                    download=""
                                    class="group inline-flex items-center gap-2 rounded-lg bg-white/50 dark:bg-dark-900/50 px-6 py-3 text-sm font-medium text-dark-900 dark:text-white ring-1 ring-dark-200 dark:ring-dark-700 backdrop-blur-sm transition-all duration-300 hover:bg-dark-100/50 dark:hover:bg-dark-800/50 hover:ring-dark-300 dark:hover:ring-dark-600"
                                >
                                    <span class="transition-transform group-hover:translate-y-0.5" aria-hidden="true">
                                        "⬇"
                                    </span>
                                    "Resume"
                                </a>
                            </div>
                        </div>
                    </div>
                </div>

                <div
                    node_ref=stats
                    class=move || reveal("mx-auto mt-20 max-w-4xl delay-500", in_view())
                >
                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                        {STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <StatCard
                                        stat
                                        shown=stats_in_view
                                        duration_ms=config.count_up_ms
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Bio() -> impl IntoView {
    view! {
        <div class="space-y-6 text-lg leading-relaxed text-dark-600 dark:text-dark-300/90">
            <p>
                "Hamoudi Benarba is an Algerian qualified "
                <span class="font-semibold text-dark-900 dark:text-white">
                    "EFL/ESL Educator, Trainer and Researcher"
                </span>
                " with a strong background in language pedagogy, educational innovation, and teacher training."
            </p>
            <p>
                "He possesses excellent communication and presentation skills endorsed by solid knowledge and awareness of teaching methods to ensure lifelong learning and optimal learning outcomes. He is an energetic, perseverant and approachable person with a positive attitude."
            </p>
            <p>
                "With interests in "
                <span class="font-semibold text-dark-900 dark:text-white">
                    "English Language Teaching (ELT), Applied Linguistics, Educational Psychology and English Literature"
                </span>
                ", Hamoudi is determined to uncover the power of language and language learning in such a highly globalised world."
            </p>
        </div>
    }
}

#[component]
fn StatCard(stat: &'static Stat, shown: Signal<bool>, duration_ms: u32) -> impl IntoView {
    let count = use_count_up(stat.value, duration_ms, shown);

    view! {
        <div class=move || {
            reveal(
                "rounded-xl border border-dark-200/50 dark:border-dark-800/50 bg-white/20 dark:bg-dark-900/20 p-6 text-center backdrop-blur-sm",
                shown(),
            )
        }>
            <p class="text-5xl font-light tabular-nums tracking-tight text-dark-900 dark:text-white">
                {move || stat.display(count())}
            </p>
            <p class="mt-3 text-sm text-dark-400">{stat.label}</p>
        </div>
    }
}
