use leptos::{html, prelude::*};

use crate::content::{tint, TimelineItem, TIMELINE};

use super::{hooks::use_in_view, page_config, reveal, IconView};

#[component]
pub fn Education() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let in_view = use_in_view(section, page_config().reveal_margin);

    view! {
        <section id="education" node_ref=section class="relative py-32 sm:py-40">
            <div class="mx-auto max-w-7xl px-6 lg:px-8">
                <div class=move || reveal("mx-auto max-w-2xl text-center", in_view())>
                    <h2 class="font-playfair text-4xl font-bold tracking-tight text-dark-900 dark:text-white sm:text-5xl">
                        "Education & Experience"
                    </h2>
                    <p class="mt-6 text-lg leading-8 text-dark-600 dark:text-dark-300/90">
                        "A journey of continuous learning and professional growth in language education"
                    </p>
                </div>

                <div class="mx-auto mt-20 max-w-4xl">
                    <div class="space-y-8">
                        {TIMELINE
                            .iter()
                            .enumerate()
                            .map(|(i, item)| {
                                let last = i + 1 == TIMELINE.len();
                                view! { <TimelineEntry item index=i last shown=in_view /> }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class=move || reveal("mx-auto mt-20 max-w-4xl delay-500", in_view())>
                    <div class="rounded-2xl border border-dark-200/50 dark:border-dark-800/50 bg-white/20 dark:bg-dark-900/20 p-12 backdrop-blur-sm">
                        <h3 class="font-playfair text-2xl font-semibold text-dark-900 dark:text-white">
                            "Areas of Expertise"
                        </h3>
                        <p class="mt-4 text-base leading-relaxed text-dark-600 dark:text-dark-300/80">
                            "Hamoudi's academic and professional experience spans general English courses in elementary and secondary education, CEFR English Proficiency Courses, EAP and ESP University Programmes, Material Design and Development, Thesis Mentoring Frameworks and Research in Innovative Methodologies such as blended learning models, strategy-based instruction, and life competencies integration in EFL/ESL contexts."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineEntry(
    item: &'static TimelineItem,
    index: usize,
    /// No connecting line below the last entry.
    last: bool,
    shown: Signal<bool>,
) -> impl IntoView {
    view! {
        <div
            class=move || reveal("group relative", shown())
            style=format!("transition-delay: {}ms", index * 100)
        >
            <div class="flex gap-6">
                <div class="relative flex flex-col items-center">
                    <div
                        class="flex h-14 w-14 flex-shrink-0 items-center justify-center rounded-lg text-2xl transition-all duration-300 group-hover:scale-110"
                        style=format!("background-color: {}", tint(item.color))
                    >
                        <IconView icon=item.icon />
                    </div>
                    {(!last)
                        .then(|| {
                            view! {
                                <div
                                    class="mt-4 w-0.5 flex-1 opacity-30"
                                    style=format!("background-color: {}", item.color)
                                ></div>
                            }
                        })}
                </div>

                <div class="flex-1 pb-12">
                    <div class="mb-4 inline-flex">
                        <span
                            class="rounded-full px-4 py-1.5 text-sm font-medium"
                            style=format!(
                                "background-color: {}; color: {}",
                                tint(item.color),
                                item.color,
                            )
                        >
                            {item.year}
                        </span>
                    </div>
                    <h3 class="font-playfair text-2xl font-bold text-dark-900 dark:text-white">
                        {item.title}
                    </h3>
                    <p class="mt-2 text-base font-medium text-dark-400">{item.institution}</p>
                    <p class="mt-4 text-base leading-relaxed text-dark-600 dark:text-dark-300/80">
                        {item.description}
                    </p>
                </div>
            </div>
        </div>
    }
}
