use leptos::{ev::MouseEvent, prelude::*};

use crate::content::{EMAIL, FULL_NAME, LINKEDIN, ROLE, WHATSAPP};

use super::{avatar::HeroPortrait, hooks::scroll_to_section};

#[component]
pub fn Hero() -> impl IntoView {
    // icon links inside the contact group shouldn't also trigger its scroll
    let stop = |ev: MouseEvent| ev.stop_propagation();

    view! {
        <section
            id="home"
            class="relative min-h-screen flex items-center justify-center overflow-hidden lg:min-h-0 lg:items-start lg:pt-24 xl:min-h-screen xl:items-center xl:pt-0"
        >
            <div class="absolute inset-0 -z-10">
                <div class="absolute inset-0 bg-gradient-to-br from-dark-50 via-white to-dark-50 dark:from-dark-950 dark:via-dark-900 dark:to-dark-950"></div>
            </div>

            <div class="relative mx-auto max-w-7xl px-6 py-24 sm:py-32 lg:px-8 lg:py-20">
                <div class="mx-auto grid max-w-2xl grid-cols-1 gap-x-16 gap-y-16 lg:mx-0 lg:max-w-none lg:grid-cols-2 lg:items-center lg:gap-y-0 stagger">
                    <div class="lg:order-2 rise-in">
                        <div class="relative mx-auto aspect-square max-w-md lg:max-w-none">
                            <div class="absolute inset-0 rounded-full bg-gradient-to-br from-dark-700/20 to-dark-800/20 opacity-50 blur-3xl"></div>
                            <HeroPortrait />
                            <div class="absolute -bottom-4 -right-4 rounded-2xl bg-white dark:bg-dark-800 p-6 shadow-xl border border-dark-200 dark:border-dark-700 pop-in">
                                <div class="flex items-center gap-3">
                                    <div class="flex h-12 w-12 items-center justify-center rounded-full bg-dark-100 dark:bg-dark-700 text-xl">
                                        "📄"
                                    </div>
                                    <div>
                                        <p class="text-sm font-semibold text-dark-900 dark:text-white">
                                            "PhD Candidate"
                                        </p>
                                        <p class="text-xs text-dark-400">"TEFL/TESOL"</p>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="lg:order-1 lg:pr-8">
                        <p class="rise-in text-base font-semibold leading-7 text-dark-400 tracking-wide uppercase">
                            "Professional Educator"
                        </p>
                        <h1 class="rise-in mt-4 font-playfair text-5xl font-bold tracking-tight text-dark-900 dark:text-white sm:text-6xl lg:text-7xl text-balance">
                            "Dr. " {FULL_NAME}
                        </h1>
                        <p class="rise-in mt-4 text-2xl font-medium text-dark-600 dark:text-dark-300 sm:text-3xl">
                            {ROLE}
                        </p>
                        <div class="rise-in mt-6 flex items-center gap-2 text-lg text-dark-400">
                            <div class="h-1 w-12 bg-dark-300 dark:bg-dark-600 rounded-full"></div>
                            <span class="font-medium">"PhD Candidate in TEFL/TESOL"</span>
                        </div>
                        <p class="rise-in mt-8 text-lg leading-8 text-dark-600 dark:text-dark-300/90 max-w-xl">
                            "Algerian EFL/ESL Educator and Trainer specializing in language pedagogy and teacher development. Expert in innovative methods that inspire lifelong learning."
                        </p>

                        <div class="rise-in mt-10 flex flex-col items-center sm:flex-row gap-4">
                            <button
                                type="button"
                                on:click=move |_| scroll_to_section("#education")
                                class="group inline-flex items-center justify-center gap-2 rounded-lg bg-white/50 dark:bg-dark-900/50 px-8 py-4 text-base font-medium text-dark-900 dark:text-white ring-1 ring-dark-200 dark:ring-dark-700 backdrop-blur-sm transition-all duration-300 hover:bg-dark-100/50 dark:hover:bg-dark-800/50 hover:ring-dark-300 dark:hover:ring-dark-600"
                            >
                                "View Profile"
                                <span class="transition-transform group-hover:translate-x-1" aria-hidden="true">
                                    "→"
                                </span>
                            </button>

                            <div class="contact-btn-wrapper">
                                <div
                                    role="group"
                                    aria-label="Contact"
                                    class="contact-btn group"
                                    on:click=move |_| scroll_to_section("#contact")
                                >
                                    <button type="button" class="contact-btn-text">
                                        "Contact"
                                    </button>
                                    <div class="contact-btn-icons">
                                        <a
                                            href=format!("mailto:{EMAIL}")
                                            class="contact-icon"
                                            aria-label="Email"
                                            on:click=stop
                                        >
                                            "✉"
                                        </a>
                                        <a
                                            href=LINKEDIN
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="contact-icon"
                                            aria-label="LinkedIn"
                                            on:click=stop
                                        >
                                            <i class="devicon-linkedin-plain"></i>
                                        </a>
                                        <a
                                            href=WHATSAPP
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="contact-icon"
                                            aria-label="WhatsApp"
                                            on:click=stop
                                        >
                                            "💬"
                                        </a>
                                    </div>
                                </div>
                            </div>
                        </div>

                        <div class="rise-in mt-12 flex items-center gap-6 text-sm text-dark-400">
                            <div class="flex items-center gap-2">
                                <div class="h-2 w-2 rounded-full bg-green-500 animate-pulse"></div>
                                <span>"Available for consultation"</span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 hidden xl:block fade-in-late">
                <div class="flex flex-col items-center gap-2 text-dark-500 animate-bob">
                    <span class="text-xs font-medium tracking-wide uppercase">
                        "Scroll to explore"
                    </span>
                    <div class="h-8 w-0.5 bg-dark-600 rounded-full"></div>
                </div>
            </div>
        </section>
    }
}
