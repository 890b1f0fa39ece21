use leptos::{either::Either, ev::MouseEvent, prelude::*};

use crate::{
    active_section::ActiveSectionTracker,
    content::{initials, NavItem, DISPLAY_NAME, FULL_NAME, NAVIGATION, ROLE},
};

use super::{
    hooks::{
        scroll_to_section, set_body_scroll_locked, use_active_section, use_dark_mode,
        use_scroll_threshold,
    },
    page_config,
};

#[component]
pub fn Header() -> impl IntoView {
    let config = page_config();
    let scrolled = use_scroll_threshold(config.header_scrolled_threshold);
    let active = use_active_section(config.active_margin);
    let (menu_open, set_menu_open) = signal(false);

    Effect::new(move |_| set_body_scroll_locked(menu_open.get()));
    on_cleanup(|| set_body_scroll_locked(false));

    let on_nav = move |ev: MouseEvent, href: &'static str| {
        ev.prevent_default();
        set_menu_open(false);
        scroll_to_section(href);
    };

    let header_class = move || {
        if scrolled() {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-white/95 dark:bg-dark-900/95 backdrop-blur-md shadow-sm"
        } else {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent"
        }
    };

    view! {
        <header class=header_class>
            <nav class="mx-auto max-w-7xl px-6 lg:px-8" aria-label="Global">
                <div class="flex items-center justify-between py-6">
                    <div class="flex lg:flex-1">
                        <a
                            href="#home"
                            class="-m-1.5 p-1.5"
                            on:click=move |ev| on_nav(ev, "#home")
                        >
                            <span class="font-playfair text-2xl font-semibold text-dark-900 dark:text-white">
                                {DISPLAY_NAME}
                            </span>
                        </a>
                    </div>
                    <div class="flex items-center gap-x-4 lg:gap-x-8">
                        <div class="hidden lg:flex lg:gap-x-10">
                            {NAVIGATION
                                .iter()
                                .map(|item| {
                                    view! { <DesktopLink item active on_nav /> }
                                })
                                .collect_view()}
                        </div>
                        <ThemeToggle storage_key=config.dark_mode_key />
                        <div class="flex lg:hidden">
                            <button
                                type="button"
                                class="-m-2.5 inline-flex items-center justify-center rounded-md p-2.5 text-dark-500 dark:text-dark-300 hover:text-dark-900 dark:hover:text-white transition-colors"
                                on:click=move |_| set_menu_open(true)
                            >
                                <span class="sr-only">"Open main menu"</span>
                                <span class="text-2xl leading-none" aria-hidden="true">
                                    "☰"
                                </span>
                            </button>
                        </div>
                    </div>
                </div>
            </nav>
        </header>
        {move || {
            menu_open()
                .then(|| {
                    view! {
                        <div class="fixed inset-0 z-50 lg:hidden animate-fade-in">
                            <div
                                class="fixed inset-0 bg-dark-900/20 backdrop-blur-sm"
                                on:click=move |_| set_menu_open(false)
                            ></div>
                            <div class="fixed inset-y-0 right-0 flex w-full flex-col overflow-y-auto bg-white dark:bg-dark-900 px-6 py-6 sm:max-w-sm animate-slide-in">
                                <div class="flex items-center justify-between">
                                    <a
                                        href="#home"
                                        class="-m-1.5 p-1.5"
                                        on:click=move |ev| on_nav(ev, "#home")
                                    >
                                        <span class="font-playfair text-2xl font-semibold text-dark-900 dark:text-white">
                                            {initials(FULL_NAME)}
                                        </span>
                                    </a>
                                    <button
                                        type="button"
                                        class="-m-2.5 rounded-md p-2.5 text-dark-500 dark:text-dark-300 hover:text-dark-900 dark:hover:text-white transition-colors"
                                        on:click=move |_| set_menu_open(false)
                                    >
                                        <span class="sr-only">"Close menu"</span>
                                        <span class="text-2xl leading-none" aria-hidden="true">
                                            "✕"
                                        </span>
                                    </button>
                                </div>
                                <div class="mt-16 flow-root">
                                    <div class="space-y-2">
                                        {NAVIGATION
                                            .iter()
                                            .map(|item| {
                                                let class = move || {
                                                    if active.with(|a| a.is_active(item.href)) {
                                                        "-mx-3 block rounded-lg px-3 py-4 text-2xl font-medium transition-colors text-dark-900 dark:text-white bg-dark-100 dark:bg-dark-800"
                                                    } else {
                                                        "-mx-3 block rounded-lg px-3 py-4 text-2xl font-medium transition-colors text-dark-500 dark:text-dark-300 hover:bg-dark-100 dark:hover:bg-dark-800 hover:text-dark-900 dark:hover:text-white"
                                                    }
                                                };
                                                view! {
                                                    <a
                                                        href=item.href
                                                        class=class
                                                        on:click=move |ev| on_nav(ev, item.href)
                                                    >
                                                        {item.name}
                                                    </a>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                                <div class="mt-auto pt-16">
                                    <p class="text-sm text-dark-400">{FULL_NAME} <br /> {ROLE}</p>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}

#[component]
fn DesktopLink(
    item: &'static NavItem,
    active: ReadSignal<ActiveSectionTracker>,
    on_nav: impl Fn(MouseEvent, &'static str) + Copy + Send + 'static,
) -> impl IntoView {
    let is_active = move || active.with(|a| a.is_active(item.href));
    view! {
        <a
            href=item.href
            on:click=move |ev| on_nav(ev, item.href)
            class=move || {
                if is_active() {
                    "text-sm font-medium transition-colors relative group text-dark-900 dark:text-white"
                } else {
                    "text-sm font-medium transition-colors relative group text-dark-500 dark:text-dark-300 hover:text-dark-900 dark:hover:text-white"
                }
            }
        >
            {item.name}
            <span class=move || {
                if is_active() {
                    "absolute -bottom-1 left-0 h-0.5 w-full bg-dark-900 dark:bg-white transition-all"
                } else {
                    "absolute -bottom-1 left-0 h-0.5 w-0 bg-dark-900 dark:bg-white transition-all group-hover:w-full"
                }
            }></span>
        </a>
    }
}

#[component]
fn ThemeToggle(storage_key: &'static str) -> impl IntoView {
    let (mode, toggle) = use_dark_mode(storage_key);
    view! {
        <button
            type="button"
            class="rounded-full p-2 text-dark-500 dark:text-dark-300 hover:text-dark-900 dark:hover:text-white transition-colors"
            aria-label="Toggle dark mode"
            on:click=move |_| toggle()
        >
            {move || {
                if mode.get().is_dark() {
                    Either::Left(view! { <span aria-hidden="true">"☀"</span> })
                } else {
                    Either::Right(view! { <span aria-hidden="true">"☾"</span> })
                }
            }}
        </button>
    }
}
