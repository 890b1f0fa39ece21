use leptos::prelude::*;

use crate::content::DISPLAY_NAME;

use super::page_config;

/// Delay between words of the blurred-in title, in ms.
const WORD_DELAY_MS: usize = 150;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    let config = page_config();
    let (fading, set_fading) = signal(false);
    let (done, set_done) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        use std::time::Duration;

        // fade-out length once the splash time is up
        const FADE_MS: u64 = 700;

        let timers = [
            (config.splash_ms, set_fading),
            (config.splash_ms + FADE_MS, set_done),
        ]
        .into_iter()
        .filter_map(|(ms, set)| {
            set_timeout_with_handle(move || set.set(true), Duration::from_millis(ms))
                .inspect_err(|err| log::warn!("splash timer failed: {err:?}"))
                .ok()
        })
        .collect::<Vec<_>>();
        if timers.len() < 2 {
            // no timer, no way out of the splash
            set_done.set(true);
        }
        on_cleanup(move || timers.into_iter().for_each(|t| t.clear()));
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (config, set_fading, set_done);

    view! {
        <Show when=move || !done()>
            <div class=move || {
                if fading() {
                    "fixed inset-0 z-[100] flex flex-col items-center justify-center bg-dark-950 transition-opacity duration-500 delay-200 opacity-0"
                } else {
                    "fixed inset-0 z-[100] flex flex-col items-center justify-center bg-dark-950 transition-opacity duration-500 delay-200 opacity-100"
                }
            }>
                <BlurText text=DISPLAY_NAME />
                <div class="loader" aria-label="Loading">
                    {(0..7).map(|_| view! { <div class="loader-square"></div> }).collect_view()}
                </div>
            </div>
        </Show>
    }
}

/// Title whose words sharpen in one after another.
#[component]
fn BlurText(text: &'static str) -> impl IntoView {
    view! {
        <p class="mb-12 font-playfair text-5xl font-bold text-white">
            {text
                .split_whitespace()
                .enumerate()
                .map(|(i, word)| {
                    view! {
                        <span
                            class="blur-in inline-block mr-[0.25em]"
                            style=format!("animation-delay: {}ms", i * WORD_DELAY_MS)
                        >
                            {word}
                        </span>
                    }
                })
                .collect_view()}
        </p>
    }
}
