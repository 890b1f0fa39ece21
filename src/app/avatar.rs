use leptos::{either::Either, html, prelude::*};

use crate::content::{initials, FULL_NAME, HERO_IMAGE, PORTRAIT_IMAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageState {
    Loading,
    Loaded,
    Failed,
}

/// Load state of an `<img>`, wired through `on:load`/`on:error`.
///
/// Images can settle before hydration attaches the handlers, so the element
/// is also checked once on mount.
fn use_image_state(img: NodeRef<html::Img>) -> (ReadSignal<ImageState>, WriteSignal<ImageState>) {
    let (state, set_state) = signal(ImageState::Loading);

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        let Some(el) = img.get() else {
            return;
        };
        if el.complete() && state.get_untracked() == ImageState::Loading {
            set_state.set(if el.natural_width() > 0 {
                ImageState::Loaded
            } else {
                ImageState::Failed
            });
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = img;

    (state, set_state)
}

/// Round hero portrait. Falls back to initials if the image fails.
#[component]
pub fn HeroPortrait() -> impl IntoView {
    let img = NodeRef::<html::Img>::new();
    let (state, set_state) = use_image_state(img);

    view! {
        <div class="group relative overflow-hidden rounded-full border-4 border-dark-200 dark:border-dark-700 bg-dark-100 dark:bg-dark-800 shadow-2xl">
            {move || {
                if state() == ImageState::Failed {
                    Either::Left(
                        view! {
                            <div class="aspect-square w-full bg-gradient-to-br from-dark-800 to-dark-900 flex items-center justify-center">
                                <div class="inline-flex h-32 w-32 items-center justify-center rounded-full bg-dark-700 text-6xl font-playfair font-semibold text-white shadow-lg">
                                    {initials(FULL_NAME)}
                                </div>
                            </div>
                        },
                    )
                } else {
                    Either::Right(
                        view! {
                            <img
                                node_ref=img
                                src=HERO_IMAGE
                                alt=FULL_NAME
                                class="aspect-square w-full object-cover"
                                on:load=move |_| set_state(ImageState::Loaded)
                                on:error=move |_| set_state(ImageState::Failed)
                            />
                            <div class="pointer-events-none absolute inset-0 opacity-0 transition-opacity duration-500 group-hover:opacity-100">
                                <div class="shine-effect absolute inset-0"></div>
                            </div>
                        },
                    )
                }
            }}
        </div>
    }
}

/// About-section portrait, behind a pulsing skeleton until it loads.
#[component]
pub fn AboutPortrait() -> impl IntoView {
    let img = NodeRef::<html::Img>::new();
    let (state, set_state) = use_image_state(img);
    let loaded = move || state() == ImageState::Loaded;

    view! {
        <div class="relative">
            <Show when=move || !loaded()>
                <div class="absolute inset-0 overflow-hidden rounded-2xl bg-dark-200/50 dark:bg-dark-800/50">
                    <div class="h-full w-full animate-pulse bg-gradient-to-r from-dark-200/50 via-dark-300/50 to-dark-200/50 dark:from-dark-800/50 dark:via-dark-700/50 dark:to-dark-800/50"></div>
                </div>
            </Show>
            <div class="overflow-hidden rounded-2xl">
                <img
                    node_ref=img
                    src=PORTRAIT_IMAGE
                    alt=FULL_NAME
                    class=move || {
                        if loaded() {
                            "w-full max-w-md object-cover shadow-2xl transition-opacity duration-500 opacity-100"
                        } else {
                            "w-full max-w-md object-cover shadow-2xl transition-opacity duration-500 opacity-0"
                        }
                    }
                    on:load=move |_| set_state(ImageState::Loaded)
                    on:error=move |_| set_state(ImageState::Failed)
                />
            </div>
            <div class="absolute -bottom-4 -right-4 -z-10 h-full w-full rounded-2xl bg-gradient-to-br from-dark-200/50 to-dark-300/50 dark:from-dark-800/50 dark:to-dark-900/50"></div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::prelude::*;

    use super::{AboutPortrait, HeroPortrait};
    use crate::content::{HERO_IMAGE, PORTRAIT_IMAGE};

    #[test]
    fn test_hero_portrait_starts_with_image() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <HeroPortrait /> }.to_html());

        assert!(html.contains("<img"));
        assert!(html.contains(&format!("src=\"{HERO_IMAGE}\"")));
        assert!(!html.contains("text-6xl"), "initials shown before any error");
    }

    #[test]
    fn test_about_portrait_shows_skeleton_until_loaded() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <AboutPortrait /> }.to_html());

        assert!(html.contains("animate-pulse"));
        assert!(html.contains(&format!("src=\"{PORTRAIT_IMAGE}\"")));
        assert!(html.contains("duration-500 opacity-0"));
    }
}
