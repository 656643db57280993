use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::layout::Page;
use crate::motion::hooks::use_scroll_to_top;

#[function_component(ConstructionAnimation)]
fn construction_animation() -> Html {
    html! {
        <div class="construction-animation">
            <style>
                {r#"
                    @keyframes gear-rotate {
                        from { transform: rotate(0deg); }
                        to { transform: rotate(360deg); }
                    }
                    @keyframes gear-rotate-reverse {
                        from { transform: rotate(360deg); }
                        to { transform: rotate(0deg); }
                    }
                    .construction-animation {
                        position: relative;
                        width: 16rem;
                        height: 16rem;
                        margin: 0 auto;
                    }
                    .construction-animation svg.gears {
                        width: 100%;
                        height: 100%;
                    }
                    .gear-1 { animation: gear-rotate 10s linear infinite; transform-origin: center; transform-box: fill-box; }
                    .gear-2 { animation: gear-rotate-reverse 15s linear infinite; transform-origin: center; transform-box: fill-box; }
                    .gear-3 { animation: gear-rotate 20s linear infinite; transform-origin: center; transform-box: fill-box; }
                    .construction-animation .hat {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: var(--green-600);
                    }
                "#}
            </style>
            <svg class="gears" viewBox="0 0 200 200">
                <path class="gear-1" fill="#a7f3d0" d="M100 85 a15 15 0 1 0 0.0001 0 M100 50 l5 15 h-10 l5 -15 M139 61 l-8 13 v-16 l8 3 M139 139 l-13 8 h16 l-3 -8 M100 150 l-5 -15 h10 l-5 15 M61 139 l8 -13 v16 l-8 -3 M61 61 l13 -8 h-16 l3 8" />
                <path class="gear-2" fill="#6ee7b7" d="M50 120 a10 10 0 1 0 0.0001 0 M50 100 l4 10 h-8 l4 -10 M71 110 l-4 9 v-11 l4 2 M71 130 l-9 4 h11 l-2 -4 M50 140 l-4 -10 h8 l-4 10 M29 130 l4 -9 v11 l-4 -2 M29 110 l9 -4 h-11 l2 4" />
                <path class="gear-3" fill="#34d399" d="M150 70 a8 8 0 1 0 0.0001 0 M150 55 l3 7.5 h-6 l3 -7.5 M166 63 l-3 6.5 v-8 l3 1.5 M166 77 l-6.5 3 h8 l-1.5 -3 M150 85 l-3 -7.5 h6 l-3 7.5 M134 77 l3 -6.5 v8 l-3 -1.5 M134 63 l6.5 -3 h-8 l1.5 3" />
            </svg>
            <div class="hat">
                <Icon kind={IconKind::HardHat} size={80} />
            </div>
        </div>
    }
}

#[function_component(ComingSoonPage)]
pub fn coming_soon_page() -> Html {
    use_scroll_to_top();
    let notified = use_state(|| false);

    let on_notify = {
        let notified = notified.clone();
        Callback::from(move |_: MouseEvent| {
            // No waiting list exists yet; the confirmation is local only
            gloo_console::log!("Coming soon: notify requested");
            notified.set(true);
        })
    };

    html! {
        <Page centered=true>
            <div class="container narrow center">
                <ConstructionAnimation />
                <h1 class="gradient-text page-title">{"Something Awesome is on the Way!"}</h1>
                <p class="hero-subtitle">
                    {"Our team is currently developing this exciting new feature. We're working hard to bring it to you and will notify you as soon as it's ready!"}
                </p>
                <div class="notify-slot">
                    if !*notified {
                        <button class="btn btn-outline" onclick={on_notify}>
                            <span class="btn-inner">
                                <Icon kind={IconKind::Bell} size={20} />
                                {"Notify Me When It's Ready"}
                            </span>
                        </button>
                    } else {
                        <div class="notice success fade-in">
                            <p class="notice-title">
                                <Icon kind={IconKind::CheckCircle} size={20} />
                                {"You're on the list!"}
                            </p>
                            <p class="notice-text">{"We will contact you after the product is updated."}</p>
                        </div>
                    }
                </div>
            </div>
        </Page>
    }
}
