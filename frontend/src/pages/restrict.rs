use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::layout::Page;
use crate::motion::hooks::use_scroll_to_top;
use crate::Route;

#[function_component(LockAnimation)]
fn lock_animation() -> Html {
    html! {
        <div class="lock-animation">
            <style>
                {r#"
                    @keyframes lock-pulse {
                        0%, 100% { transform: scale(1); opacity: 0.6; }
                        50% { transform: scale(1.15); opacity: 0.2; }
                    }
                    .lock-animation {
                        position: relative;
                        width: 10rem;
                        height: 10rem;
                        margin: 0 auto 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .lock-animation .ring {
                        position: absolute;
                        inset: 0;
                        border-radius: 9999px;
                        background: linear-gradient(135deg, var(--green-500), var(--teal-500));
                        animation: lock-pulse 2.5s ease-in-out infinite;
                    }
                    .lock-animation .ring.delayed { animation-delay: 1.25s; }
                    .lock-animation .core {
                        position: relative;
                        width: 6rem;
                        height: 6rem;
                        border-radius: 9999px;
                        background: #fff;
                        color: var(--green-600);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        box-shadow: 0 10px 25px rgba(16, 185, 129, 0.25);
                    }
                "#}
            </style>
            <div class="ring"></div>
            <div class="ring delayed"></div>
            <div class="core">
                <Icon kind={IconKind::Lock} size={48} />
            </div>
        </div>
    }
}

/// Gate shown in place of Pro-only tools.
#[function_component(RestrictPage)]
pub fn restrict_page() -> Html {
    use_scroll_to_top();

    html! {
        <Page centered=true>
            <div class="container narrow center">
                <LockAnimation />
                <h1 class="gradient-text page-title">{"Access This Feature with Pro"}</h1>
                <p class="hero-subtitle">
                    {"This tool is part of KnowGrow Pro. Upgrade your plan to unlock advanced analytics, AI content generation and every premium feature on the platform."}
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Pricing} classes="btn btn-primary btn-large">
                        <span class="btn-inner">
                            <Icon kind={IconKind::Star} size={20} />
                            {"Upgrade Your Plan"}
                            <Icon kind={IconKind::ArrowRight} size={20} />
                        </span>
                    </Link<Route>>
                </div>
            </div>
        </Page>
    }
}
