use chrono::Datelike;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::config;
use crate::Route;

const SCROLLED_OFFSET: f64 = 24.0;

/// Call to action in the right corner of the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    BackHome,
    StartTrial,
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or(HeaderAction::BackHome)]
    pub action: HeaderAction,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = window.as_ref().map(|window| {
                let window_clone = window.clone();
                let callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y > SCROLLED_OFFSET);
                }) as Box<dyn FnMut()>);
                let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                callback
            });

            move || {
                if let (Some(window), Some(callback)) = (window, scroll_callback) {
                    let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let action = match props.action {
        HeaderAction::BackHome => html! {
            <a href={config::home_url()} class="header-cta">
                {"Back to Home"}
            </a>
        },
        HeaderAction::StartTrial => html! {
            <Link<Route> to={Route::Product} classes="header-cta gradient">
                {"Start Free Trial"}
            </Link<Route>>
        },
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="header-inner">
                <a href={config::home_url()} class="brand">
                    <div class="brand-mark">
                        <svg fill="none" stroke="currentColor" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 6.253v11.494m-5.22-6.22l-1.58 1.58a6 6 0 108.486 8.486L12 18.75l-1.78-1.78a6 6 0 00-8.486-8.486l1.58-1.58A6 6 0 0112 6.253z" />
                        </svg>
                    </div>
                    <span class="brand-name gradient-text">{config::BRAND_NAME}</span>
                </a>
                {action}
            </div>
        </header>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();
    html! {
        <footer class="site-footer">
            <p>
                {format!("© {} {}. All rights reserved. {}", year, config::BRAND_NAME, config::TAGLINE)}
            </p>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct PageProps {
    #[prop_or(HeaderAction::BackHome)]
    pub action: HeaderAction,
    #[prop_or_default]
    pub centered: bool,
    pub children: Children,
}

/// Header, main content and footer, shared by every hub page.
#[function_component(Page)]
pub fn page(props: &PageProps) -> Html {
    html! {
        <div class={classes!("hub-page", props.centered.then(|| "centered"))}>
            <Header action={props.action} />
            <main>
                { for props.children.iter() }
            </main>
            <Footer />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaProps {
    pub title: AttrValue,
    pub text: AttrValue,
    pub label: AttrValue,
    pub to: Route,
    #[prop_or_default]
    pub tinted: bool,
}

/// Closing call-to-action section with a single large button.
#[function_component(FinalCta)]
pub fn final_cta(props: &CtaProps) -> Html {
    html! {
        <section class={classes!("section", props.tinted.then(|| "tinted"))}>
            <div class="container narrow center">
                <h2 class="section-title">{props.title.clone()}</h2>
                <p class="section-lead">{props.text.clone()}</p>
                <Link<Route> to={props.to.clone()} classes="btn btn-primary btn-large">
                    <span class="btn-inner">
                        {props.label.clone()}
                        <Icon kind={IconKind::ArrowRight} />
                    </span>
                </Link<Route>>
            </div>
        </section>
    }
}
