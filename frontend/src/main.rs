use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod catalog;
mod motion {
    pub mod observer;
    pub mod reveal;
    pub mod counter;
    pub mod hooks;
}
mod components {
    pub mod icons;
    pub mod layout;
}
mod pages {
    pub mod about;
    pub mod coming_soon;
    pub mod contact;
    pub mod demo;
    pub mod exam_center;
    pub mod features;
    pub mod pricing;
    pub mod product;
    pub mod restrict;
    pub mod student_verification;
}

use pages::{
    about::AboutPage,
    coming_soon::ComingSoonPage,
    contact::ContactPage,
    demo::DemoPage,
    exam_center::ExamCenterPage,
    features::FeaturesPage,
    pricing::PricingPage,
    product::ProductHub,
    restrict::RestrictPage,
    student_verification::StudentVerificationPage,
};


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/hub/about")]
    About,
    #[at("/hub/coming-soon")]
    ComingSoon,
    #[at("/hub/comming-soon")]
    ComingSoonMisspelled,
    #[at("/hub/contact")]
    Contact,
    #[at("/hub/demo")]
    Demo,
    #[at("/hub/examcenter")]
    ExamCenter,
    #[at("/hub/features")]
    Features,
    #[at("/hub/pricing")]
    Pricing,
    #[at("/hub/product")]
    Product,
    #[at("/hub/restrict")]
    Restrict,
    #[at("/hub/student-verification")]
    StudentVerification,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Hub root requested, redirecting to the product hub");
            html! { <Redirect<Route> to={Route::Product} /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <AboutPage /> }
        },
        Route::ComingSoon => {
            info!("Rendering Coming Soon page");
            html! { <ComingSoonPage /> }
        },
        Route::ComingSoonMisspelled => {
            info!("Redirecting old coming soon link");
            html! { <Redirect<Route> to={Route::ComingSoon} /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        },
        Route::Demo => {
            info!("Rendering Demo page");
            html! { <DemoPage /> }
        },
        Route::ExamCenter => {
            info!("Rendering Exam Center page");
            html! { <ExamCenterPage /> }
        },
        Route::Features => {
            info!("Rendering Features page");
            html! { <FeaturesPage /> }
        },
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <PricingPage /> }
        },
        Route::Product => {
            info!("Rendering Product hub");
            html! { <ProductHub /> }
        },
        Route::Restrict => {
            info!("Rendering Restricted Access page");
            html! { <RestrictPage /> }
        },
        Route::StudentVerification => {
            info!("Rendering Student Verification page");
            html! { <StudentVerificationPage /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting to the product hub");
            html! { <Redirect<Route> to={Route::Product} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting {} hub", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hub_paths_resolve_to_their_pages() {
        assert_eq!(Route::recognize("/hub/coming-soon"), Some(Route::ComingSoon));
        assert_eq!(Route::recognize("/hub/examcenter"), Some(Route::ExamCenter));
        assert_eq!(Route::recognize("/hub/student-verification"), Some(Route::StudentVerification));
    }

    #[test]
    fn old_coming_soon_spelling_is_still_routed() {
        assert_eq!(Route::recognize("/hub/comming-soon"), Some(Route::ComingSoonMisspelled));
        assert_ne!(Route::recognize("/hub/comming-soon"), Some(Route::NotFound));
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::recognize("/hub/nope"), Some(Route::NotFound));
    }
}
