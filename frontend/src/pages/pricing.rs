use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::layout::Page;
use crate::motion::hooks::use_scroll_to_top;
use crate::Route;

const PAY_PER_COURSE_POINTS: &[&str] = &[
    "Lifetime access to purchased courses",
    "Course-specific completion certificate",
    "Access to course Q&A forums",
];

const PRO_POINTS: &[&str] = &[
    "Unlimited access to all courses",
    "AI-Powered Personalized Path",
    "Priority support & live sessions",
    "Advanced performance analytics",
];

const FAQS: &[(&str, &str)] = &[
    (
        "Can I cancel my Pro membership anytime?",
        "Yes, you can cancel your subscription at any time. You will retain access to Pro features until the end of your current billing period.",
    ),
    (
        "Do you offer refunds on individual courses?",
        "We offer a 14-day money-back guarantee on all individual course purchases if you are not satisfied with the content.",
    ),
    (
        "How does the Student Discount work?",
        "Students with a valid student ID can receive an 80% discount on the Pro Membership. Click the 'Verify Your Student ID' button to start the verification process.",
    ),
];

#[derive(Properties, PartialEq)]
struct CheckListProps {
    points: &'static [&'static str],
}

#[function_component(CheckList)]
fn check_list(props: &CheckListProps) -> Html {
    html! {
        <ul class="check-list">
            { for props.points.iter().map(|point| html! {
                <li>
                    <Icon kind={IconKind::Check} size={20} class="accent" />
                    <span>{*point}</span>
                </li>
            }) }
        </ul>
    }
}

#[function_component(PricingPage)]
pub fn pricing_page() -> Html {
    use_scroll_to_top();

    html! {
        <Page>
            <section class="hero">
                <div class="container narrow">
                    <h1 class="gradient-text">{"Find the Perfect Plan"}</h1>
                    <p class="hero-subtitle">
                        {"Whether you want to master a single skill or unlock your full potential, we have a plan that's right for you."}
                    </p>
                </div>
            </section>

            <section class="section">
                <div class="container grid-2 pricing-grid">
                    <div class="card plan-card">
                        <h3 class="plan-name">{"Pay Per Course"}</h3>
                        <p class="muted">{"Perfect for focused learning on specific topics."}</p>
                        <p class="plan-price">{"From $49.99"}<span class="muted">{" / course"}</span></p>
                        <CheckList points={PAY_PER_COURSE_POINTS} />
                        <Link<Route> to={Route::Product} classes="btn btn-outline plan-cta">
                            {"Browse Courses"}
                        </Link<Route>>
                    </div>

                    <div class="card plan-card featured">
                        <span class="plan-badge">
                            <Icon kind={IconKind::Star} size={16} />
                            {"Best Value"}
                        </span>
                        <h3 class="plan-name">{"Pro Membership"}</h3>
                        <p class="muted">{"The ultimate plan for continuous growth and career acceleration."}</p>
                        <p class="plan-price">{"$29.99"}<span class="muted">{" / month"}</span></p>
                        <p class="muted plan-note">{"Billed annually, or $39 billed monthly."}</p>
                        <CheckList points={PRO_POINTS} />
                        <Link<Route> to={Route::Contact} classes="btn btn-primary plan-cta">
                            {"Start Pro Membership"}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <section class="section tinted">
                <div class="container narrow">
                    <div class="card student-banner">
                        <div class="icon-tile">
                            <Icon kind={IconKind::Award} size={40} />
                        </div>
                        <div class="student-copy">
                            <h3>{"Are you a student? Get "}<span class="accent strong">{"80% OFF"}</span>{" Pro!"}</h3>
                            <p class="muted">
                                {"We're committed to making education accessible. Verify your student status to unlock a massive discount on our Pro Membership."}
                            </p>
                        </div>
                        <Link<Route> to={Route::StudentVerification} classes="btn btn-solid">
                            {"Verify Your Student ID"}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container narrow">
                    <h2 class="section-title">{"Frequently Asked Questions"}</h2>
                    <div class="stack faq-list">
                        { for FAQS.iter().map(|(question, answer)| html! {
                            <details class="card faq-item">
                                <summary>
                                    <span>{*question}</span>
                                    <Icon kind={IconKind::ChevronRight} size={20} class="faq-chevron" />
                                </summary>
                                <p class="muted">{*answer}</p>
                            </details>
                        }) }
                    </div>
                </div>
            </section>
        </Page>
    }
}
