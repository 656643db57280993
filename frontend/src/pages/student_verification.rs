use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::layout::Page;
use crate::config;
use crate::motion::hooks::{use_on_screen, use_scroll_to_top};
use crate::motion::reveal::{reveal_class, stagger, Entrance};
use crate::Route;

const BENEFITS: &[(IconKind, &str)] = &[
    (IconKind::Zap, "80% off Pro Membership for the whole academic year"),
    (IconKind::BrainCircuit, "Full access to the AI-Powered Personalized Path"),
    (IconKind::BookOpen, "Unlimited access to every course in the catalog"),
    (IconKind::Award, "Verified certificates recognized by industry leaders"),
    (IconKind::Briefcase, "Priority access to the Internship Portal"),
    (IconKind::Users, "Student-only study groups and mentor sessions"),
];

const STEPS: &[(&str, &str)] = &[
    ("Prepare Your ID", "Take a clear photo or scan of a valid student ID showing your name, institution and expiry date."),
    ("Email Our Team", "Send the image to our verification team along with the email address of your KnowGrow account."),
    ("Get Your Discount", "Once verified, usually within 24 hours, the 80% discount is applied to your account automatically."),
];

#[function_component(StudentVerificationPage)]
pub fn student_verification_page() -> Html {
    use_scroll_to_top();
    let (hero_ref, hero_visible) = use_on_screen(0.2);
    let (benefits_ref, benefits_visible) = use_on_screen(0.2);
    let (steps_ref, steps_visible) = use_on_screen(0.2);
    let (contact_ref, contact_visible) = use_on_screen(0.2);
    let (community_ref, community_visible) = use_on_screen(0.2);

    html! {
        <Page>
            <section class="hero">
                <div ref={hero_ref} class={classes!("container", "narrow", reveal_class(Entrance::Rise, hero_visible))}>
                    <div class="icon-tile hero-icon">
                        <Icon kind={IconKind::Award} size={48} />
                    </div>
                    <h1 class="gradient-text">{"Unlock Your Student Offer"}</h1>
                    <p class="hero-subtitle">
                        {"Verify your student status and get 80% off KnowGrow Pro. Education should be accessible, and we're here to help you grow."}
                    </p>
                </div>
            </section>

            <section ref={benefits_ref} class="section tinted">
                <div class="container">
                    <div class="section-heading">
                        <h2 class="section-title">{"What You Get"}</h2>
                        <p class="section-lead">{"Everything in Pro, at a fraction of the price."}</p>
                    </div>
                    <div class="grid-3">
                        { for BENEFITS.iter().enumerate().map(|(index, (icon, text))| html! {
                            <div
                                class={classes!("card", "value-item", reveal_class(Entrance::FromRight, benefits_visible))}
                                style={stagger(index, 100, 0)}
                            >
                                <Icon kind={*icon} size={28} class="accent" />
                                <p>{*text}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section ref={steps_ref} class="section">
                <div class="container">
                    <div class="section-heading">
                        <h2 class="section-title">{"How Verification Works"}</h2>
                    </div>
                    <div class="grid-3">
                        { for STEPS.iter().enumerate().map(|(index, (title, text))| html! {
                            <div
                                class={classes!("card", "center", reveal_class(Entrance::Zoom, steps_visible))}
                                style={stagger(index, 200, 0)}
                            >
                                <div class="step-badge">{(index + 1).to_string()}</div>
                                <h3>{*title}</h3>
                                <p class="muted">{*text}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section ref={contact_ref} class="section tinted">
                <div class={classes!("container", "narrow", "center", reveal_class(Entrance::Rise, contact_visible))}>
                    <div class="card contact-card">
                        <Icon kind={IconKind::Mail} size={40} class="accent" />
                        <h3>{"Send Your Student ID"}</h3>
                        <p class="muted">
                            {"Email a photo of your student ID to "}
                            <span class="accent strong">{config::VERIFICATION_EMAIL}</span>
                            {". Our team will get back to you within 24 hours."}
                        </p>
                        <a
                            href={config::mailto(config::VERIFICATION_EMAIL, Some("Student ID Verification"))}
                            class="btn btn-primary"
                        >
                            <span class="btn-inner">
                                <Icon kind={IconKind::Send} size={20} />
                                {"Email Verification Team"}
                            </span>
                        </a>
                    </div>
                </div>
            </section>

            <section ref={community_ref} class="section">
                <div class={classes!("container", "narrow", "center", reveal_class(Entrance::Fade, community_visible))}>
                    <h2 class="section-title">{"Questions Before You Apply?"}</h2>
                    <p class="section-lead">
                        {"Our community and admin team are happy to help with anything about the student program."}
                    </p>
                    <Link<Route> to={Route::Contact} classes="btn btn-outline">
                        <span class="btn-inner">
                            <Icon kind={IconKind::MessageSquare} size={20} />
                            {"Contact Us"}
                        </span>
                    </Link<Route>>
                </div>
            </section>
        </Page>
    }
}
