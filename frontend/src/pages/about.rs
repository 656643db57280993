use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::layout::{FinalCta, Page};
use crate::config;
use crate::motion::hooks::{use_on_screen, use_scroll_to_top};
use crate::motion::reveal::{reveal_class, stagger, Entrance};
use crate::Route;

const VALUES: &[(IconKind, &str, &str)] = &[
    (
        IconKind::Target,
        "Purpose-Driven",
        "We are committed to making personalized education accessible to everyone, everywhere.",
    ),
    (
        IconKind::Lightbulb,
        "Constant Innovation",
        "We relentlessly pursue better ways to learn, leveraging the latest in AI and learning science.",
    ),
    (
        IconKind::Users,
        "Community-Centric",
        "We believe learning is a collaborative sport and foster a supportive, global community.",
    ),
];

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    use_scroll_to_top();
    let (story_ref, story_visible) = use_on_screen(0.3);
    let (founder_ref, founder_visible) = use_on_screen(0.3);
    let (values_ref, values_visible) = use_on_screen(0.3);

    html! {
        <Page>
            <section class="hero">
                <div class="container narrow">
                    <h1 class="gradient-text">{"Democratizing Education Through AI"}</h1>
                    <p class="hero-subtitle">
                        {"We started KnowGrow with a simple belief: everyone deserves a personalized education that adapts to their unique potential."}
                    </p>
                </div>
            </section>

            <section ref={story_ref} class="section tinted">
                <div class="container grid-2 align-center">
                    <div class={reveal_class(Entrance::FromLeft, story_visible)}>
                        <h2 class="section-title left">{"Our Story"}</h2>
                        <p class="body-copy">
                            {"Founded in 2024, KnowGrow was born from a passion for technology and a frustration with the limitations of traditional education. We saw millions of ambitious learners held back by rigid, one-size-fits-all curricula."}
                        </p>
                        <p class="body-copy">
                            {"We envisioned a world where an AI-powered mentor could guide each student on a unique path to mastery. Today, that vision is a reality, empowering hundreds of thousands of users to learn faster, retain more, and achieve their career goals."}
                        </p>
                    </div>
                    <div class={reveal_class(Entrance::Zoom, story_visible)} style={stagger(0, 0, 200)}>
                        <img
                            src="https://placehold.co/600x400/a7f3d0/14532d?text=KnowGrow+Team"
                            alt="KnowGrow Team"
                            class="rounded-image"
                            loading="lazy"
                        />
                    </div>
                </div>
            </section>

            <section ref={founder_ref} class="section">
                <div class="container narrow center">
                    <h2 class="section-title">{"Meet the Founder"}</h2>
                    <div class={classes!("founder-card", reveal_class(Entrance::Rise, founder_visible))}>
                        <img
                            src="https://placehold.co/150x150/10b981/ffffff?text=CEO"
                            alt="CEO & Founder"
                            class="founder-avatar"
                        />
                        <h3>{"Nathishwar C"}</h3>
                        <p class="accent">{"CEO & Founder"}</p>
                        <p class="founder-quote">
                            {"\"I've always believed that technology's greatest promise is its ability to unlock human potential. With KnowGrow, we're not just building a product; we're creating a new paradigm for personal and professional growth.\""}
                        </p>
                        <div class="social-row">
                            <a href={config::LINKEDIN_FOUNDER_URL} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                                <Icon kind={IconKind::Linkedin} />
                            </a>
                            <a href={config::GITHUB_URL} target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                                <Icon kind={IconKind::Github} />
                            </a>
                        </div>
                    </div>
                </div>
            </section>

            <section ref={values_ref} class="section tinted">
                <div class="container">
                    <div class="section-heading">
                        <h2 class="section-title">{"What Drives Us"}</h2>
                        <p class="section-lead">{"Our core values guide every decision we make."}</p>
                    </div>
                    <div class="grid-3">
                        { for VALUES.iter().enumerate().map(|(index, (icon, title, description))| html! {
                            <div
                                class={classes!("value-item", reveal_class(Entrance::Rise, values_visible))}
                                style={stagger(index, 200, 0)}
                            >
                                <div class="icon-tile">
                                    <Icon kind={*icon} size={32} />
                                </div>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <FinalCta
                title="Join Our Mission"
                text="Be part of a community that's shaping the future of learning. Your journey to mastery starts here."
                label="Start Your Journey"
                to={Route::Contact}
            />
        </Page>
    }
}
