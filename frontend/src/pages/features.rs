use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::layout::{FinalCta, Page};
use crate::motion::hooks::{use_on_screen, use_scroll_to_top};
use crate::motion::reveal::{reveal_class, Entrance};
use crate::Route;

#[derive(Clone, Copy, PartialEq)]
enum Showcase {
    PersonalizedPath,
    Placeholder(&'static str),
}

#[derive(Clone, PartialEq)]
struct Feature {
    icon: IconKind,
    title: &'static str,
    description: &'static str,
    points: [&'static str; 3],
    showcase: Showcase,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: IconKind::BrainCircuit,
        title: "AI-Powered Personalized Path",
        description: "Say goodbye to one-size-fits-all education. Our intelligent AI analyzes your learning style, pace, and knowledge gaps to construct a unique curriculum just for you. It's the most efficient way to master new skills.",
        points: [
            "Dynamic curriculum that adapts in real-time.",
            "Focus on your weak points to build a solid foundation.",
            "Accelerate through topics you already understand.",
        ],
        showcase: Showcase::PersonalizedPath,
    },
    Feature {
        icon: IconKind::BookOpen,
        title: "Interactive & Engaging Content",
        description: "Learning shouldn't be passive. Dive into hands-on coding environments, interactive simulations, and real-world projects that make learning stick. Get instant feedback to learn from your mistakes immediately.",
        points: [
            "Live coding sandboxes for risk-free experimentation.",
            "Gamified quizzes and challenges to keep you motivated.",
            "Project-based learning to build a portfolio as you learn.",
        ],
        showcase: Showcase::Placeholder("Interactive Content Animation"),
    },
    Feature {
        icon: IconKind::Users,
        title: "Collaborative Learning Community",
        description: "You're not alone on your learning journey. Join study groups, participate in peer code reviews, and connect with mentors from our global community of over 500,000 learners and developers.",
        points: [
            "Connect with peers who share your goals and interests.",
            "Get unstuck faster with help from the community.",
            "Network with professionals and find career opportunities.",
        ],
        showcase: Showcase::Placeholder("Community Animation"),
    },
    Feature {
        icon: IconKind::BarChart,
        title: "Advanced Performance Analytics",
        description: "Track your progress with a detailed analytics dashboard. Understand your strengths, identify areas for improvement, and see a clear visualization of your journey from novice to expert.",
        points: [
            "Visualize your skill mastery across different topics.",
            "Set goals and track your progress towards them.",
            "Benchmark your performance against anonymized peer data.",
        ],
        showcase: Showcase::Placeholder("Analytics Animation"),
    },
];

#[derive(Properties, PartialEq)]
struct PathAnimationProps {
    visible: bool,
}

#[function_component(PersonalizedPathAnimation)]
fn personalized_path_animation(props: &PathAnimationProps) -> Html {
    let visible = props.visible;
    let draw = |delay: &'static str| (classes!("path-arc", visible.then(|| "animate-draw-long")), delay);
    let dot = |delay: &'static str| (classes!("path-dot", visible.then(|| "is-visible")), delay);
    let (first_arc, first_arc_delay) = draw("transition-delay: 0.3s;");
    let (second_arc, second_arc_delay) = draw("transition-delay: 0.8s;");
    let (dot_a, dot_a_delay) = dot("transition-delay: 0.5s;");
    let (dot_b, dot_b_delay) = dot("transition-delay: 1s;");
    let (dot_c, dot_c_delay) = dot("transition-delay: 1.5s;");

    html! {
        <svg viewBox="0 0 200 200" class="path-animation">
            <defs>
                <marker id="arrow" viewBox="0 0 10 10" refX="5" refY="5" markerWidth="6" markerHeight="6" orient="auto-start-reverse">
                    <path d="M 0 0 L 10 5 L 0 10 z" fill="#10B981" />
                </marker>
            </defs>
            <circle cx="100" cy="100" r="80" fill="none" stroke="#e5e7eb" stroke-width="2" />
            <path d="M100,20 A80,80 0 0,1 180,100" stroke="#10B981" stroke-width="3" fill="none" marker-end="url(#arrow)" class={first_arc} style={first_arc_delay} />
            <path d="M180,100 A80,80 0 0,1 100,180" stroke="#6ee7b7" stroke-width="3" fill="none" class={second_arc} style={second_arc_delay} />
            <circle cx="100" cy="20" r="8" fill="#10B981" class={dot_a} style={dot_a_delay} />
            <circle cx="180" cy="100" r="8" fill="#10B981" class={dot_b} style={dot_b_delay} />
            <circle cx="100" cy="180" r="8" fill="#6ee7b7" class={dot_c} style={dot_c_delay} />
            <g transform="translate(76 76)" class={classes!("path-brain", visible.then(|| "is-visible"))}>
                <svg width="48" height="48" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                    <path d="M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z" />
                    <path d="M12 13h4" />
                    <path d="M12 8h8" />
                    <path d="M12 18h6a2 2 0 0 1 2 2v1" />
                </svg>
            </g>
        </svg>
    }
}

#[derive(Properties, PartialEq)]
struct FeatureSectionProps {
    feature: Feature,
    index: usize,
}

/// Alternating two-column row that slides in from both sides once seen.
#[function_component(FeatureSection)]
fn feature_section(props: &FeatureSectionProps) -> Html {
    let (node, visible) = use_on_screen(0.3);
    let feature = &props.feature;
    let odd = props.index % 2 != 0;

    let showcase = match feature.showcase {
        Showcase::PersonalizedPath => html! { <PersonalizedPathAnimation visible={visible} /> },
        Showcase::Placeholder(label) => html! {
            <div class="showcase-placeholder"><h2>{label}</h2></div>
        },
    };

    html! {
        <div ref={node} class="grid-2 align-center feature-row">
            <div class={classes!(reveal_class(Entrance::FromLeft, visible), odd.then(|| "order-2"))}>
                <div class="card showcase">{showcase}</div>
            </div>
            <div class={classes!(reveal_class(Entrance::FromRight, visible), odd.then(|| "order-1"))}>
                <div class="icon-tile">
                    <Icon kind={feature.icon} size={32} />
                </div>
                <h2 class="section-title left">{feature.title}</h2>
                <p class="body-copy">{feature.description}</p>
                <ul class="check-list">
                    { for feature.points.iter().map(|point| html! {
                        <li>
                            <Icon kind={IconKind::ArrowRight} size={20} class="accent" />
                            <span>{*point}</span>
                        </li>
                    }) }
                </ul>
            </div>
        </div>
    }
}

#[function_component(FeaturesPage)]
pub fn features_page() -> Html {
    use_scroll_to_top();

    html! {
        <Page>
            <style>
                {r#"
                    .path-arc { stroke-dasharray: 500; stroke-dashoffset: 500; }
                    .path-arc.animate-draw-long {
                        stroke-dashoffset: 0;
                        transition: stroke-dashoffset 1s ease-in-out;
                    }
                    .path-dot { opacity: 0; transition: opacity 0.5s; }
                    .path-dot.is-visible { opacity: 1; }
                    .path-brain {
                        color: var(--teal-500);
                        opacity: 0;
                        transition: opacity 0.7s 0.2s;
                    }
                    .path-brain.is-visible { opacity: 1; }
                    .showcase-placeholder { text-align: center; padding: 2rem; }
                    .showcase-placeholder h2 { font-size: 1.5rem; color: var(--gray-400); }
                "#}
            </style>

            <section class="hero">
                <div class="container narrow">
                    <h1 class="gradient-text">{"The Future of Learning is Here"}</h1>
                    <p class="hero-subtitle">
                        {"Discover the powerful, AI-driven features that make KnowGrow the smartest way to build your skills and advance your career."}
                    </p>
                </div>
            </section>

            <section class="section">
                <div class="container feature-list">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <FeatureSection key={index} feature={feature.clone()} index={index} />
                    }) }
                </div>
            </section>

            <FinalCta
                title="Ready to Unlock Your Potential?"
                text="Experience these features and more. Start your free trial today and see the KnowGrow difference for yourself."
                label="Claim Your Free Trial"
                to={Route::Contact}
                tinted=true
            />
        </Page>
    }
}
