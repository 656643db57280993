use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::layout::{FinalCta, HeaderAction, Page};
use crate::motion::counter::RampConfig;
use crate::motion::hooks::{use_counter_ramp, use_on_screen, use_scroll_to_top};
use crate::motion::reveal::{reveal_class, stagger, Entrance};
use crate::Route;

/// Active members, in thousands.
const COMMUNITY_RAMP: RampConfig = RampConfig::new(500, 2000, 16);

const FLOW_STEPS: &[(&str, &str)] = &[
    ("Input Your Goals", "Tell our AI what you want to learn, from a single skill to a new career path."),
    ("AI Analysis", "KnowGrow analyzes your goals and existing knowledge to find the optimal learning sequence."),
    ("Personalized Path", "Receive a unique, dynamic learning path with curated content and projects."),
    ("Learn & Adapt", "As you progress, the AI adapts your path in real-time, reinforcing weak spots and accelerating strengths."),
];

const FLOW_LINES: &[(&str, &str)] = &[
    ("M 50,20 C 50,80 50,80 50,130", "animation-delay: 0.2s; transition-delay: 0.2s;"),
    ("M 50,150 C 50,210 50,210 50,260", "animation-delay: 0.8s; transition-delay: 0.8s;"),
    ("M 50,280 C 50,340 50,340 50,390", "animation-delay: 1.4s; transition-delay: 1.4s;"),
];

const COMMUNITY_FEATURES: &[(IconKind, &str, &str)] = &[
    (IconKind::Zap, "Accelerated Learning", "Our AI curriculum is designed to help you master skills 2x faster than traditional methods."),
    (IconKind::Users, "Global Community", "Connect with peers, mentors, and alumni from top companies around the world."),
    (IconKind::Briefcase, "Career Support", "Get resume reviews, mock interviews, and access to our exclusive job board."),
    (IconKind::Award, "Verified Credentials", "Earn certificates that are recognized by industry leaders and add them to your professional profile."),
];

#[function_component(AiFlowchart)]
fn ai_flowchart() -> Html {
    let (node, visible) = use_on_screen(0.2);

    html! {
        <div ref={node} class="flowchart">
            <svg class="flow-lines" width="100%" height="100%" preserveAspectRatio="none">
                { for FLOW_LINES.iter().map(|(d, delay)| html! {
                    <path
                        d={*d}
                        stroke="#10B981"
                        stroke-width="2"
                        fill="none"
                        stroke-dasharray="200"
                        class={classes!("flow-line", visible.then(|| "animate-draw"))}
                        style={*delay}
                    />
                }) }
            </svg>
            <div class="flow-steps">
                { for FLOW_STEPS.iter().enumerate().map(|(index, (title, description))| html! {
                    <div
                        class={classes!("flow-step", reveal_class(Entrance::Rise, visible))}
                        style={stagger(index, 600, 200)}
                    >
                        <div class="step-number">{(index + 1).to_string()}</div>
                        <div>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[function_component(DemoPage)]
pub fn demo_page() -> Html {
    use_scroll_to_top();
    let (community_ref, community_visible) = use_on_screen(0.5);
    let count = use_counter_ramp(community_visible, COMMUNITY_RAMP);

    html! {
        <Page action={HeaderAction::StartTrial}>
            <style>
                {r#"
                    .flowchart { position: relative; }
                    .flow-lines { position: absolute; top: 0; left: 0; width: 100%; height: 100%; }
                    .flow-line { stroke-dashoffset: 200; }
                    .flow-line.animate-draw {
                        stroke-dashoffset: 0;
                        transition: stroke-dashoffset 0.8s ease-in-out;
                    }
                    .flow-steps { display: flex; flex-direction: column; gap: 4rem; }
                    .flow-step { display: flex; align-items: center; gap: 2rem; }
                    .step-number {
                        width: 4rem;
                        height: 4rem;
                        flex-shrink: 0;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #fff;
                        background: linear-gradient(135deg, var(--green-500), var(--teal-500));
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .member-count {
                        font-size: clamp(4.5rem, 10vw, 6rem);
                        font-weight: 700;
                        line-height: 1;
                    }
                    .animate-fade-in-down { animation: fadeInDown 0.5s ease-out forwards; }
                    .animate-fade-in-up { opacity: 0; animation: fadeInUp 0.5s ease-out forwards; }
                    @keyframes fadeInDown {
                        from { opacity: 0; transform: translateY(-20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes fadeInUp {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                "#}
            </style>

            <section class="hero">
                <div class="container narrow">
                    <h1 class="gradient-text animate-fade-in-down">{"See How KnowGrow Works"}</h1>
                    <p class="hero-subtitle animate-fade-in-up" style="animation-delay: 0.3s;">
                        {"Watch our AI in action. Discover a smarter, faster, and more effective way to learn and grow your skills."}
                    </p>
                    <div class="animate-fade-in-up" style="animation-delay: 0.6s;">
                        <a href="#video-placeholder" class="btn btn-primary btn-large">
                            <span class="btn-inner">
                                <Icon kind={IconKind::PlayCircle} />
                                {"Watch the Demo Video"}
                            </span>
                        </a>
                    </div>
                </div>
            </section>

            <section id="video-placeholder" class="section tinted">
                <div class="container narrow">
                    <div class="section-heading">
                        <h2 class="section-title">{"Your Personalized Journey to Mastery"}</h2>
                        <p class="section-lead">{"This is how our AI crafts the perfect learning experience just for you."}</p>
                    </div>
                    <AiFlowchart />
                </div>
            </section>

            <section ref={community_ref} class="section">
                <div class="container">
                    <div class="section-heading">
                        <h2 class="section-title">{"More Than a Platform. A Community."}</h2>
                        <p class="section-lead">{"Join the world's largest and most active community of developers and learners."}</p>
                    </div>
                    <div class="grid-2 align-center">
                        <div class={classes!("community-stat", reveal_class(Entrance::Fade, community_visible))}>
                            <p class="member-count gradient-text">{format!("{}K+", count)}</p>
                            <p class="stat-label">{"Active Members Worldwide"}</p>
                            <p class="body-copy">
                                {"From beginners to experts, our community is a vibrant hub for collaboration, support, and networking. Get help, share your projects, and grow together."}
                            </p>
                        </div>
                        <div class="grid-2 tight">
                            { for COMMUNITY_FEATURES.iter().enumerate().map(|(index, (icon, title, description))| html! {
                                <div
                                    class={classes!("card", "feature-card", reveal_class(Entrance::Rise, community_visible))}
                                    style={stagger(index, 150, 0)}
                                >
                                    <div class="icon-badge">
                                        <Icon kind={*icon} />
                                    </div>
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </section>

            <FinalCta
                title="Ready to Transform Your Future?"
                text="Start your free trial today and experience the future of learning. No credit card required."
                label="Start Learning for Free"
                to={Route::Product}
            />
        </Page>
    }
}
