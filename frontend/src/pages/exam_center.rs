use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::layout::Page;
use crate::motion::hooks::{scroll_into_view, use_on_screen, use_scroll_to_top};
use crate::motion::reveal::{reveal_class, Entrance};
use crate::Route;

#[derive(Properties, PartialEq)]
struct PortalSectionProps {
    id: AttrValue,
    anchor: NodeRef,
    title: AttrValue,
    /// Pairs of bold lead-in and paragraph text.
    points: Vec<(&'static str, &'static str)>,
    cta_label: AttrValue,
    cta_to: Route,
    diagram: Html,
    #[prop_or_default]
    tinted: bool,
    #[prop_or_default]
    diagram_first: bool,
}

/// One instruction block; reveals itself once a fifth of it is on screen.
#[function_component(PortalSection)]
fn portal_section(props: &PortalSectionProps) -> Html {
    let (reveal_ref, visible) = use_on_screen(0.2);

    let copy = html! {
        <div class={classes!("portal-copy", props.diagram_first.then(|| "order-2"))}>
            <h2 class="section-title left">{props.title.clone()}</h2>
            <div class="stack body-copy">
                { for props.points.iter().map(|(lead, text)| html! {
                    <p><strong>{format!("{}:", lead)}</strong>{" "}{*text}</p>
                }) }
            </div>
            <Link<Route> to={props.cta_to.clone()} classes="btn btn-solid">
                {props.cta_label.clone()}
            </Link<Route>>
        </div>
    };

    html! {
        <section ref={props.anchor.clone()} id={props.id.clone()} class={classes!("section", props.tinted.then(|| "tinted"))}>
            <div ref={reveal_ref} class={classes!("container", "grid-2", "align-center", reveal_class(Entrance::Rise, visible))}>
                {copy}
                <div class={classes!("portal-diagram", props.diagram_first.then(|| "order-1"))}>
                    {props.diagram.clone()}
                </div>
            </div>
        </section>
    }
}

fn booking_diagram() -> Html {
    html! {
        <svg viewBox="0 0 200 150" class="diagram">
            <rect x="30" y="20" width="140" height="110" rx="10" fill="#f0fdf4" stroke="#d1fae5" stroke-width="2" />
            <rect x="40" y="30" width="120" height="15" fill="#d1fae5" />
            <circle cx="160" cy="120" r="20" fill="#10b981" />
            <path d="M154 115 l6 6 l6 -12" stroke="white" stroke-width="3" fill="none" stroke-linecap="round" />
            <path d="M45 55 h110 M45 70 h110 M45 85 h70" stroke="#a7f3d0" stroke-width="4" stroke-linecap="round" />
            <circle cx="60" cy="115" r="10" fill="#fde047" />
            <path d="M60 110 v10 M55 115 h10" stroke="#f59e0b" stroke-width="2" stroke-linecap="round" />
        </svg>
    }
}

fn verification_diagram() -> Html {
    html! {
        <svg viewBox="0 0 200 150" class="diagram">
            <path d="M20 30 L180 30 L160 120 L40 120 Z" fill="#f0fdf4" stroke="#d1fae5" stroke-width="2" />
            <circle cx="100" cy="75" r="30" fill="#10b981" />
            <path d="M90 70 l8 15 l15 -20" stroke="white" stroke-width="4" fill="none" stroke-linecap="round" />
            <path d="M50 45 h100 M60 55 h80" stroke="#a7f3d0" stroke-width="2" stroke-linecap="round" />
            <circle cx="150" cy="100" r="15" fill="#fde047" />
        </svg>
    }
}

fn internship_diagram() -> Html {
    html! {
        <svg viewBox="0 0 200 150" class="diagram">
            <rect x="20" y="50" width="50" height="80" rx="5" fill="#d1fae5" />
            <rect x="80" y="30" width="40" height="100" rx="5" fill="#a7f3d0" />
            <rect x="130" y="60" width="50" height="70" rx="5" fill="#6ee7b7" />
            <circle cx="100" cy="75" r="25" fill="#10b981" />
            <path d="M92 70 l6 6 l10 -10" stroke="white" fill="none" stroke-width="3" stroke-linecap="round" />
        </svg>
    }
}

#[function_component(ExamCenterPage)]
pub fn exam_center_page() -> Html {
    use_scroll_to_top();
    let exam_ref = use_node_ref();
    let verification_ref = use_node_ref();
    let internship_ref = use_node_ref();

    let scroll_to = |node: &NodeRef| {
        let node = node.clone();
        Callback::from(move |_: MouseEvent| scroll_into_view(&node))
    };

    html! {
        <Page>
            <section class="hero">
                <div class="container narrow">
                    <h1 class="gradient-text">{"Welcome to the KnowGrow Exam Center"}</h1>
                    <p class="hero-subtitle">
                        {"This is your hub for official certifications and career opportunities. Take the next step in your professional journey."}
                    </p>
                    <div class="hero-actions">
                        <button class="btn btn-outline" onclick={scroll_to(&exam_ref)}>
                            <span class="btn-inner"><Icon kind={IconKind::BookCopy} size={20} />{"Book Your Exam"}</span>
                        </button>
                        <button class="btn btn-outline" onclick={scroll_to(&verification_ref)}>
                            <span class="btn-inner"><Icon kind={IconKind::Award} size={20} />{"Certificate Verification"}</span>
                        </button>
                        <button class="btn btn-primary" onclick={scroll_to(&internship_ref)}>
                            <span class="btn-inner"><Icon kind={IconKind::Briefcase} size={20} />{"Internship Portal"}</span>
                        </button>
                    </div>
                    <p class="notice-inline">
                        <Icon kind={IconKind::AlertTriangle} size={20} class="warning" />
                        {"Kindly read all instructions before applying to anything."}
                    </p>
                </div>
            </section>

            <PortalSection
                id="book-exam"
                anchor={exam_ref.clone()}
                title="Booking Your Proctored Exam"
                points={vec![
                    ("Eligibility", "You must be a KnowGrow Pro member and have completed 100% of the relevant learning path."),
                    ("System Requirements", "A stable internet connection, a webcam, a microphone, and a quiet room are required. The exam must be taken on a desktop or laptop computer."),
                    ("Rules of Conduct", "No external resources (notes, books, other websites) are permitted. You must remain in view of the webcam for the entire duration of the exam. Any violation will result in immediate disqualification."),
                ]}
                cta_label="Go to Exam Portal"
                cta_to={Route::Restrict}
                diagram={booking_diagram()}
                tinted=true
            />

            <PortalSection
                id="verify-certificate"
                anchor={verification_ref.clone()}
                title="Certificate Verification Hub"
                points={vec![
                    ("Authenticity Guaranteed", "Every KnowGrow certificate comes with a unique, verifiable ID. This ensures that your credentials can be trusted by employers and academic institutions."),
                    ("How to Verify", "To verify a certificate, you will need the full name of the recipient and the unique certificate ID. Enter these details into our verification portal."),
                    ("For Employers", "Instantly confirm the qualifications of potential candidates, streamlining your hiring process."),
                ]}
                cta_label="Verify a Certificate"
                cta_to={Route::ComingSoon}
                diagram={verification_diagram()}
                diagram_first=true
            />

            <PortalSection
                id="apply-internship"
                anchor={internship_ref.clone()}
                title="Internship Application Portal"
                points={vec![
                    ("Eligibility", "To apply for internships, you must be an active KnowGrow Pro member and hold at least one verified Pro-level certificate."),
                    ("Application Process", "Browse available positions in the portal. Your KnowGrow profile, including completed courses and certificates, will be automatically attached to your application."),
                    ("Our Commitment", "We partner with leading tech companies to provide you with exclusive internship opportunities to kickstart your career."),
                ]}
                cta_label="Browse Internships"
                cta_to={Route::ComingSoon}
                diagram={internship_diagram()}
                tinted=true
            />
        </Page>
    }
}
