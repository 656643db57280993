use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::layout::Page;
use crate::config;
use crate::motion::hooks::{scroll_into_view, use_scroll_to_top};

const COMMUNITY_CHANNELS: &[(IconKind, &str, &str)] = &[
    (IconKind::MessageSquare, "WhatsApp", config::WHATSAPP_URL),
    (IconKind::Send, "Telegram", config::TELEGRAM_URL),
    (IconKind::Instagram, "Instagram", config::INSTAGRAM_URL),
    (IconKind::Linkedin, "LinkedIn", config::LINKEDIN_COMPANY_URL),
    (IconKind::Github, "GitHub", config::GITHUB_URL),
];

#[derive(Properties, PartialEq)]
struct DirectChannelProps {
    href: AttrValue,
    icon: IconKind,
    title: AttrValue,
    detail: AttrValue,
}

#[function_component(DirectChannel)]
fn direct_channel(props: &DirectChannelProps) -> Html {
    html! {
        <a href={props.href.clone()} class="direct-channel" target="_blank" rel="noopener noreferrer">
            <Icon kind={props.icon} size={32} class="accent" />
            <div>
                <p class="channel-title">{props.title.clone()}</p>
                <p class="muted">{props.detail.clone()}</p>
            </div>
        </a>
    }
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    use_scroll_to_top();
    let community_ref = use_node_ref();
    let admin_ref = use_node_ref();

    let to_community = {
        let community_ref = community_ref.clone();
        Callback::from(move |_: MouseEvent| scroll_into_view(&community_ref))
    };
    let to_admin = {
        let admin_ref = admin_ref.clone();
        Callback::from(move |_: MouseEvent| scroll_into_view(&admin_ref))
    };

    html! {
        <Page>
            <section class="hero">
                <div class="container narrow">
                    <h1 class="gradient-text">{"Get in Touch"}</h1>
                    <p class="hero-subtitle">
                        {"We're here to help. Whether you have a question for the community or need direct support from our team, find the right channel below."}
                    </p>
                    <div class="hero-actions">
                        <button class="btn btn-outline" onclick={to_community}>
                            <span class="btn-inner"><Icon kind={IconKind::Users} size={20} />{"Community Support"}</span>
                        </button>
                        <button class="btn btn-primary" onclick={to_admin}>
                            <span class="btn-inner"><Icon kind={IconKind::ShieldCheck} size={20} />{"Admin & Account Support"}</span>
                        </button>
                    </div>
                </div>
            </section>

            <section ref={community_ref} id="community" class="section tinted">
                <div class="container center">
                    <h2 class="section-title">{"Join the Conversation"}</h2>
                    <p class="section-lead">
                        {"Have a general question or want to connect with fellow learners? Our community channels are the best place to start."}
                    </p>
                    <div class="grid-5">
                        { for COMMUNITY_CHANNELS.iter().map(|(icon, name, href)| html! {
                            <a href={*href} class="channel-tile" target="_blank" rel="noopener noreferrer">
                                <Icon kind={*icon} size={40} class="accent" />
                                <span>{*name}</span>
                            </a>
                        }) }
                    </div>
                </div>
            </section>

            <section ref={admin_ref} id="admin" class="section">
                <div class="container narrow">
                    <div class="section-heading">
                        <h2 class="section-title">{"Admin & Account Support"}</h2>
                        <p class="section-lead">
                            {"For specific questions about "}
                            <span class="accent strong">{"payments, membership subscriptions, or student ID verification"}</span>
                            {", please contact our admin team directly."}
                        </p>
                    </div>
                    <div class="card contact-card">
                        <h3>{"Direct Contact Channels"}</h3>
                        <p class="muted center">{"Please allow up to 24 hours for a response from our admin team."}</p>
                        <div class="stack">
                            <DirectChannel
                                href={config::mailto(config::ADMIN_EMAIL, None)}
                                icon={IconKind::Mail}
                                title="Email Support"
                                detail={config::ADMIN_EMAIL_DISPLAY}
                            />
                            <DirectChannel
                                href={config::WHATSAPP_URL}
                                icon={IconKind::Phone}
                                title="WhatsApp"
                                detail="Message us for quick support"
                            />
                            <DirectChannel
                                href={config::LINKEDIN_FOUNDER_URL}
                                icon={IconKind::Linkedin}
                                title="Admin LinkedIn"
                                detail="Connect with our support lead"
                            />
                        </div>
                    </div>
                </div>
            </section>
        </Page>
    }
}
