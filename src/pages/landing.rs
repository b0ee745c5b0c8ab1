#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use std::rc::Rc;

use log::error;
use yew::prelude::*;

use crate::animation::AnimationConfig;
use crate::components::cta_link::CtaLink;
use crate::components::renderable::{render_list, Renderable};
use crate::config;
use crate::content::{FooterContent, HeroContent, SiteContent};
use crate::hooks::use_reveal;

/// Top-level page sections, in presentation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    Features,
    Roles,
    GameFlow,
    Commands,
    Footer,
}

impl Section {
    pub const ORDER: [Section; 6] = [
        Section::Hero,
        Section::Features,
        Section::Roles,
        Section::GameFlow,
        Section::Commands,
        Section::Footer,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Features => "features",
            Section::Roles => "roles",
            Section::GameFlow => "game-flow",
            Section::Commands => "commands",
            Section::Footer => "footer",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }
}

/// Reads the site content from context and hands it to [`Landing`].
#[function_component(Home)]
pub fn home() -> Html {
    match use_context::<Rc<SiteContent>>() {
        Some(content) => html! { <Landing content={content} /> },
        None => {
            error!("Landing page rendered without site content");
            html! {}
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let content = props.content.as_ref();

    html! {
        <div class="landing-page">
            { for Section::ORDER.iter().map(|section| render_section(*section, content)) }
            <style>{PAGE_STYLES}</style>
        </div>
    }
}

fn render_section(section: Section, content: &SiteContent) -> Html {
    let headings = &content.headings;
    match section {
        Section::Hero => html! { <Hero content={content.hero.clone()} /> },
        Section::Features => list_section(section, &headings.features, "features-grid", &content.features),
        Section::Roles => list_section(section, &headings.roles, "roles-grid", &content.roles),
        Section::GameFlow => list_section(section, &headings.game_flow, "phase-list", &content.phases),
        Section::Commands => list_section(section, &headings.commands, "command-list", &content.commands),
        Section::Footer => footer(&content.footer),
    }
}

fn list_section<T: Renderable>(
    section: Section,
    heading: &str,
    layout: &'static str,
    items: &[T],
) -> Html {
    html! {
        <section id={section.id()} class="page-section">
            <div class="container">
                <h2 class="section-heading">{heading}</h2>
                <div class={layout}>
                    { render_list(items) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    content: HeroContent,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let node = use_node_ref();
    let reveal = use_reveal(AnimationConfig::HERO_ENTRANCE, node.clone());
    let content = &props.content;

    html! {
        <header id={Section::Hero.id()} class="hero">
            <div ref={node} class="hero-content" style={reveal.style}>
                <h1>{&content.title}</h1>
                <p class="hero-subtitle">{&content.tagline}</p>
                <div class="hero-cta-group">
                    <CtaLink
                        href={config::invite_url()}
                        label={content.invite_label.clone()}
                        primary={true}
                    />
                    <CtaLink
                        href={Section::Features.anchor()}
                        label={content.features_label.clone()}
                    />
                </div>
            </div>
            <div class="hero-backdrop"></div>
        </header>
    }
}

fn footer(content: &FooterContent) -> Html {
    html! {
        <footer id={Section::Footer.id()} class="site-footer">
            <div class="container">
                <p class="copyright">{&content.copyright}</p>
                <div class="footer-links">
                    { for content.links.iter().map(|link| html! {
                        <a href={link.href.clone()}>{&link.label}</a>
                    }) }
                </div>
            </div>
        </footer>
    }
}

const PAGE_STYLES: &str = r#"
    .landing-page {
        min-height: 100vh;
        background: linear-gradient(to bottom, #111827, #1f2937, #111827);
        color: #fff;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", "Hiragino Sans", "Noto Sans JP", sans-serif;
    }

    .container {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1rem;
    }

    .hero {
        position: relative;
        overflow: hidden;
        padding: 6rem 1rem;
        text-align: center;
    }

    .hero-content {
        position: relative;
        z-index: 1;
    }

    .hero h1,
    .section-heading {
        font-weight: 700;
        background: linear-gradient(to right, #6366f1, #a855f7);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }

    .hero h1 {
        font-size: 4.5rem;
        margin-bottom: 1.5rem;
    }

    .hero-subtitle {
        font-size: 1.5rem;
        color: #d1d5db;
        max-width: 42rem;
        margin: 0 auto 2rem;
    }

    .hero-cta-group {
        display: flex;
        justify-content: center;
        gap: 1rem;
        flex-wrap: wrap;
    }

    .hero-cta {
        display: inline-block;
        padding: 1rem 2rem;
        border-radius: 9999px;
        font-size: 1.125rem;
        font-weight: 700;
        color: #fff;
        text-decoration: none;
    }

    .hero-cta.primary {
        background: #4f46e5;
    }

    .hero-cta.primary:hover {
        background: #4338ca;
    }

    .hero-cta.secondary {
        background: #374151;
    }

    .hero-cta.secondary:hover {
        background: #4b5563;
    }

    .hero-backdrop {
        position: absolute;
        inset: 0;
        background: linear-gradient(to right, rgba(99, 102, 241, 0.1), rgba(168, 85, 247, 0.1));
        filter: blur(64px);
    }

    .page-section {
        padding: 6rem 0;
    }

    .page-section:nth-of-type(odd) {
        background: rgba(31, 41, 55, 0.5);
    }

    .section-heading {
        font-size: 3rem;
        text-align: center;
        margin-bottom: 4rem;
    }

    .features-grid {
        display: grid;
        gap: 2rem;
        grid-template-columns: repeat(4, 1fr);
    }

    .roles-grid {
        display: grid;
        gap: 2rem;
        grid-template-columns: repeat(3, 1fr);
        max-width: 72rem;
        margin: 0 auto;
    }

    @media (max-width: 1024px) {
        .features-grid,
        .roles-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }

    @media (max-width: 768px) {
        .features-grid,
        .roles-grid {
            grid-template-columns: 1fr;
        }

        .hero h1 {
            font-size: 3rem;
        }
    }

    .feature-card {
        padding: 2rem;
        background: rgba(55, 65, 81, 0.5);
        border: 1px solid #374151;
        border-radius: 0.75rem;
        backdrop-filter: blur(4px);
    }

    .role-card {
        padding: 1.5rem;
        background: #1f2937;
        border: 1px solid #374151;
        border-radius: 0.75rem;
    }

    .card-icon {
        display: block;
        font-style: normal;
        font-size: 2.5rem;
        color: #818cf8;
        margin-bottom: 1rem;
    }

    .feature-card h3,
    .role-card h3 {
        font-size: 1.25rem;
        margin-bottom: 0.5rem;
    }

    .feature-card p,
    .role-description,
    .phase-body p,
    .command-row p {
        color: #d1d5db;
    }

    .role-faction {
        font-size: 0.875rem;
        color: #818cf8;
        margin-bottom: 0.5rem;
    }

    .faction-werewolf .role-faction {
        color: #c084fc;
    }

    .phase-list {
        max-width: 56rem;
        margin: 0 auto;
        display: flex;
        flex-direction: column;
        gap: 3rem;
    }

    .phase-step {
        display: flex;
        align-items: flex-start;
        gap: 1.5rem;
        padding: 1.5rem;
        background: rgba(55, 65, 81, 0.3);
        border-radius: 0.75rem;
    }

    .phase-number {
        flex-shrink: 0;
        width: 3rem;
        height: 3rem;
        border-radius: 9999px;
        background: #4f46e5;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.25rem;
        font-weight: 700;
    }

    .phase-body h3 {
        font-size: 1.5rem;
        margin-bottom: 0.5rem;
    }

    .command-list {
        max-width: 48rem;
        margin: 0 auto;
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }

    .command-row {
        display: flex;
        align-items: center;
        padding: 1rem;
        background: rgba(31, 41, 55, 0.5);
        border: 1px solid #374151;
        border-radius: 0.5rem;
    }

    .command-row code {
        color: #818cf8;
        font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
        margin-right: 1rem;
    }

    .site-footer {
        background: #111827;
        padding: 3rem 0;
        text-align: center;
        color: #9ca3af;
    }

    .footer-links {
        margin-top: 1rem;
        display: flex;
        justify-content: center;
        gap: 1rem;
    }

    .footer-links a {
        color: #9ca3af;
        text-decoration: none;
        transition: color 0.2s;
    }

    .footer-links a:hover {
        color: #fff;
    }

    @media (prefers-reduced-motion: reduce) {
        .hero-content,
        .phase-step,
        .feature-card,
        .role-card,
        .command-row,
        .hero-cta {
            transition: none !important;
            opacity: 1 !important;
            transform: none !important;
        }
    }
"#;
