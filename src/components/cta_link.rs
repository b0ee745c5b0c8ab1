use yew::prelude::*;

use crate::animation::AnimationConfig;
use crate::hooks::use_hover;

#[derive(Properties, PartialEq)]
pub struct CtaLinkProps {
    pub href: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub primary: bool,
}

/// Only the primary link lifts a shadow on hover.
pub fn hover_config(primary: bool) -> AnimationConfig {
    if primary {
        AnimationConfig::CTA_PRIMARY_HOVER
    } else {
        AnimationConfig::CTA_SECONDARY_HOVER
    }
}

/// Hero call-to-action link.
#[function_component(CtaLink)]
pub fn cta_link(props: &CtaLinkProps) -> Html {
    let hover = use_hover(hover_config(props.primary));
    let hovered = hover.state.is_hovered();

    html! {
        <a
            href={props.href.clone()}
            class={classes!(
                "hero-cta",
                if props.primary { "primary" } else { "secondary" },
                hovered.then_some("hovered"),
            )}
            style={hover.style}
            onmouseenter={hover.onmouseenter}
            onmouseleave={hover.onmouseleave}
        >
            {props.label.clone()}
        </a>
    }
}
