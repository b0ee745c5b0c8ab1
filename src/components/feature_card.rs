use yew::prelude::*;

use crate::animation::AnimationConfig;
use crate::components::icon::icon_slot;
use crate::content::FeatureEntry;
use crate::hooks::use_hover;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub entry: FeatureEntry,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let hover = use_hover(AnimationConfig::FEATURE_HOVER);
    let hovered = hover.state.is_hovered();
    let entry = &props.entry;

    html! {
        <div
            class={classes!("feature-card", hovered.then_some("hovered"))}
            style={hover.style}
            onmouseenter={hover.onmouseenter}
            onmouseleave={hover.onmouseleave}
        >
            { icon_slot(entry.icon) }
            <h3>{&entry.title}</h3>
            <p>{&entry.description}</p>
        </div>
    }
}
