use yew::prelude::*;

use crate::animation::AnimationConfig;
use crate::components::icon::icon_slot;
use crate::content::RoleEntry;
use crate::hooks::use_hover;

#[derive(Properties, PartialEq)]
pub struct RoleCardProps {
    pub entry: RoleEntry,
}

#[function_component(RoleCard)]
pub fn role_card(props: &RoleCardProps) -> Html {
    let hover = use_hover(AnimationConfig::ROLE_HOVER);
    let hovered = hover.state.is_hovered();
    let entry = &props.entry;

    html! {
        <div
            class={classes!("role-card", entry.faction.css_class(), hovered.then_some("hovered"))}
            style={hover.style}
            onmouseenter={hover.onmouseenter}
            onmouseleave={hover.onmouseleave}
        >
            { icon_slot(entry.icon) }
            <h3>{&entry.title}</h3>
            <p class="role-faction">{entry.faction.label()}</p>
            <p class="role-description">{&entry.description}</p>
        </div>
    }
}
