use yew::prelude::*;

use crate::animation::AnimationConfig;
use crate::content::CommandEntry;
use crate::hooks::use_hover;

#[derive(Properties, PartialEq)]
pub struct CommandRowProps {
    pub entry: CommandEntry,
}

#[function_component(CommandRow)]
pub fn command_row(props: &CommandRowProps) -> Html {
    let hover = use_hover(AnimationConfig::COMMAND_HOVER);
    let hovered = hover.state.is_hovered();

    html! {
        <div
            class={classes!("command-row", hovered.then_some("hovered"))}
            style={hover.style}
            onmouseenter={hover.onmouseenter}
            onmouseleave={hover.onmouseleave}
        >
            <code>{&props.entry.command}</code>
            <p>{&props.entry.description}</p>
        </div>
    }
}
