use yew::prelude::*;

use crate::animation::{AnimationConfig, RevealState};
use crate::content::PhaseEntry;
use crate::hooks::use_reveal;

#[derive(Properties, PartialEq)]
pub struct PhaseStepProps {
    pub entry: PhaseEntry,
}

#[function_component(PhaseStep)]
pub fn phase_step(props: &PhaseStepProps) -> Html {
    let node = use_node_ref();
    let reveal = use_reveal(AnimationConfig::PHASE_REVEAL, node.clone());
    let entry = &props.entry;

    let state = match reveal.state {
        RevealState::Unrevealed => "unrevealed",
        RevealState::Revealed => "revealed",
    };

    html! {
        <div
            ref={node}
            class="phase-step"
            data-reveal={state}
            style={reveal.style}
        >
            <div class="phase-number">{entry.number}</div>
            <div class="phase-body">
                <h3>{&entry.title}</h3>
                <p>{&entry.description}</p>
            </div>
        </div>
    }
}
