#[cfg(test)]
#[path = "components_test.rs"]
mod components_test;

use yew::prelude::*;

use crate::components::command_row::CommandRow;
use crate::components::feature_card::FeatureCard;
use crate::components::phase_step::PhaseStep;
use crate::components::role_card::RoleCard;
use crate::content::{CommandEntry, FeatureEntry, PhaseEntry, RoleEntry};

/// An authored entry that knows which leaf component displays it.
pub trait Renderable {
    fn render(&self) -> Html;
}

impl Renderable for FeatureEntry {
    fn render(&self) -> Html {
        html! { <FeatureCard entry={self.clone()} /> }
    }
}

impl Renderable for RoleEntry {
    fn render(&self) -> Html {
        html! { <RoleCard entry={self.clone()} /> }
    }
}

impl Renderable for PhaseEntry {
    fn render(&self) -> Html {
        html! { <PhaseStep entry={self.clone()} /> }
    }
}

impl Renderable for CommandEntry {
    fn render(&self) -> Html {
        html! { <CommandRow entry={self.clone()} /> }
    }
}

/// Renders every entry in list order.
pub fn render_list<T: Renderable>(items: &[T]) -> Html {
    html! {
        { for items.iter().map(Renderable::render) }
    }
}
