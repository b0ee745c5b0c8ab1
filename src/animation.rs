#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use std::rc::Rc;

use yew::functional::Reducible;

/// What starts an animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    OnMount,
    OnViewportEnter,
    OnPointerEnterLeave,
}

/// A resting point of an animated element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    pub offset_x: i32,
    pub offset_y: i32,
    pub scale: f32,
    /// Shadow depth, 0 is flat.
    pub elevation: u8,
}

impl VisualState {
    pub const IDENTITY: VisualState = VisualState {
        opacity: 1.0,
        offset_x: 0,
        offset_y: 0,
        scale: 1.0,
        elevation: 0,
    };

    pub fn css(&self) -> String {
        let mut css = format!(
            "opacity: {}; transform: translate({}px, {}px) scale({});",
            self.opacity, self.offset_x, self.offset_y, self.scale
        );
        if let Some(shadow) = shadow_for(self.elevation) {
            css.push_str(&format!(" box-shadow: {shadow};"));
        }
        css
    }
}

fn shadow_for(elevation: u8) -> Option<&'static str> {
    match elevation {
        0 => None,
        1 => Some("0 4px 12px rgba(0, 0, 0, 0.25)"),
        _ => Some("0 10px 25px rgba(79, 70, 229, 0.35)"),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Timing {
    Tween { duration_ms: u32 },
    Spring { stiffness: u32 },
}

impl Timing {
    pub fn duration_ms(&self) -> u32 {
        match *self {
            Timing::Tween { duration_ms } => duration_ms,
            // Stiffer springs settle faster; 300 settles in roughly 250ms.
            Timing::Spring { stiffness } => (75_000 / stiffness.max(1)).clamp(100, 1_000),
        }
    }

    pub fn easing(&self) -> &'static str {
        match self {
            Timing::Tween { .. } => "ease-out",
            Timing::Spring { .. } => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }

    pub fn css(&self) -> String {
        format!(
            "transition: opacity {d}ms {e}, transform {d}ms {e}, box-shadow {d}ms {e};",
            d = self.duration_ms(),
            e = self.easing()
        )
    }
}

/// Declarative description of one element's animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationConfig {
    pub trigger: Trigger,
    pub from: VisualState,
    pub to: VisualState,
    pub reversible: bool,
    pub timing: Timing,
}

const SPRING_300: Timing = Timing::Spring { stiffness: 300 };

const fn hover_scale(scale: f32, elevation: u8) -> AnimationConfig {
    AnimationConfig {
        trigger: Trigger::OnPointerEnterLeave,
        from: VisualState::IDENTITY,
        to: VisualState {
            opacity: 1.0,
            offset_x: 0,
            offset_y: 0,
            scale,
            elevation,
        },
        reversible: true,
        timing: SPRING_300,
    }
}

impl AnimationConfig {
    pub const HERO_ENTRANCE: AnimationConfig = AnimationConfig {
        trigger: Trigger::OnMount,
        from: VisualState {
            opacity: 0.0,
            offset_x: 0,
            offset_y: 20,
            scale: 1.0,
            elevation: 0,
        },
        to: VisualState::IDENTITY,
        reversible: false,
        timing: Timing::Tween { duration_ms: 800 },
    };

    pub const PHASE_REVEAL: AnimationConfig = AnimationConfig {
        trigger: Trigger::OnViewportEnter,
        from: VisualState {
            opacity: 0.0,
            offset_x: -20,
            offset_y: 0,
            scale: 1.0,
            elevation: 0,
        },
        to: VisualState::IDENTITY,
        reversible: false,
        timing: Timing::Tween { duration_ms: 500 },
    };

    pub const FEATURE_HOVER: AnimationConfig = hover_scale(1.05, 1);
    pub const ROLE_HOVER: AnimationConfig = hover_scale(1.02, 1);
    pub const COMMAND_HOVER: AnimationConfig = hover_scale(1.01, 0);
    pub const CTA_PRIMARY_HOVER: AnimationConfig = hover_scale(1.05, 2);
    pub const CTA_SECONDARY_HOVER: AnimationConfig = hover_scale(1.05, 0);

    /// Inline style for the element, `active` meaning revealed or hovered.
    pub fn style(&self, active: bool) -> String {
        let state = if active { &self.to } else { &self.from };
        format!("{} {}", state.css(), self.timing.css())
    }
}

/// One-shot entrance state shared by the hero block and phase steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Unrevealed,
    Revealed,
}

impl RevealState {
    /// The state after a mount or viewport-intersection event.
    pub fn trigger(self) -> Self {
        RevealState::Revealed
    }

    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }
}

/// Mount or viewport-intersection signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealTrigger;

impl Reducible for RevealState {
    type Action = RevealTrigger;

    fn reduce(self: Rc<Self>, _action: Self::Action) -> Rc<Self> {
        if self.is_revealed() {
            return self;
        }
        Rc::new(self.trigger())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Rest,
    Hovered,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
}

/// A pointer event together with the config of the element it hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverInput {
    pub event: PointerEvent,
    pub config: AnimationConfig,
}

impl HoverState {
    /// Pointer-leave only returns to `Rest` for reversible configs.
    pub fn apply(self, event: PointerEvent, config: &AnimationConfig) -> Self {
        match event {
            PointerEvent::Enter => HoverState::Hovered,
            PointerEvent::Leave if config.reversible => HoverState::Rest,
            PointerEvent::Leave => self,
        }
    }

    pub fn is_hovered(self) -> bool {
        self == HoverState::Hovered
    }
}

impl Reducible for HoverState {
    type Action = HoverInput;

    fn reduce(self: Rc<Self>, input: Self::Action) -> Rc<Self> {
        let next = self.apply(input.event, &input.config);
        if next == *self {
            return self;
        }
        Rc::new(next)
    }
}
