use super::*;

fn reduce_hover(
    config: AnimationConfig,
    state: HoverState,
    events: &[PointerEvent],
) -> HoverState {
    events
        .iter()
        .fold(Rc::new(state), |state, &event| {
            state.reduce(HoverInput { event, config })
        })
        .as_ref()
        .to_owned()
}

// =============================================================
// Hover contract
// =============================================================

#[test]
fn hover_starts_at_rest() {
    assert_eq!(HoverState::default(), HoverState::Rest);
}

#[test]
fn pointer_enter_then_leave_returns_to_rest() {
    let config = AnimationConfig::FEATURE_HOVER;
    let hovered = HoverState::Rest.apply(PointerEvent::Enter, &config);
    assert_eq!(hovered, HoverState::Hovered);
    assert_eq!(hovered.apply(PointerEvent::Leave, &config), HoverState::Rest);
}

#[test]
fn non_reversible_hover_stays_hovered_after_leave() {
    use PointerEvent::{Enter, Leave};
    let config = AnimationConfig {
        reversible: false,
        ..AnimationConfig::FEATURE_HOVER
    };
    assert_eq!(
        reduce_hover(config, HoverState::Rest, &[Enter, Leave]),
        HoverState::Hovered
    );
    assert_eq!(
        reduce_hover(config, HoverState::Rest, &[Leave]),
        HoverState::Rest
    );

    let hovered = Rc::new(HoverState::Hovered);
    let next = Rc::clone(&hovered).reduce(HoverInput { event: Leave, config });
    assert!(Rc::ptr_eq(&hovered, &next));
}

#[test]
fn any_pointer_sequence_ends_in_state_of_last_event() {
    use PointerEvent::{Enter, Leave};
    let sequences: [&[PointerEvent]; 5] = [
        &[Enter, Enter, Leave],
        &[Leave, Leave],
        &[Enter, Leave, Enter],
        &[Leave, Enter, Enter, Enter],
        &[Enter, Leave, Leave, Enter, Leave],
    ];
    for events in sequences {
        let expected = match events.last() {
            Some(Enter) => HoverState::Hovered,
            _ => HoverState::Rest,
        };
        assert_eq!(
            reduce_hover(AnimationConfig::ROLE_HOVER, HoverState::Rest, events),
            expected
        );
    }
}

#[test]
fn repeated_hover_event_keeps_same_rc() {
    let hovered = Rc::new(HoverState::Hovered);
    let next = Rc::clone(&hovered).reduce(HoverInput {
        event: PointerEvent::Enter,
        config: AnimationConfig::COMMAND_HOVER,
    });
    assert!(Rc::ptr_eq(&hovered, &next));
}

// =============================================================
// Reveal contract
// =============================================================

#[test]
fn reveal_starts_unrevealed() {
    assert_eq!(RevealState::default(), RevealState::Unrevealed);
    assert!(!RevealState::default().is_revealed());
}

#[test]
fn first_trigger_reveals() {
    let next = Rc::new(RevealState::Unrevealed).reduce(RevealTrigger);
    assert_eq!(*next, RevealState::Revealed);
}

#[test]
fn second_trigger_is_a_no_op() {
    let revealed = Rc::new(RevealState::Unrevealed).reduce(RevealTrigger);
    let again = Rc::clone(&revealed).reduce(RevealTrigger);
    assert_eq!(*again, RevealState::Revealed);
    assert!(Rc::ptr_eq(&revealed, &again));
}

// =============================================================
// Animation configs
// =============================================================

#[test]
fn reveal_configs_are_one_shot() {
    for config in [AnimationConfig::HERO_ENTRANCE, AnimationConfig::PHASE_REVEAL] {
        assert!(!config.reversible);
        assert_eq!(config.from.opacity, 0.0);
        assert_eq!(config.to, VisualState::IDENTITY);
    }
    assert_eq!(AnimationConfig::HERO_ENTRANCE.trigger, Trigger::OnMount);
    assert_eq!(AnimationConfig::PHASE_REVEAL.trigger, Trigger::OnViewportEnter);
}

#[test]
fn reveal_offsets_match_direction() {
    assert_eq!(AnimationConfig::HERO_ENTRANCE.from.offset_y, 20);
    assert_eq!(AnimationConfig::PHASE_REVEAL.from.offset_x, -20);
}

#[test]
fn hover_configs_are_reversible_pointer_scales() {
    let hovers = [
        (AnimationConfig::FEATURE_HOVER, 1.05),
        (AnimationConfig::ROLE_HOVER, 1.02),
        (AnimationConfig::COMMAND_HOVER, 1.01),
        (AnimationConfig::CTA_PRIMARY_HOVER, 1.05),
        (AnimationConfig::CTA_SECONDARY_HOVER, 1.05),
    ];
    for (config, scale) in hovers {
        assert!(config.reversible);
        assert_eq!(config.trigger, Trigger::OnPointerEnterLeave);
        assert_eq!(config.from, VisualState::IDENTITY);
        assert_eq!(config.to.scale, scale);
        assert_eq!(config.timing, Timing::Spring { stiffness: 300 });
    }
}

#[test]
fn tween_durations_are_kept() {
    assert_eq!(AnimationConfig::HERO_ENTRANCE.timing.duration_ms(), 800);
    assert_eq!(AnimationConfig::PHASE_REVEAL.timing.duration_ms(), 500);
}

#[test]
fn spring_duration_is_bounded() {
    assert_eq!(Timing::Spring { stiffness: 300 }.duration_ms(), 250);
    assert_eq!(Timing::Spring { stiffness: 0 }.duration_ms(), 1_000);
    assert_eq!(Timing::Spring { stiffness: 10_000 }.duration_ms(), 100);
}

#[test]
fn style_switches_between_endpoints() {
    let config = AnimationConfig::PHASE_REVEAL;
    let hidden = config.style(false);
    let shown = config.style(true);

    assert!(hidden.starts_with("opacity: 0; transform: translate(-20px, 0px) scale(1);"));
    assert!(shown.starts_with("opacity: 1; transform: translate(0px, 0px) scale(1);"));
    assert!(shown.contains("transition: opacity 500ms ease-out"));
}

#[test]
fn elevated_state_adds_shadow() {
    let style = AnimationConfig::CTA_PRIMARY_HOVER.style(true);
    assert!(style.contains("scale(1.05)"));
    assert!(style.contains("box-shadow:"));
    assert!(!AnimationConfig::CTA_PRIMARY_HOVER.style(false).contains("box-shadow:"));
}

#[test]
fn secondary_cta_hover_only_scales() {
    let style = AnimationConfig::CTA_SECONDARY_HOVER.style(true);
    assert!(style.contains("scale(1.05)"));
    assert!(!style.contains("box-shadow:"));
    assert_eq!(AnimationConfig::CTA_SECONDARY_HOVER.to.elevation, 0);
}
