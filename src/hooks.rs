//! Hooks that drive the hover and reveal state machines from browser events.

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::use_effect_once;

use crate::animation::{
    AnimationConfig, HoverInput, HoverState, PointerEvent, RevealState, RevealTrigger, Trigger,
};

/// Delay before an on-mount reveal so the browser paints the start state first.
const FIRST_FRAME_MS: u32 = 16;

/// Fraction of a step that must be on screen before it reveals.
const VIEWPORT_THRESHOLD: f64 = 0.1;

#[derive(Clone, PartialEq)]
pub struct HoverHandle {
    pub state: HoverState,
    pub style: String,
    pub onmouseenter: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
}

#[hook]
pub fn use_hover(config: AnimationConfig) -> HoverHandle {
    let state = use_reducer(HoverState::default);

    let onmouseenter = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(HoverInput {
                event: PointerEvent::Enter,
                config,
            })
        })
    };
    let onmouseleave = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(HoverInput {
                event: PointerEvent::Leave,
                config,
            })
        })
    };

    HoverHandle {
        state: *state,
        style: config.style(state.is_hovered()),
        onmouseenter,
        onmouseleave,
    }
}

#[derive(Clone, PartialEq)]
pub struct RevealHandle {
    pub state: RevealState,
    pub style: String,
}

/// Runs a one-shot entrance. `node` is only observed for viewport triggers.
#[hook]
pub fn use_reveal(config: AnimationConfig, node: NodeRef) -> RevealHandle {
    let state = use_reducer(RevealState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_once(move || {
            let cleanup: Box<dyn FnOnce()> = match config.trigger {
                Trigger::OnMount => {
                    let timeout = Timeout::new(FIRST_FRAME_MS, move || {
                        debug!("revealing on mount");
                        dispatcher.dispatch(RevealTrigger);
                    });
                    // Dropping a pending timeout cancels it.
                    Box::new(move || drop(timeout))
                }
                Trigger::OnViewportEnter => {
                    let watcher = OnceObserver::watch(&node, dispatcher.clone());
                    if watcher.is_none() {
                        dispatcher.dispatch(RevealTrigger);
                    }
                    Box::new(move || drop(watcher))
                }
                Trigger::OnPointerEnterLeave => {
                    warn!("pointer-triggered config used for a reveal, showing immediately");
                    dispatcher.dispatch(RevealTrigger);
                    Box::new(|| ())
                }
            };
            cleanup
        });
    }

    RevealHandle {
        state: *state,
        style: config.style(state.is_revealed()),
    }
}

type IntersectCallback = dyn FnMut(js_sys::Array, IntersectionObserver);

struct OnceObserver {
    observer: IntersectionObserver,
    _callback: Closure<IntersectCallback>,
}

impl OnceObserver {
    fn watch(node: &NodeRef, dispatcher: UseReducerDispatcher<RevealState>) -> Option<Self> {
        let Some(element) = node.cast::<Element>() else {
            warn!("reveal target is not mounted, showing it immediately");
            return None;
        };

        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let visible = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());
                if visible {
                    debug!("revealing on viewport enter");
                    dispatcher.dispatch(RevealTrigger);
                    observer.disconnect();
                }
            },
        ) as Box<IntersectCallback>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(VIEWPORT_THRESHOLD));

        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(err) => {
                warn!("IntersectionObserver unavailable ({err:?}), showing step immediately");
                return None;
            }
        };
        observer.observe(&element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for OnceObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
