use gloo_timers::callback::Timeout;
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::carousel::Carousel;
use crate::config;

/// One step of an entrance sequence: `class` becomes visible `delay_ms`
/// after the previous step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cue {
    pub class: &'static str,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    cues: &'static [Cue],
}

impl Timeline {
    pub const fn new(cues: &'static [Cue]) -> Self {
        Self { cues }
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Delay before cue `revealed` shows, `None` once the sequence is done.
    pub fn delay_before(&self, revealed: usize) -> Option<u32> {
        self.cues.get(revealed).map(|cue| cue.delay_ms)
    }

    pub fn revealed_classes(&self, revealed: usize) -> Vec<&'static str> {
        self.cues.iter().take(revealed).map(|cue| cue.class).collect()
    }

    pub fn is_revealed(&self, class: &str, revealed: usize) -> bool {
        self.cues[..revealed.min(self.cues.len())]
            .iter()
            .any(|cue| cue.class == class)
    }

    /// Class list for the element carrying `class`.
    pub fn classes_for(&self, class: &'static str, revealed: usize) -> Classes {
        classes!(
            class,
            "cue",
            self.is_revealed(class, revealed).then_some("cue-visible")
        )
    }
}

pub const HERO_TIMELINE: Timeline = Timeline::new(&[
    Cue { class: "hero-badge", delay_ms: 200 },
    Cue { class: "hero-title", delay_ms: 300 },
    Cue { class: "hero-subtitle", delay_ms: 250 },
    Cue { class: "hero-actions", delay_ms: 250 },
    Cue { class: "hero-gauge", delay_ms: 400 },
]);

/// Plays `timeline` once and returns how many cues are visible. At most one
/// timer is pending; it is dropped when the caller unmounts.
#[hook]
pub fn use_timeline(timeline: Timeline) -> usize {
    let revealed = use_state(|| 0usize);

    {
        let setter = revealed.setter();
        use_effect_with_deps(
            move |revealed: &usize| {
                let current = *revealed;
                let pending = timeline
                    .delay_before(current)
                    .map(|delay| Timeout::new(delay, move || setter.set(current + 1)));
                move || drop(pending)
            },
            *revealed,
        );
    }

    *revealed
}

pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.85;

/// True once an element's top edge is inside the upper 85% of the viewport.
pub fn should_reveal(top: f64, viewport_height: f64) -> bool {
    top < viewport_height * REVEAL_VIEWPORT_FRACTION
}

fn element_in_view(node: &NodeRef) -> bool {
    let Some(element) = node.cast::<web_sys::Element>() else {
        return false;
    };
    let viewport_height = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    should_reveal(element.get_bounding_client_rect().top(), viewport_height)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                if element_in_view(&node) {
                    visible.set(true);
                }
                || ()
            },
            (),
        );
    }

    {
        let node = node.clone();
        let visible = visible.clone();
        use_event_with_window("scroll", move |_: Event| {
            if !*visible && element_in_view(&node) {
                visible.set(true);
            }
        });
    }

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone(), (*visible).then_some("reveal-visible"))}>
            { for props.children.iter() }
        </div>
    }
}

/// Ease-out quartic: fast start, slow finish. Input is clamped to [0, 1].
pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

pub const COUNTER_FRAME_MS: u32 = 16;

pub fn counter_value(target: f64, elapsed_ms: u32, duration_ms: u32) -> f64 {
    if duration_ms == 0 {
        return target;
    }
    target * ease_out_quart(elapsed_ms as f64 / duration_ms as f64)
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub target: f64,
    #[prop_or(2_000)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub decimals: usize,
    #[prop_or_default]
    pub suffix: AttrValue,
}

/// Current value of a count-up from zero to `target`, advanced by an
/// interval that stops itself once `duration_ms` has elapsed.
#[hook]
pub fn use_count_up(target: f64, duration_ms: u32) -> f64 {
    let elapsed = use_state(|| 0u32);
    let done = *elapsed >= duration_ms;

    {
        let elapsed = elapsed.clone();
        use_interval(
            move || elapsed.set(*elapsed + COUNTER_FRAME_MS),
            if done { 0 } else { COUNTER_FRAME_MS },
        );
    }

    counter_value(target, *elapsed, duration_ms)
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let value = use_count_up(props.target, props.duration_ms);
    html! {
        <span class="counter">{ format!("{:.*}{}", props.decimals, value, props.suffix) }</span>
    }
}

pub static HERO_WORDS: [&str; 5] = ["tu Hogar", "Gamers", "Empresas", "Streamers", "Familias"];

#[derive(Properties, PartialEq)]
pub struct RotatingWordProps {
    pub words: &'static [&'static str],
    #[prop_or(config::HERO_WORD_INTERVAL_MS)]
    pub interval_ms: u32,
}

/// Cycles through `words` in place, one every `interval_ms`.
#[function_component(RotatingWord)]
pub fn rotating_word(props: &RotatingWordProps) -> Html {
    let (len, interval_ms) = (props.words.len(), props.interval_ms);
    let carousel = use_state(move || Carousel::with_interval(len, interval_ms));

    {
        let carousel = carousel.clone();
        let auto_advance_ms = carousel.auto_advance_ms();
        use_interval(
            move || {
                let mut next = *carousel;
                next.next();
                carousel.set(next);
            },
            auto_advance_ms,
        );
    }

    let word = props.words.get(carousel.index()).copied().unwrap_or_default();
    html! {
        <span class="rotating-word" key={word}>{ word }</span>
    }
}
