use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::content::{Testimonial, FEATURED_TESTIMONIALS};

/// Wrap-around position over `len` slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    paused: bool,
    interval_ms: u32,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self::with_interval(len, config::CAROUSEL_INTERVAL_MS)
    }

    pub fn with_interval(len: usize, interval_ms: u32) -> Self {
        Self { index: 0, len, paused: false, interval_ms }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Interval for auto-advance; zero stops it.
    pub fn auto_advance_ms(&self) -> u32 {
        if self.paused || self.len < 2 {
            0
        } else {
            self.interval_ms
        }
    }
}

fn stars(rating: u8) -> Html {
    html! {
        <div class="stars">
            { for (0..5u8).map(|i| html! {
                <span class={classes!("star", (i < rating).then_some("filled"))}>{"★"}</span>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub testimonial: &'static Testimonial,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let t = props.testimonial;
    html! {
        <div class="glass testimonial-card">
            { stars(t.rating) }
            <p class="quote">{ format!("\"{}\"", t.quote) }</p>
            <div class="author">
                <div class="avatar">{ t.initials() }</div>
                <div>
                    <strong>{ t.name }</strong>
                    <small class="muted">{ t.role }</small>
                </div>
            </div>
        </div>
    }
}

/// Auto-rotating featured testimonials. Hovering pauses rotation.
#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel() -> Html {
    let carousel = use_state(|| Carousel::new(FEATURED_TESTIMONIALS.len()));

    let update = |f: fn(&mut Carousel)| {
        let carousel = carousel.clone();
        move || {
            let mut next = *carousel;
            f(&mut next);
            carousel.set(next);
        }
    };

    use_interval(update(Carousel::next), carousel.auto_advance_ms());

    let on_next = {
        let step = update(Carousel::next);
        Callback::from(move |_: MouseEvent| step())
    };
    let on_prev = {
        let step = update(Carousel::prev);
        Callback::from(move |_: MouseEvent| step())
    };
    let on_enter = {
        let pause = update(|c| c.set_paused(true));
        Callback::from(move |_: MouseEvent| pause())
    };
    let on_leave = {
        let resume = update(|c| c.set_paused(false));
        Callback::from(move |_: MouseEvent| resume())
    };

    let current = &FEATURED_TESTIMONIALS[carousel.index()];

    html! {
        <div class="carousel" onmouseenter={on_enter} onmouseleave={on_leave}>
            <TestimonialCard testimonial={current} />
            <div class="carousel-controls">
                <button class="icon-btn" onclick={on_prev}>{"‹"}</button>
                <div class="dots">
                    { for (0..FEATURED_TESTIMONIALS.len()).map(|i| {
                        let carousel = carousel.clone();
                        let active = i == carousel.index();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            let mut next = *carousel;
                            next.select(i);
                            carousel.set(next);
                        });
                        html! {
                            <button class={classes!("dot", active.then_some("active"))} {onclick}></button>
                        }
                    }) }
                </div>
                <button class="icon-btn" onclick={on_next}>{"›"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_first() {
        let mut c = Carousel::new(4);
        for _ in 0..4 {
            c.next();
        }
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn prev_wraps_to_last() {
        let mut c = Carousel::new(4);
        c.prev();
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut c = Carousel::new(4);
        c.select(2);
        c.select(9);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn pausing_stops_auto_advance() {
        let mut c = Carousel::new(4);
        assert_eq!(c.auto_advance_ms(), config::CAROUSEL_INTERVAL_MS);
        c.set_paused(true);
        assert_eq!(c.auto_advance_ms(), 0);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut c = Carousel::new(0);
        c.next();
        c.prev();
        assert_eq!(c.index(), 0);
        assert_eq!(c.auto_advance_ms(), 0);
    }
}
