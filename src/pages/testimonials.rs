use yew::prelude::*;

use crate::components::animation::{AnimatedCounter, Reveal};
use crate::components::carousel::{TestimonialCard, TestimonialCarousel};
use crate::content::{CUSTOMER_REVIEWS, STATS};

#[function_component(TestimonialsPage)]
pub fn testimonials_page() -> Html {
    html! {
        <div class="page testimonials-page">
            <section class="page-hero">
                <h1 class="gradient-text">{"Lo que dicen nuestros clientes"}</h1>
                <p class="muted">{"La confianza se gana con hechos. Mira por qué miles de limeños nos eligen."}</p>
                <div class="stats-grid">
                    { for STATS.iter().map(|(value, label)| html! {
                        <div class="glass stat">
                            <strong class="gradient-text">{ *value }</strong>
                            <small>{ *label }</small>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section">
                <TestimonialCarousel />
            </section>

            <section class="section">
                <div class="review-grid">
                    { for CUSTOMER_REVIEWS.iter().map(|review| html! {
                        <Reveal>
                            <TestimonialCard testimonial={review} />
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="section center">
                <h2>
                    <AnimatedCounter target={98.0} suffix="%" />
                    {" de clientes nos recomiendan"}
                </h2>
            </section>
        </div>
    }
}
