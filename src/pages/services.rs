use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animation::Reveal;
use crate::components::speed_test::SpeedTestWidget;
use crate::content::SERVICES;
use crate::Route;

#[function_component(ServicesPage)]
pub fn services_page() -> Html {
    html! {
        <div class="page services-page">
            <section class="page-hero">
                <h1 class="gradient-text">{"Nuestros Servicios"}</h1>
                <p class="muted">{"Internet, televisión y telefonía sobre una sola red de fibra óptica."}</p>
            </section>

            { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                <section id={service.id} class={classes!("section", "service-row", (i % 2 == 1).then_some("reverse"))}>
                    <Reveal class="service-visual">
                        <div class="glass service-icon">{ service.icon }</div>
                    </Reveal>
                    <Reveal class="service-copy">
                        <h2>{ service.title }</h2>
                        <p class="muted">{ service.description }</p>
                        <ul class="features">
                            { for service.features.iter().map(|f| html! { <li>{"✓ "}{ *f }</li> }) }
                        </ul>
                        <Link<Route> to={Route::Plans} classes="btn-gradient">
                            {"Ver planes"}
                        </Link<Route>>
                    </Reveal>
                </section>
            }) }

            <section class="section">
                <Reveal>
                    <SpeedTestWidget />
                </Reveal>
            </section>
        </div>
    }
}
