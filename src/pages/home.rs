use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::animation::{
    use_count_up, use_timeline, AnimatedCounter, Reveal, RotatingWord, HERO_TIMELINE, HERO_WORDS,
};
use crate::components::carousel::TestimonialCarousel;
use crate::components::coverage::{CoverageCheck, CoverageMap};
use crate::components::faq_item::FaqList;
use crate::components::lead_form::LeadForm;
use crate::components::plan_comparator::PlanComparator;
use crate::components::savings_calculator::SavingsCalculator;
use crate::components::speed_test::{SpeedTestWidget, Speedometer};
use crate::config;
use crate::content::{HOME_FAQ, HOME_PLANS, SERVICES};
use crate::pages::contact::ContactForm;
use crate::pages::plans::PricingGrid;
use crate::sections::{scroll_to_id, Section};

const HERO_GAUGE_TARGET_MBPS: f64 = 300.0;
const HERO_GAUGE_DURATION_MS: u32 = 2_000;

fn scroll_button(section: Section) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_id(section.id());
    })
}

fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

#[function_component(Hero)]
fn hero() -> Html {
    let revealed = use_timeline(HERO_TIMELINE);
    let gauge = use_count_up(HERO_GAUGE_TARGET_MBPS, HERO_GAUGE_DURATION_MS);
    let cue = |class: &'static str| HERO_TIMELINE.classes_for(class, revealed);

    html! {
        <section id={Section::Inicio.id()} class="hero">
            <div class="hero-copy">
                <span class={cue("hero-badge")}>{"🚀 Fibra óptica 100% simétrica"}</span>
                <h1 class={cue("hero-title")}>
                    {"Internet que "}<span class="gradient-text">{"vuela"}</span>
                    <br />
                    {"para "}<RotatingWord words={&HERO_WORDS[..]} />
                </h1>
                <p class={cue("hero-subtitle")}>
                    {"Hasta 500 Mbps, instalación gratis en 24-48 horas y sin contratos de permanencia."}
                </p>
                <div class={cue("hero-actions")}>
                    <a href="/#planes" class="btn-gradient" onclick={scroll_button(Section::Planes)}>{"Ver planes"}</a>
                    <a href={config::whatsapp_link("Hola, quiero contratar internet")} class="btn-outline" target="_blank" rel="noopener noreferrer">
                        {"Hablar con un asesor"}
                    </a>
                </div>
                <div class="hero-stats">
                    <div><AnimatedCounter target={5000.0} suffix="+" /><small>{"Clientes"}</small></div>
                    <div><AnimatedCounter target={99.9} decimals={1} suffix="%" /><small>{"Uptime"}</small></div>
                    <div><AnimatedCounter target={12.0} suffix="+" /><small>{"Distritos"}</small></div>
                </div>
            </div>
            <div class={cue("hero-gauge")}>
                <div class="glass gauge-card">
                    <Speedometer speed={gauge} />
                    <p class="muted">{"Velocidad real medida en Miraflores"}</p>
                </div>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let pending_scroll = use_mut_ref(|| None::<Timeout>);

    // Defers the scroll so the target section has been laid out.
    let schedule_scroll = {
        let pending_scroll = pending_scroll.clone();
        move || {
            if let Some(section) = Section::from_hash(&current_hash()) {
                debug!("Scrolling to #{}", section.id());
                *pending_scroll.borrow_mut() = Some(Timeout::new(config::HASH_SCROLL_DELAY_MS, move || {
                    scroll_to_id(section.id())
                }));
            }
        }
    };

    {
        let schedule_scroll = schedule_scroll.clone();
        let pending_scroll = pending_scroll.clone();
        use_effect_with_deps(
            move |_| {
                schedule_scroll();
                move || {
                    pending_scroll.borrow_mut().take();
                }
            },
            (),
        );
    }

    use_event_with_window("hashchange", move |_: Event| schedule_scroll());

    html! {
        <div class="home">
            <Hero />

            <section id={Section::Servicios.id()} class="section">
                <h2 class="section-title">{"Nuestros "}<span class="gradient-text">{"Servicios"}</span></h2>
                <div class="card-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <Reveal class="glass service-card">
                            <div class="service-icon">{ service.icon }</div>
                            <h3>{ service.title }</h3>
                            <p class="muted">{ service.summary }</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="section two-col tools">
                <Reveal>
                    <SpeedTestWidget />
                </Reveal>
                <Reveal>
                    <SavingsCalculator />
                </Reveal>
            </section>

            <section id={Section::Planes.id()} class="section">
                <h2 class="section-title">{"Planes "}<span class="gradient-text">{"sin letra chica"}</span></h2>
                <PricingGrid plans={&HOME_PLANS[..]} on_choose={scroll_button(Section::Contacto)} />
                <Reveal class="comparator-wrap">
                    <h3>{"Compara dos planes"}</h3>
                    <PlanComparator />
                </Reveal>
            </section>

            <section class="section two-col coverage">
                <Reveal>
                    <CoverageCheck />
                </Reveal>
                <Reveal>
                    <CoverageMap />
                </Reveal>
            </section>

            <section id={Section::Testimonios.id()} class="section">
                <h2 class="section-title">{"Lo que dicen "}<span class="gradient-text">{"nuestros clientes"}</span></h2>
                <TestimonialCarousel />
            </section>

            <section id={Section::Faq.id()} class="section">
                <h2 class="section-title">{"Preguntas "}<span class="gradient-text">{"frecuentes"}</span></h2>
                <FaqList entries={&HOME_FAQ[..]} />
            </section>

            <section id={Section::Contacto.id()} class="section two-col contact">
                <Reveal>
                    <h2>{"Solicita tu instalación"}</h2>
                    <LeadForm />
                </Reveal>
                <Reveal>
                    <h2>{"¿Tienes dudas? Escríbenos"}</h2>
                    <ContactForm />
                    <div class="contact-lines">
                        <a href={config::SALES_PHONE_TEL}>{ format!("📞 {}", config::SALES_PHONE_DISPLAY) }</a>
                        <a href={format!("mailto:{}", config::SALES_EMAIL)}>{ format!("✉️ {}", config::SALES_EMAIL) }</a>
                        <span>{ format!("📍 {}", config::OFFICE_ADDRESS) }</span>
                    </div>
                </Reveal>
            </section>
        </div>
    }
}
