use yew::prelude::*;

use crate::components::animation::Reveal;
use crate::components::plan_comparator::PlanComparator;
use crate::components::savings_calculator::SavingsCalculator;
use crate::content::{BillingCycle, Cell, PricedPlan, CATALOG_MATRIX, CATALOG_PLANS};

#[derive(Properties, PartialEq)]
pub struct PricingGridProps {
    pub plans: &'static [PricedPlan],
    #[prop_or_default]
    pub on_choose: Option<Callback<MouseEvent>>,
}

/// Plan cards with a monthly / annual switch above them.
#[function_component(PricingGrid)]
pub fn pricing_grid(props: &PricingGridProps) -> Html {
    let cycle = use_state(|| BillingCycle::Monthly);

    let toggle = {
        let cycle = cycle.clone();
        Callback::from(move |_: MouseEvent| cycle.set(cycle.toggled()))
    };

    let annual = *cycle == BillingCycle::Annual;

    html! {
        <div class="pricing">
            <div class="billing-toggle">
                <span class={classes!((!annual).then_some("active"))}>{"Mensual"}</span>
                <button class={classes!("switch", annual.then_some("on"))} onclick={toggle}>
                    <span class="knob"></span>
                </button>
                <span class={classes!(annual.then_some("active"))}>{"Anual"}</span>
                <span class="badge">{"Ahorra hasta 15%"}</span>
            </div>
            <div class="pricing-grid">
                { for props.plans.iter().map(|plan| html! {
                    <div class={classes!("glass", "price-card", plan.highlighted.then_some("highlighted"))}>
                        if plan.highlighted {
                            <div class="ribbon">{"Más Popular"}</div>
                        }
                        <h3>{ plan.name }</h3>
                        <p class="speed gradient-text">{ plan.speed }</p>
                        <div class="price">
                            <span class="amount">{ format!("S/{}", plan.price(*cycle)) }</span>
                            <span class="muted">{"/mes"}</span>
                        </div>
                        if annual && plan.annual_discount() > 0 {
                            <p class="savings">{ format!("Ahorras S/{}/año", plan.annual_discount()) }</p>
                        }
                        <ul class="features">
                            { for plan.features.iter().map(|f| html! { <li>{"✓ "}{ *f }</li> }) }
                        </ul>
                        <button
                            class={if plan.highlighted { "btn-gradient wide" } else { "btn-outline wide" }}
                            onclick={props.on_choose.clone()}
                        >
                            {"Contratar ahora"}
                        </button>
                    </div>
                }) }
            </div>
        </div>
    }
}

fn render_cell(cell: Cell) -> Html {
    match cell {
        Cell::Yes => html! { <span class="yes">{"✓"}</span> },
        Cell::No => html! { <span class="no">{"✗"}</span> },
        Cell::Text(text) => html! { <span>{ text }</span> },
    }
}

#[function_component(PlansPage)]
pub fn plans_page() -> Html {
    html! {
        <div class="page plans-page">
            <section class="page-hero">
                <h1 class="gradient-text">{"Planes a tu medida"}</h1>
                <p class="muted">{"Fibra óptica simétrica, sin permanencia y con instalación gratis."}</p>
            </section>

            <section class="section">
                <PricingGrid plans={&CATALOG_PLANS[..]} />
            </section>

            <section class="section">
                <Reveal>
                    <h2>{"Compara las características"}</h2>
                    <div class="glass matrix">
                        <table>
                            <thead>
                                <tr>
                                    <th>{"Característica"}</th>
                                    { for CATALOG_PLANS.iter().map(|p| html! {
                                        <th class={classes!(p.highlighted.then_some("accent"))}>{ p.name }</th>
                                    }) }
                                </tr>
                            </thead>
                            <tbody>
                                { for CATALOG_MATRIX.iter().map(|(feature, cells)| html! {
                                    <tr>
                                        <td class="muted">{ *feature }</td>
                                        { for cells.iter().map(|c| html! { <td>{ render_cell(*c) }</td> }) }
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                </Reveal>
            </section>

            <section class="section two-col">
                <Reveal>
                    <h2>{"¿Cuál te conviene?"}</h2>
                    <PlanComparator />
                </Reveal>
                <Reveal>
                    <SavingsCalculator />
                </Reveal>
            </section>
        </div>
    }
}
