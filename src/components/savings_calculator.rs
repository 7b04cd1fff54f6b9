use web_sys::HtmlInputElement;
use yew::prelude::*;

pub const MIN_PAYMENT: i32 = 50;
pub const MAX_PAYMENT: i32 = 250;

/// Average monthly bill per competitor, used to prefill the slider.
pub const PROVIDER_AVERAGES: [(&str, i32); 6] = [
    ("Claro", 130),
    ("Movistar", 140),
    ("Entel", 125),
    ("Win", 110),
    ("Bitel", 100),
    ("Otro", 120),
];

pub const CALCULATOR_PLANS: [(&str, i32); 3] = [
    ("Básico 100Mbps", 69),
    ("Hogar 200Mbps", 89),
    ("Premium 300Mbps", 119),
];

pub fn provider_average(name: &str) -> Option<i32> {
    PROVIDER_AVERAGES
        .iter()
        .find(|(provider, _)| *provider == name)
        .map(|(_, avg)| *avg)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsInputs {
    pub provider: Option<String>,
    pub current_payment: i32,
    pub plan_price: i32,
}

impl Default for SavingsInputs {
    fn default() -> Self {
        Self {
            provider: None,
            current_payment: 120,
            plan_price: 89,
        }
    }
}

impl SavingsInputs {
    pub fn set_provider(&mut self, name: &str) {
        if let Some(avg) = provider_average(name) {
            self.current_payment = avg;
        }
        self.provider = Some(name.to_string());
    }

    pub fn set_current_payment(&mut self, value: i32) {
        self.current_payment = value.clamp(MIN_PAYMENT, MAX_PAYMENT);
    }

    pub fn set_plan(&mut self, price: i32) {
        self.plan_price = price;
    }

    pub fn calculate(&self) -> Savings {
        calculate(self.current_payment, self.plan_price)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Savings {
    pub monthly: i32,
    pub yearly: i32,
    pub percent: i32,
}

impl Savings {
    pub fn has_savings(&self) -> bool {
        self.monthly > 0
    }
}

/// Savings of switching from `current_payment` to a plan costing `plan_price`.
///
/// Inputs are taken as-is; callers keep `current_payment` within the slider
/// range. A non-positive payment yields a percentage of zero instead of
/// dividing by it.
pub fn calculate(current_payment: i32, plan_price: i32) -> Savings {
    let monthly = current_payment - plan_price;
    let percent = if current_payment > 0 {
        (monthly as f64 / current_payment as f64 * 100.0).round() as i32
    } else {
        0
    };
    Savings {
        monthly,
        yearly: monthly * 12,
        percent,
    }
}

#[function_component(SavingsCalculator)]
pub fn savings_calculator() -> Html {
    let inputs = use_state(SavingsInputs::default);
    let show_results = use_state(|| false);

    let choose_provider = |name: &'static str| {
        let inputs = inputs.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*inputs).clone();
            next.set_provider(name);
            inputs.set(next);
        })
    };

    let on_payment = {
        let inputs = inputs.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(value) = input.value().parse::<i32>() {
                let mut next = (*inputs).clone();
                next.set_current_payment(value);
                inputs.set(next);
            }
        })
    };

    let choose_plan = |price: i32| {
        let inputs = inputs.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*inputs).clone();
            next.set_plan(price);
            inputs.set(next);
        })
    };

    let on_calculate = {
        let show_results = show_results.clone();
        Callback::from(move |_: MouseEvent| show_results.set(true))
    };

    let savings = inputs.calculate();

    html! {
        <div class="glass calculator">
            <h3>{"🧮 Calculadora de Ahorro"}</h3>

            <label>{"¿Cuál es tu proveedor actual?"}</label>
            <div class="provider-grid">
                { for PROVIDER_AVERAGES.iter().map(|(name, _)| html! {
                    <button
                        class={classes!("chip", (inputs.provider.as_deref() == Some(*name)).then_some("selected"))}
                        onclick={choose_provider(*name)}
                    >
                        { *name }
                    </button>
                }) }
            </div>

            <label>{"¿Cuánto pagas actualmente al mes?"}</label>
            <div class="slider-row">
                <input
                    type="range"
                    min={MIN_PAYMENT.to_string()}
                    max={MAX_PAYMENT.to_string()}
                    value={inputs.current_payment.to_string()}
                    oninput={on_payment}
                />
                <span class="slider-value">{ format!("S/{}", inputs.current_payment) }</span>
            </div>

            <label>{"Elige tu nuevo plan"}</label>
            <div class="plan-grid">
                { for CALCULATOR_PLANS.iter().map(|(name, price)| html! {
                    <button
                        class={classes!("chip", (inputs.plan_price == *price).then_some("selected"))}
                        onclick={choose_plan(*price)}
                    >
                        <span>{ *name }</span>
                        <strong class="gradient-text">{ format!("S/{}", price) }</strong>
                    </button>
                }) }
            </div>

            <button class="btn-gradient wide" onclick={on_calculate}>{"Calcular mi ahorro"}</button>

            {
                if !*show_results {
                    html! {}
                } else if savings.has_savings() {
                    html! {
                        <div class="calculator-results fade-in">
                            <div><strong>{ format!("S/{}", savings.monthly) }</strong><small>{"Ahorro mensual"}</small></div>
                            <div><strong>{ format!("S/{}", savings.yearly) }</strong><small>{"Ahorro anual"}</small></div>
                            <div><strong>{ format!("{}%", savings.percent) }</strong><small>{"Menos que hoy"}</small></div>
                        </div>
                    }
                } else {
                    html! {
                        <div class="calculator-results no-savings fade-in">
                            <p>{"Tu plan actual ya es económico, pero con nosotros obtienes más velocidad y fibra simétrica por un precio similar."}</p>
                        </div>
                    }
                }
            }
        </div>
    }
}
