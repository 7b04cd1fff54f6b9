use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use serde::Serialize;
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::config;

pub const TOTAL_STEPS: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardPlan {
    pub id: &'static str,
    pub name: &'static str,
    pub speed: &'static str,
    pub price: u32,
}

pub static WIZARD_PLANS: [WizardPlan; 3] = [
    WizardPlan { id: "basic", name: "Plan Básico", speed: "100 Mbps", price: 69 },
    WizardPlan { id: "home", name: "Plan Hogar", speed: "200 Mbps", price: 89 },
    WizardPlan { id: "premium", name: "Plan Premium", speed: "300 Mbps", price: 119 },
];

pub const TIME_SLOTS: [&str; 5] = [
    "08:00 - 10:00",
    "10:00 - 12:00",
    "12:00 - 14:00",
    "14:00 - 16:00",
    "16:00 - 18:00",
];

/// (value, label) pairs offered in the address step.
pub static DISTRICTS: [(&str, &str); 4] = [
    ("miraflores", "Miraflores"),
    ("san-isidro", "San Isidro"),
    ("surco", "Santiago de Surco"),
    ("la-molina", "La Molina"),
];

const STEP_LABELS: [&str; 4] = ["Plan", "Datos", "Dirección", "Horario"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Plan,
    Name,
    Email,
    Phone,
    Dni,
    Department,
    District,
    Address,
    Reference,
    Date,
    TimeSlot,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeadFormData {
    pub plan: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub dni: String,
    pub department: String,
    pub district: String,
    pub address: String,
    pub reference: String,
    pub date: String,
    pub time_slot: String,
}

impl LeadFormData {
    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Plan => &mut self.plan,
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Dni => &mut self.dni,
            Field::Department => &mut self.department,
            Field::District => &mut self.district,
            Field::Address => &mut self.address,
            Field::Reference => &mut self.reference,
            Field::Date => &mut self.date,
            Field::TimeSlot => &mut self.time_slot,
        }
    }

    pub fn selected_plan(&self) -> Option<&'static WizardPlan> {
        WIZARD_PLANS.iter().find(|plan| plan.id == self.plan)
    }

    pub fn district_label(&self) -> &str {
        match DISTRICTS.iter().find(|(value, _)| *value == self.district) {
            Some((_, label)) => *label,
            None => &self.district,
        }
    }

    fn schedule_chosen(&self) -> bool {
        !self.date.is_empty() && !self.time_slot.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Complete,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("step {step} is missing required fields")]
    StepIncomplete { step: u8 },
    #[error("requests can only be submitted from the last step (currently on step {0})")]
    NotOnFinalStep(u8),
    #[error("the request has already been submitted")]
    AlreadySubmitted,
    #[error("there is no submission in flight")]
    NotSubmitting,
    #[error("a submission is still in flight")]
    SubmissionInFlight,
}

/// Four-step lead capture: plan, personal data, address, installation slot.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadWizard {
    step: u8,
    form: LeadFormData,
    status: SubmissionStatus,
    submitted: Option<LeadFormData>,
}

impl Default for LeadWizard {
    fn default() -> Self {
        Self {
            step: 1,
            form: LeadFormData::default(),
            status: SubmissionStatus::Idle,
            submitted: None,
        }
    }
}

impl LeadWizard {
    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn form(&self) -> &LeadFormData {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Required-field predicate for the current step. Steps 2 and 3 are not gated.
    pub fn step_complete(&self) -> bool {
        match self.step {
            1 => !self.form.plan.is_empty(),
            4 => self.form.schedule_chosen(),
            _ => true,
        }
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        *self.form.slot(field) = value.into();
    }

    pub fn advance(&mut self) -> Result<(), WizardError> {
        if self.status != SubmissionStatus::Idle {
            return Err(WizardError::AlreadySubmitted);
        }
        if !self.step_complete() {
            return Err(WizardError::StepIncomplete { step: self.step });
        }
        if self.step < TOTAL_STEPS {
            self.step += 1;
        }
        Ok(())
    }

    pub fn retreat(&mut self) {
        if self.status == SubmissionStatus::Idle && self.step > 1 {
            self.step -= 1;
        }
    }

    pub fn can_submit(&self) -> bool {
        self.status == SubmissionStatus::Idle
            && self.step == TOTAL_STEPS
            && self.form.schedule_chosen()
    }

    pub fn submit(&mut self) -> Result<(), WizardError> {
        if self.status != SubmissionStatus::Idle {
            return Err(WizardError::AlreadySubmitted);
        }
        if self.step != TOTAL_STEPS {
            return Err(WizardError::NotOnFinalStep(self.step));
        }
        if !self.form.schedule_chosen() {
            return Err(WizardError::StepIncomplete { step: self.step });
        }
        self.submitted = Some(self.form.clone());
        self.status = SubmissionStatus::Submitting;
        Ok(())
    }

    /// Ends the simulated round trip started by [`LeadWizard::submit`] and
    /// returns the form as it was when submitted, ignoring later edits.
    pub fn finish_submission(&mut self) -> Result<&LeadFormData, WizardError> {
        if self.status != SubmissionStatus::Submitting {
            return Err(WizardError::NotSubmitting);
        }
        self.status = SubmissionStatus::Complete;
        self.submitted.as_ref().ok_or(WizardError::NotSubmitting)
    }

    pub fn confirmation(&self) -> Option<&LeadFormData> {
        match self.status {
            SubmissionStatus::Complete => self.submitted.as_ref(),
            _ => None,
        }
    }

    pub fn reset(&mut self) -> Result<(), WizardError> {
        if self.status == SubmissionStatus::Submitting {
            return Err(WizardError::SubmissionInFlight);
        }
        *self = Self::default();
        Ok(())
    }
}

pub enum WizardAction {
    Update(Field, String),
    Advance,
    Retreat,
    Submit,
    FinishSubmission,
    Reset,
}

impl Reducible for LeadWizard {
    type Action = WizardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let outcome = match action {
            WizardAction::Update(field, value) => {
                next.update_field(field, value);
                Ok(())
            }
            WizardAction::Advance => next.advance(),
            WizardAction::Retreat => {
                next.retreat();
                Ok(())
            }
            WizardAction::Submit => next.submit(),
            WizardAction::FinishSubmission => match next.finish_submission() {
                Ok(snapshot) => {
                    match serde_json::to_string(snapshot) {
                        Ok(json) => info!("Installation request received: {}", json),
                        Err(e) => warn!("Could not serialize installation request: {}", e),
                    }
                    Ok(())
                }
                Err(e) => Err(e),
            },
            WizardAction::Reset => next.reset(),
        };

        match outcome {
            Ok(()) => Rc::new(next),
            Err(e) => {
                debug!("Lead wizard stayed on step {}: {}", self.step, e);
                self
            }
        }
    }
}

#[function_component(LeadForm)]
pub fn lead_form() -> Html {
    let wizard = use_reducer(LeadWizard::default);
    let submit_timer = use_mut_ref(|| None::<Timeout>);

    {
        let submit_timer = submit_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    // Dropping the handle cancels a submission still in flight
                    submit_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let on_input = |field: Field| {
        let wizard = wizard.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            wizard.dispatch(WizardAction::Update(field, input.value()));
        })
    };

    let on_select = |field: Field| {
        let wizard = wizard.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            wizard.dispatch(WizardAction::Update(field, select.value()));
        })
    };

    let pick = |field: Field, value: &'static str| {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            wizard.dispatch(WizardAction::Update(field, value.to_string()));
        })
    };

    let on_next = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| wizard.dispatch(WizardAction::Advance))
    };

    let on_back = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| wizard.dispatch(WizardAction::Retreat))
    };

    let on_submit = {
        let wizard = wizard.clone();
        let submit_timer = submit_timer.clone();
        Callback::from(move |_: MouseEvent| {
            if !wizard.can_submit() {
                return;
            }
            wizard.dispatch(WizardAction::Submit);
            let wizard = wizard.clone();
            *submit_timer.borrow_mut() = Some(Timeout::new(config::SUBMIT_LATENCY_MS, move || {
                wizard.dispatch(WizardAction::FinishSubmission);
            }));
        })
    };

    let on_reset = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| wizard.dispatch(WizardAction::Reset))
    };

    if let Some(request) = wizard.confirmation() {
        return html! {
            <div class="glass wizard wizard-complete">
                <div class="wizard-check">{"✓"}</div>
                <h3>{"¡Solicitud Enviada!"}</h3>
                <p>{"Hemos recibido tu solicitud. Un asesor se comunicará contigo pronto para confirmar la instalación."}</p>
                <div class="wizard-summary">
                    <div><span>{"Plan:"}</span>{ request.selected_plan().map(|p| p.name).unwrap_or_default() }</div>
                    <div><span>{"Fecha:"}</span>{ &request.date }</div>
                    <div><span>{"Horario:"}</span>{ &request.time_slot }</div>
                    <div><span>{"Distrito:"}</span>{ request.district_label() }</div>
                </div>
                <button class="btn-gradient" onclick={on_reset}>{"Nueva Solicitud"}</button>
            </div>
        };
    }

    let step = wizard.step();
    let form = wizard.form();
    let submitting = wizard.status() == SubmissionStatus::Submitting;
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();

    let progress = (1..=TOTAL_STEPS).map(|i| {
        let class = if i < step { "done" } else if i == step { "current" } else { "pending" };
        html! {
            <div class={classes!("wizard-dot", class)}>
                { if i < step { "✓".to_string() } else { i.to_string() } }
                <small>{ STEP_LABELS[(i - 1) as usize] }</small>
            </div>
        }
    });

    let body = match step {
        1 => html! {
            <div class="wizard-step">
                <h3>{"Selecciona tu Plan"}</h3>
                { for WIZARD_PLANS.iter().map(|plan| html! {
                    <button
                        class={classes!("plan-option", (form.plan == plan.id).then_some("selected"))}
                        onclick={pick(Field::Plan, plan.id)}
                    >
                        <div>
                            <strong>{ plan.name }</strong>
                            <span>{ format!("{} simétricos", plan.speed) }</span>
                        </div>
                        <div class="gradient-text">{ format!("S/{}", plan.price) }<small>{"/mes"}</small></div>
                    </button>
                }) }
            </div>
        },
        2 => html! {
            <div class="wizard-step">
                <h3>{"Datos Personales"}</h3>
                <label>{"Nombre completo"}</label>
                <input type="text" placeholder="Juan Pérez" value={form.name.clone()} oninput={on_input(Field::Name)} />
                <label>{"Email"}</label>
                <input type="email" placeholder="juan@email.com" value={form.email.clone()} oninput={on_input(Field::Email)} />
                <label>{"Teléfono"}</label>
                <input type="tel" placeholder="999 888 777" value={form.phone.clone()} oninput={on_input(Field::Phone)} />
                <label>{"DNI"}</label>
                <input type="text" placeholder="12345678" maxlength="8" value={form.dni.clone()} oninput={on_input(Field::Dni)} />
            </div>
        },
        3 => html! {
            <div class="wizard-step">
                <h3>{"Dirección de Instalación"}</h3>
                <label>{"Departamento"}</label>
                <select onchange={on_select(Field::Department)}>
                    <option value="" selected={form.department.is_empty()}>{"Seleccionar"}</option>
                    <option value="lima" selected={form.department == "lima"}>{"Lima"}</option>
                </select>
                <label>{"Distrito"}</label>
                <select onchange={on_select(Field::District)}>
                    <option value="" selected={form.district.is_empty()}>{"Seleccionar"}</option>
                    { for DISTRICTS.iter().map(|(value, label)| html! {
                        <option value={*value} selected={form.district == *value}>{ *label }</option>
                    }) }
                </select>
                <label>{"Dirección"}</label>
                <input type="text" placeholder="Av. Principal 123, Dpto 101" value={form.address.clone()} oninput={on_input(Field::Address)} />
                <label>{"Referencia"}</label>
                <input type="text" placeholder="Frente al parque" value={form.reference.clone()} oninput={on_input(Field::Reference)} />
            </div>
        },
        _ => html! {
            <div class="wizard-step">
                <h3>{"Agenda tu Instalación"}</h3>
                <label>{"Fecha preferida"}</label>
                <input type="date" min={today} value={form.date.clone()} disabled={submitting} oninput={on_input(Field::Date)} />
                <label>{"Horario preferido"}</label>
                <div class="slot-grid">
                    { for TIME_SLOTS.iter().map(|slot| html! {
                        <button
                            class={classes!("slot", (form.time_slot == *slot).then_some("selected"))}
                            disabled={submitting}
                            onclick={pick(Field::TimeSlot, *slot)}
                        >
                            { *slot }
                        </button>
                    }) }
                </div>
            </div>
        },
    };

    html! {
        <div class="glass wizard">
            <div class="wizard-progress">{ for progress }</div>
            { body }
            <div class="wizard-nav">
                <button
                    class={classes!("btn-secondary", (step == 1).then_some("invisible"))}
                    disabled={step == 1 || submitting}
                    onclick={on_back}
                >
                    {"Anterior"}
                </button>
                {
                    if step < TOTAL_STEPS {
                        html! {
                            <button class="btn-gradient" disabled={!wizard.step_complete()} onclick={on_next}>
                                {"Siguiente →"}
                            </button>
                        }
                    } else {
                        html! {
                            <button class="btn-gradient" disabled={submitting || !wizard.can_submit()} onclick={on_submit}>
                                { if submitting { "Enviando..." } else { "Confirmar Solicitud ✓" } }
                            </button>
                        }
                    }
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;

    fn wizard_at_schedule_step() -> LeadWizard {
        let mut wizard = LeadWizard::default();
        wizard.update_field(Field::Plan, "home");
        for _ in 1..TOTAL_STEPS {
            wizard.advance().unwrap();
        }
        wizard
    }

    #[test]
    fn starts_on_first_step_with_empty_form() {
        let wizard = LeadWizard::default();
        assert_eq!(wizard.step(), 1);
        assert_eq!(wizard.form(), &LeadFormData::default());
        assert_eq!(wizard.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn plan_step_blocks_until_plan_chosen() {
        let mut wizard = LeadWizard::default();
        assert_eq!(wizard.advance(), Err(WizardError::StepIncomplete { step: 1 }));
        assert_eq!(wizard.step(), 1);

        wizard.update_field(Field::Plan, "basic");
        assert_eq!(wizard.advance(), Ok(()));
        assert_eq!(wizard.step(), 2);
    }

    #[test]
    fn personal_and_address_steps_are_not_gated() {
        let mut wizard = LeadWizard::default();
        wizard.update_field(Field::Plan, "premium");
        wizard.advance().unwrap();
        wizard.advance().unwrap();
        wizard.advance().unwrap();
        assert_eq!(wizard.step(), 4);
        assert!(wizard.form().name.is_empty());
    }

    #[test]
    fn retreat_is_noop_on_first_step() {
        let mut wizard = LeadWizard::default();
        wizard.retreat();
        assert_eq!(wizard.step(), 1);
    }

    #[test]
    fn advance_on_last_step_stays_on_last_step() {
        let mut wizard = wizard_at_schedule_step();
        wizard.update_field(Field::Date, "2026-11-02");
        wizard.update_field(Field::TimeSlot, TIME_SLOTS[1]);
        assert_eq!(wizard.advance(), Ok(()));
        assert_eq!(wizard.step(), TOTAL_STEPS);
    }

    #[test]
    fn submit_requires_date_and_time_slot() {
        let mut wizard = wizard_at_schedule_step();
        assert_eq!(wizard.submit(), Err(WizardError::StepIncomplete { step: 4 }));

        wizard.update_field(Field::Date, "2026-11-02");
        assert!(!wizard.can_submit());
        assert_eq!(wizard.submit(), Err(WizardError::StepIncomplete { step: 4 }));

        wizard.update_field(Field::TimeSlot, TIME_SLOTS[0]);
        assert!(wizard.can_submit());
        assert_eq!(wizard.submit(), Ok(()));
        assert_eq!(wizard.status(), SubmissionStatus::Submitting);
    }

    #[test]
    fn submit_refused_before_last_step() {
        let mut wizard = LeadWizard::default();
        wizard.update_field(Field::Date, "2026-11-02");
        wizard.update_field(Field::TimeSlot, TIME_SLOTS[0]);
        assert_eq!(wizard.submit(), Err(WizardError::NotOnFinalStep(1)));
        assert_eq!(wizard.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn submission_completes_and_reset_restores_initial_state() {
        let mut wizard = wizard_at_schedule_step();
        wizard.update_field(Field::District, "san-isidro");
        wizard.update_field(Field::Date, "2026-11-02");
        wizard.update_field(Field::TimeSlot, TIME_SLOTS[2]);

        assert_eq!(wizard.finish_submission(), Err(WizardError::NotSubmitting));
        wizard.submit().unwrap();
        assert_eq!(wizard.submit(), Err(WizardError::AlreadySubmitted));

        let snapshot = wizard.finish_submission().unwrap().clone();
        assert_eq!(snapshot.selected_plan().map(|p| p.price), Some(89));
        assert_eq!(snapshot.district_label(), "San Isidro");
        assert_eq!(wizard.confirmation(), Some(&snapshot));

        // Complete is terminal for navigation
        wizard.retreat();
        assert_eq!(wizard.advance(), Err(WizardError::AlreadySubmitted));
        assert_eq!(wizard.step(), TOTAL_STEPS);

        assert_eq!(wizard.reset(), Ok(()));
        assert_eq!(wizard, LeadWizard::default());
        assert_eq!(wizard.confirmation(), None);
    }

    #[test]
    fn edits_during_submission_do_not_change_the_request() {
        let mut wizard = wizard_at_schedule_step();
        wizard.update_field(Field::Date, "2026-11-02");
        wizard.update_field(Field::TimeSlot, TIME_SLOTS[2]);
        wizard.submit().unwrap();

        wizard.update_field(Field::Date, "");
        wizard.update_field(Field::TimeSlot, TIME_SLOTS[0]);

        let snapshot = wizard.finish_submission().unwrap().clone();
        assert_eq!(snapshot.date, "2026-11-02");
        assert_eq!(snapshot.time_slot, TIME_SLOTS[2]);
        assert_eq!(wizard.confirmation(), Some(&snapshot));
    }

    #[test]
    fn reset_refused_while_submitting() {
        let mut wizard = wizard_at_schedule_step();
        wizard.update_field(Field::Date, "2026-11-02");
        wizard.update_field(Field::TimeSlot, TIME_SLOTS[1]);
        wizard.submit().unwrap();

        assert_eq!(wizard.reset(), Err(WizardError::SubmissionInFlight));
        assert_eq!(wizard.status(), SubmissionStatus::Submitting);

        let state = Rc::new(wizard);
        let after = state.clone().reduce(WizardAction::Reset);
        assert!(Rc::ptr_eq(&state, &after));
        let after = after.reduce(WizardAction::FinishSubmission);
        assert_eq!(after.status(), SubmissionStatus::Complete);
    }

    #[test]
    fn reducer_keeps_state_on_rejected_action() {
        let initial = Rc::new(LeadWizard::default());
        let after = initial.clone().reduce(WizardAction::Advance);
        assert!(Rc::ptr_eq(&initial, &after));

        let after = after.reduce(WizardAction::Update(Field::Plan, "basic".into()));
        let after = after.reduce(WizardAction::Advance);
        assert_eq!(after.step(), 2);
    }

    #[test]
    fn snapshot_serializes_as_json() {
        let mut form = LeadFormData::default();
        form.plan = "basic".into();
        form.time_slot = TIME_SLOTS[4].into();
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["plan"], "basic");
        assert_eq!(json["time_slot"], "16:00 - 18:00");
    }

    #[derive(Clone, Debug)]
    enum Op {
        Advance,
        Retreat,
        ChoosePlan,
        ClearPlan,
        ChooseSchedule,
        ClearDate,
    }

    impl Arbitrary for Op {
        fn arbitrary(g: &mut Gen) -> Self {
            g.choose(&[
                Op::Advance,
                Op::Retreat,
                Op::ChoosePlan,
                Op::ClearPlan,
                Op::ChooseSchedule,
                Op::ClearDate,
            ])
            .cloned()
            .unwrap_or(Op::Advance)
        }
    }

    #[quickcheck]
    fn navigation_stays_in_bounds_and_respects_gates(ops: Vec<Op>) -> bool {
        let mut wizard = LeadWizard::default();
        for op in ops {
            let before = wizard.step();
            let gate_open = wizard.step_complete();
            match op {
                Op::Advance => {
                    let result = wizard.advance();
                    if !gate_open && (result.is_ok() || wizard.step() != before) {
                        return false;
                    }
                }
                Op::Retreat => wizard.retreat(),
                Op::ChoosePlan => wizard.update_field(Field::Plan, "home"),
                Op::ClearPlan => wizard.update_field(Field::Plan, ""),
                Op::ChooseSchedule => {
                    wizard.update_field(Field::Date, "2026-11-02");
                    wizard.update_field(Field::TimeSlot, TIME_SLOTS[3]);
                }
                Op::ClearDate => wizard.update_field(Field::Date, ""),
            }
            if !(1..=TOTAL_STEPS).contains(&wizard.step()) {
                return false;
            }
        }
        true
    }
}
