use gloo_timers::callback::Timeout;
use log::{debug, info};
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::animation::Reveal;
use crate::components::coverage::CoverageMap;
use crate::config;

pub const SUBJECTS: [&str; 4] = [
    "Quiero contratar un plan",
    "Soporte Técnico",
    "Facturación",
    "Otros",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Por favor ingresa tu nombre")]
    MissingName,
    #[error("Por favor ingresa tu correo")]
    MissingEmail,
    #[error("El correo no parece válido")]
    InvalidEmail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Default for ContactMessage {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            subject: SUBJECTS[0].to_string(),
            message: String::new(),
        }
    }
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !email.contains('@') {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

/// Contact form. A valid submit clears the fields and shows a confirmation
/// for a few seconds.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let draft = use_state(ContactMessage::default);
    let error = use_state(|| None::<ContactError>);
    let sent = use_state(|| false);
    let confirmation_timer = use_mut_ref(|| None::<Timeout>);

    {
        let confirmation_timer = confirmation_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    confirmation_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let edit = |apply: fn(&mut ContactMessage, String)| {
        let draft = draft.clone();
        move |value: String| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        }
    };

    let on_name = {
        let set = edit(|m, v| m.name = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_phone = {
        let set = edit(|m, v| m.phone = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_email = {
        let set = edit(|m, v| m.email = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_subject = {
        let set = edit(|m, v| m.subject = v);
        Callback::from(move |e: Event| set(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };
    let on_message = {
        let set = edit(|m, v| m.message = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
    };

    let on_submit = {
        let draft = draft.clone();
        let error = error.clone();
        let sent = sent.clone();
        let confirmation_timer = confirmation_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match draft.validate() {
                Ok(()) => {
                    info!("Contact message received: {}", draft.subject);
                    error.set(None);
                    draft.set(ContactMessage::default());
                    sent.set(true);
                    let sent = sent.clone();
                    *confirmation_timer.borrow_mut() = Some(Timeout::new(
                        config::CONTACT_CONFIRMATION_MS,
                        move || sent.set(false),
                    ));
                }
                Err(e) => {
                    debug!("Contact form rejected: {:?}", e);
                    error.set(Some(e));
                }
            }
        })
    };

    html! {
        <form class="glass contact-form" onsubmit={on_submit}>
            <div class="form-row">
                <div class="field">
                    <label>{"Nombre"}</label>
                    <input type="text" placeholder="Juan Pérez" value={draft.name.clone()} oninput={on_name} />
                </div>
                <div class="field">
                    <label>{"Teléfono"}</label>
                    <input type="tel" placeholder="999 888 777" value={draft.phone.clone()} oninput={on_phone} />
                </div>
            </div>
            <div class="field">
                <label>{"Correo Electrónico"}</label>
                <input type="email" placeholder="juan@ejemplo.com" value={draft.email.clone()} oninput={on_email} />
            </div>
            <div class="field">
                <label>{"Asunto"}</label>
                <select onchange={on_subject}>
                    { for SUBJECTS.iter().map(|s| html! {
                        <option value={*s} selected={draft.subject == *s}>{ *s }</option>
                    }) }
                </select>
            </div>
            <div class="field">
                <label>{"Mensaje"}</label>
                <textarea rows="4" placeholder="Escribe tu consulta aquí..." value={draft.message.clone()} oninput={on_message} />
            </div>
            if let Some(e) = &*error {
                <p class="form-error">{ e.to_string() }</p>
            }
            if *sent {
                <p class="form-success fade-in">{"✅ ¡Mensaje enviado! Te contactaremos pronto."}</p>
            }
            <button type="submit" class="btn-gradient wide">{"Enviar Mensaje"}</button>
        </form>
    }
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    html! {
        <div class="page contact-page">
            <section class="page-hero">
                <h1 class="gradient-text">{"Contáctanos"}</h1>
                <p class="muted">{"Estamos aquí para ayudarte. Escríbenos y te responderemos en menos de 24 horas."}</p>
            </section>
            <section class="contact-grid">
                <Reveal class="contact-cards">
                    <a class="glass contact-card" href={config::SALES_PHONE_TEL}>
                        <span>{"📞"}</span>
                        <div><strong>{"Ventas"}</strong><small>{ config::SALES_PHONE_DISPLAY }</small></div>
                    </a>
                    <a class="glass contact-card" href={config::OFFICE_PHONE_TEL}>
                        <span>{"☎️"}</span>
                        <div><strong>{"Oficina"}</strong><small>{ config::OFFICE_PHONE_DISPLAY }</small></div>
                    </a>
                    <a class="glass contact-card" href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                        <span>{"✉️"}</span>
                        <div><strong>{"Email"}</strong><small>{ config::CONTACT_EMAIL }</small></div>
                    </a>
                    <div class="glass contact-card">
                        <span>{"📍"}</span>
                        <div><strong>{ config::OFFICE_ADDRESS }</strong><small>{ config::OFFICE_HOURS }</small></div>
                    </div>
                </Reveal>
                <ContactForm />
            </section>
            <section class="section">
                <CoverageMap />
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str, email: &str) -> ContactMessage {
        ContactMessage {
            name: name.into(),
            email: email.into(),
            ..ContactMessage::default()
        }
    }

    #[test]
    fn name_and_email_required() {
        assert_eq!(message("  ", "a@b.pe").validate(), Err(ContactError::MissingName));
        assert_eq!(message("Ana", "").validate(), Err(ContactError::MissingEmail));
    }

    #[test]
    fn email_needs_at_sign() {
        assert_eq!(message("Ana", "ana.pe").validate(), Err(ContactError::InvalidEmail));
        assert_eq!(message("Ana", "ana@correo.pe").validate(), Ok(()));
    }

    #[test]
    fn default_subject_is_sales() {
        assert_eq!(ContactMessage::default().subject, "Quiero contratar un plan");
    }
}
