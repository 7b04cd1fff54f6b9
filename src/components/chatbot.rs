use log::debug;
use yew::prelude::*;

use crate::config;

pub const GREETING: &str =
    "¡Hola! 👋 Soy el asistente virtual de EVELYN SAC. ¿En qué puedo ayudarte?";

pub const QUICK_REPLY_COUNT: usize = 4;

pub struct CannedAnswer {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static CANNED_ANSWERS: [CannedAnswer; 6] = [
    CannedAnswer {
        question: "¿Cuál es la velocidad máxima?",
        answer: "Nuestro plan Premium ofrece hasta 300 Mbps simétricos por fibra óptica.",
    },
    CannedAnswer {
        question: "¿La instalación tiene costo?",
        answer: "¡La instalación es totalmente gratis en todos nuestros planes!",
    },
    CannedAnswer {
        question: "¿En cuánto tiempo instalan?",
        answer: "Instalamos en 24 a 48 horas después de confirmar tu solicitud.",
    },
    CannedAnswer {
        question: "¿Incluye router?",
        answer: "Sí, todos los planes incluyen un router WiFi 6 de última generación.",
    },
    CannedAnswer {
        question: "¿Hay contrato de permanencia?",
        answer: "No, ningún plan tiene permanencia. Puedes cancelar cuando quieras.",
    },
    CannedAnswer {
        question: "¿Cómo puedo pagar?",
        answer: "Aceptamos tarjeta, transferencia bancaria, Yape y Plin.",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: &'static str,
    pub from_bot: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    show_quick_replies: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage { text: GREETING, from_bot: true }],
            show_quick_replies: true,
        }
    }
}

impl ChatSession {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn show_quick_replies(&self) -> bool {
        self.show_quick_replies
    }

    pub fn quick_replies(&self) -> &'static [CannedAnswer] {
        &CANNED_ANSWERS[..QUICK_REPLY_COUNT]
    }

    /// Appends the question and its canned answer. Unknown indices are ignored.
    pub fn ask(&mut self, index: usize) -> bool {
        let Some(entry) = CANNED_ANSWERS.get(index) else {
            return false;
        };
        self.messages.push(ChatMessage { text: entry.question, from_bot: false });
        self.messages.push(ChatMessage { text: entry.answer, from_bot: true });
        self.show_quick_replies = false;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[function_component(ChatBot)]
pub fn chat_bot() -> Html {
    let open = use_state(|| false);
    let session = use_state(ChatSession::default);

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let ask = |index: usize| {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*session).clone();
            if next.ask(index) {
                debug!("Chatbot answered question {}", index);
                session.set(next);
            }
        })
    };

    let reset = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*session).clone();
            next.reset();
            session.set(next);
        })
    };

    html! {
        <div class="chatbot">
            if *open {
                <div class="chat-window glass">
                    <div class="chat-header">
                        <strong>{"Asistente EVELYN"}</strong>
                        <button class="icon-btn" onclick={reset}>{"↺"}</button>
                    </div>
                    <div class="chat-messages">
                        { for session.messages().iter().map(|m| html! {
                            <div class={classes!("chat-bubble", if m.from_bot { "bot" } else { "user" })}>
                                { m.text }
                            </div>
                        }) }
                    </div>
                    if session.show_quick_replies() {
                        <div class="quick-replies">
                            { for session.quick_replies().iter().enumerate().map(|(i, entry)| html! {
                                <button class="chip" onclick={ask(i)}>{ entry.question }</button>
                            }) }
                        </div>
                    } else {
                        <div class="quick-replies">
                            { for CANNED_ANSWERS.iter().enumerate().skip(QUICK_REPLY_COUNT).map(|(i, entry)| html! {
                                <button class="chip" onclick={ask(i)}>{ entry.question }</button>
                            }) }
                        </div>
                    }
                </div>
            }
            <button class="chat-toggle btn-gradient" onclick={toggle}>
                { if *open { "✕" } else { "💬" } }
            </button>
        </div>
    }
}

#[function_component(WhatsAppButton)]
pub fn whatsapp_button() -> Html {
    let href = config::whatsapp_link("Hola, quiero información sobre sus planes de internet");
    html! {
        <a class="whatsapp-float" href={href} target="_blank" rel="noopener noreferrer">
            {"WhatsApp"}
        </a>
    }
}
