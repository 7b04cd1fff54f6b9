use yew::prelude::*;

use crate::components::faq_item::FaqList;
use crate::config;
use crate::content::FAQ_CATEGORIES;

#[function_component(FaqPage)]
pub fn faq_page() -> Html {
    let active = use_state(|| 0usize);

    let category = FAQ_CATEGORIES.get(*active).unwrap_or(&FAQ_CATEGORIES[0]);

    html! {
        <div class="page faq-page">
            <section class="page-hero">
                <h1 class="gradient-text">{"Preguntas Frecuentes"}</h1>
                <p class="muted">{"Resolvemos tus dudas sobre nuestros servicios."}</p>
            </section>

            <section class="section faq-layout">
                <div class="faq-categories">
                    { for FAQ_CATEGORIES.iter().enumerate().map(|(i, c)| {
                        let onclick = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| active.set(i))
                        };
                        html! {
                            <button class={classes!("chip", (i == *active).then_some("selected"))} {onclick}>
                                { c.name }
                            </button>
                        }
                    }) }
                </div>
                <FaqList entries={category.entries} />
            </section>

            <section class="section glass center">
                <h3>{"¿No encontraste tu respuesta?"}</h3>
                <p class="muted">{ format!("Escríbenos a {} o llámanos al {}", config::CONTACT_EMAIL, config::SALES_PHONE_DISPLAY) }</p>
                <a class="btn-gradient" href={config::whatsapp_link("Hola, tengo una consulta")} target="_blank" rel="noopener noreferrer">
                    {"Escríbenos por WhatsApp"}
                </a>
            </section>
        </div>
    }
}
