use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod sections;
mod theme;
mod components {
    pub mod animation;
    pub mod carousel;
    pub mod chatbot;
    pub mod coverage;
    pub mod faq_item;
    pub mod lead_form;
    pub mod plan_comparator;
    pub mod savings_calculator;
    pub mod speed_history_graph;
    pub mod speed_test;
}
mod pages {
    pub mod contact;
    pub mod faq;
    pub mod home;
    pub mod not_found;
    pub mod plans;
    pub mod services;
    pub mod testimonials;
}

use components::chatbot::{ChatBot, WhatsAppButton};
use pages::{
    contact::ContactPage,
    faq::FaqPage,
    home::Home,
    not_found::NotFound,
    plans::PlansPage,
    services::ServicesPage,
    testimonials::TestimonialsPage,
};
use sections::{scroll_to_id, scroll_to_top, NavTarget, Section};
use theme::{is_scrolled, use_site, SiteAction, SiteContext, SiteState};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/servicios")]
    Services,
    #[at("/planes")]
    Plans,
    #[at("/testimonios")]
    Testimonials,
    #[at("/faq")]
    Faq,
    #[at("/contacto")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <ServicesPage /> }
        }
        Route::Plans => {
            info!("Rendering Plans page");
            html! { <PlansPage /> }
        }
        Route::Testimonials => {
            info!("Rendering Testimonials page");
            html! { <TestimonialsPage /> }
        }
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <FaqPage /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionLinkProps {
    pub section: Section,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

/// Link to an anchored home section. On the home page it scrolls in place;
/// elsewhere it routes home and sets the hash, which the home page scrolls to.
#[function_component(SectionLink)]
pub fn section_link(props: &SectionLinkProps) -> Html {
    let navigator = use_navigator();
    let on_home = use_location().map_or(false, |l| l.path() == "/");
    let section = props.section;

    let onclick = {
        let extra = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            match section.nav_target(on_home) {
                NavTarget::ScrollTo(id) => scroll_to_id(id),
                NavTarget::Href(_) => {
                    if let Some(navigator) = &navigator {
                        navigator.push(&Route::Home);
                    }
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_hash(section.id());
                    }
                }
            }
            if let Some(extra) = &extra {
                extra.emit(e);
            }
        })
    };

    let href = match section.nav_target(false) {
        NavTarget::Href(href) => href,
        NavTarget::ScrollTo(id) => format!("/#{}", id),
    };

    html! {
        <a {href} class={props.classes.clone()} {onclick}>
            { section.label() }
        </a>
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let site = use_site();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let toggle_theme = {
        let site = site.clone();
        Callback::from(move |_: MouseEvent| site.dispatch(SiteAction::ToggleTheme))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", site.scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="gradient-text">{ config::COMPANY_NAME }</span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for Section::ALL.iter().map(|section| html! {
                        <SectionLink section={*section} classes="nav-link" onclick={close_menu.clone()} />
                    }) }
                    <button class="theme-toggle" onclick={toggle_theme}>
                        { if site.dark_mode { "☀️" } else { "🌙" } }
                    </button>
                    <a href={config::SALES_PHONE_TEL} class="btn-gradient nav-cta">{"Llámanos"}</a>
                </div>
            </div>
        </nav>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h4 class="gradient-text">{ config::COMPANY_NAME }</h4>
                    <p class="muted">{"Internet de fibra óptica, cable TV y telefonía para Lima."}</p>
                </div>
                <div>
                    <h4>{"Secciones"}</h4>
                    { for Section::ALL.iter().map(|section| html! {
                        <SectionLink section={*section} classes="footer-link" />
                    }) }
                </div>
                <div>
                    <h4>{"Páginas"}</h4>
                    <Link<Route> to={Route::Services} classes="footer-link">{"Servicios"}</Link<Route>>
                    <Link<Route> to={Route::Plans} classes="footer-link">{"Planes"}</Link<Route>>
                    <Link<Route> to={Route::Testimonials} classes="footer-link">{"Testimonios"}</Link<Route>>
                    <Link<Route> to={Route::Faq} classes="footer-link">{"FAQ"}</Link<Route>>
                    <Link<Route> to={Route::Contact} classes="footer-link">{"Contacto"}</Link<Route>>
                </div>
                <div>
                    <h4>{"Contacto"}</h4>
                    <a href={config::SALES_PHONE_TEL} class="footer-link">{ config::SALES_PHONE_DISPLAY }</a>
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)} class="footer-link">{ config::CONTACT_EMAIL }</a>
                    <span class="muted">{ config::OFFICE_ADDRESS }</span>
                </div>
            </div>
            <p class="copyright muted">{ format!("© {} {}. Todos los derechos reservados.", chrono::Local::now().format("%Y"), config::COMPANY_NAME) }</p>
        </footer>
    }
}

/// Scrolls to the top whenever the route changes, except for hash links.
#[function_component(ScrollToTop)]
fn scroll_to_top_on_route() -> Html {
    let path = use_location().map(|l| l.path().to_string()).unwrap_or_default();
    use_effect_with_deps(
        move |_| {
            let has_hash = web_sys::window()
                .and_then(|w| w.location().hash().ok())
                .map_or(false, |h| !h.is_empty());
            if !has_hash {
                scroll_to_top();
            }
            || ()
        },
        path,
    );
    html! {}
}

#[function_component]
fn App() -> Html {
    let site = use_reducer(SiteState::default);

    {
        let site = site.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();

                let scroll_callback = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        let scroll_y = window.as_ref().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                        site.dispatch(SiteAction::SetScrolled(is_scrolled(scroll_y)));
                    }) as Box<dyn FnMut()>)
                };

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(window) = &window {
                        let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    html! {
        <ContextProvider<SiteContext> context={site.clone()}>
            <div class={classes!("app", site.theme_class())}>
                <BrowserRouter>
                    <ScrollToTop />
                    <Nav />
                    <main>
                        <Switch<Route> render={switch} />
                    </main>
                    <Footer />
                    <ChatBot />
                    <WhatsAppButton />
                </BrowserRouter>
            </div>
        </ContextProvider<SiteContext>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {} site", config::COMPANY_NAME);
    yew::Renderer::<App>::new().render();
}
