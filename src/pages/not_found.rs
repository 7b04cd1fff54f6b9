use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="page not-found">
            <h1 class="gradient-text">{"404"}</h1>
            <p class="muted">{"No encontramos esta página."}</p>
            <Link<Route> to={Route::Home} classes="btn-gradient">
                {"Volver al inicio"}
            </Link<Route>>
        </div>
    }
}
