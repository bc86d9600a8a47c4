use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found">
            <h1>{"Nothing here"}</h1>
            <Link<Route> to={Route::Home} classes="nav-link">
                {"Back to the start"}
            </Link<Route>>
        </main>
    }
}
