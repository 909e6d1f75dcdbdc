use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found">
            <h1>{"404"}</h1>
            <p>{"Бет табылмады / Страница не найдена"}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                {"Басты бет / На главную"}
            </Link<Route>>
        </main>
    }
}
