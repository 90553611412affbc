use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section class="not-found">
            <div class="container text-center">
                <h2>{ "Page not found" }</h2>
                <Link<Route> to={Route::Home} classes={classes!("btn", "btn-primary")}>
                    { "Back to Home" }
                </Link<Route>>
            </div>
        </section>
    }
}
