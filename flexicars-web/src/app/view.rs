use crate::app::state::AppState;
use crate::pages::{CarsPage, ContactPage, HomePage, NotFoundPage};
use crate::router::Route;
use flexicars_core::FilterSelection;
use std::rc::Rc;
use yew::prelude::*;

/// Page body for the current route.
pub fn render_page(route: Route, app_state: &AppState) -> Html {
    match route {
        Route::Home => html! { <HomePage catalog={Rc::clone(&app_state.catalog)} /> },
        Route::Cars => {
            let on_filter = {
                let app_state = app_state.clone();
                Callback::from(move |selection: FilterSelection| app_state.apply_filters(selection))
            };
            html! { <CarsPage showroom={(*app_state.showroom).clone()} {on_filter} /> }
        }
        Route::Contact => html! { <ContactPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
