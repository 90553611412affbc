use crate::hooks::use_scrolled;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub scroll_threshold: f64,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let scrolled = use_scrolled(props.scroll_threshold);
    let current = use_route::<Route>();

    html! {
        <nav class={classes!("navbar", "navbar-expand-lg", "fixed-top", scrolled.then_some("scrolled"))}>
            <div class="container">
                <Link<Route> to={Route::Home} classes={classes!("navbar-brand")}>
                    <span class="brand-accent">{ "Flexi" }</span>{ "Cars" }
                </Link<Route>>
                <ul class="navbar-nav ms-auto">
                    { for Route::NAV.into_iter().map(|route| {
                        let active = current == Some(route);
                        html! {
                            <li class="nav-item">
                                <Link<Route> to={route} classes={classes!("nav-link", active.then_some("active"))}>
                                    { route.label() }
                                </Link<Route>>
                            </li>
                        }
                    }) }
                </ul>
            </div>
        </nav>
    }
}
