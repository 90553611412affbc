use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::toast::{ConnectivityWatcher, ToastHost};
use crate::hooks::use_visibility_logging;
use crate::router::Route;
use flexicars_core::SiteConfig;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod state;
pub mod view;

pub use state::{AppState, use_app_state, use_site_config};

#[function_component(App)]
pub fn app() -> Html {
    let basename = crate::paths::router_basename().map(AttrValue::from);
    html! {
        <BrowserRouter {basename}>
            <AppInner />
        </BrowserRouter>
    }
}

/// Site shell under a router: navbar, current page, footer, toasts.
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = use_app_state();
    use_visibility_logging();
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let config = Rc::clone(&app_state.config);

    html! {
        <ContextProvider<Rc<SiteConfig>> context={Rc::clone(&config)}>
            <ToastHost timing={config.toast}>
                <ConnectivityWatcher />
                <Navbar scroll_threshold={config.nav_scroll_threshold} />
                <main id="main" role="main">
                    { view::render_page(route, &app_state) }
                </main>
                <Footer />
            </ToastHost>
        </ContextProvider<Rc<SiteConfig>>>
    }
}
