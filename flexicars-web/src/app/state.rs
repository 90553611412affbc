use crate::data;
use flexicars_core::{Catalog, FilterSelection, Showroom, SiteConfig};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Rc<Catalog>,
    pub showroom: UseStateHandle<Showroom>,
    pub config: Rc<SiteConfig>,
}

#[hook]
pub fn use_app_state() -> AppState {
    let loaded = use_memo((), |()| {
        let (catalog, config) = data::load_site();
        (Rc::new(catalog), Rc::new(config))
    });
    let showroom = {
        let catalog = Rc::clone(&loaded.0);
        use_state(move || Showroom::new(catalog))
    };
    AppState {
        catalog: Rc::clone(&loaded.0),
        showroom,
        config: Rc::clone(&loaded.1),
    }
}

impl AppState {
    /// Re-render the grid with a new selection.
    pub fn apply_filters(&self, selection: FilterSelection) {
        log::debug!("applying filters {selection:?}");
        self.showroom.set(self.showroom.with_selection(selection));
    }
}

/// Site configuration from the nearest provider, or the defaults when rendered alone.
#[hook]
pub fn use_site_config() -> Rc<SiteConfig> {
    use_context::<Rc<SiteConfig>>().unwrap_or_default()
}
