use crate::app::state::use_site_config;
use crate::components::cars_grid::CarsGrid;
use crate::components::filters_bar::FiltersBar;
use flexicars_core::{FilterSelection, Showroom};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub showroom: Showroom,
    pub on_filter: Callback<FilterSelection>,
}

#[function_component(CarsPage)]
pub fn cars_page(props: &Props) -> Html {
    let config = use_site_config();
    let catalog = props.showroom.catalog();
    let owned = |tags: Vec<&str>| tags.into_iter().map(String::from).collect::<Vec<_>>();

    html! {
        <section class="cars-section" id="cars">
            <div class="container">
                <h2 class="section-title">{ "Our Fleet" }</h2>
                <FiltersBar
                    categories={owned(catalog.categories())}
                    brands={owned(catalog.brands())}
                    price_ranges={config.price_ranges.clone()}
                    applied={props.showroom.selection().clone()}
                    on_apply={props.on_filter.clone()}
                />
                <CarsGrid showroom={props.showroom.clone()} />
            </div>
        </section>
    }
}
