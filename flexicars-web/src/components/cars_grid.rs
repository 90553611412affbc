use crate::components::car_card::CarCard;
use flexicars_core::Showroom;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub showroom: Showroom,
}

/// One card per visible listing, keyed by id. An empty result is an empty grid.
#[function_component(CarsGrid)]
pub fn cars_grid(props: &Props) -> Html {
    html! {
        <div class="row g-4" id="carsGrid">
            { for props.showroom.visible().into_iter().map(|item| html! {
                <CarCard key={item.id} item={item.clone()} />
            }) }
        </div>
    }
}
