use crate::components::card::LiftCard;
use crate::dom;
use crate::format::fmt_price;
use crate::paths::asset_url;
use flexicars_core::{Item, rental_message};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub item: Item,
}

#[function_component(CarCard)]
pub fn car_card(props: &Props) -> Html {
    let item = &props.item;
    let on_rent = {
        let id = item.id;
        Callback::from(move |_: MouseEvent| {
            log::info!("rent requested for listing {id}");
            dom::alert(&rental_message(id));
        })
    };
    let specs = &item.specs;
    html! {
        <div class="col-lg-4 col-md-6">
            <LiftCard class={classes!("car-card")}>
                <div class="car-image">
                    <img src={asset_url(&item.image)} alt={item.name.clone()} class="img-fluid" />
                </div>
                <div class="car-details">
                    <h5 class="car-name">{ item.name.clone() }</h5>
                    <div class="car-price">
                        <span class="price">{ fmt_price(item.price) }</span>
                        <span class="period">{ "/day" }</span>
                    </div>
                    <div class="car-specs">
                        <div class="spec-item">
                            <i class="fas fa-tachometer-alt"></i>
                            <span>{ specs.mileage.to_string() }</span>
                        </div>
                        <div class="spec-item">
                            <i class="fas fa-cog"></i>
                            <span>{ specs.transmission.label() }</span>
                        </div>
                        <div class="spec-item">
                            <i class="fas fa-users"></i>
                            <span>{ specs.seats.clone() }</span>
                        </div>
                        <div class="spec-item">
                            <i class="fas fa-bolt"></i>
                            <span>{ specs.fuel.label() }</span>
                        </div>
                    </div>
                    <div class="car-rating">
                        <span class="rating-star">{ "★" }</span>
                        <span class="rating-value">{ item.rating_label() }</span>
                    </div>
                    <button
                        type="button"
                        class="btn btn-primary w-100 mt-3"
                        data-car-id={item.id.to_string()}
                        onclick={on_rent}
                    >
                        { "Rent Now" }
                    </button>
                </div>
            </LiftCard>
        </div>
    }
}
