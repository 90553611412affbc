use crate::app::state::use_site_config;
use crate::components::anchor::Anchor;
use crate::components::card::{LiftCard, RevealBlock};
use crate::components::carousel::{Carousel, Slide};
use crate::components::filters_bar::tag_label;
use crate::components::search_form::SearchForm;
use crate::data::testimonials;
use crate::format::fmt_currency;
use flexicars_core::Catalog;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub catalog: Rc<Catalog>,
}

const FEATURES: [(&str, &str, &str); 3] = [
    ("fas fa-shield-alt", "Fully Insured", "Every rental includes comprehensive cover."),
    ("fas fa-headset", "24/7 Support", "Roadside help whenever you need it."),
    ("fas fa-tags", "Best Prices", "Daily rates with no hidden charges."),
];

#[function_component(HomePage)]
pub fn home_page(props: &Props) -> Html {
    let config = use_site_config();
    let quotes = use_memo((), |()| testimonials());
    let from_price = props
        .catalog
        .items()
        .iter()
        .map(|item| item.price)
        .min()
        .map(|price| fmt_currency(u64::from(price), &config.currency));

    html! {
        <>
            <section class="hero" id="hero">
                <div class="container">
                    <RevealBlock animation={classes!("slide-up")}>
                        <h1 class="hero-title">{ "Find Your Perfect Ride" }</h1>
                    </RevealBlock>
                    if let Some(from_price) = from_price {
                        <p class="hero-subtitle">{ format!("Rentals from {from_price}/day") }</p>
                    }
                    <SearchForm delay_ms={config.search_delay_ms} />
                    <Anchor href="#categories" class={classes!("btn", "btn-outline-light", "mt-4")}>
                        { "Browse Categories" }
                    </Anchor>
                </div>
            </section>

            <section class="categories" id="categories">
                <div class="container">
                    <h2 class="section-title">{ "Categories" }</h2>
                    <div class="row g-4">
                        { for props.catalog.categories().into_iter().map(|category| html! {
                            <div class="col-md-3" key={category}>
                                <LiftCard class={classes!("category-card")}>
                                    <h5>{ tag_label(category) }</h5>
                                </LiftCard>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="brands" id="brands">
                <div class="container">
                    <h2 class="section-title">{ "Top Brands" }</h2>
                    <div class="row g-4">
                        { for props.catalog.brands().into_iter().map(|brand| html! {
                            <div class="col-md-2" key={brand}>
                                <LiftCard class={classes!("brand-card")} animation={classes!("slide-up")}>
                                    <span>{ tag_label(brand) }</span>
                                </LiftCard>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="features" id="features">
                <div class="container">
                    <div class="row g-4">
                        { for FEATURES.iter().map(|(icon, title, text)| html! {
                            <div class="col-md-4">
                                <LiftCard class={classes!("feature-card")}>
                                    <i class={*icon}></i>
                                    <h5>{ *title }</h5>
                                    <p>{ *text }</p>
                                </LiftCard>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="testimonials" id="testimonials">
                <div class="container">
                    <h2 class="section-title">{ "What Our Customers Say" }</h2>
                    <Carousel
                        id="testimonialsCarousel"
                        interval_ms={config.carousel.interval_ms}
                        wrap={config.carousel.wrap}
                    >
                        { for quotes.iter().map(|t| html_nested! {
                            <Slide>
                                <blockquote class="testimonial">
                                    <p>{ t.quote.clone() }</p>
                                    <footer>{ format!("{}, {}", t.author, t.city) }</footer>
                                </blockquote>
                            </Slide>
                        }) }
                    </Carousel>
                </div>
            </section>
        </>
    }
}
