use flexicars_core::{
    ALL_BRANDS, Catalog, FilterSelection, FormKind, FormPhase, Notice, NoticeTiming, Severity,
    Showroom,
};
use flexicars_web::app::AppInner;
use flexicars_web::components::cars_grid::CarsGrid;
use flexicars_web::components::contact_form::{ContactForm, SuccessBanner};
use flexicars_web::components::filters_bar::FiltersBar;
use flexicars_web::components::footer::Footer;
use flexicars_web::components::navbar::Navbar;
use flexicars_web::components::search_form::SearchForm;
use flexicars_web::components::submit_button::SubmitButton;
use flexicars_web::components::toast::ToastItem;
use flexicars_web::pages::HomePage;
use futures::executor::block_on;
use std::rc::Rc;
use yew::prelude::*;
use yew::LocalServerRenderer;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::Router;

const CARS_JSON: &str = include_str!("../static/assets/data/cars.json");

fn catalog() -> Rc<Catalog> {
    Rc::new(Catalog::from_json(CARS_JSON).expect("bundled catalog"))
}

fn render_grid(showroom: Showroom) -> String {
    let props = flexicars_web::components::cars_grid::Props { showroom };
    block_on(LocalServerRenderer::<CarsGrid>::with_props(props).render())
}

#[test]
fn grid_renders_one_card_per_listing() {
    let html = render_grid(Showroom::new(catalog()));
    assert_eq!(html.matches("car-card").count(), 6);
    assert!(html.contains("Toyota Fortuner 2023"));
    assert!(html.contains("1,800"));
    assert!(html.contains("7 Person"));
    assert!(html.contains("Rent Now"));
    assert!(html.contains("/assets/images/placeholder.svg"));
}

#[test]
fn rerendering_the_same_list_is_identical() {
    let showroom = Showroom::new(catalog());
    assert_eq!(render_grid(showroom.clone()), render_grid(showroom));
}

#[test]
fn grid_shows_only_the_filtered_subset() {
    let showroom = Showroom::new(catalog())
        .with_selection(FilterSelection::from_dropdowns("suv", "All Brands", "Price Range"));
    let html = render_grid(showroom);
    assert_eq!(html.matches("car-card").count(), 2);
    assert!(html.contains("Skoda Kodiaq Platinum 2025"));
    assert!(!html.contains("Audi Q7 Premium"));
}

#[test]
fn empty_result_renders_an_empty_grid() {
    let showroom = Showroom::new(catalog())
        .with_selection(FilterSelection::from_dropdowns("suv", "bmw", "Price Range"));
    let html = render_grid(showroom);
    assert!(html.contains("carsGrid"));
    assert!(!html.contains("car-card"));
}

#[test]
fn submit_button_follows_the_phase() {
    let idle = flexicars_web::components::submit_button::Props {
        kind: FormKind::Search,
        phase: FormPhase::Idle,
        class: classes!("btn"),
    };
    let html = block_on(LocalServerRenderer::<SubmitButton>::with_props(idle).render());
    assert!(html.contains("Search Cars"));
    assert!(!html.contains("disabled"));
    assert!(!html.contains("spinner"));

    let busy = flexicars_web::components::submit_button::Props {
        kind: FormKind::Contact,
        phase: FormPhase::Submitting,
        class: classes!("btn"),
    };
    let html = block_on(LocalServerRenderer::<SubmitButton>::with_props(busy).render());
    assert!(html.contains("Sending..."));
    assert!(html.contains("disabled"));
    assert!(html.contains("spinner"));
}

#[test]
fn filters_bar_lists_sentinels_and_tags() {
    let props = flexicars_web::components::filters_bar::Props {
        categories: vec![String::from("suv"), String::from("hatchback")],
        brands: vec![String::from("toyota")],
        price_ranges: vec![String::from("₹3000+")],
        applied: FilterSelection::default(),
        on_apply: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<FiltersBar>::with_props(props).render());
    let expected = [
        "All Categories",
        "All Brands",
        "Price Range",
        "SUV",
        "Hatchback",
        "₹3000+",
        "Apply Filters",
    ];
    for expected in expected {
        assert!(html.contains(expected), "missing {expected}");
    }
    assert!(!html.contains("Reset"));
}

/// Whether the `<option>` whose text starts with `text` is marked selected.
fn option_selected(html: &str, text: &str) -> bool {
    html.split("<option")
        .skip(1)
        .find_map(|option| {
            let (attrs, rest) = option.split_once('>')?;
            rest.trim_start()
                .starts_with(text)
                .then(|| attrs.contains("selected"))
        })
        .unwrap_or_else(|| panic!("no option {text}"))
}

#[test]
fn filters_bar_reflects_the_applied_selection() {
    let props = flexicars_web::components::filters_bar::Props {
        categories: vec![String::from("suv"), String::from("sedan")],
        brands: vec![String::from("toyota")],
        price_ranges: vec![String::from("₹2000 - ₹3000"), String::from("₹3000+")],
        applied: FilterSelection::from_dropdowns("suv", ALL_BRANDS, "₹3000+"),
        on_apply: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<FiltersBar>::with_props(props).render());
    assert!(option_selected(&html, "SUV"));
    assert!(!option_selected(&html, "Sedan"));
    assert!(!option_selected(&html, "All Categories"));
    assert!(option_selected(&html, "All Brands"));
    assert!(option_selected(&html, "₹3000+"));
    assert!(!option_selected(&html, "Price Range"));
    assert!(html.contains("Reset"));
}

#[test]
fn success_banner_is_dismissible() {
    let props = flexicars_web::components::contact_form::BannerProps {
        notice: Notice {
            id: 1,
            message: String::from("Your message has been sent. We'll get back to you soon."),
            severity: Severity::Success,
        },
        lifetime_ms: 5000,
        on_dismiss: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<SuccessBanner>::with_props(props).render());
    assert!(html.contains("Success!"));
    assert!(html.contains("alert-success"));
    assert!(html.contains("btn-close"));
    assert!(html.contains("has been sent"));
}

#[test]
fn index_loads_bootstrap_and_icons() {
    let index = include_str!("../index.html");
    assert!(index.contains("bootstrap@5"));
    assert!(index.contains("bootstrap.min.css"));
    assert!(index.contains("font-awesome"));
}

#[test]
fn contact_form_has_every_field() {
    let props = flexicars_web::components::contact_form::Props {
        delay_ms: 2000,
        banner_ms: 5000,
    };
    let html = block_on(LocalServerRenderer::<ContactForm>::with_props(props).render());
    for name in ["firstName", "lastName", "email", "phone", "subject", "message"] {
        assert!(html.contains(&format!("name=\"{name}\"")), "missing {name}");
    }
    assert!(html.contains("Send Message"));
    assert!(!html.contains("alert-success"));
}

#[test]
fn search_form_starts_idle_without_clear() {
    let props = flexicars_web::components::search_form::Props { delay_ms: 2000 };
    let html = block_on(LocalServerRenderer::<SearchForm>::with_props(props).render());
    assert!(html.contains("search-form"));
    assert!(html.contains("Search Cars"));
    assert!(html.contains("name=\"pickupDate\""));
    assert!(!html.contains("Clear"));
}

#[test]
fn toast_starts_off_screen_with_its_severity() {
    let props = flexicars_web::components::toast::ToastItemProps {
        notice: Notice {
            id: 1,
            message: String::from("No internet connection"),
            severity: Severity::Warning,
        },
        timing: NoticeTiming::default(),
        on_expire: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ToastItem>::with_props(props).render());
    assert!(html.contains("alert-warning"));
    assert!(html.contains("translateX(100%)"));
    assert!(html.contains("No internet connection"));
}

#[test]
fn home_page_lists_categories_and_testimonials() {
    let props = flexicars_web::pages::home::Props { catalog: catalog() };
    let html = block_on(LocalServerRenderer::<HomePage>::with_props(props).render());
    assert!(html.contains("Rentals from ₹1,800/day"));
    assert!(html.contains("category-card"));
    assert!(html.contains("Hatchback"));
    assert_eq!(html.matches("carousel-item").count(), 3);
    assert_eq!(html.matches("carousel-item active").count(), 1);
}

#[test]
fn home_page_animations_go_through_reveal_blocks() {
    let props = flexicars_web::pages::home::Props { catalog: catalog() };
    let html = block_on(LocalServerRenderer::<HomePage>::with_props(props).render());
    let animated: Vec<&str> = html
        .split('<')
        .filter(|tag| tag.contains("slide-up") || tag.contains("fade-in"))
        .collect();
    assert!(!animated.is_empty());
    for tag in animated {
        assert!(tag.starts_with("div"), "animated element outside a reveal block: <{tag}");
    }
    let hero = html.split("<h1").nth(1).expect("hero title");
    assert!(hero.starts_with(" class=\"hero-title\""));
    let before_hero = html.split("<h1").next().expect("markup before hero");
    assert!(before_hero.trim_end().ends_with("slide-up\">"));
}

#[test]
fn footer_renders() {
    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    assert!(html.contains("<footer"));
}

#[derive(Properties, PartialEq)]
struct AtPath {
    path: AttrValue,
}

fn history_at(path: &AttrValue) -> AnyHistory {
    let history = MemoryHistory::new();
    history.push(path.to_string());
    AnyHistory::from(history)
}

#[function_component(NavbarAt)]
fn navbar_at(props: &AtPath) -> Html {
    let history = history_at(&props.path);
    html! {
        <Router {history}>
            <Navbar scroll_threshold={100.0} />
        </Router>
    }
}

#[function_component(SiteAt)]
fn site_at(props: &AtPath) -> Html {
    let history = history_at(&props.path);
    html! {
        <Router {history}>
            <AppInner />
        </Router>
    }
}

#[test]
fn navbar_marks_the_current_route() {
    let props = AtPath {
        path: AttrValue::from("/cars"),
    };
    let html = block_on(LocalServerRenderer::<NavbarAt>::with_props(props).render());
    assert!(html.contains("nav-link active"));
    assert_eq!(html.matches("nav-link active").count(), 1);
    assert!(!html.contains("scrolled"));
}

#[test]
fn site_shell_routes_to_pages() {
    let contact = block_on(
        LocalServerRenderer::<SiteAt>::with_props(AtPath {
            path: AttrValue::from("/contact"),
        })
        .render(),
    );
    assert!(contact.contains("contact-form-container"));
    assert!(contact.contains("toast-stack"));

    let cars = block_on(
        LocalServerRenderer::<SiteAt>::with_props(AtPath {
            path: AttrValue::from("/cars"),
        })
        .render(),
    );
    assert_eq!(cars.matches("car-card").count(), 6);
    assert!(cars.contains("Apply Filters"));

    let missing = block_on(
        LocalServerRenderer::<SiteAt>::with_props(AtPath {
            path: AttrValue::from("/nowhere"),
        })
        .render(),
    );
    assert!(missing.contains("Page not found"));
}
