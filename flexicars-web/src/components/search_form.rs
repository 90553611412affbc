use crate::components::submit_button::SubmitButton;
use crate::data::browser_store;
use crate::dom::{self, BrowserSleep};
use crate::router::Route;
use flexicars_core::{FormKind, FormPhase, SearchQuery, SimulatedTransport, drive};
use web_sys::HtmlFormElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub delay_ms: u32,
}

const CAR_TYPES: [(&str, &str); 4] = [
    ("suv", "SUV"),
    ("sedan", "Sedan"),
    ("luxury", "Luxury"),
    ("hatchback", "Hatchback"),
];

/// Hero quick-search form. Remembers the last search and pre-fills from it.
#[function_component(SearchForm)]
pub fn search_form(props: &Props) -> Html {
    let phase = use_state_eq(FormPhase::default);
    let remembered = use_state_eq(|| None::<SearchQuery>);
    let form_ref = use_node_ref();
    let navigator = use_navigator();

    {
        let remembered = remembered.setter();
        use_effect_with((), move |()| {
            remembered.set(SearchQuery::recall(&browser_store()));
            || ()
        });
    }

    let onsubmit = {
        let phase = phase.clone();
        let remembered = remembered.setter();
        let form_ref = form_ref.clone();
        let delay_ms = props.delay_ms;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if phase.begin().is_err() {
                log::debug!("search already in flight");
                return;
            }
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let query = match dom::form_entries(&form) {
                Ok(entries) => SearchQuery::from_entries(entries),
                Err(e) => {
                    log::error!("could not read search form: {}", dom::js_error_message(&e));
                    return;
                }
            };
            // An empty search leaves nothing worth pre-filling next time.
            if query.is_blank() {
                SearchQuery::forget(&browser_store());
                remembered.set(None);
            } else {
                query.remember(&browser_store());
                remembered.set(Some(query.clone()));
            }

            let phase = phase.setter();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let transport = SimulatedTransport::new(BrowserSleep, delay_ms);
                match drive(&transport, query.into_submission(), |next| phase.set(next)).await {
                    Ok(receipt) => {
                        dom::alert(&receipt.message);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Cars);
                        }
                    }
                    Err(e) => log::error!("search failed: {e}"),
                }
            });
        })
    };

    let on_clear = {
        let remembered = remembered.setter();
        let form_ref = form_ref.clone();
        Callback::from(move |_: MouseEvent| {
            SearchQuery::forget(&browser_store());
            remembered.set(None);
            if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                form.reset();
            }
        })
    };

    let last = (*remembered).clone().unwrap_or_default();
    let field = |name: &str| AttrValue::from(last.get(name).to_string());
    let car_type = last.get("carType").to_string();

    html! {
        <form ref={form_ref} class="search-form" {onsubmit}>
            <div class="row g-3">
                <div class="col-md-3">
                    <label for="location" class="form-label">{ "Location" }</label>
                    <input type="text" class="form-control" id="location" name="location"
                        placeholder="Enter city" value={field("location")} />
                </div>
                <div class="col-md-2">
                    <label for="pickupDate" class="form-label">{ "Pick-up Date" }</label>
                    <input type="date" class="form-control" id="pickupDate" name="pickupDate"
                        value={field("pickupDate")} />
                </div>
                <div class="col-md-2">
                    <label for="returnDate" class="form-label">{ "Return Date" }</label>
                    <input type="date" class="form-control" id="returnDate" name="returnDate"
                        value={field("returnDate")} />
                </div>
                <div class="col-md-2">
                    <label for="carType" class="form-label">{ "Car Type" }</label>
                    <select class="form-select" id="carType" name="carType">
                        <option value="" selected={car_type.is_empty()}>{ "Any" }</option>
                        { for CAR_TYPES.iter().map(|(value, label)| html! {
                            <option value={*value} selected={car_type == *value}>{ *label }</option>
                        }) }
                    </select>
                </div>
                <div class="col-md-3 d-flex align-items-end gap-2">
                    <SubmitButton kind={FormKind::Search} phase={*phase} class={classes!("btn", "btn-primary", "flex-grow-1")} />
                    if remembered.is_some() {
                        <button type="button" class="btn btn-outline-light" onclick={on_clear}>
                            { "Clear" }
                        </button>
                    }
                </div>
            </div>
        </form>
    }
}
