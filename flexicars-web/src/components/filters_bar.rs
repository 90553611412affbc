use flexicars_core::{
    ALL_BRANDS, ALL_CATEGORIES, ANY_PRICE, FilterSelection, PriceRange, Selection,
};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub categories: Vec<String>,
    pub brands: Vec<String>,
    pub price_ranges: Vec<String>,
    /// The selection currently applied to the grid; the dropdowns start on it.
    #[prop_or_default]
    pub applied: FilterSelection,
    pub on_apply: Callback<FilterSelection>,
}

/// Dropdown text for a lower-case tag: `suv` → `SUV`, `hatchback` → `Hatchback`.
#[must_use]
pub fn tag_label(tag: &str) -> String {
    if tag.len() <= 3 {
        return tag.to_uppercase();
    }
    let mut chars = tag.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn tag_value(selection: &Selection, sentinel: &str) -> String {
    match selection {
        Selection::Any => sentinel.to_string(),
        Selection::Only(tag) => tag.clone(),
    }
}

/// The price label that parses to `price`, or the sentinel.
fn price_value(ranges: &[String], price: PriceRange) -> String {
    if price == PriceRange::Any {
        return ANY_PRICE.to_string();
    }
    ranges
        .iter()
        .find(|label| PriceRange::parse(label) == price)
        .cloned()
        .unwrap_or_else(|| ANY_PRICE.to_string())
}

fn dropdown(
    node: &NodeRef,
    label: &'static str,
    sentinel: &'static str,
    options: &[(String, String)],
    current: &str,
) -> Html {
    html! {
        <div class="col-md-3">
            <select ref={node.clone()} class="form-select" aria-label={label}>
                <option value={sentinel} selected={current == sentinel}>{ sentinel }</option>
                { for options.iter().map(|(value, text)| html! {
                    <option value={value.clone()} selected={current == value.as_str()}>
                        { text.clone() }
                    </option>
                }) }
            </select>
        </div>
    }
}

fn selected(node: &NodeRef, sentinel: &str) -> String {
    node.cast::<HtmlSelectElement>()
        .map_or_else(|| sentinel.to_string(), |select| select.value())
}

fn show(node: &NodeRef, value: &str) {
    if let Some(select) = node.cast::<HtmlSelectElement>() {
        select.set_value(value);
    }
}

/// Filter dropdowns. Changes are staged until "Apply Filters" is pressed.
#[function_component(FiltersBar)]
pub fn filters_bar(props: &Props) -> Html {
    let category = use_node_ref();
    let brand = use_node_ref();
    let price = use_node_ref();

    let category_value = tag_value(&props.applied.category, ALL_CATEGORIES);
    let brand_value = tag_value(&props.applied.brand, ALL_BRANDS);
    let price_value = price_value(&props.price_ranges, props.applied.price);

    {
        let (category, brand, price) = (category.clone(), brand.clone(), price.clone());
        use_effect_with(
            (category_value.clone(), brand_value.clone(), price_value.clone()),
            move |(category_value, brand_value, price_value)| {
                show(&category, category_value);
                show(&brand, brand_value);
                show(&price, price_value);
                || ()
            },
        );
    }

    let on_click = {
        let (category, brand, price) = (category.clone(), brand.clone(), price.clone());
        let on_apply = props.on_apply.clone();
        Callback::from(move |_: MouseEvent| {
            on_apply.emit(FilterSelection::from_dropdowns(
                &selected(&category, ALL_CATEGORIES),
                &selected(&brand, ALL_BRANDS),
                &selected(&price, ANY_PRICE),
            ));
        })
    };

    let on_reset = {
        let on_apply = props.on_apply.clone();
        Callback::from(move |_: MouseEvent| on_apply.emit(FilterSelection::default()))
    };

    let tag_options = |tags: &[String]| -> Vec<(String, String)> {
        tags.iter().map(|tag| (tag.clone(), tag_label(tag))).collect()
    };
    let category_options = tag_options(&props.categories);
    let brand_options = tag_options(&props.brands);
    let price_options: Vec<(String, String)> = props
        .price_ranges
        .iter()
        .map(|range| (range.clone(), range.clone()))
        .collect();

    html! {
        <div class="filters-section">
            <div class="row g-3 align-items-center">
                { dropdown(&category, "Category", ALL_CATEGORIES, &category_options, &category_value) }
                { dropdown(&brand, "Brand", ALL_BRANDS, &brand_options, &brand_value) }
                { dropdown(&price, "Price", ANY_PRICE, &price_options, &price_value) }
                <div class="col-md-3 d-flex gap-2">
                    <button type="button" class="btn btn-primary flex-grow-1" onclick={on_click}>
                        { "Apply Filters" }
                    </button>
                    if !props.applied.is_unconstrained() {
                        <button type="button" class="btn btn-outline-secondary" onclick={on_reset}>
                            { "Reset" }
                        </button>
                    }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_title_cased_for_display() {
        assert_eq!(tag_label("suv"), "SUV");
        assert_eq!(tag_label("bmw"), "BMW");
        assert_eq!(tag_label("hatchback"), "Hatchback");
        assert_eq!(tag_label(""), "");
    }

    #[test]
    fn applied_selection_maps_back_to_dropdown_values() {
        let ranges = vec![String::from("₹2000 - ₹3000"), String::from("₹3000+")];
        let applied = FilterSelection::from_dropdowns("suv", ALL_BRANDS, "₹3000+");
        assert_eq!(tag_value(&applied.category, ALL_CATEGORIES), "suv");
        assert_eq!(tag_value(&applied.brand, ALL_BRANDS), ALL_BRANDS);
        assert_eq!(price_value(&ranges, applied.price), "₹3000+");
        assert_eq!(price_value(&ranges, PriceRange::AtLeast(9000)), ANY_PRICE);
        assert_eq!(price_value(&ranges, PriceRange::Any), ANY_PRICE);
    }
}
