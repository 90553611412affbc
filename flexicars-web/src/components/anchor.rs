use crate::dom;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Fragment including the `#`, e.g. `#featured`.
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// In-page link that scrolls smoothly to its target. A missing target does nothing.
#[function_component(Anchor)]
pub fn anchor(props: &Props) -> Html {
    let onclick = {
        let href = props.href.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if !dom::smooth_scroll_to(&href) {
                log::debug!("no scroll target for {href}");
            }
        })
    };
    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { props.children.clone() }
        </a>
    }
}
