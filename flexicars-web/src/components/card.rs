use crate::app::state::use_site_config;
use crate::hooks::{use_hover_lift, use_reveal};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Card kind, e.g. `car-card` or `brand-card`.
    pub class: Classes,
    /// Entry animation class.
    #[prop_or(classes!("fade-in"))]
    pub animation: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// A card that fades in once on first sight and lifts while hovered.
#[function_component(LiftCard)]
pub fn lift_card(props: &Props) -> Html {
    let config = use_site_config();
    let node = use_node_ref();
    let reveal = use_reveal(node.clone(), &config.reveal);
    let lift = use_hover_lift();
    html! {
        <div
            ref={node}
            class={classes!(props.class.clone(), props.animation.clone(), reveal.class())}
            style={lift.style}
            onmouseenter={lift.onmouseenter}
            onmouseleave={lift.onmouseleave}
        >
            { props.children.clone() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(classes!("fade-in"))]
    pub animation: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// A block that plays its entry animation once on first sight, without the hover lift.
#[function_component(RevealBlock)]
pub fn reveal_block(props: &RevealProps) -> Html {
    let config = use_site_config();
    let node = use_node_ref();
    let reveal = use_reveal(node.clone(), &config.reveal);
    html! {
        <div
            ref={node}
            class={classes!(props.class.clone(), props.animation.clone(), reveal.class())}
        >
            { props.children.clone() }
        </div>
    }
}
