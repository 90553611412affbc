use flexicars_core::{FormKind, FormPhase};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub kind: FormKind,
    pub phase: FormPhase,
    #[prop_or(classes!("btn", "btn-primary"))]
    pub class: Classes,
}

/// Submit control drawn entirely from the form phase.
#[function_component(SubmitButton)]
pub fn submit_button(props: &Props) -> Html {
    let button = props.phase.button(props.kind);
    html! {
        <button
            type="submit"
            class={props.class.clone()}
            disabled={button.disabled}
            aria-busy={button.busy.to_string()}
        >
            if button.busy {
                <span class="spinner"></span>{ " " }
            }
            { button.label }
        </button>
    }
}
