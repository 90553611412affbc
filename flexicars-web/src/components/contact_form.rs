use crate::components::submit_button::SubmitButton;
use crate::components::toast::{NoticeAction, NoticeFeed};
use crate::dom::{self, BrowserSleep};
use flexicars_core::{
    ContactFields, FormKind, FormPhase, Notice, NoticeId, Severity, SimulatedTransport, Sleep,
    Submission, drive, validate,
};
use web_sys::HtmlFormElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub delay_ms: u32,
    pub banner_ms: u32,
}

#[derive(Properties, PartialEq)]
pub struct BannerProps {
    pub notice: Notice,
    pub lifetime_ms: u32,
    pub on_dismiss: Callback<NoticeId>,
}

/// Dismissible success banner that removes itself after `lifetime_ms`.
#[function_component(SuccessBanner)]
pub fn success_banner(props: &BannerProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        let lifetime_ms = props.lifetime_ms;
        use_effect_with(props.notice.id, move |id| {
            let id = *id;
            wasm_bindgen_futures::spawn_local(async move {
                BrowserSleep.sleep(lifetime_ms).await;
                on_dismiss.emit(id);
            });
            || ()
        });
    }
    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.notice.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };
    html! {
        <div
            class={classes!("alert", props.notice.severity.class(), "alert-dismissible", "fade", "show")}
            role="alert"
        >
            <strong>{ "Success!" }</strong>{ " " }{ props.notice.message.clone() }
            <button type="button" class="btn-close" aria-label="Close" onclick={on_close}></button>
        </div>
    }
}

/// Contact form: validates, simulates sending, then shows a success banner and clears.
#[function_component(ContactForm)]
pub fn contact_form(props: &Props) -> Html {
    let phase = use_state_eq(FormPhase::default);
    let banners = use_reducer(NoticeFeed::default);
    let form_ref = use_node_ref();

    let onsubmit = {
        let phase = phase.clone();
        let banners = banners.dispatcher();
        let form_ref = form_ref.clone();
        let delay_ms = props.delay_ms;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if phase.begin().is_err() {
                return;
            }
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let fields = match dom::form_entries(&form) {
                Ok(entries) => ContactFields::from_entries(&entries),
                Err(e) => {
                    log::error!("could not read contact form: {}", dom::js_error_message(&e));
                    return;
                }
            };
            if let Err(problem) = validate(&fields) {
                log::debug!("contact form rejected: {problem:?}");
                dom::alert(&problem.to_string());
                return;
            }

            let phase = phase.setter();
            let banners = banners.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let transport = SimulatedTransport::new(BrowserSleep, delay_ms);
                let submission = Submission::new(FormKind::Contact, fields.to_entries());
                match drive(&transport, submission, |next| phase.set(next)).await {
                    Ok(receipt) => {
                        banners.dispatch(NoticeAction::Push {
                            message: receipt.message,
                            severity: Severity::Success,
                        });
                        form.reset();
                    }
                    Err(e) => log::error!("contact submission failed: {e}"),
                }
            });
        })
    };

    let on_dismiss = {
        let banners = banners.dispatcher();
        Callback::from(move |id: NoticeId| banners.dispatch(NoticeAction::Expire(id)))
    };

    html! {
        <div class="contact-form-container">
            { for banners.notices().iter().rev().map(|notice| html! {
                <SuccessBanner
                    key={notice.id}
                    notice={notice.clone()}
                    lifetime_ms={props.banner_ms}
                    on_dismiss={on_dismiss.clone()}
                />
            }) }
            <form ref={form_ref} class="contact-form" novalidate=true {onsubmit}>
                <div class="row g-3">
                    <div class="col-md-6">
                        <label for="firstName" class="form-label">{ "First Name" }</label>
                        <input type="text" class="form-control" id="firstName" name="firstName" />
                    </div>
                    <div class="col-md-6">
                        <label for="lastName" class="form-label">{ "Last Name" }</label>
                        <input type="text" class="form-control" id="lastName" name="lastName" />
                    </div>
                    <div class="col-md-6">
                        <label for="email" class="form-label">{ "Email" }</label>
                        <input type="email" class="form-control" id="email" name="email" />
                    </div>
                    <div class="col-md-6">
                        <label for="phone" class="form-label">{ "Phone" }</label>
                        <input type="tel" class="form-control" id="phone" name="phone" />
                    </div>
                    <div class="col-12">
                        <label for="subject" class="form-label">{ "Subject" }</label>
                        <input type="text" class="form-control" id="subject" name="subject" />
                    </div>
                    <div class="col-12">
                        <label for="message" class="form-label">{ "Message" }</label>
                        <textarea class="form-control" id="message" name="message" rows="5"></textarea>
                    </div>
                    <div class="col-12">
                        <SubmitButton kind={FormKind::Contact} phase={*phase} />
                    </div>
                </div>
            </form>
        </div>
    }
}
