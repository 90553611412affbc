use crate::app::state::use_site_config;
use crate::components::contact_form::ContactForm;
use yew::prelude::*;

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let config = use_site_config();
    html! {
        <section class="contact-section" id="contact">
            <div class="container">
                <div class="row g-5">
                    <div class="col-lg-4">
                        <h2 class="section-title">{ "Get in Touch" }</h2>
                        <p>{ "Questions about a booking? Send us a message and we'll reply within a day." }</p>
                        <ul class="contact-info list-unstyled">
                            <li><i class="fas fa-phone"></i>{ " +91 98765 43210" }</li>
                            <li><i class="fas fa-envelope"></i>{ " hello@flexicars.in" }</li>
                        </ul>
                    </div>
                    <div class="col-lg-8">
                        <ContactForm
                            delay_ms={config.contact_delay_ms}
                            banner_ms={config.success_notice_ms}
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
