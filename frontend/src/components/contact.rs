use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::config::use_site_config;
use crate::state::section::SectionId;

#[function_component(Contact)]
pub fn contact() -> Html {
    let config = use_site_config();
    let contact = &config.contact;

    html! {
        <AnimatedSection section={SectionId::Contact}>
            <div class="container contact-grid">
                <div class="contact-details">
                    <div class="section-head">
                        <h2>{"Get In Touch"}</h2>
                        <p>{"Ready for a custom order or have a question? Contact us!"}</p>
                    </div>
                    <ul class="contact-points">
                        <li>
                            <strong>{"Email:"}</strong>
                            <a href={config.socials.email.clone()}>{&contact.email_label}</a>
                        </li>
                        <li>
                            <strong>{"WhatsApp:"}</strong>
                            <a href={config.socials.whatsapp.clone()} target="_blank" rel="noreferrer">
                                {&contact.whatsapp_label}
                            </a>
                        </li>
                        <li><strong>{"Based in:"}</strong>{" "}{&contact.location}</li>
                    </ul>
                </div>
                <div class="contact-image-wrapper">
                    <img src={contact.image.src.clone()} alt={contact.image.alt.clone()} />
                </div>
            </div>
        </AnimatedSection>
    }
}
