use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config::use_site_config;
use crate::state::section::SectionId;

#[function_component(Footer)]
pub fn footer() -> Html {
    let config = use_site_config();
    let year = Local::now().year();
    let map_url = config.map.embed_url();

    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <a href={SectionId::Home.href()} class="brand">
                        <span class="brand-logo">{&config.brand.initials}</span>
                        <span class="brand-name">{&config.brand.name}</span>
                    </a>
                    <p>{"Handmade with love and yarn."}<br />{format!("© {}", year)}</p>
                    <div class="footer-socials">
                        <a href={config.socials.instagram.clone()} target="_blank" rel="noreferrer">{"Instagram"}</a>
                        <a href={config.socials.tiktok.clone()} target="_blank" rel="noreferrer">{"TikTok"}</a>
                        <a href={config.socials.whatsapp.clone()} target="_blank" rel="noreferrer">{"WhatsApp"}</a>
                    </div>
                </div>

                <div class="footer-map">
                    <h3>{&config.map.heading}</h3>
                    {
                        if let Some(url) = map_url {
                            html! {
                                <iframe
                                    title="Business Location Map"
                                    src={url}
                                    loading="lazy"
                                    referrerpolicy="no-referrer-when-downgrade"
                                    allowfullscreen=true
                                ></iframe>
                            }
                        } else {
                            html! {
                                <div class="map-placeholder">
                                    <p><strong>{"Map Is Almost Ready!"}</strong></p>
                                    <p>
                                        {"To show the map, set "}<code>{"map.api_key"}</code>
                                        {" in "}<code>{"site.json"}</code>
                                        {" or build with "}<code>{"GOOGLE_MAPS_EMBED_API_KEY"}</code>{"."}
                                    </p>
                                    <small>{"You can get a key from the Google Cloud Console."}</small>
                                </div>
                            }
                        }
                    }
                </div>
            </div>
        </footer>
    }
}
