use yew::prelude::*;

use crate::config::use_site_config;

const INSTAGRAM_ICON: &str = "M12 2.2c3.2 0 3.6 0 4.9.1 1.2.1 1.9.3 2.4.5.6.2 1 .5 1.5 1 .5.5.8.9 1 1.5.2.5.4 1.2.5 2.4.1 1.3.1 1.7.1 4.9s0 3.6-.1 4.9c-.1 1.2-.3 1.9-.5 2.4-.2.6-.5 1-1 1.5-.5.5-.9.8-1.5 1-.5.2-1.2.4-2.4.5-1.3.1-1.7.1-4.9.1s-3.6 0-4.9-.1c-1.2-.1-1.9-.3-2.4-.5-.6-.2-1-.5-1.5-1-.5-.5-.8-.9-1-1.5-.2-.5-.4-1.2-.5-2.4C2.2 15.6 2.2 15.2 2.2 12s0-3.6.1-4.9c.1-1.2.3-1.9.5-2.4.2-.6.5-1 1-1.5.5-.5.9-.8 1.5-1 .5-.2 1.2-.4 2.4-.5C8.4 2.2 8.8 2.2 12 2.2m0 1.8c-3.1 0-3.5 0-4.7.1-1 .1-1.6.2-1.9.4-.5.2-.8.4-1.2.8-.4.4-.6.7-.8 1.2-.2.3-.3.9-.4 1.9-.1 1.1-.1 1.5-.1 4.7s0 3.5.1 4.7c.1 1 .2 1.6.4 1.9.2.5.4.8.8 1.2.4.4.7.6 1.2.8.3.2.9.3 1.9.4 1.1.1 1.5.1 4.7.1s3.5 0 4.7-.1c1-.1 1.6-.2 1.9-.4.5-.2.8-.4 1.2-.8.4-.4.6-.7.8-1.2.2-.3.3-.9.4-1.9.1-1.1.1-1.5.1-4.7s0-3.5-.1-4.7c-.1-1-.2-1.6-.4-1.9-.2-.5-.4-.8-.8-1.2-.4-.4-.7-.6-1.2-.8-.3-.2-.9-.3-1.9-.4-1.1-.1-1.5-.1-4.7-.1zM12 6.9a5.1 5.1 0 1 1 0 10.2 5.1 5.1 0 0 1 0-10.2m0 1.8a3.3 3.3 0 1 0 0 6.6 3.3 3.3 0 0 0 0-6.6zM17.5 6.6a1.2 1.2 0 1 1 0 2.4 1.2 1.2 0 0 1 0-2.4z";

const TIKTOK_ICON: &str = "M21 8.5a7 7 0 0 1-4.9-2v8.2a5.7 5.7 0 1 1-5.7-5.7c.4 0 .7 0 1 .1V6.1c-.3 0-.7-.1-1-.1A8.3 8.3 0 1 0 19.7 14V7.9A9.3 9.3 0 0 0 21 8.5z";

const WHATSAPP_ICON: &str = "M20 3.9A10 10 0 0 0 4 19.9l-1.2 4.2 4.3-1.1A10 10 0 1 0 20 3.9zM12 20.4c-1.7 0-3.4-.5-4.9-1.5l-.4-.2-2.6.7.7-2.5-.3-.4A8.2 8.2 0 1 1 12 20.4zm4.6-5.8c-.3-.1-1.7-.8-2-1-.3-.1-.5-.1-.7.2-.2.3-.8 1-1 .1-.2-.1-.9-.3-1.7-1.1-.6-.6-1.1-1.3-1.2-1.5-.1-.2 0-.4.1-.5l.4-.5c.1-.1.1-.3.1-.4 0-.1 0-.3-.1-.4-.1-.1-.7-1.8-1-2.4-.3-.6-.5-.5-.7-.5l-.6-.1c-.2 0-.4.1-.5.3-.2.2-.6.6-.6 1.5s.6 1.8.6 1.9c.1.2 1.2 2.3 2.9 3.3 1.7 1.1 1.7.7 2 .7.3 0 1-.4 1.1-.7.2-.3.2-.6.1-.7-.1-.1-.3-.1-.6-.3z";

#[function_component(FloatingSocials)]
pub fn floating_socials() -> Html {
    let config = use_site_config();
    let links = [
        ("Instagram", config.socials.instagram.clone(), INSTAGRAM_ICON),
        ("TikTok", config.socials.tiktok.clone(), TIKTOK_ICON),
        ("WhatsApp", config.socials.whatsapp.clone(), WHATSAPP_ICON),
    ];

    html! {
        <div class="floating-socials">
            {
                for links.into_iter().map(|(name, href, icon)| html! {
                    <a key={name} href={href} target="_blank" rel="noreferrer" aria-label={name}>
                        <svg viewBox="0 0 24 24" aria-hidden="true">
                            <path fill="currentColor" d={icon} />
                        </svg>
                        <span class="badge">{name}</span>
                    </a>
                })
            }
        </div>
    }
}
