use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::use_event_with_window;

use crate::components::{
    about::About, contact::Contact, floating_socials::FloatingSocials, footer::Footer,
    gallery::Gallery, header::Header, hero::Hero, lightbox::LightboxOverlay, services::Services,
    videos::Videos,
};
use crate::config::use_site_config;
use crate::observer::use_active_section;
use crate::state::lightbox::{Lightbox, LightboxAction, LightboxKey};

/// The whole single-page site. Owns the lightbox controller and the
/// active-section tracker and hands them down through props.
#[function_component(Home)]
pub fn home() -> Html {
    let config = use_site_config();
    let lightbox = {
        let len = config.gallery.len();
        use_reducer(move || Lightbox::new(len))
    };
    let active = use_active_section();

    // The controller ignores keys while closed.
    {
        let dispatcher = lightbox.dispatcher();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if let Some(key) = LightboxKey::from_key(&e.key()) {
                dispatcher.dispatch(LightboxAction::Key(key));
            }
        });
    }

    let on_action = {
        let dispatcher = lightbox.dispatcher();
        Callback::from(move |action: LightboxAction| dispatcher.dispatch(action))
    };
    let on_open = on_action.reform(LightboxAction::Open);

    html! {
        <>
            <Header active={active} />

            <main>
                <Hero />
                <About />
                <Services />
                <Videos />
                <Gallery on_open={on_open} />
                <Contact />
            </main>

            <Footer />
            <FloatingSocials />
            <LightboxOverlay lightbox={*lightbox} on_action={on_action} />
        </>
    }
}
