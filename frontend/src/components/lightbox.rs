use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::config::use_site_config;
use crate::state::lightbox::{Lightbox, LightboxAction};

#[derive(Properties, PartialEq)]
pub struct LightboxOverlayProps {
    pub lightbox: Lightbox,
    pub on_action: Callback<LightboxAction>,
}

/// Full-screen image viewer. Renders nothing while closed.
#[function_component(LightboxOverlay)]
pub fn lightbox_overlay(props: &LightboxOverlayProps) -> Html {
    let config = use_site_config();
    let overlay_ref = use_node_ref();

    let Some(index) = props.lightbox.current_index() else {
        return html! {};
    };
    let Some(image) = config.gallery.get(index) else {
        return html! {};
    };

    // Yew delegates events, so compare against the overlay node itself
    // rather than current_target.
    let on_backdrop = {
        let overlay_ref = overlay_ref.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |e: MouseEvent| {
            let clicked = e.target_dyn_into::<Element>();
            if clicked.is_some() && clicked == overlay_ref.cast::<Element>() {
                on_action.emit(LightboxAction::Close);
            }
        })
    };

    let button = |action: LightboxAction| props.on_action.reform(move |_: MouseEvent| action);

    html! {
        <div class="lightbox" ref={overlay_ref} onclick={on_backdrop}>
            <button class="lightbox-btn prev" onclick={button(LightboxAction::Previous)} aria-label="Previous">{"‹"}</button>
            <figure class="lightbox-figure">
                <img src={image.src.clone()} alt={image.alt.clone()} />
                <figcaption>{&image.alt}</figcaption>
            </figure>
            <button class="lightbox-btn next" onclick={button(LightboxAction::Next)} aria-label="Next">{"›"}</button>
            <button class="lightbox-close" onclick={button(LightboxAction::Close)} aria-label="Close">{"✕"}</button>
        </div>
    }
}
