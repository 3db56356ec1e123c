use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::config::use_site_config;
use crate::state::section::SectionId;

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub on_open: Callback<usize>,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let config = use_site_config();

    html! {
        <AnimatedSection section={SectionId::Gallery}>
            <div class="container">
                <div class="section-head">
                    <h2>{"Gallery"}</h2>
                    <p>{"A showcase of our recent creations."}</p>
                </div>
                <div class="gallery-grid">
                    {
                        for config.gallery.iter().enumerate().map(|(index, image)| {
                            let onclick = props.on_open.reform(move |_: MouseEvent| index);
                            html! {
                                <button
                                    key={index}
                                    class="gallery-item"
                                    onclick={onclick}
                                    aria-label={format!("Open image {}", index + 1)}
                                >
                                    <img src={image.src.clone()} alt={image.alt.clone()} loading="lazy" />
                                    <span class="glow"></span>
                                </button>
                            }
                        })
                    }
                </div>
            </div>
        </AnimatedSection>
    }
}
