use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::config::use_site_config;
use crate::state::section::SectionId;

const VALUES: &[(&str, &str)] = &[
    (
        "Quality",
        "We only use the finest, softest materials to ensure our products are cozy and long-lasting.",
    ),
    (
        "Creativity",
        "We believe everyone has a creative spark. We are here to inspire it with unique designs and custom options.",
    ),
    (
        "Community",
        "We are building a community of like-minded crafters and fashion lovers who share our passion for yarn and crochet.",
    ),
];

#[function_component(About)]
pub fn about() -> Html {
    let config = use_site_config();

    html! {
        <AnimatedSection section={SectionId::About}>
            <div class="container">
                <div class="about-grid">
                    <div class="about-story">
                        <div class="section-head">
                            <h2>{"Our Story"}</h2>
                        </div>
                        <p>
                            {"Pearl's Yarniverse was founded by Kamogelo \"Pearl\" Chipape, a passionate \
                              crocheter with a vision to share the joy of yarn crafting with the world. \
                              What started as a hobby quickly blossomed into a mission to create beautiful, \
                              high-quality, and cozy fibre art that brings warmth and style to everyone."}
                        </p>
                        <p>
                            {"Every piece is made with love, care, and a meticulous attention to detail, \
                              ensuring that you receive a product that is not only beautiful but also \
                              durable and comfortable. We believe in the magic of handmade items and the \
                              personal touch they bring."}
                        </p>
                    </div>
                    <div class="about-image-wrapper">
                        <img src={config.brand.logo.clone()} alt="A person crocheting with colorful yarn" />
                    </div>
                </div>
                <div class="values-section">
                    <div class="section-head">
                        <h2>{"Our Values"}</h2>
                        <p>{"Craftsmanship, creativity, and customer delight are at the heart of every stitch."}</p>
                    </div>
                    <div class="values-grid">
                        {
                            for VALUES.iter().map(|(title, text)| html! {
                                <div class="about-card" key={*title}>
                                    <h3>{*title}</h3>
                                    <p>{*text}</p>
                                </div>
                            })
                        }
                    </div>
                </div>
            </div>
        </AnimatedSection>
    }
}
