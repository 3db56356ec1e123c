use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::autoplay_video::AutoplayVideo;
use crate::config::use_site_config;
use crate::state::section::SectionId;

const HIGHLIGHTS: &[&str] = &[
    "Cat Beanies",
    "Ruffle Hats",
    "Classic Beanies",
    "Bucket Hats",
    "Slouchy Beanies",
    "Granny Square Hats",
    "Scrunchies & More",
];

#[function_component(Hero)]
pub fn hero() -> Html {
    let config = use_site_config();

    html! {
        <AnimatedSection section={SectionId::Home} class={classes!("hero")} animated={false}>
            <div class="container hero-grid">
                <div class="hero-copy">
                    <h1>
                        {"Pearl's "}<span class="accent">{"Yarniverse"}</span>
                    </h1>
                    <p>
                        {"A cozy corner of the universe where fibre art meets love and care. \
                          Our mission is to provide quality, handmade products crafted with the \
                          finest materials for our customers. Explore our collection:"}
                    </p>
                    <ul class="hero-highlights">
                        { for HIGHLIGHTS.iter().map(|item| html! { <li key={*item}>{*item}</li> }) }
                    </ul>
                </div>
                <div class="hero-art">
                    <div class="orb orb-1"></div>
                    <div class="orb orb-2"></div>
                    <div class="hero-video-frame">
                        <AutoplayVideo
                            class={classes!("hero-video")}
                            src={config.hero_video.clone()}
                        />
                    </div>
                </div>
            </div>
        </AnimatedSection>
    }
}
