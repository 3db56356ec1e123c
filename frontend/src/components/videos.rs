use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::autoplay_video::AutoplayVideo;
use crate::config::{use_site_config, VideoGroup};
use crate::state::section::SectionId;

fn video_group(group: &VideoGroup) -> Html {
    html! {
        <div class="video-section" key={group.title.clone()}>
            <h3>{&group.title}</h3>
            <div class="video-grid">
                {
                    for group.sources.iter().enumerate().map(|(index, src)| html! {
                        <div class="video-wrapper" key={format!("{}-{}", group.label, index)}>
                            <AutoplayVideo
                                src={src.clone()}
                                title={format!("{} {}", group.label, index + 1)}
                                controls=true
                            />
                        </div>
                    })
                }
            </div>
        </div>
    }
}

#[function_component(Videos)]
pub fn videos() -> Html {
    let config = use_site_config();

    html! {
        <AnimatedSection section={SectionId::Videos}>
            <div class="container">
                <div class="section-head">
                    <h2>{"Videos"}</h2>
                    <p>{"See our work."}</p>
                </div>
                { for config.videos.iter().map(video_group) }
            </div>
        </AnimatedSection>
    }
}
