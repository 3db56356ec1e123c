use log::debug;
use web_sys::HtmlMediaElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AutoplayVideoProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub controls: bool,
}

/// Browsers only autoplay muted media, and the `muted` attribute set after
/// element creation never reaches the `muted` property.
fn mute(video: &HtmlMediaElement) {
    video.set_default_muted(true);
    video.set_muted(true);
}

/// Looping, muted video that starts on mount.
#[function_component(AutoplayVideo)]
pub fn autoplay_video(props: &AutoplayVideoProps) -> Html {
    let video_ref = use_node_ref();

    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(video) = video_ref.cast::<HtmlMediaElement>() {
                    mute(&video);
                    if let Err(err) = video.play() {
                        debug!("Video did not start: {:?}", err);
                    }
                }
                || ()
            },
            props.src.clone(),
        );
    }

    html! {
        <video
            ref={video_ref}
            class={props.class.clone()}
            src={props.src.clone()}
            title={props.title.clone()}
            autoplay=true
            loop=true
            muted=true
            playsinline=true
            controls={props.controls}
        />
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn muted_attribute_alone_leaves_video_audible() {
        let document = web_sys::window().unwrap().document().unwrap();
        let video: HtmlMediaElement = document
            .create_element("video")
            .unwrap()
            .dyn_into()
            .unwrap();

        video.set_attribute("muted", "").unwrap();
        assert!(!video.muted());

        mute(&video);
        assert!(video.muted());
        assert!(video.default_muted());
    }
}
