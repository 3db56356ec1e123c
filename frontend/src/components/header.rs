use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::use_site_config;
use crate::state::section::SectionId;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active: SectionId,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let config = use_site_config();
    let nav_open = use_state(|| false);

    let toggle_nav = {
        let nav_open = nav_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            nav_open.set(!*nav_open);
        })
    };

    // Links keep their default action so the browser scrolls to the anchor.
    let close_nav = {
        let nav_open = nav_open.clone();
        Callback::from(move |_: MouseEvent| nav_open.set(false))
    };

    html! {
        <header class="site-header">
            <div class="container header-content">
                <a href={SectionId::Home.href()} class="brand" onclick={close_nav.clone()}>
                    <img
                        src={config.brand.logo.clone()}
                        alt={format!("{} Logo", config.brand.name)}
                        style="width: 40px; height: 40px; object-fit: contain; margin-right: 8px;"
                    />
                    <span class="brand-name">{&config.brand.name}</span>
                </a>

                <button
                    class={classes!("hamburger", (*nav_open).then_some("is-active"))}
                    onclick={toggle_nav}
                    aria-label="Toggle navigation"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav class={classes!("site-nav", (*nav_open).then_some("open"))}>
                    {
                        for SectionId::ALL.into_iter().map(|section| html! {
                            <a
                                key={section.id()}
                                href={section.href()}
                                class={classes!((props.active == section).then_some("active"))}
                                onclick={close_nav.clone()}
                            >
                                {section.label()}
                            </a>
                        })
                    }
                </nav>
            </div>
        </header>
    }
}
