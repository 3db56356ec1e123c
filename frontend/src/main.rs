use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

mod config;
mod error;
mod observer;
mod styles;
mod state {
    pub mod lightbox;
    pub mod reveal;
    pub mod section;
}
mod components {
    pub mod about;
    pub mod animated_section;
    pub mod autoplay_video;
    pub mod contact;
    pub mod floating_socials;
    pub mod footer;
    pub mod gallery;
    pub mod header;
    pub mod hero;
    pub mod lightbox;
    pub mod services;
    pub mod videos;
}
mod pages {
    pub mod home;
}

use config::SiteConfig;
use pages::home::Home;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<SiteConfig>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<SiteConfig>> context={props.config.clone()}>
            <style>{styles::SITE_CSS}</style>
            <Home />
        </ContextProvider<Rc<SiteConfig>>>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfigErrorProps {
    pub message: String,
}

#[function_component]
fn ConfigError(props: &ConfigErrorProps) -> Html {
    html! {
        <div class="config-error" style="padding: 2rem; font-family: sans-serif;">
            <h1>{"This page could not be loaded"}</h1>
            <p>{&props.message}</p>
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    match SiteConfig::load() {
        Ok(site) => {
            info!(
                "Loaded site config: {} gallery images, {} video groups",
                site.gallery.len(),
                site.videos.len()
            );
            yew::Renderer::<App>::with_props(AppProps {
                config: Rc::new(site),
            })
            .render();
        }
        Err(err) => {
            error!("{}", err);
            yew::Renderer::<ConfigError>::with_props(ConfigErrorProps {
                message: err.to_string(),
            })
            .render();
        }
    }
}
