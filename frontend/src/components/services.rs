use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::state::section::SectionId;

struct Offer {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const OFFERS: &[Offer] = &[
    Offer {
        icon: "🛍️",
        title: "Ready-to-Ship Products",
        description: "Browse our collection of handmade beanies, hats, and accessories, ready to be shipped to your doorstep.",
    },
    Offer {
        icon: "🎨",
        title: "Custom Orders",
        description: "Have a unique idea? We love bringing your vision to life! Contact us for custom colors, sizes, and designs.",
    },
    Offer {
        icon: "💄",
        title: "Pearl Luxe Be",
        description: "Check our sister company on social media pages where we specialise in lash installations of all shapes and sizes.",
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <AnimatedSection section={SectionId::Services}>
            <div class="container">
                <div class="section-head">
                    <h2>{"What We Offer"}</h2>
                    <p>{"Handcrafted with love, just for you."}</p>
                </div>
                <div class="card-grid">
                    {
                        for OFFERS.iter().map(|offer| html! {
                            <article class="card" key={offer.title}>
                                <span class="card-icon">{offer.icon}</span>
                                <h3>{offer.title}</h3>
                                <p>{offer.description}</p>
                            </article>
                        })
                    }
                </div>
            </div>
        </AnimatedSection>
    }
}
