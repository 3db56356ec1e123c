use yew::prelude::*;

use crate::observer::use_reveal;
use crate::state::section::SectionId;

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    pub section: SectionId,
    #[prop_or_default]
    pub class: Classes,
    /// The hero is visible on load, so it is neither watched nor faded in.
    #[prop_or(true)]
    pub animated: bool,
    #[prop_or_default]
    pub children: Children,
}

fn section_classes(animated: bool, revealed: bool, extra: Classes) -> Classes {
    classes!(
        "section",
        animated.then_some("section-animated"),
        extra,
        (animated && revealed).then_some("is-visible"),
    )
}

/// A page `<section>` that gains `is-visible` once it scrolls into view.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), props.animated);

    html! {
        <section
            id={props.section.id()}
            class={section_classes(props.animated, revealed, props.class.clone())}
            ref={node}
        >
            { for props.children.iter() }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_section_never_gets_reveal_classes() {
        for revealed in [false, true] {
            let class = section_classes(false, revealed, classes!("hero"));
            assert!(class.contains("section"));
            assert!(class.contains("hero"));
            assert!(!class.contains("section-animated"));
            assert!(!class.contains("is-visible"));
        }
    }

    #[test]
    fn animated_section_is_visible_only_after_reveal() {
        let hidden = section_classes(true, false, Classes::new());
        assert!(hidden.contains("section-animated"));
        assert!(!hidden.contains("is-visible"));

        let shown = section_classes(true, true, Classes::new());
        assert!(shown.contains("section-animated"));
        assert!(shown.contains("is-visible"));
    }
}
