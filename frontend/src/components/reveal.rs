use yew::prelude::*;

use crate::hooks::reveal::use_reveal;
use crate::motion::reveal::{reveal_classes, DEFAULT_THRESHOLD};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    /// Entrance animation class, e.g. `fly-left`.
    pub animation: AttrValue,
    #[prop_or_default]
    pub delay: AttrValue,
    #[prop_or_default]
    pub class: AttrValue,
    #[prop_or(DEFAULT_THRESHOLD)]
    pub threshold: f64,
}

/// Hides its children until they first scroll into view, then plays the
/// entrance animation once.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), props.threshold);
    let class = reveal_classes(visible, &props.animation, &props.delay, &props.class);

    html! {
        <div ref={node} {class}>
            { for props.children.iter() }
        </div>
    }
}
