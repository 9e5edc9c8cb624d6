use yew::prelude::*;

use crate::motion::MotionPreference;
use crate::viewport::{use_in_view, REVEAL_BAND};

pub fn reveal_class(in_view: bool, reduced_motion: bool) -> &'static str {
    if in_view || reduced_motion {
        "reveal in"
    } else {
        "reveal"
    }
}

pub fn reveal_style(delay_ms: u32, reduced_motion: bool) -> Option<String> {
    (!reduced_motion).then(|| format!("transition-delay: {}ms;", delay_ms))
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub delay: u32,
    #[prop_or_default]
    pub as_li: bool,
}

/// Fades its children in once they enter the viewport. Under reduced motion
/// the content is shown straight away with no transition delay.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let reduced_motion = use_context::<MotionPreference>()
        .map(|pref| pref.reduced)
        .unwrap_or(false);
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), REVEAL_BAND);

    let class = reveal_class(in_view, reduced_motion);
    let style = reveal_style(props.delay, reduced_motion);
    let tag = if props.as_li { "li" } else { "div" };

    html! {
        <@{tag} ref={node} class={class} style={style}>
            { for props.children.iter() }
        </@>
    }
}
