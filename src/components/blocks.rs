use yew::prelude::*;

use crate::components::decor::Chevron;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section id={props.id.clone()} class={classes!("page-section", props.class.clone())}>
            { for props.children.iter() }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeadingProps {
    #[prop_or_default]
    pub kicker: Option<AttrValue>,
    pub title: AttrValue,
}

#[function_component(Heading)]
pub fn heading(props: &HeadingProps) -> Html {
    html! {
        <div class="heading">
            {
                if let Some(kicker) = &props.kicker {
                    html! { <div class="kicker">{kicker.clone()}</div> }
                } else {
                    html! {}
                }
            }
            <h2 class="heading-title heading-accent">{props.title.clone()}</h2>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Subhead)]
pub fn subhead(props: &TextProps) -> Html {
    html! { <div class="subhead">{ for props.children.iter() }</div> }
}

/// List row with a leading chevron. Renders its content inside the parent
/// `li` supplied by a `Reveal`.
#[function_component(Li)]
pub fn li(props: &TextProps) -> Html {
    html! {
        <span class="list-row">
            <Chevron />
            <span>{ for props.children.iter() }</span>
        </span>
    }
}

#[function_component(Badge)]
pub fn badge(props: &TextProps) -> Html {
    html! { <span class="badge">{ for props.children.iter() }</span> }
}

#[derive(Properties, PartialEq)]
pub struct CalloutProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Callout)]
pub fn callout(props: &CalloutProps) -> Html {
    html! {
        <div class="callout">
            <div class="callout-title">{props.title.clone()}</div>
            <p class="callout-body">{ for props.children.iter() }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PillFeatureProps {
    pub title: AttrValue,
    pub desc: AttrValue,
}

#[function_component(AnimatedPillFeature)]
pub fn animated_pill_feature(props: &PillFeatureProps) -> Html {
    html! {
        <div class="pill-feature g-border">
            <div class="pill-title">{props.title.clone()}</div>
            <div class="pill-desc">{props.desc.clone()}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimelineStepProps {
    pub n: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TimelineStep)]
pub fn timeline_step(props: &TimelineStepProps) -> Html {
    html! {
        <div class="timeline-step">
            <div class="timeline-number">{props.n.clone()}</div>
            <div class="timeline-title">{props.title.clone()}</div>
            <p class="timeline-body">{ for props.children.iter() }</p>
        </div>
    }
}

pub const TOOLS: &[&str] = &[
    ".NET / C#",
    "WPF",
    "React / Next.js",
    "Node / TypeScript",
    "SQL Server / Postgres",
    "EF Core",
    "CI GitHub / Vercel",
];

pub fn tool_badges() -> Html {
    html! {
        <div class="badge-row">
            { for TOOLS.iter().map(|tool| html! { <Badge>{*tool}</Badge> }) }
        </div>
    }
}

#[function_component(TechBadges)]
pub fn tech_badges() -> Html {
    html! {
        <div class="tech-badges">
            <div class="tech-badges-title">{"Outils que nous utilisons"}</div>
            { tool_badges() }
        </div>
    }
}
