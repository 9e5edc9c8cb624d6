use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::decor::LogoMark;
use crate::controller::{NavLink, CONTACT};

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub links: &'static [NavLink],
    pub active: &'static str,
    pub on_jump: Callback<&'static str>,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let SiteHeaderProps { links, active, on_jump } = props;

    let jump_to_contact = {
        let on_jump = on_jump.clone();
        Callback::from(move |_: MouseEvent| on_jump.emit(CONTACT))
    };

    html! {
        <header class="site-header">
            <div class="site-header-inner">
                <div class="brand">
                    <LogoMark />
                    <span class="brand-name">{"SMARTFLOW"}</span>
                </div>
                <nav class="section-nav" aria-label="Navigation des sections">
                    {
                        for links.iter().map(|link| {
                            let is_current = *active == link.id;
                            let onclick = {
                                let on_jump = on_jump.clone();
                                let id = link.id;
                                Callback::from(move |_: MouseEvent| on_jump.emit(id))
                            };
                            html! {
                                <button
                                    key={link.id}
                                    type="button"
                                    class={classes!("nav-button", is_current.then_some("active"))}
                                    aria-current={is_current.then_some("page")}
                                    {onclick}
                                >
                                    <span class="nav-label">{link.label}</span>
                                    <span aria-hidden="true" class="nav-highlight"></span>
                                </button>
                            }
                        })
                    }
                </nav>
                <button type="button" class="header-cta" onclick={jump_to_contact}>
                    {"Nous contacter"}
                </button>
            </div>
        </header>
    }
}
