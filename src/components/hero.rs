use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_primary: Callback<()>,
    pub on_secondary: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let on_primary = {
        let on_primary = props.on_primary.clone();
        Callback::from(move |_: MouseEvent| on_primary.emit(()))
    };
    let on_secondary = {
        let on_secondary = props.on_secondary.clone();
        Callback::from(move |_: MouseEvent| on_secondary.emit(()))
    };

    html! {
        <div class="hero">
            <h1 class="hero-title">
                <span class="hero-gradient">{"Des logiciels qui servent le métier"}</span>
                {","}
                <br />
                {"pas l’inverse."}
            </h1>

            <p class="hero-pitch">
                {"SmartFlow conçoit et livre des applications sur mesure qui rendent vos opérations plus fluides et vos données fiables. Chaque solution est pensée pour créer un impact concret et durable."}
            </p>

            <div class="hero-actions">
                <button type="button" class="button-primary" onclick={on_primary}>
                    <span class="button-sheen"></span>
                    <span class="button-label">{"Démarrer une discussion"}</span>
                </button>
                <button type="button" class="button-outline" onclick={on_secondary}>
                    {"Découvrir l’offre"}
                </button>
            </div>

            <ScrollCue />
        </div>
    }
}

#[function_component(ScrollCue)]
pub fn scroll_cue() -> Html {
    html! {
        <div class="scroll-cue">
            <div class="scroll-cue-inner">
                <span>{"Défiler"}</span>
                <svg width="16" height="16" viewBox="0 0 24 24" fill="none" aria-hidden="true">
                    <path d="M6 9l6 6 6-6" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round" />
                </svg>
            </div>
        </div>
    }
}
