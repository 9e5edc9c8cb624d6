use yew::prelude::*;

#[function_component(BackgroundSoft)]
pub fn background_soft() -> Html {
    html! {
        <div aria-hidden="true" class="decor background-soft">
            <div class="background-glow"></div>
            <div class="background-fade"></div>
        </div>
    }
}

#[function_component(SoftGrid)]
pub fn soft_grid() -> Html {
    html! {
        <svg class="decor soft-grid" aria-hidden="true">
            <defs>
                <pattern id="grid" width="32" height="32" patternUnits="userSpaceOnUse">
                    <path d="M 32 0 L 0 0 0 32" fill="none" stroke="white" stroke-opacity="0.7" stroke-width="0.5" />
                </pattern>
            </defs>
            <rect width="100%" height="100%" fill="url(#grid)" />
        </svg>
    }
}

// No animation here, the orbs stay put.
#[function_component(FloatingOrbs)]
pub fn floating_orbs() -> Html {
    html! {
        <div aria-hidden="true" class="decor floating-orbs">
            <div class="orb orb-violet"></div>
            <div class="orb orb-indigo"></div>
        </div>
    }
}

#[function_component(Chevron)]
pub fn chevron() -> Html {
    html! {
        <svg width="14" height="14" viewBox="0 0 24 24" class="chevron" fill="none" aria-hidden="true">
            <path d="M5 12h14M12 5l7 7-7 7" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round" />
        </svg>
    }
}

#[function_component(Dot)]
pub fn dot() -> Html {
    html! { <span class="dot" aria-hidden="true"></span> }
}

#[function_component(LogoMark)]
pub fn logo_mark() -> Html {
    html! {
        <svg width="26" height="26" viewBox="0 0 32 32" class="logo-mark" aria-hidden="true">
            <defs>
                <linearGradient id="logo-gradient" x1="0" y1="0" x2="1" y2="1">
                    <stop offset="0%" stop-color="#c084fc" />
                    <stop offset="60%" stop-color="#a78bfa" />
                    <stop offset="100%" stop-color="#818cf8" />
                </linearGradient>
            </defs>
            <rect x="2" y="2" width="28" height="28" rx="8" fill="url(#logo-gradient)" opacity="0.25" />
            <path d="M7 18c5 0 5-8 10-8s5 8 10 8" fill="none" stroke="url(#logo-gradient)" stroke-width="2.2" stroke-linecap="round" />
            <path d="M7 22c5 0 5-6 10-6s5 6 10 6" fill="none" stroke="url(#logo-gradient)" stroke-width="2.2" stroke-linecap="round" opacity="0.65" />
        </svg>
    }
}
