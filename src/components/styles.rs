use yew::prelude::*;

#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <style>
            {r#"
                :root {
                    --violet-50: #f5f3ff;
                    --violet-100: #ede9fe;
                    --violet-200: #ddd6fe;
                    --violet-300: #c4b5fd;
                    --violet-700: #6d28d9;
                    --violet-800: #5b21b6;
                    --violet-900: #4c1d95;
                    --page-bg: #0d1020;
                    --text: #f1f5f9;
                    --text-soft: rgba(226, 232, 240, 0.9);
                    --text-muted: rgba(203, 213, 225, 0.85);
                    --max-width: 72rem;
                }
                * { box-sizing: border-box; }
                html, body { margin: 0; padding: 0; }
                body {
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    -webkit-font-smoothing: antialiased;
                }
                ::selection { background: rgba(139, 92, 246, 0.3); color: #fff; }

                .one-page {
                    position: relative;
                    min-height: 100dvh;
                    background: var(--page-bg);
                    color: var(--text);
                }
                .page-main {
                    position: relative;
                    margin: 0 auto;
                    max-width: var(--max-width);
                    padding: 0 1rem;
                }
                @media (min-width: 640px) { .page-main { padding: 0 1.5rem; } }
                @media (min-width: 1024px) { .page-main { padding: 0 2rem; } }

                /* Decor */
                .decor { pointer-events: none; position: fixed; inset: 0; }
                .background-soft { z-index: -30; }
                .background-glow {
                    position: absolute; inset: 0;
                    background:
                        radial-gradient(1200px 600px at 70% 10%, rgba(124, 58, 237, 0.18), transparent),
                        radial-gradient(800px 420px at 15% 20%, rgba(99, 102, 241, 0.12), transparent);
                }
                .background-fade {
                    position: absolute; inset: 0;
                    background: linear-gradient(to bottom, transparent, rgba(16, 20, 37, 0.35), var(--page-bg));
                }
                .soft-grid { z-index: -10; width: 100%; height: 100%; opacity: 0.12; }
                .floating-orbs { z-index: -10; overflow: hidden; }
                .orb { position: absolute; border-radius: 9999px; filter: blur(64px); }
                .orb-violet { top: -6rem; left: -6rem; width: 16rem; height: 16rem; background: rgba(139, 92, 246, 0.15); }
                .orb-indigo { bottom: -60px; right: -60px; width: 18rem; height: 18rem; background: rgba(99, 102, 241, 0.15); }

                /* Header */
                .site-header {
                    position: sticky; top: 0; z-index: 50;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(12, 10, 22, 0.7);
                    backdrop-filter: blur(12px);
                }
                .site-header-inner {
                    margin: 0 auto; max-width: var(--max-width);
                    height: 4rem; padding: 0 1rem;
                    display: flex; align-items: center; justify-content: space-between;
                }
                .brand { display: flex; align-items: center; gap: 0.75rem; }
                .logo-mark { color: var(--violet-300); }
                .brand-name { font-size: 0.875rem; letter-spacing: 0.18em; color: rgba(221, 214, 254, 0.9); }
                .section-nav {
                    display: none; align-items: center; gap: 0.25rem;
                    padding: 0.25rem; border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                @media (min-width: 768px) { .section-nav { display: flex; } }
                .nav-button {
                    position: relative; border: 0; background: transparent; cursor: pointer;
                    border-radius: 0.75rem; padding: 0.5rem 0.75rem; font-size: 0.875rem;
                    color: rgba(221, 214, 254, 0.85);
                    transition: color 0.2s ease;
                }
                .nav-button:hover, .nav-button.active { color: #fff; }
                .nav-label { position: relative; z-index: 10; }
                .nav-highlight {
                    pointer-events: none; position: absolute; inset: 0; border-radius: 0.75rem;
                    transition: background 0.2s ease, box-shadow 0.2s ease;
                }
                .nav-button.active .nav-highlight {
                    background: rgba(255, 255, 255, 0.1);
                    box-shadow: 0 0 0 1px rgba(255, 255, 255, 0.15) inset;
                }
                .header-cta, .button-primary {
                    position: relative; overflow: hidden; border: 0; cursor: pointer;
                    border-radius: 0.75rem; color: #fff; font-size: 0.875rem;
                    background: linear-gradient(to top right, #7c3aed, #6366f1);
                }
                .header-cta { padding: 0.5rem 0.75rem; font-weight: 500; }
                .header-cta:hover, .button-primary:hover { opacity: 0.9; }

                /* Sections */
                .page-section { scroll-margin-top: 6rem; padding: 4rem 0; }
                .page-section.hero-section { padding-top: 7rem; }
                .heading { margin-bottom: 2rem; }
                .kicker { font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.22em; color: rgba(196, 181, 253, 0.8); }
                .heading-title { margin: 0.5rem 0 0; font-size: 1.5rem; font-weight: 600; letter-spacing: -0.01em; color: rgba(255, 255, 255, 0.95); }
                @media (min-width: 640px) { .heading-title { font-size: 1.875rem; } }
                .heading-accent { position: relative; }
                .heading-accent:after {
                    content: ''; position: absolute; left: 0; bottom: -10px;
                    height: 2px; width: 72px; border-radius: 999px;
                    background: linear-gradient(90deg, #c084fc, #818cf8); opacity: 0.9;
                }

                /* Hero */
                .hero > * + * { margin-top: 2.5rem; }
                .hero-title { margin: 0; font-size: 2.25rem; font-weight: 600; letter-spacing: -0.02em; color: rgba(255, 255, 255, 0.95); }
                @media (min-width: 640px) { .hero-title { font-size: 3rem; } }
                @media (min-width: 1024px) { .hero-title { font-size: 3.75rem; } }
                .hero-gradient {
                    background: linear-gradient(to top right, #a78bfa, #e879f9, #818cf8);
                    -webkit-background-clip: text; background-clip: text; color: transparent;
                }
                .hero-pitch { max-width: 65ch; color: var(--text-soft); }
                .hero-actions { display: flex; flex-wrap: wrap; align-items: center; gap: 0.75rem; }
                .button-primary { padding: 0.75rem 1.25rem; }
                .button-sheen {
                    pointer-events: none; position: absolute; inset: 0; transform: translateX(-100%);
                    background: linear-gradient(to right, transparent, rgba(255, 255, 255, 0.4), transparent); opacity: 0.7;
                }
                .button-label { position: relative; z-index: 10; }
                .button-outline {
                    cursor: pointer; border-radius: 0.75rem; padding: 0.75rem 1.25rem; font-size: 0.875rem;
                    background: transparent; color: var(--text-soft); border: 1px solid rgba(255, 255, 255, 0.2);
                }
                .button-outline:hover { background: rgba(255, 255, 255, 0.1); }
                .scroll-cue { padding-top: 0.5rem; text-align: center; }
                .scroll-cue-inner { display: inline-flex; flex-direction: column; align-items: center; font-size: 0.75rem; color: rgba(203, 213, 225, 0.7); }
                .scroll-cue-inner svg { margin-top: 0.25rem; }

                /* Bands */
                .sectionBand { border-radius: 1.5rem; border: 1px solid rgba(199, 210, 254, 0.6); box-shadow: 0 1px 2px rgba(16, 24, 40, 0.05); padding: 1.5rem; }
                @media (min-width: 640px) { .sectionBand { padding: 2rem; } }
                .band-light { color: #0f172a; background: linear-gradient(180deg, #fff 0%, var(--violet-50) 40%, var(--violet-100) 100%); }
                .band-dark { color: var(--text); background: linear-gradient(180deg, rgba(255, 255, 255, 0.04) 0%, rgba(124, 58, 237, 0.08) 100%); border-color: rgba(255, 255, 255, 0.12); }
                .band-grid { display: grid; gap: 2.5rem; }
                @media (min-width: 1024px) {
                    .band-grid { grid-template-columns: repeat(12, minmax(0, 1fr)); }
                    .band-main { grid-column: span 7 / span 7; }
                    .band-side { grid-column: span 5 / span 5; }
                }
                .stack > * + * { margin-top: 1.5rem; }
                .stack-loose > * + * { margin-top: 2rem; }
                .band-light p { color: #1e293b; line-height: 1.625; }
                .band-dark p { color: var(--text-soft); line-height: 1.625; }
                .card-grid { display: grid; gap: 1rem; }
                @media (min-width: 640px) { .card-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); } }
                .card { border-radius: 1rem; padding: 1rem; }
                .card.card-wide { padding: 1.5rem; }
                .band-light .card { background: #fff; border: 1px solid rgba(199, 210, 254, 0.7); }
                .band-light .card:hover { background: var(--violet-50); }
                .card-title { font-size: 0.875rem; font-weight: 500; color: var(--violet-900); }
                .card-wide .card-title { font-size: 1rem; }
                .card-text { margin-top: 0.25rem; font-size: 0.75rem; color: var(--violet-700); }
                .band-light .card-wide p { margin: 0.5rem 0 0; font-size: 0.875rem; color: var(--violet-800); }

                /* Blocks */
                .subhead { font-size: 0.875rem; font-weight: 500; color: rgba(255, 255, 255, 0.9); margin-bottom: 0.75rem; }
                .approach-list { list-style: none; margin: 0; padding: 0; display: grid; gap: 0.5rem; }
                @media (min-width: 640px) { .approach-list { grid-template-columns: repeat(2, minmax(0, 1fr)); } }
                .list-row { display: flex; gap: 0.75rem; }
                .chevron { margin-top: 0.25rem; flex: none; opacity: 0.8; }
                .callout { border-radius: 1rem; background: rgba(255, 255, 255, 0.08); border: 1px solid rgba(255, 255, 255, 0.15); padding: 1.5rem; backdrop-filter: blur(1px); }
                .callout-title { font-weight: 500; color: rgba(255, 255, 255, 0.9); }
                .callout-body { margin: 0.5rem 0 0; font-size: 0.875rem; }
                .badge-row { display: flex; flex-wrap: wrap; gap: 0.5rem; }
                .badge {
                    display: inline-flex; align-items: center; border-radius: 0.75rem; padding: 0.25rem 0.75rem; font-size: 0.75rem;
                    border: 1px solid rgba(196, 181, 253, 0.2); background: rgba(196, 181, 253, 0.1); color: rgba(237, 233, 254, 0.9);
                }
                .band-light .badge { color: var(--violet-800); }
                .tech-badges { border-radius: 1rem; border: 1px solid rgba(255, 255, 255, 0.1); background: rgba(255, 255, 255, 0.05); padding: 1rem; }
                .tech-badges-title { margin-bottom: 0.5rem; font-size: 0.875rem; font-weight: 500; color: rgba(255, 255, 255, 0.9); }
                .pill-feature { border-radius: 1rem; border: 1px solid rgba(255, 255, 255, 0.1); background: rgba(255, 255, 255, 0.1); padding: 1rem; }
                .pill-title { font-size: 0.875rem; font-weight: 500; color: rgba(255, 255, 255, 0.9); }
                .pill-desc { margin-top: 0.25rem; font-size: 0.75rem; color: var(--text-muted); }
                .g-border { position: relative; }
                .g-border:before {
                    content: ''; position: absolute; inset: -1px; border-radius: 16px; padding: 1px; opacity: 0.6;
                    background: linear-gradient(120deg, rgba(196, 181, 253, 0.35), rgba(129, 140, 248, 0.35));
                    mask: linear-gradient(#000 0 0) content-box, linear-gradient(#000 0 0);
                    -webkit-mask: linear-gradient(#000 0 0) content-box, linear-gradient(#000 0 0);
                    -webkit-mask-composite: xor; mask-composite: exclude;
                }
                .timeline-step { position: relative; padding-left: 2.5rem; }
                .timeline-number {
                    position: absolute; left: 0; top: 0; width: 1.75rem; height: 1.75rem;
                    display: flex; align-items: center; justify-content: center; border-radius: 9999px;
                    border: 1px solid var(--violet-300); background: #fff; font-size: 0.75rem; color: var(--violet-800);
                }
                .timeline-title { font-weight: 500; color: #0f172a; }
                .band-light .timeline-body { margin: 0.25rem 0 0; font-size: 0.875rem; }

                /* Contact */
                .contact-form {
                    display: grid; gap: 1rem; border-radius: 1rem; padding: 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1); background: rgba(255, 255, 255, 0.05);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .form-row { display: grid; gap: 1rem; }
                @media (min-width: 640px) { .form-row { grid-template-columns: repeat(2, minmax(0, 1fr)); } }
                .field { display: block; font-size: 0.875rem; }
                .field-label { display: block; margin-bottom: 0.25rem; color: var(--text-muted); }
                .form-input {
                    width: 100%; border-radius: 0.75rem; padding: 0.5rem 0.75rem; outline: none; font: inherit;
                    color: var(--text); border: 1px solid rgba(255, 255, 255, 0.15); background: rgba(255, 255, 255, 0.05);
                }
                .form-input:focus { box-shadow: 0 0 0 2px rgba(139, 92, 246, 0.4); }
                .form-actions { display: flex; align-items: center; justify-content: flex-end; gap: 0.75rem; }

                /* Footer */
                .site-footer { margin-top: 2.5rem; border-top: 1px solid rgba(255, 255, 255, 0.1); background: rgba(14, 12, 22, 0.6); }
                .site-footer-inner {
                    margin: 0 auto; max-width: var(--max-width); padding: 2rem 1rem;
                    display: flex; align-items: center; justify-content: space-between;
                    font-size: 0.75rem; color: rgba(221, 214, 254, 0.75);
                }
                .footer-tagline { display: none; align-items: center; gap: 0.5rem; }
                @media (min-width: 640px) { .footer-tagline { display: inline-flex; } }
                .dot { display: inline-block; width: 0.375rem; height: 0.375rem; border-radius: 9999px; background: rgba(196, 181, 253, 0.8); }

                /* Reveal */
                .reveal { opacity: 0; transition: opacity 0.45s ease; }
                .reveal.in { opacity: 1; }
                @media (prefers-reduced-motion: reduce) {
                    .reveal, .nav-button, .nav-highlight { transition: none; }
                    html { scroll-behavior: auto; }
                }
            "#}
        </style>
    }
}
