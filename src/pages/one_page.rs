use yew::prelude::*;
use yew_hooks::use_effect_once;

use crate::components::{
    blocks::{tool_badges, AnimatedPillFeature, Callout, Heading, Li, Section, Subhead, TechBadges, TimelineStep},
    contact::ContactForm,
    decor::{BackgroundSoft, FloatingOrbs, SoftGrid},
    footer::SiteFooter,
    header::SiteHeader,
    hero::Hero,
    reveal::Reveal,
    styles::GlobalStyles,
};
use crate::config;
use crate::controller::{use_page_controller, ABOUT, CONTACT, HOME, METHOD, OFFER};
use crate::motion::MotionPreference;
use crate::selfcheck;

const APPROACH: &[&str] = &[
    "Design & UX centrés utilisateur",
    "Architecture logicielle robuste",
    "Développement agile et testé",
    "Coordination projet",
    "Sécurité & conformité",
    "Déploiement & automatisation CI/CD",
    "Formation & transfert",
    "Maintenance et évolutions",
];

const VALUES: &[(&str, &str)] = &[
    ("Exigence suisse", "Qualité, rigueur, confidentialité et conformité locales."),
    ("Design utile", "Interfaces sobres, accessibles, rapides à prendre en main."),
    ("Tech maintenable", "Architecture documentée, tests, CI/CD, dette maîtrisée."),
    ("Indépendance", "Choix techniques adaptés à votre contexte, pas l’inverse."),
];

#[function_component(OnePage)]
pub fn one_page() -> Html {
    let controller = use_page_controller();

    {
        let links = controller.links;
        use_effect_once(move || {
            if config::is_dev() {
                selfcheck::schedule(links);
            }
            || ()
        });
    }

    let jump = controller.jump.clone();
    let on_primary = {
        let jump = jump.clone();
        Callback::from(move |_: ()| jump.emit(CONTACT))
    };
    let on_secondary = {
        let jump = jump.clone();
        Callback::from(move |_: ()| jump.emit(OFFER))
    };

    let motion = MotionPreference {
        reduced: controller.prefers_reduced_motion,
    };

    html! {
        <ContextProvider<MotionPreference> context={motion}>
        <div class="one-page">
            <GlobalStyles />
            <BackgroundSoft />
            <SoftGrid />
            <FloatingOrbs />
            <SiteHeader links={controller.links} active={controller.active} on_jump={jump} />

            <main class="page-main">
                <Section id={HOME} class={classes!("hero-section")}>
                    <Hero {on_primary} {on_secondary} />
                </Section>

                <Section id={ABOUT}>
                    <Heading kicker="Qui nous sommes" title="Un partenaire logiciel suisse, reconnaissable au premier clic" />

                    <div class="sectionBand band-light">
                        <div class="band-grid">
                            <div class="band-main stack">
                                <Reveal>
                                    <p>
                                        {"Basés en Suisse, nous concevons des logiciels sur mesure qui rendent les opérations plus fluides et les données plus fiables. Nous privilégions la clarté, la sécurité et la sobriété visuelle — pour des outils que l’on aime utiliser."}
                                    </p>
                                </Reveal>
                                <Reveal delay={120}>
                                    <p>
                                        {"Nous restons votre interlocuteur unique : un pilotage simple, des livrables nets, des jalons tenus. Objectif : valeur visible dès les premiers incréments."}
                                    </p>
                                </Reveal>

                                <div class="card-grid">
                                    {
                                        for VALUES.iter().enumerate().map(|(i, (title, text))| html! {
                                            <Reveal delay={i as u32 * 80}>
                                                <div class="card">
                                                    <div class="card-title">{*title}</div>
                                                    <div class="card-text">{*text}</div>
                                                </div>
                                            </Reveal>
                                        })
                                    }
                                </div>
                            </div>

                            <aside class="band-side">
                                <Reveal delay={180}>
                                    <div class="card card-wide">
                                        <div class="card-title">{"Nos engagements"}</div>
                                        <p>
                                            {"Livrables clairs, communication transparente, sécurité par défaut. Nous explicitions toujours les compromis — vous gardez la maîtrise des décisions."}
                                        </p>
                                    </div>
                                </Reveal>
                            </aside>
                        </div>
                    </div>
                </Section>

                <Section id={OFFER}>
                    <Heading kicker="Offre" title="Des logiciels qui travaillent pour vous" />

                    <div class="sectionBand band-dark">
                        <div class="band-grid">
                            <div class="band-main stack-loose">
                                <Reveal>
                                    <div class="stack">
                                        <p>
                                            {"Nous développons des logiciels sur mesure, conçus pour être efficaces, fiables et durables. Impact mesurable dès la mise en service."}
                                        </p>
                                        <div class="card-grid">
                                            <AnimatedPillFeature title="Apps desktop" desc="Windows/macOS pour usages intensifs métier." />
                                            <AnimatedPillFeature title="Apps & sites web" desc="Portails clients, back‑offices, vitrines rapides." />
                                            <AnimatedPillFeature title="Intégrations" desc="API, ERP/CRM, imports/exports, pipelines data." />
                                            <AnimatedPillFeature title="Performance" desc="UX soignée, budgets et délais tenus." />
                                        </div>
                                    </div>
                                </Reveal>

                                <div>
                                    <Subhead>{"Notre approche de bout en bout"}</Subhead>
                                    <ul class="approach-list">
                                        {
                                            for APPROACH.iter().enumerate().map(|(i, item)| html! {
                                                <Reveal as_li={true} delay={i as u32 * 60}>
                                                    <Li>{*item}</Li>
                                                </Reveal>
                                            })
                                        }
                                    </ul>
                                </div>
                            </div>

                            <div class="band-side stack">
                                <Reveal delay={120}>
                                    <Callout title="Votre contexte au centre">
                                        {"Nous adaptons chaque solution à votre métier, vos délais et votre budget. Notre objectif : livrer rapidement de la valeur, sans compromis sur la fiabilité."}
                                    </Callout>
                                </Reveal>
                                <Reveal delay={200}>
                                    <TechBadges />
                                </Reveal>
                            </div>
                        </div>
                    </div>
                </Section>

                <Section id={METHOD}>
                    <Heading kicker="Méthode" title="Fiabilité, transparence, expertise" />

                    <div class="sectionBand band-light">
                        <div class="band-grid">
                            <div class="band-main stack-loose">
                                <TimelineStep n="01" title="Cadrage concis">
                                    {"Objectifs, priorités, risques et critères d’acceptation partagés. Roadmap réaliste et points de contrôle."}
                                </TimelineStep>
                                <TimelineStep n="02" title="Design & architecture">
                                    {"Parcours utilisateurs, maquettes, choix techniques. Simplicité d’usage et maintenabilité."}
                                </TimelineStep>
                                <TimelineStep n="03" title="Développement itératif">
                                    {"Sprints courts, revues de code, tests automatiques. Démos fréquentes pour ajuster tôt."}
                                </TimelineStep>
                                <TimelineStep n="04" title="Mise en production & transfert">
                                    {"CI/CD, sécurisation, monitoring, formation. Documentation utile et reprise aisée."}
                                </TimelineStep>
                            </div>
                            <div class="band-side stack">
                                <div class="card card-wide">
                                    <div class="card-title">{"Engagement qualité"}</div>
                                    <p>
                                        {"Traçabilité des décisions, revues croisées, sauvegardes et supervision. Code clair plutôt que complexité inutile."}
                                    </p>
                                </div>
                                <div class="card card-wide">
                                    <div class="card-title">{"Outils que nous utilisons"}</div>
                                    { tool_badges() }
                                </div>
                            </div>
                        </div>
                    </div>
                </Section>

                <Section id={CONTACT}>
                    <Heading kicker="Parlons de votre projet" title="Contact" />
                    <ContactForm />
                </Section>
            </main>

            <SiteFooter />
        </div>
        </ContextProvider<MotionPreference>>
    }
}
