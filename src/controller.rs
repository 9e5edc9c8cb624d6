use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::motion::use_prefers_reduced_motion;
use crate::viewport::{Intersection, ViewportObserver, ViewportSource, SECTION_BAND};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
}

pub const HOME: &str = "accueil";
pub const ABOUT: &str = "qui-nous-sommes";
pub const OFFER: &str = "ce-que-nous-faisons";
pub const METHOD: &str = "comment-nous-travaillons";
pub const CONTACT: &str = "contact";

/// Navigation order; also the order sections appear on the page.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { id: HOME, label: "Accueil" },
    NavLink { id: ABOUT, label: "Qui nous sommes" },
    NavLink { id: OFFER, label: "Offre" },
    NavLink { id: METHOD, label: "Méthode" },
    NavLink { id: CONTACT, label: "Contact" },
];

pub fn initial_active(links: &[NavLink]) -> &'static str {
    links.first().map(|link| link.id).unwrap_or(HOME)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMode {
    Smooth,
    Instant,
}

impl ScrollMode {
    pub fn for_preference(prefers_reduced_motion: bool) -> Self {
        if prefers_reduced_motion {
            ScrollMode::Instant
        } else {
            ScrollMode::Smooth
        }
    }

    fn behavior(self) -> ScrollBehavior {
        match self {
            ScrollMode::Smooth => ScrollBehavior::Smooth,
            ScrollMode::Instant => ScrollBehavior::Auto,
        }
    }
}

pub trait ScrollTarget {
    fn scroll_to_start(&self, mode: ScrollMode);
}

pub trait SectionLookup {
    type Target: ScrollTarget;

    fn find_section(&self, id: &str) -> Option<Self::Target>;
}

impl ScrollTarget for Element {
    fn scroll_to_start(&self, mode: ScrollMode) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(mode.behavior());
        options.set_block(ScrollLogicalPosition::Start);
        self.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

impl SectionLookup for Document {
    type Target = Element;

    fn find_section(&self, id: &str) -> Option<Element> {
        self.get_element_by_id(id)
    }
}

/// Scrolls the section `id` into view. Unknown ids are ignored and yield `None`.
pub fn jump_to<L: SectionLookup>(lookup: &L, id: &str, prefers_reduced_motion: bool) -> Option<ScrollMode> {
    let target = lookup.find_section(id)?;
    let mode = ScrollMode::for_preference(prefers_reduced_motion);
    target.scroll_to_start(mode);
    Some(mode)
}

/// The section a batch of observer reports makes active: the last
/// intersecting report naming a known link. Reports arrive in no positional
/// order, so with several intersecting sections the latest one wins.
pub fn latest_intersecting(links: &[NavLink], reports: &[Intersection]) -> Option<&'static str> {
    reports
        .iter()
        .rev()
        .filter(|report| report.is_intersecting)
        .find_map(|report| links.iter().find(|link| link.id == report.id))
        .map(|link| link.id)
}

/// Read-only view of the page state handed to child components.
#[derive(Clone, PartialEq)]
pub struct PageController {
    pub links: &'static [NavLink],
    pub active: &'static str,
    pub prefers_reduced_motion: bool,
    pub jump: Callback<&'static str>,
}

#[hook]
pub fn use_page_controller() -> PageController {
    let active = use_state(|| initial_active(NAV_LINKS));
    let prefers_reduced_motion = use_prefers_reduced_motion();
    let source = use_context::<ViewportSource>().unwrap_or_default();

    // Highlight whichever section crosses the upper-middle band.
    {
        let active = active.clone();
        use_effect_with_deps(
            move |source: &ViewportSource| {
                let on_report = Callback::from(move |reports: Vec<Intersection>| {
                    if let Some(id) = latest_intersecting(NAV_LINKS, &reports) {
                        active.set(id);
                    }
                });
                let observer = ViewportObserver::from_source(source, SECTION_BAND, on_report);
                if observer.is_live() {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        for link in NAV_LINKS {
                            if let Some(section) = document.get_element_by_id(link.id) {
                                observer.observe(&section);
                            }
                        }
                    }
                }
                move || drop(observer)
            },
            source,
        );
    }

    let jump = Callback::from(move |id: &'static str| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if jump_to(&document, id, prefers_reduced_motion).is_none() {
                log::debug!("No section #{} to jump to", id);
            }
        }
    });

    PageController {
        links: NAV_LINKS,
        active: *active,
        prefers_reduced_motion,
        jump,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeSection<'a> {
        id: String,
        log: &'a RefCell<Vec<(String, ScrollMode)>>,
    }

    impl ScrollTarget for FakeSection<'_> {
        fn scroll_to_start(&self, mode: ScrollMode) {
            self.log.borrow_mut().push((self.id.clone(), mode));
        }
    }

    struct FakePage {
        ids: Vec<&'static str>,
        log: RefCell<Vec<(String, ScrollMode)>>,
    }

    impl FakePage {
        fn with_all_sections() -> Self {
            Self {
                ids: NAV_LINKS.iter().map(|link| link.id).collect(),
                log: RefCell::new(Vec::new()),
            }
        }
    }

    impl<'a> SectionLookup for &'a FakePage {
        type Target = FakeSection<'a>;

        fn find_section(&self, id: &str) -> Option<FakeSection<'a>> {
            let page: &'a FakePage = *self;
            page.ids.iter().any(|known| *known == id).then(|| FakeSection {
                id: id.to_string(),
                log: &page.log,
            })
        }
    }

    #[test]
    fn links_cover_every_section_once_in_order() {
        let ids: Vec<_> = NAV_LINKS.iter().map(|link| link.id).collect();
        assert_eq!(
            ids,
            vec!["accueil", "qui-nous-sommes", "ce-que-nous-faisons", "comment-nous-travaillons", "contact"]
        );
    }

    #[test]
    fn first_link_is_active_initially() {
        assert_eq!(initial_active(NAV_LINKS), "accueil");
    }

    #[test]
    fn jump_scrolls_every_known_section() {
        let page = FakePage::with_all_sections();
        for link in NAV_LINKS {
            assert_eq!(jump_to(&&page, link.id, false), Some(ScrollMode::Smooth));
        }
        let scrolled: Vec<_> = page.log.borrow().iter().map(|(id, _)| id.clone()).collect();
        assert_eq!(scrolled, NAV_LINKS.iter().map(|l| l.id.to_string()).collect::<Vec<_>>());
    }

    #[test]
    fn jump_to_unknown_section_is_ignored() {
        let page = FakePage::with_all_sections();
        assert_eq!(jump_to(&&page, "tarifs", false), None);
        assert!(page.log.borrow().is_empty());
    }

    #[test]
    fn reduced_motion_jumps_instantly() {
        let page = FakePage::with_all_sections();
        assert_eq!(jump_to(&&page, CONTACT, true), Some(ScrollMode::Instant));
        assert_eq!(page.log.borrow()[0], (CONTACT.to_string(), ScrollMode::Instant));
    }

    #[test]
    fn contact_intersecting_becomes_active() {
        let reports = vec![Intersection::new(CONTACT, true)];
        assert_eq!(latest_intersecting(NAV_LINKS, &reports), Some(CONTACT));
    }

    #[test]
    fn last_intersecting_report_wins() {
        let reports = vec![
            Intersection::new(ABOUT, true),
            Intersection::new(OFFER, true),
            Intersection::new(METHOD, false),
        ];
        assert_eq!(latest_intersecting(NAV_LINKS, &reports), Some(OFFER));
    }

    #[test]
    fn leaving_reports_do_not_change_active() {
        let reports = vec![Intersection::new(HOME, false), Intersection::new(ABOUT, false)];
        assert_eq!(latest_intersecting(NAV_LINKS, &reports), None);
    }

    #[test]
    fn unknown_ids_are_skipped() {
        let reports = vec![Intersection::new(METHOD, true), Intersection::new("grid", true)];
        assert_eq!(latest_intersecting(NAV_LINKS, &reports), Some(METHOD));
    }
}
