#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlInputElement};
use yew::prelude::*;
use yew::AppHandle;

use smartflow_site::components::header::{SiteHeader, SiteHeaderProps};
use smartflow_site::controller::{jump_to, ScrollMode, SectionLookup, ABOUT, CONTACT, METHOD, NAV_LINKS, OFFER};
use smartflow_site::pages::one_page::OnePage;
use smartflow_site::viewport::{Intersection, IntersectionFeed, ViewportSource};

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct FedPageProps {
    feed: IntersectionFeed,
}

/// The page with section reports coming from `feed` instead of the browser.
#[function_component(FedPage)]
fn fed_page(props: &FedPageProps) -> Html {
    html! {
        <ContextProvider<ViewportSource> context={ViewportSource::Feed(props.feed.clone())}>
            <OnePage />
        </ContextProvider<ViewportSource>>
    }
}

struct MountedPage {
    root: Element,
    handle: AppHandle<FedPage>,
    feed: IntersectionFeed,
}

impl MountedPage {
    async fn mount() -> Self {
        let root = scratch_root();
        let feed = IntersectionFeed::new();
        let handle = yew::Renderer::<FedPage>::with_root_and_props(
            root.clone(),
            FedPageProps { feed: feed.clone() },
        )
        .render();
        settle().await;
        Self { root, handle, feed }
    }

    fn teardown(self) {
        self.handle.destroy();
        self.root.remove();
    }
}

fn scratch_root() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

async fn settle() {
    TimeoutFuture::new(50).await;
}

fn current_labels(root: &Element) -> Vec<String> {
    let nodes = root
        .query_selector_all("header nav button[aria-current=\"page\"]")
        .unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.text_content())
        .collect()
}

fn active_class_labels(root: &Element) -> Vec<String> {
    let nodes = root.query_selector_all("header nav button.active").unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.text_content())
        .collect()
}

struct ScopedLookup<'a>(&'a Element);

impl SectionLookup for ScopedLookup<'_> {
    type Target = Element;

    fn find_section(&self, id: &str) -> Option<Element> {
        self.0.query_selector(&format!("#{}", id)).ok().flatten()
    }
}

#[wasm_bindgen_test]
async fn page_renders_one_section_and_one_nav_button_per_link() {
    let page = MountedPage::mount().await;

    let sections = page.root.query_selector_all("main > section").unwrap();
    let section_ids: Vec<String> = (0..sections.length())
        .filter_map(|i| sections.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(|el| el.id())
        .collect();
    let expected: Vec<String> = NAV_LINKS.iter().map(|l| l.id.to_string()).collect();
    assert_eq!(section_ids, expected);

    let buttons = page.root.query_selector_all("header nav button").unwrap();
    let labels: Vec<String> = (0..buttons.length())
        .filter_map(|i| buttons.item(i))
        .filter_map(|node| node.text_content())
        .collect();
    let expected_labels: Vec<String> = NAV_LINKS.iter().map(|l| l.label.to_string()).collect();
    assert_eq!(labels, expected_labels);

    page.teardown();
}

#[wasm_bindgen_test]
async fn first_link_is_current_before_any_report() {
    let page = MountedPage::mount().await;

    assert_eq!(current_labels(&page.root), vec!["Accueil".to_string()]);
    assert_eq!(active_class_labels(&page.root), vec!["Accueil".to_string()]);

    page.teardown();
}

#[wasm_bindgen_test]
async fn contact_report_moves_the_current_marker_to_contact() {
    let page = MountedPage::mount().await;

    page.feed.emit(vec![Intersection::new(CONTACT, true)]);
    settle().await;

    assert_eq!(current_labels(&page.root), vec!["Contact".to_string()]);
    assert_eq!(active_class_labels(&page.root), vec!["Contact".to_string()]);

    page.teardown();
}

#[wasm_bindgen_test]
async fn leaving_reports_keep_the_marker_and_last_entering_wins() {
    let page = MountedPage::mount().await;

    page.feed.emit(vec![Intersection::new(ABOUT, false)]);
    settle().await;
    assert_eq!(current_labels(&page.root), vec!["Accueil".to_string()]);

    page.feed.emit(vec![
        Intersection::new(OFFER, true),
        Intersection::new(METHOD, true),
    ]);
    settle().await;
    assert_eq!(current_labels(&page.root), vec!["Méthode".to_string()]);

    page.teardown();
}

#[wasm_bindgen_test]
async fn destroying_the_page_releases_its_subscription() {
    let page = MountedPage::mount().await;
    let feed = page.feed.clone();
    assert_eq!(feed.subscriber_count(), 1);

    page.teardown();
    settle().await;
    assert_eq!(feed.subscriber_count(), 0);
}

#[wasm_bindgen_test]
async fn contact_form_exposes_four_fields() {
    let page = MountedPage::mount().await;

    let form = page.root.query_selector("#contact form").unwrap().expect("contact form");
    assert_eq!(form.get_attribute("method").as_deref(), Some("POST"));
    assert_eq!(
        form.get_attribute("action").as_deref(),
        Some("https://formspree.io/f/xeorerdy")
    );

    let fields = form.query_selector_all("[name]").unwrap();
    assert_eq!(fields.length(), 4);
    for name in ["name", "email", "subject", "message"] {
        assert!(form.query_selector(&format!("[name=\"{}\"]", name)).unwrap().is_some());
    }

    let required = |name: &str| {
        form.query_selector(&format!("input[name=\"{}\"]", name))
            .unwrap()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.required())
            .unwrap_or(false)
    };
    assert!(required("name"));
    assert!(required("email"));
    assert!(!required("subject"));

    page.teardown();
}

#[wasm_bindgen_test]
async fn header_marks_only_the_active_link() {
    let root = scratch_root();
    let props = SiteHeaderProps {
        links: NAV_LINKS,
        active: CONTACT,
        on_jump: Callback::from(|_: &'static str| ()),
    };
    let handle = yew::Renderer::<SiteHeader>::with_root_and_props(root.clone(), props).render();
    settle().await;

    let buttons = root.query_selector_all("nav button").unwrap();
    assert_eq!(buttons.length() as usize, NAV_LINKS.len());
    for i in 0..buttons.length() {
        let button: Element = buttons.item(i).unwrap().dyn_into().unwrap();
        let is_contact = i as usize == NAV_LINKS.len() - 1;
        assert_eq!(button.get_attribute("aria-current").is_some(), is_contact);
        assert_eq!(button.class_list().contains("active"), is_contact);
    }

    handle.destroy();
    root.remove();
}

#[wasm_bindgen_test]
async fn jump_finds_rendered_sections_and_ignores_unknown_ids() {
    let page = MountedPage::mount().await;

    let lookup = ScopedLookup(&page.root);
    for link in NAV_LINKS {
        assert_eq!(jump_to(&lookup, link.id, true), Some(ScrollMode::Instant));
    }
    assert_eq!(jump_to(&lookup, "equipe", false), None);

    page.teardown();
}
