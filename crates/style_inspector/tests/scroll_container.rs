#![cfg(test)]

use anyhow::Result;
use core::time::Duration;
use html::{DOM, NodeId};
use std::time::Instant;
use style_inspector::{
    Axis, ScrollContainer, StyleInspector, StyleKey, get_scroll_container, is_scroll,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `<html><body><div class="outer"><div class="inner"/></div></body></html>`
struct Page {
    dom: DOM,
    html: NodeId,
    body: NodeId,
    outer: NodeId,
    inner: NodeId,
}

fn page() -> Result<Page> {
    init_logger();
    let mut dom = DOM::new();
    let html = dom.append_element(dom.document(), "html")?;
    let body = dom.append_element(html, "body")?;
    let outer = dom.append_element(body, "div")?;
    let inner = dom.append_element(outer, "div")?;
    Ok(Page {
        dom,
        html,
        body,
        outer,
        inner,
    })
}

#[test]
fn axis_selects_overflow_property() {
    assert_eq!(Axis::from(None::<bool>).overflow_key(), StyleKey::Overflow);
    assert_eq!(Axis::from(Some(true)).overflow_key(), StyleKey::OverflowY);
    assert_eq!(Axis::from(false).overflow_key(), StyleKey::OverflowX);
    assert_eq!(Axis::default(), Axis::Unspecified);
}

#[test]
fn inline_overflow_y_auto_scrolls_vertically_only() -> Result<()> {
    let mut page = page()?;
    page.dom.set_attribute(page.outer, "style", "overflow-y: auto")?;
    assert!(is_scroll(&page.dom, page.outer, Axis::Vertical));
    assert!(!is_scroll(&page.dom, page.outer, Axis::Horizontal));
    assert!(is_scroll(&page.dom, page.outer, true));
    assert!(!is_scroll(&page.dom, page.outer, false));
    Ok(())
}

#[test]
fn unspecified_axis_reads_overflow_shorthand() -> Result<()> {
    let mut page = page()?;
    page.dom.set_attribute(page.outer, "style", "overflow-y: auto")?;
    // Computed shorthand is "visible auto", which contains "auto".
    assert!(is_scroll(&page.dom, page.outer, Axis::Unspecified));
    page.dom.set_attribute(page.outer, "style", "overflow: hidden")?;
    assert!(!is_scroll(&page.dom, page.outer, Axis::Unspecified));
    Ok(())
}

#[test]
fn every_scroll_keyword_counts() -> Result<()> {
    let mut page = page()?;
    for value in ["scroll", "auto", "overlay", "hidden auto"] {
        page.dom.set_attribute(page.outer, "style", &format!("overflow: {value}"))?;
        assert!(is_scroll(&page.dom, page.outer, Axis::Unspecified), "{value}");
    }
    for value in ["visible", "hidden", "clip"] {
        page.dom.set_attribute(page.outer, "style", &format!("overflow: {value}"))?;
        assert!(!is_scroll(&page.dom, page.outer, Axis::Unspecified), "{value}");
    }
    Ok(())
}

#[test]
fn scrollable_element_is_its_own_container() -> Result<()> {
    let mut page = page()?;
    page.dom.set_attribute(page.inner, "style", "overflow: scroll")?;
    for axis in [Axis::Unspecified, Axis::Vertical, Axis::Horizontal] {
        assert!(is_scroll(&page.dom, page.inner, axis));
        assert_eq!(
            get_scroll_container(&page.dom, page.inner, axis),
            Some(ScrollContainer::Element(page.inner))
        );
    }
    Ok(())
}

#[test]
fn nearest_scrollable_ancestor_is_found() -> Result<()> {
    let mut page = page()?;
    page.dom.set_sheet_property(page.body, StyleKey::OverflowY, "auto")?;
    page.dom.set_sheet_property(page.outer, StyleKey::OverflowX, "scroll")?;

    assert_eq!(
        get_scroll_container(&page.dom, page.inner, Axis::Vertical),
        Some(ScrollContainer::Element(page.body))
    );
    assert_eq!(
        get_scroll_container(&page.dom, page.inner, Axis::Horizontal),
        Some(ScrollContainer::Element(page.outer))
    );
    Ok(())
}

#[test]
fn no_scrollable_ancestor_yields_window() -> Result<()> {
    let page = page()?;
    let found = get_scroll_container(&page.dom, page.inner, Axis::Unspecified);
    assert_eq!(found, Some(ScrollContainer::Window));
    assert!(found.is_some_and(|container| container.is_window()));
    Ok(())
}

#[test]
fn root_element_is_window_even_when_scrollable() -> Result<()> {
    let mut page = page()?;
    page.dom.set_attribute(page.html, "style", "overflow: scroll")?;
    assert_eq!(
        get_scroll_container(&page.dom, page.html, Axis::Unspecified),
        Some(ScrollContainer::Window)
    );
    assert_eq!(
        get_scroll_container(&page.dom, page.dom.document(), Axis::Vertical),
        Some(ScrollContainer::Window)
    );
    Ok(())
}

#[test]
fn detached_subtree_has_no_container() -> Result<()> {
    let mut page = page()?;
    let orphan = page.dom.create_element("section");
    let child = page.dom.append_element(orphan, "div")?;
    assert_eq!(
        get_scroll_container(&page.dom, child, Axis::Unspecified),
        None
    );
    Ok(())
}

#[test]
fn text_nodes_are_walked_past() -> Result<()> {
    let mut page = page()?;
    page.dom.set_attribute(page.outer, "style", "overflow-y: scroll")?;
    let text = page.dom.append_text(page.inner, "label")?;
    assert_eq!(
        get_scroll_container(&page.dom, text, Axis::Vertical),
        Some(ScrollContainer::Element(page.outer))
    );
    Ok(())
}

#[test]
fn inspector_matches_free_functions() -> Result<()> {
    let mut page = page()?;
    page.dom.set_attribute(page.outer, "style", "overflow-y: auto; float: left")?;
    let inspector = StyleInspector::new(&page.dom);
    assert!(inspector.is_scroll(page.outer, Axis::Vertical));
    assert_eq!(
        inspector.scroll_container(page.inner, Axis::Vertical),
        Some(ScrollContainer::Element(page.outer))
    );
    assert_eq!(
        inspector.scroll_container(page.inner, Axis::Vertical).and_then(ScrollContainer::element),
        Some(page.outer)
    );
    assert_eq!(inspector.style(Some(page.outer), "float"), "left");
    assert_eq!(inspector.try_style(page.outer, StyleKey::Float)?, "left");
    Ok(())
}

#[test]
fn deep_chain_walk_finishes_promptly() -> Result<()> {
    let mut page = page()?;
    let mut leaf = page.inner;
    for _ in 0..50_000 {
        leaf = page.dom.append_element(leaf, "div")?;
    }
    let started = Instant::now();
    assert_eq!(
        get_scroll_container(&page.dom, leaf, Axis::Vertical),
        Some(ScrollContainer::Window)
    );
    page.dom.set_sheet_property(page.body, StyleKey::OverflowY, "auto")?;
    assert_eq!(
        get_scroll_container(&page.dom, leaf, Axis::Vertical),
        Some(ScrollContainer::Element(page.body))
    );
    assert!(
        started.elapsed() < Duration::from_secs(5),
        "walking 50k ancestors took {:?}",
        started.elapsed()
    );
    Ok(())
}
