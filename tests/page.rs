// Integration test for the whole page: layout landmarks and navigation.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{cleanup, click, count, create_mount_point};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::platform::time::sleep;

use revanth_site::app::App;
use revanth_site::state::navigation::Section;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Scroll the window and fire the `scroll` event synchronously instead of
/// waiting for the browser's async one.
fn scroll_window_to(y: f64) {
    let window = gloo_utils::window();
    window.scroll_to_with_x_and_y(0.0, y);
    window
        .dispatch_event(&web_sys::Event::new("scroll").unwrap())
        .unwrap();
}

fn header_is_scrolled(mount: &web_sys::Element) -> bool {
    mount.query_selector(".site-header.scrolled").unwrap().is_some()
}

#[wasm_bindgen_test]
async fn page_renders_every_section_anchor() {
    let mount = create_mount_point();
    yew::Renderer::<App>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    for section in Section::ALL {
        assert!(
            mount.query_selector(&format!("#{}", section.anchor_id())).unwrap().is_some(),
            "missing anchor for {:?}",
            section
        );
    }

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("Revanth Recreations"), "site name missing");
    assert!(text.contains("Our Video Portfolio"), "gallery heading missing");
    assert!(text.contains("Send us a Message"), "contact form missing");
    assert_eq!(count(&mount, ".video-card"), 6);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn nav_click_highlights_section_and_closes_menu() {
    let mount = create_mount_point();
    yew::Renderer::<App>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    click(&mount, ".burger-menu");
    sleep(Duration::ZERO).await;
    assert!(mount.query_selector(".mobile-nav").unwrap().is_some());

    click(&mount, ".mobile-nav .mobile-nav-button:nth-child(3)");
    sleep(Duration::ZERO).await;

    assert!(mount.query_selector(".mobile-nav").unwrap().is_none(), "menu should close");
    let active = mount
        .query_selector(".desktop-nav .nav-button.active")
        .unwrap()
        .expect("one nav button should be active");
    assert_eq!(active.text_content().unwrap(), Section::Videos.label());

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn header_follows_scroll_until_unmounted() {
    scroll_window_to(0.0);
    let mount = create_mount_point();
    mount.set_attribute("style", "min-height: 5000px").unwrap();
    let handle = yew::Renderer::<App>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;
    assert!(!header_is_scrolled(&mount), "header starts transparent at the top");

    scroll_window_to(100.0);
    sleep(Duration::ZERO).await;
    assert!(header_is_scrolled(&mount), "header should turn solid past 50px");

    scroll_window_to(0.0);
    sleep(Duration::ZERO).await;
    assert!(!header_is_scrolled(&mount), "header should clear when back at the top");

    handle.destroy();
    sleep(Duration::ZERO).await;
    assert!(mount.query_selector(".site-header").unwrap().is_none());

    // The listener went away with the header; scrolling now must be harmless.
    scroll_window_to(100.0);
    sleep(Duration::ZERO).await;
    assert!(mount.query_selector(".site-header").unwrap().is_none());

    scroll_window_to(0.0);
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn hero_background_video_is_muted_for_autoplay() {
    let mount = create_mount_point();
    yew::Renderer::<App>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let video = mount
        .query_selector(".hero-video")
        .unwrap()
        .expect("hero video missing")
        .dyn_into::<web_sys::HtmlMediaElement>()
        .unwrap();
    assert!(video.muted(), "muted property must be set, not just the attribute");
    assert!(video.has_attribute("playsinline"));
    assert!(video.loop_());

    cleanup(&mount);
}
