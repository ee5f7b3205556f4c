// Shared helpers for the browser component tests.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{self, FutureExt, LocalBoxFuture};
use wasm_bindgen::JsCast;

use revanth_site::mailer::{DeliveryError, EmailSender};
use revanth_site::notify::{Notice, Notifier};
use revanth_site::state::contact::ContactPayload;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

pub fn click(mount: &web_sys::Element, selector: &str) {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
}

pub fn count(mount: &web_sys::Element, selector: &str) -> u32 {
    mount.query_selector_all(selector).unwrap().length()
}

/// Set a form control's value and fire a bubbling `input` event, the way
/// typing would.
pub fn type_into(mount: &web_sys::Element, selector: &str, value: &str) {
    let element = mount.query_selector(selector).unwrap().unwrap();
    if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(textarea) = element.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        textarea.set_value(value);
    }
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let event = web_sys::Event::new_with_event_init_dict("input", &init).unwrap();
    element.dispatch_event(&event).unwrap();
}

// ---------------------------------------------------------------------------
// Fakes for the contact form's collaborators
// ---------------------------------------------------------------------------

pub struct FakeSender {
    pub outcome: Result<(), DeliveryError>,
    pub calls: RefCell<Vec<ContactPayload>>,
}

impl FakeSender {
    pub fn new(outcome: Result<(), DeliveryError>) -> Rc<Self> {
        Rc::new(Self { outcome, calls: RefCell::new(Vec::new()) })
    }
}

impl EmailSender for FakeSender {
    fn send(&self, payload: ContactPayload) -> LocalBoxFuture<'static, Result<(), DeliveryError>> {
        self.calls.borrow_mut().push(payload);
        future::ready(self.outcome.clone()).boxed_local()
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: RefCell<Vec<Notice>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}
