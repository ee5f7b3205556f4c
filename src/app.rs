use std::rc::Rc;

use yew::prelude::*;

use crate::catalog::{self, VideoEntry};
use crate::components::about::About;
use crate::components::contact_form::ContactSection;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::video_gallery::VideoGallery;
use crate::dom::DocumentAnchors;
use crate::state::navigation::{navigate_to, NavMsg, NavigationState, Section};

pub enum Msg {
    Navigate(Section),
    ToggleMenu,
}

pub struct App {
    nav: NavigationState,
    anchors: DocumentAnchors,
    catalog: Rc<[VideoEntry]>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            nav: NavigationState::default(),
            anchors: DocumentAnchors,
            catalog: catalog::load(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(section) => match navigate_to(&self.anchors, section) {
                Some(arrived) => self.nav.apply(arrived),
                None => false,
            },
            Msg::ToggleMenu => self.nav.apply(NavMsg::ToggleMenu),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = ctx.link().callback(Msg::Navigate);
        let on_toggle_menu = ctx.link().callback(|_| Msg::ToggleMenu);

        html! {
            <div class="site">
                <style>
                    {r#"
                    * {
                        box-sizing: border-box;
                        margin: 0;
                        padding: 0;
                    }
                    body {
                        background: #000;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    html {
                        scroll-behavior: smooth;
                    }
                    .site {
                        min-height: 100vh;
                        background: #000;
                    }
                    .section-heading {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-heading h2 {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                        background: linear-gradient(90deg, #60a5fa, #a855f7, #ec4899);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .section-rule {
                        width: 6rem;
                        height: 4px;
                        margin: 0 auto;
                        background: linear-gradient(90deg, #3b82f6, #a855f7);
                    }
                    .section-intro {
                        max-width: 40rem;
                        margin: 1.5rem auto 0;
                        font-size: 1.25rem;
                        color: #d1d5db;
                    }
                    "#}
                </style>
                <Header
                    active={self.nav.active}
                    menu_open={self.nav.menu_open}
                    on_navigate={on_navigate.clone()}
                    {on_toggle_menu}
                />
                <Hero {on_navigate} />
                <About />
                <VideoGallery catalog={self.catalog.clone()} />
                <ContactSection />
                <Footer />
            </div>
        }
    }
}
