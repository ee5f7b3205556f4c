use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::{LOGO_SRC, SITE_NAME};
use crate::hooks::use_scrolled;
use crate::state::navigation::Section;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active: Section,
    pub menu_open: bool,
    pub on_navigate: Callback<Section>,
    pub on_toggle_menu: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { active, menu_open, on_navigate, on_toggle_menu } = props;
    let is_scrolled = use_scrolled();

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let nav_button = |section: Section, class: &'static str| {
        let on_navigate = on_navigate.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(section));
        html! {
            <button
                key={section.anchor_id()}
                class={classes!(class, (*active == section).then(|| "active"))}
                {onclick}
            >
                {section.label()}
            </button>
        }
    };

    html! {
        <header class={classes!("site-header", is_scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: all 0.3s ease;
                }
                .site-header.scrolled {
                    background: rgba(0, 0, 0, 0.9);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.4);
                }
                .header-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .brand {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .brand img {
                    width: 48px;
                    height: 48px;
                    object-fit: contain;
                    border-radius: 8px;
                }
                .brand h1 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #fff;
                    letter-spacing: 0.03em;
                }
                .desktop-nav {
                    display: flex;
                    gap: 2rem;
                }
                .nav-button, .mobile-nav-button {
                    background: none;
                    border: none;
                    color: #fff;
                    font-weight: 500;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }
                .nav-button:hover, .mobile-nav-button:hover, .nav-button.active {
                    color: #60a5fa;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .mobile-nav {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    padding: 1rem 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.2);
                }
                .mobile-nav-button {
                    text-align: left;
                }
                @media (max-width: 768px) {
                    .desktop-nav {
                        display: none;
                    }
                    .burger-menu {
                        display: block;
                    }
                }
                "#}
            </style>
            <div class="header-content">
                <div class="brand">
                    <img src={LOGO_SRC} alt={format!("{} Logo", SITE_NAME)} />
                    <h1>{SITE_NAME}</h1>
                </div>

                <nav class="desktop-nav">
                    { for Section::ALL.into_iter().map(|section| nav_button(section, "nav-button")) }
                </nav>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            if *menu_open {
                <nav class="mobile-nav">
                    { for Section::ALL.into_iter().map(|section| nav_button(section, "mobile-nav-button")) }
                </nav>
            }
        </header>
    }
}
