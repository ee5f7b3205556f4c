use log::debug;
use web_sys::HtmlMediaElement;
use yew::prelude::*;

use crate::content::{FEATURES, HERO_SUBTITLE, HERO_TITLE, HERO_VIDEO_SRC};
use crate::state::navigation::Section;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let go_to = |section: Section| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(section))
    };

    // The `muted` attribute alone leaves the media property false, and
    // browsers refuse to autoplay unmuted video.
    let video_ref = use_node_ref();
    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(video) = video_ref.cast::<HtmlMediaElement>() {
                    video.set_muted(true);
                    if video.play().is_err() {
                        debug!("Background video refused to play");
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <section id={Section::Home.anchor_id()} class="hero">
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .hero-video {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: brightness(0.5);
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.4);
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    max-width: 900px;
                    padding: 8rem 1.5rem 4rem;
                    text-align: center;
                    color: #fff;
                }
                .hero-content h2 {
                    font-size: clamp(2rem, 5vw, 3rem);
                    font-weight: 800;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(90deg, #60a5fa, #a855f7, #ec4899);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #e5e7eb;
                    line-height: 1.6;
                    margin-bottom: 2rem;
                }
                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                }
                .hero-cta, .hero-secondary {
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    font-weight: 600;
                    color: #fff;
                    cursor: pointer;
                    transition: transform 0.3s ease;
                }
                .hero-cta {
                    border: none;
                    background: linear-gradient(90deg, #2563eb, #9333ea);
                }
                .hero-secondary {
                    background: transparent;
                    border: 2px solid rgba(255, 255, 255, 0.3);
                }
                .hero-cta:hover, .hero-secondary:hover {
                    transform: scale(1.05);
                }
                .feature-grid {
                    margin-top: 4rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                }
                .feature-card {
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(4px);
                    border-radius: 8px;
                    padding: 1.5rem;
                }
                .feature-icon {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }
                .feature-card p {
                    color: #d1d5db;
                }
                "#}
            </style>
            <video
                ref={video_ref}
                class="hero-video"
                src={HERO_VIDEO_SRC}
                autoplay=true
                muted=true
                loop=true
                playsinline=true
            />
            <div class="hero-overlay"></div>

            <div class="hero-content">
                <h2>{HERO_TITLE}</h2>
                <p class="hero-subtitle">{HERO_SUBTITLE}</p>

                <div class="hero-cta-group">
                    <button class="hero-cta" onclick={go_to(Section::About)}>
                        {"Discover More"}
                    </button>
                    <button class="hero-secondary" onclick={go_to(Section::Videos)}>
                        {"▶ Watch Videos"}
                    </button>
                </div>

                <div class="feature-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class={classes!("feature-card", feature.accent)}>
                            <div class="feature-icon">{feature.icon}</div>
                            <h3>{feature.title}</h3>
                            <p>{feature.text}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
