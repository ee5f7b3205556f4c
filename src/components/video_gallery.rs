use std::rc::Rc;

use yew::prelude::*;

use crate::catalog::VideoEntry;
use crate::state::gallery::{GalleryMsg, GalleryState};
use crate::state::navigation::Section;

#[derive(Properties, PartialEq)]
pub struct VideoGalleryProps {
    pub catalog: Rc<[VideoEntry]>,
}

pub struct VideoGallery {
    state: GalleryState,
}

impl Component for VideoGallery {
    type Message = GalleryMsg;
    type Properties = VideoGalleryProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            state: GalleryState::new(ctx.props().catalog.clone()),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if Rc::ptr_eq(&ctx.props().catalog, &old_props.catalog) {
            return false;
        }
        self.state = GalleryState::new(ctx.props().catalog.clone());
        true
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.state.apply(msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section id={Section::Videos.anchor_id()} class="videos-section">
                <style>
                    {r#"
                    .videos-section {
                        padding: 5rem 1.5rem;
                        background: linear-gradient(135deg, #111827, #000);
                        color: #fff;
                    }
                    .videos-inner {
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .video-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                        gap: 2rem;
                    }
                    .video-card {
                        cursor: pointer;
                        border-radius: 8px;
                        overflow: hidden;
                        background: rgba(255, 255, 255, 0.05);
                        transition: background 0.3s ease;
                    }
                    .video-card:hover {
                        background: rgba(255, 255, 255, 0.1);
                    }
                    .video-thumb {
                        aspect-ratio: 16 / 9;
                        background: #000;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 3rem;
                        color: rgba(255, 255, 255, 0.8);
                    }
                    .video-card-body {
                        padding: 1.5rem;
                    }
                    .video-card-body p {
                        color: #d1d5db;
                        font-size: 0.875rem;
                    }
                    .view-all {
                        text-align: center;
                        margin-top: 3rem;
                    }
                    .view-all button {
                        padding: 1rem 2rem;
                        border: none;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #9333ea, #db2777);
                        color: #fff;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .video-modal {
                        position: fixed;
                        inset: 0;
                        z-index: 60;
                        background: rgba(0, 0, 0, 0.7);
                        backdrop-filter: blur(4px);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 2rem 1rem;
                    }
                    .video-modal-frame {
                        position: relative;
                        width: 100%;
                        max-width: 42rem;
                        aspect-ratio: 16 / 9;
                        background: #000;
                        border-radius: 12px;
                        overflow: hidden;
                        box-shadow: 0 24px 48px rgba(0, 0, 0, 0.5);
                    }
                    .video-modal-frame video {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .video-modal-close {
                        position: absolute;
                        top: 0.5rem;
                        right: 0.5rem;
                        z-index: 10;
                        border: none;
                        border-radius: 9999px;
                        padding: 0.5rem 0.75rem;
                        background: rgba(255, 255, 255, 0.1);
                        color: #fff;
                        cursor: pointer;
                    }
                    "#}
                </style>
                <div class="videos-inner">
                    <div class="section-heading">
                        <h2>{"Our Video Portfolio"}</h2>
                        <div class="section-rule"></div>
                        <p class="section-intro">
                            {"Explore our collection of creative videos showcasing our work and the memorable moments we've captured"}
                        </p>
                    </div>

                    <div class="video-grid">
                        { for self.state.visible().iter().map(|entry| self.render_card(ctx, entry)) }
                    </div>

                    if self.state.has_more() {
                        <div class="view-all">
                            <button onclick={ctx.link().callback(|_| GalleryMsg::Reveal)}>
                                {"View All Videos"}
                            </button>
                        </div>
                    }
                </div>

                { self.render_modal(ctx) }
            </section>
        }
    }
}

impl VideoGallery {
    fn render_card(&self, ctx: &Context<Self>, entry: &VideoEntry) -> Html {
        let source = entry.source.clone();
        let onclick = ctx.link().callback(move |_| GalleryMsg::Open(source.clone()));

        html! {
            <div key={entry.source.clone()} class="video-card" {onclick}>
                <div class="video-thumb">{"▶"}</div>
                <div class="video-card-body">
                    <h3>{&entry.title}</h3>
                    <p>{&entry.description}</p>
                </div>
            </div>
        }
    }

    fn render_modal(&self, ctx: &Context<Self>) -> Html {
        let Some(entry) = self.state.selected_entry() else {
            return html! {};
        };

        html! {
            <div class="video-modal">
                <div class="video-modal-frame">
                    <button
                        class="video-modal-close"
                        aria-label="Close video"
                        onclick={ctx.link().callback(|_| GalleryMsg::Close)}
                    >
                        {"✕"}
                    </button>
                    <video
                        key={entry.source.clone()}
                        src={entry.source.clone()}
                        title={entry.title.clone()}
                        controls=true
                        autoplay=true
                    />
                </div>
            </div>
        }
    }
}
