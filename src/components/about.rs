use yew::prelude::*;

use crate::content::{OFFERINGS, STATS, STORY};
use crate::state::navigation::Section;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={Section::About.anchor_id()} class="about-section">
            <style>
                {r#"
                .about-section {
                    padding: 5rem 1.5rem;
                    background: linear-gradient(135deg, #111827, #000);
                    color: #fff;
                }
                .about-inner {
                    max-width: 900px;
                    margin: 0 auto;
                }
                .about-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 3rem;
                    align-items: center;
                }
                .about-story p {
                    color: #d1d5db;
                    line-height: 1.7;
                    margin-top: 1.5rem;
                }
                .offer-card {
                    background: linear-gradient(135deg, rgba(30, 58, 138, 0.5), rgba(88, 28, 135, 0.5));
                    border-radius: 8px;
                    padding: 2rem;
                }
                .offer-card li {
                    list-style: none;
                    margin-top: 1rem;
                }
                .offer-card li::before {
                    content: "•";
                    color: #60a5fa;
                    margin-right: 0.75rem;
                }
                .stats-grid {
                    margin-top: 4rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 2rem;
                    text-align: center;
                }
                .stat-card {
                    background: rgba(255, 255, 255, 0.05);
                    border-radius: 8px;
                    padding: 1.5rem;
                }
                .stat-icon {
                    font-size: 2.5rem;
                }
                .stat-card p {
                    color: #9ca3af;
                }
                "#}
            </style>
            <div class="about-inner">
                <div class="section-heading">
                    <h2>{"About Revanth Recreations"}</h2>
                    <div class="section-rule"></div>
                </div>

                <div class="about-grid">
                    <div class="about-story">
                        <h3>{"Our Story"}</h3>
                        { for STORY.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                    </div>
                    <div class="offer-card">
                        <h3>{"What We Offer"}</h3>
                        <ul>
                            { for OFFERINGS.iter().map(|offering| html! { <li>{*offering}</li> }) }
                        </ul>
                    </div>
                </div>

                <div class="stats-grid">
                    { for STATS.iter().map(|stat| html! {
                        <div class="stat-card">
                            <div class="stat-icon">{stat.icon}</div>
                            <h4>{stat.value}</h4>
                            <p>{stat.label}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
