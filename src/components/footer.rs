use yew::prelude::*;

use crate::content::{COPYRIGHT, LOGO_SRC, SITE_NAME};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    background: #000;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 2rem 1.5rem;
                    text-align: center;
                }
                .footer-brand {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 1rem;
                    color: #fff;
                    font-weight: 600;
                }
                .footer-brand img {
                    width: 48px;
                    height: 48px;
                    object-fit: contain;
                    border-radius: 8px;
                }
                .site-footer p {
                    color: #9ca3af;
                }
                "#}
            </style>
            <div class="footer-brand">
                <img src={LOGO_SRC} alt={format!("{} Logo", SITE_NAME)} />
                <span>{SITE_NAME}</span>
            </div>
            <p>{COPYRIGHT}</p>
        </footer>
    }
}
