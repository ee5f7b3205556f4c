use log::{debug, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::content::{BUSINESS_HOURS, CONTACT_LINES};
use crate::mailer::Mailer;
use crate::notify::{Notice, Notifications};
use crate::state::contact::{deliver, ContactFormState, ContactMsg, Field, SubmitError};
use crate::state::navigation::Section;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or_default]
    pub mailer: Mailer,
    #[prop_or_default]
    pub notifications: Notifications,
}

pub enum Msg {
    Form(ContactMsg),
    Submit,
}

pub struct ContactForm {
    state: ContactFormState,
}

impl Component for ContactForm {
    type Message = Msg;
    type Properties = ContactFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { state: ContactFormState::default() }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Form(msg) => self.state.apply(msg),
            Msg::Submit => match self.state.begin_submit() {
                Ok(payload) => {
                    let sender = ctx.props().mailer.0.clone();
                    let notifier = ctx.props().notifications.0.clone();
                    ctx.link().send_future(async move {
                        Msg::Form(deliver(sender, notifier, payload).await)
                    });
                    true
                }
                Err(SubmitError::Invalid(e)) => {
                    debug!("Contact form rejected: {}", e);
                    ctx.props().notifications.0.notify(Notice::MissingFields);
                    false
                }
                Err(SubmitError::InFlight) => {
                    warn!("Ignoring submit while a message is still sending");
                    false
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <form class="contact-form" {onsubmit}>
                <h3>{"Send us a Message"}</h3>
                { self.render_input(ctx, Field::Name, "text") }
                { self.render_input(ctx, Field::Email, "email") }
                { self.render_input(ctx, Field::Phone, "tel") }
                <textarea
                    name={Field::Message.name()}
                    placeholder={Field::Message.placeholder()}
                    rows="4"
                    value={self.state.fields.message.clone()}
                    oninput={ctx.link().callback(|e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        Msg::Form(ContactMsg::Update(Field::Message, input.value()))
                    })}
                />
                <button type="submit" class="contact-submit" disabled={self.state.pending}>
                    { if self.state.pending { "Sending..." } else { "Send Message" } }
                </button>
            </form>
        }
    }
}

impl ContactForm {
    fn render_input(&self, ctx: &Context<Self>, field: Field, kind: &'static str) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::Form(ContactMsg::Update(field, input.value()))
        });

        html! {
            <input
                type={kind}
                name={field.name()}
                placeholder={field.placeholder()}
                value={self.state.fields.get(field).to_string()}
                {oninput}
            />
        }
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    html! {
        <section id={Section::Contact.anchor_id()} class="contact-section">
            <style>
                {r#"
                .contact-section {
                    padding: 5rem 1.5rem;
                    background: linear-gradient(135deg, #111827, #000);
                    color: #fff;
                }
                .contact-grid {
                    max-width: 1150px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 3rem;
                }
                .contact-form {
                    background: rgba(255, 255, 255, 0.05);
                    border-radius: 8px;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .contact-form h3 {
                    color: #60a5fa;
                }
                .contact-form input, .contact-form textarea {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 8px;
                    color: #fff;
                    resize: none;
                }
                .contact-form input:focus, .contact-form textarea:focus {
                    outline: none;
                    border-color: #60a5fa;
                }
                .contact-submit {
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 8px;
                    background: linear-gradient(90deg, #2563eb, #16a34a);
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                }
                .contact-submit:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }
                .contact-info h3 {
                    color: #4ade80;
                    margin-bottom: 1.5rem;
                }
                .contact-info > p {
                    color: #d1d5db;
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }
                .contact-line {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }
                .contact-line-icon {
                    width: 48px;
                    height: 48px;
                    border-radius: 8px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(135deg, #3b82f6, #22c55e);
                }
                .contact-line p, .business-hours p {
                    color: #d1d5db;
                }
                .business-hours {
                    background: rgba(255, 255, 255, 0.05);
                    border-radius: 8px;
                    padding: 1.5rem;
                }
                "#}
            </style>
            <div class="section-heading">
                <h2>{"Contact Us"}</h2>
                <div class="section-rule"></div>
                <p class="section-intro">
                    {"Ready to create something amazing together? Get in touch with us today!"}
                </p>
            </div>

            <div class="contact-grid">
                <ContactForm />

                <div class="contact-info">
                    <h3>{"Get in Touch"}</h3>
                    <p>
                        {"We're here to help bring your vision to life. Whether you have a specific project in mind or just want to explore possibilities, we'd love to hear from you."}
                    </p>
                    { for CONTACT_LINES.iter().map(|line| html! {
                        <div class="contact-line">
                            <div class="contact-line-icon">{line.icon}</div>
                            <div>
                                <h4>{line.label}</h4>
                                <p>{line.value}</p>
                            </div>
                        </div>
                    }) }
                    <div class="business-hours">
                        <h4>{"Business Hours"}</h4>
                        { for BUSINESS_HOURS.iter().map(|hours| html! { <p>{*hours}</p> }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
