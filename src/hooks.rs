use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::dom;
use crate::state::scroll::ScrollState;

/// Tracks whether the window is scrolled past the header threshold. The
/// scroll listener lives exactly as long as the calling component.
#[hook]
pub fn use_scrolled() -> bool {
    let scroll = use_state_eq(|| ScrollState::from_offset(dom::scroll_offset()));

    {
        let scroll = scroll.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        scroll.set(ScrollState::from_offset(dom::scroll_offset()));
                    }) as Box<dyn FnMut()>);

                    if window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        warn!("Could not register scroll listener");
                    }
                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        if window
                            .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                            .is_err()
                        {
                            warn!("Could not remove scroll listener");
                        }
                    }
                }
            },
            (),
        );
    }

    scroll.past_threshold
}
