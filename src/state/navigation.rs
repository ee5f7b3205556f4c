use log::{debug, info};

/// A named region of the page, and the nav entry that scrolls to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Videos,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Home, Section::About, Section::Videos, Section::Contact];

    /// Element id of the section's anchor in the layout.
    pub fn anchor_id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Videos => "videos",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Videos => "Videos",
            Section::Contact => "Contact Us",
        }
    }
}

pub trait AnchorScroller {
    /// Smoothly scrolls the viewport to the element with `anchor_id`.
    /// Returns `false` if no such element exists.
    fn scroll_to(&self, anchor_id: &str) -> bool;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub active: Section,
    pub menu_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavMsg {
    /// The viewport reached this section's anchor.
    Arrived(Section),
    ToggleMenu,
}

impl NavigationState {
    pub fn apply(&mut self, msg: NavMsg) -> bool {
        match msg {
            NavMsg::Arrived(section) => {
                let changed = self.active != section || self.menu_open;
                self.active = section;
                self.menu_open = false;
                changed
            }
            NavMsg::ToggleMenu => {
                self.menu_open = !self.menu_open;
                true
            }
        }
    }
}

/// Scrolls to `section` and yields the message to apply, or `None` when the
/// layout has no matching anchor.
pub fn navigate_to(anchors: &dyn AnchorScroller, section: Section) -> Option<NavMsg> {
    if anchors.scroll_to(section.anchor_id()) {
        info!("Navigating to {} section", section.anchor_id());
        Some(NavMsg::Arrived(section))
    } else {
        debug!("No anchor found for #{}", section.anchor_id());
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeAnchors {
        present: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl FakeAnchors {
        fn with(present: &[&'static str]) -> Self {
            Self { present: present.to_vec(), scrolled: RefCell::new(Vec::new()) }
        }
    }

    impl AnchorScroller for FakeAnchors {
        fn scroll_to(&self, anchor_id: &str) -> bool {
            if self.present.contains(&anchor_id) {
                self.scrolled.borrow_mut().push(anchor_id.to_string());
                true
            } else {
                false
            }
        }
    }

    fn navigate(state: &mut NavigationState, anchors: &FakeAnchors, section: Section) -> bool {
        match navigate_to(anchors, section) {
            Some(msg) => state.apply(msg),
            None => false,
        }
    }

    #[test]
    fn navigating_sets_active_section_and_closes_menu() {
        let anchors = FakeAnchors::with(&["home", "about", "videos", "contact"]);
        for section in Section::ALL {
            for menu_open in [false, true] {
                let mut state = NavigationState { active: Section::Home, menu_open };
                navigate(&mut state, &anchors, section);
                assert_eq!(state.active, section);
                assert!(!state.menu_open);
            }
        }
        assert_eq!(anchors.scrolled.borrow().len(), 8);
    }

    #[test]
    fn missing_anchor_is_a_no_op() {
        let anchors = FakeAnchors::with(&["home"]);
        let mut state = NavigationState { active: Section::Home, menu_open: true };

        assert!(!navigate(&mut state, &anchors, Section::Videos));
        assert_eq!(state, NavigationState { active: Section::Home, menu_open: true });
        assert!(anchors.scrolled.borrow().is_empty());
    }

    #[test]
    fn toggle_menu_flips_flag() {
        let mut state = NavigationState::default();
        state.apply(NavMsg::ToggleMenu);
        assert!(state.menu_open);
        state.apply(NavMsg::ToggleMenu);
        assert!(!state.menu_open);
    }

    #[test]
    fn arriving_at_current_section_with_menu_closed_skips_redraw() {
        let mut state = NavigationState::default();
        assert!(!state.apply(NavMsg::Arrived(Section::Home)));
        assert!(state.apply(NavMsg::Arrived(Section::About)));
    }

    #[test]
    fn contact_label_reads_contact_us() {
        assert_eq!(Section::Contact.label(), "Contact Us");
        assert_eq!(Section::Videos.anchor_id(), "videos");
    }
}
