//! Static copy for the page.

pub const SITE_NAME: &str = "Revanth Recreations";
pub const LOGO_SRC: &str = "/public/logo.png";
pub const HERO_VIDEO_SRC: &str = "/public/background.mp4";

pub const HERO_TITLE: &str = "Welcome to Revanth Recreations";
pub const HERO_SUBTITLE: &str =
    "Creating unforgettable experiences through innovative entertainment and recreation services";

pub struct Feature {
    pub icon: &'static str,
    pub accent: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: "📷",
        accent: "blue",
        title: "Professional Photography",
        text: "Capturing your precious moments with artistic excellence",
    },
    Feature {
        icon: "🎬",
        accent: "purple",
        title: "Video Production",
        text: "Creating stunning visual stories that inspire and engage",
    },
    Feature {
        icon: "🏆",
        accent: "pink",
        title: "Event Management",
        text: "Organizing memorable events with attention to detail",
    },
];

pub const STORY: [&str; 2] = [
    "Founded with a passion for creating extraordinary experiences, Revanth Recreations has been at the forefront of entertainment and recreation services. We believe that every moment deserves to be celebrated and remembered.",
    "Our team of creative professionals combines technical expertise with artistic vision to deliver services that exceed expectations. From intimate gatherings to grand celebrations, we bring your vision to life.",
];

pub const OFFERINGS: [&str; 4] = [
    "Professional Photography & Videography",
    "Event Planning & Management",
    "Creative Content Production",
    "Entertainment Solutions",
];

pub struct Stat {
    pub icon: &'static str,
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat { icon: "👥", value: "500+", label: "Happy Clients" },
    Stat { icon: "📷", value: "1000+", label: "Projects Completed" },
    Stat { icon: "🏆", value: "5+", label: "Years of Excellence" },
];

pub struct ContactLine {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACT_LINES: [ContactLine; 3] = [
    ContactLine { icon: "📞", label: "Phone", value: "+91 6281880863" },
    ContactLine { icon: "✉️", label: "Email", value: "revanthrecreations@gmail.com" },
    ContactLine { icon: "📍", label: "Location", value: "Anakapalle, Andhra Pradesh, India" },
];

pub const BUSINESS_HOURS: [&str; 3] = [
    "Monday - Friday: 9:00 AM - 7:00 PM",
    "Saturday: 10:00 AM - 6:00 PM",
    "Sunday: By Appointment Only",
];

pub const COPYRIGHT: &str =
    "© 2025 Revanth Recreations. All rights reserved. Creating memories that last a lifetime.";
