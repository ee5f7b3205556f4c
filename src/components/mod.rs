pub mod about;
pub mod contact_form;
pub mod footer;
pub mod header;
pub mod hero;
pub mod video_gallery;
