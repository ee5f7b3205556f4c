//! View state for the page. Every holder here is a plain struct driven by a
//! message enum through `apply`, which returns whether the view must redraw.
//! Browser side effects live in `crate::dom`, `crate::mailer` and
//! `crate::notify`.

pub mod contact;
pub mod gallery;
pub mod navigation;
pub mod scroll;
