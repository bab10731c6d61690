//! UI components for the portfolio page.
//!
//! One component per page section, plus the overlays (project modal, toast).

mod about;
mod contact;
mod footer;
mod hero;
mod navbar;
mod portfolio;
mod project_modal;
mod robot;
mod skills;
mod toast;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::NavBar;
pub use portfolio::Portfolio;
pub use project_modal::ProjectModal;
pub use robot::Robot;
pub use skills::Skills;
pub use toast::ToastView;
