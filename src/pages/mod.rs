//! Pages
//!
//! One component per route. Each page closes with the footer menu.

mod details;
mod faqs;
mod home;
mod not_found;
mod registry;
mod visiting;

pub use details::DetailsPage;
pub use faqs::FaqsPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use registry::RegistryPage;
pub use visiting::VisitingPage;
