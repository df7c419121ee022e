mod home;
pub use home::Home;

mod section;
pub use section::SectionPage;
