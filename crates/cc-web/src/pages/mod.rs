mod approach;
mod case_studies;
mod checklist;
mod contact;
mod digital_migration;
mod faqs;
mod guide_2027;
mod home;
mod monitoring;
mod technology;
mod wireless_overlay;

pub use approach::ApproachPage;
pub use case_studies::CaseStudiesPage;
pub use checklist::ChecklistPage;
pub use contact::ContactPage;
pub use digital_migration::DigitalMigrationPage;
pub use faqs::FaqPage;
pub use guide_2027::Guide2027Page;
pub use home::HomePage;
pub use monitoring::MonitoringPage;
pub use technology::TechnologyPage;
pub use wireless_overlay::WirelessOverlayPage;
