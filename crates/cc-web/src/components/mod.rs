mod case_study_carousel;
mod comparison;
mod content_block;
mod countdown;
mod cta;
mod features;
mod footer;
mod hero;
mod nav;
mod page_header;
mod process;
mod reveal;
mod risk_section;
mod stats;
mod system_diagram;
mod timeline;

pub use case_study_carousel::CaseStudyCarousel;
pub use comparison::Comparison;
pub use content_block::{BlockText, ContentBlock, ContentBlockData, ImageSide, Inline};
pub use countdown::CountdownTimer;
pub use cta::CallToAction;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Navigation;
pub use page_header::PageHeader;
pub use process::MigrationProcess;
pub use reveal::Reveal;
pub use risk_section::RiskSection;
pub use stats::Stats;
pub use system_diagram::SystemDiagram;
pub use timeline::InteractiveTimeline;
