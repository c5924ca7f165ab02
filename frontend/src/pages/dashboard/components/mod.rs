pub mod shortcuts;
pub mod summary;

pub use shortcuts::QuickActions;
pub use summary::SummarySection;
