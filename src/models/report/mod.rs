pub mod scorecard;
pub mod section;

pub use scorecard::{DisplayModel, MetadataDisplay, ZtpBadge, ZtpBanner};
pub use section::{SectionDisplay, SectionKind, SubscoreDisplay};
