use crate::domain::person::{Person, PersonStatus};
use crate::domain::tip::Tip;

/// Aggregated data required to render the record detail page.
#[derive(Debug)]
pub struct PersonPageData {
    pub person: Person,
    /// Derived missing/located classification, recomputed for this render.
    pub status: PersonStatus,
    /// Community tips, newest sighting first.
    pub tips: Vec<Tip>,
}
