pub mod loaders;
pub mod profile;
pub mod publication;

pub use loaders::{load_researcher_entries, ResearcherEntry, ResearcherTarget};
pub use profile::{BasicInfo, ResearcherProfile};
pub use publication::{pub_count_by_year, PublicationRecord, RawColumns};
