mod competition;
mod competition_project;
mod competition_type;
mod timestamps;

pub use competition::Competition;
pub use competition_project::CompetitionProject;
pub use competition_type::CompetitionType;
pub use timestamps::Timestamps;
