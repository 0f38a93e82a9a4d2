pub mod competition;
pub mod competition_type;

pub use competition::CompetitionRepository;
pub use competition_type::TypeRepository;
