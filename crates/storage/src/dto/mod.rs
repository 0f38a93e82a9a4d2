pub mod competition;
pub mod competition_type;
