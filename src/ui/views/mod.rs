pub mod categories;
pub mod scorecard;
