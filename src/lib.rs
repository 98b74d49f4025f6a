pub mod analyzer;
pub mod config;
pub mod corpus;
pub mod distance;
pub mod feedback;
pub mod index;
pub mod output;
pub mod scorer;
pub mod similarity;
pub mod suggest;
