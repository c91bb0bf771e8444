pub mod aggregator;
pub mod description;
pub mod dto;
pub mod formatter;
pub mod normalizer;
