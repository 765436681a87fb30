//! Turkish text helpers shared by the recognizers and recommenders.

pub mod keywords;
pub mod normalizer;
pub mod stemmer;
