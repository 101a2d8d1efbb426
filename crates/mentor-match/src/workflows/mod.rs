pub mod matching;
pub mod report;
pub mod survey;
