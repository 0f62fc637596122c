// Title analysis: the extractors and classifiers the matcher is built on.
//
// Everything here is a pure function of one title string. The vocabularies
// are fixed tables; nothing is cached between calls.

pub mod entities;
pub mod keywords;
pub mod polarity;
pub mod topics;
pub mod words;
