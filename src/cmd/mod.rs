pub mod parse;
pub mod sniff;
