/// Water wave simulation module

pub mod wave_field;

pub use wave_field::*;
