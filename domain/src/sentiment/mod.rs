//! Sentiment domain
//!
//! The fixed label vocabulary and the classifier's verdict on a piece of text.

pub mod label;
pub mod value_objects;
