//! Stateless integer transforms shared by the codecs.

pub mod zigzag;
