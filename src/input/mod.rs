//! Interactive front ends.

pub mod gui;
