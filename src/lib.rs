#![forbid(unsafe_code)]
//! treesnap — snapshot a directory's structure as text and put it on the clipboard.

pub mod cli;
pub mod clipboard;
pub mod ignore;
pub mod pattern;
pub mod progress;
pub mod render;
pub mod walk;
