//! Timeline panel: ruler, track rows, clip blocks, and the zoom toolbar.

pub mod layout;

mod clip_element;
mod panel;
mod ruler;
mod track_label;
mod track_row;

pub use panel::TimelinePanel;
