//! Reusable UI components

mod about;
mod header;
mod status_bar;
mod track_list;
mod track_row;

pub use about::AboutBox;
pub use track_list::TrackList;
