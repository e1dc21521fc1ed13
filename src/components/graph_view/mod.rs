mod controls;
mod listing;
mod response;

pub use controls::ViewControls;
pub use listing::ProjectionListing;
pub use response::ResponsePanel;
