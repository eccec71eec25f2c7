//! Status/priority catalog module.

mod api;
mod model;

pub use api::MetaApi;
pub use model::MetaItem;
