//! Asset module

mod api;
mod csv;
mod models;

pub use csv::{parse_assets, ASSET_HEADER};
pub use models::{Asset, AssetOs};
