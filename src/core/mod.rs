pub mod catalog;
pub mod compositor;
pub mod orientation;
pub mod resolver;
pub mod spread;

pub use crate::domain::model::{AssetKey, CardRequest, DecodedImage};
pub use crate::domain::ports::{AssetStore, SpreadSource};
pub use crate::utils::error::Result;
