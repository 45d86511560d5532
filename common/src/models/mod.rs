mod asset;
mod market;

pub use asset::{AcceptedCoin, Asset};
pub use market::Market;
