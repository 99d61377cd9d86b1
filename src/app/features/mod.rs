pub mod executor;
pub mod suggestions;
pub mod visibility;
