pub mod loader;

pub use loader::{ProjectionLoader, ProjectionLoaderError, ProjectionRecord};
