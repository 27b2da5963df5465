pub mod item;

pub use item::{Generation, Identifiable, ModelIdentity};
