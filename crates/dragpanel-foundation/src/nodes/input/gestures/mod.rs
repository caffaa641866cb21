pub mod classifier;

pub use classifier::{GestureClassifier, PointerRelease};
