//! Component system: the trait, child content, render passes.

pub mod traits;
pub mod children;

pub use children::{Children, Node};
pub use traits::{render, Component};
