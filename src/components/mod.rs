//! Built-in components: Page, Element, Grid, Header, Footer, and the Text,
//! Button and Center building blocks they compose.

pub mod text;
pub mod button;
pub mod center;
pub mod header;
pub mod footer;
pub mod element;
pub mod grid;
pub mod page;

pub use button::Button;
pub use center::Center;
pub use element::{Element, ElementStyle};
pub use footer::{Author, Footer, FooterButton};
pub use grid::Grid;
pub use header::Header;
pub use page::Page;
pub use text::{Text, TextVariant};

/// Classes shared by the header and footer bands.
pub(crate) const BAND_CLASSES: &str = "flex flex-col items-center w-auto bg-gray-900 text-white";
