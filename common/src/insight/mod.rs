//! Pure insight logic shared by the server routes and the browser UI:
//! URL-alias resolution for data groups, decoding of the display directive
//! embedded in `image_path`, and grouping of flat fact-sheet values into the
//! sections shown on the detail page.

pub mod alias;
pub mod display;
pub mod grouping;
