//! Helper functions for page rendering
//!
//! Small, pure building blocks shared by the blog list, article and
//! homepage views: escaping, dates, URLs and pagination.

mod date;
mod html;
mod list;
mod url;

pub use date::*;
pub use html::*;
pub use list::*;
pub use url::*;
