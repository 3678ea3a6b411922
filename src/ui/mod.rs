//! Server-rendered page

pub mod html;
pub mod page;

pub use page::{render_page, PageContext, PageNotice};
