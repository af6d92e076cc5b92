mod html;

pub use html::HtmlSlotExtractor;
