pub mod block_quote;
pub mod emphasis;
pub mod heading;
pub mod list;

pub use block_quote::BlockQuote;
pub use emphasis::Emphasis;
pub use heading::Heading;
pub use list::ListMarker;
