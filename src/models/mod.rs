pub mod facets;
pub mod order;
pub mod product;

pub use facets::*;
pub use order::*;
pub use product::*;
