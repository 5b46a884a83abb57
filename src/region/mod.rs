//! Region names and the values attached to them.

mod countries;
mod normalize;
mod value;

pub use countries::{ALBANIA_ALIASES, INDIA_ALIASES, INDONESIA_ALIASES};
pub use normalize::{clean_name, default_tooltip, PlainNames, RegionProfile};
pub use value::{NormalizedValues, Reading, RegionValue, RegionValues};

pub(crate) use normalize::{escape_html, format_number};
