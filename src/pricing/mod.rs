mod cost;
mod names;
mod table;

pub(crate) use cost::{cache_economics, summarize_costs};
pub(crate) use names::model_display_name;
pub(crate) use table::{PricingEntry, PricingTable};
