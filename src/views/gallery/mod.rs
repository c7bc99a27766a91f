mod add_form;
mod stats;

pub use add_form::{draw_add_form, AddFormAction};
pub use stats::draw_stats;
