// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod chart;
pub mod data_table;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod textarea;

// Primitive wrappers
pub mod avatar;
pub mod checkbox;
pub mod label;
pub mod progress;
pub mod separator;
pub mod switch;
pub mod toast;

// Depends on separator styling
pub mod sidebar;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use chart::*;
pub use checkbox::*;
pub use data_table::*;
pub use form_select::*;
pub use input::*;
pub use label::*;
pub use page_header::*;
pub use progress::*;
pub use separator::*;
pub use sidebar::*;
pub use switch::*;
pub use textarea::*;
pub use toast::*;
