pub mod delete;
pub mod delete_prefix;
pub mod dump;
pub mod get;
pub mod health;
pub mod list;
pub mod reset;
pub mod set;

pub use delete::delete_handler;
pub use delete_prefix::delete_prefix_handler;
pub use dump::dump_handler;
pub use get::get_handler;
pub use health::health_handler;
pub use list::list_handler;
pub use reset::reset_handler;
pub use set::set_handler;
