pub mod create;
pub mod delete;
pub mod list;
pub mod show;
pub mod update;

// Re-export handler functions for use in routing
pub use create::create as coffee_create;
pub use delete::delete as coffee_delete;
pub use list::list as coffee_list;
pub use show::show as coffee_show;
pub use update::update as coffee_update;
