mod dish_list;
pub use dish_list::*;

mod shell;
pub use shell::*;

mod toggle;
pub use toggle::*;
