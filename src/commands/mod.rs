pub mod dispatch;
pub mod handlers;
pub mod history;
pub mod parser;
pub mod types;

pub use dispatch::Dispatcher;
pub use handlers::handle_command;
pub use history::{CommandHistory, CommandRecord, RecordStatus};
pub use parser::parse_command;
pub use types::{Command, CommandResult};
