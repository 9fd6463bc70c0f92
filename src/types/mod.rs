// Public modules
pub mod message;
pub mod message_create_params;
pub mod message_param;
pub mod model;
pub mod usage;

// Re-exports
pub use message::{ContentBlock, Message, ReplyText};
pub use message_create_params::MessageCreateParams;
pub use message_param::{MessageParam, MessageRole};
pub use model::{KnownModel, Model};
pub use usage::Usage;
