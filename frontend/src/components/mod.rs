pub mod button;
pub mod card;
pub mod chat_message;
pub mod code_block;
pub mod markdown;

pub use chat_message::{ChatMessage, ChatTranscript};
pub use code_block::{CodeBlock, CopyButton};
pub use markdown::MarkdownMessage;
