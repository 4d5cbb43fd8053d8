mod prompts;
pub mod validation;

pub use prompts::{InputSource, LineInput, NoInput, TerminalInput};
