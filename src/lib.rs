pub mod assets;
pub mod ast;
pub mod config;
pub mod error;
pub mod html;
pub mod lexer;
pub mod parser;
pub mod pitch;
pub mod session;
pub mod toc;
pub mod transpose;

pub use ast::*;
pub use config::Config;
pub use error::*;
pub use html::to_html;
pub use lexer::tokenize;
pub use parser::parse;
pub use session::{expand_inputs, Session};
pub use transpose::transpose;

/// Compile a chopro source string to one HTML page per song, in source order.
pub fn compile(source: &str) -> Result<Vec<String>, ChoproError> {
    Ok(parse(source)?
        .iter()
        .filter_map(|block| match block {
            Block::Song(song) => Some(to_html(song)),
            Block::Section(_) => None,
        })
        .collect())
}
