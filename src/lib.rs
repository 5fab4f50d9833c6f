mod config;
mod doc;
mod print;
mod trivia;

#[cfg(test)]
mod test;

pub use config::{config_of_dir, config_of_path, Config, FormatConfig};
pub use doc::{CommentKind, Doc, GroupId};
pub use trivia::{
    format_leading, format_leading_aligned, format_token, format_trailing, Trivia, TriviaKind,
};

pub fn render(doc: &Doc, config: &FormatConfig) -> String {
    print::print(doc, config)
}
