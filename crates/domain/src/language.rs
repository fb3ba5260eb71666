// crates/domain/src/language.rs
//! 言語ごとのコメント構文（宣言的な文法定義）とその登録表

mod builtin;
pub mod grammar;
pub mod registry;

pub use grammar::{BlockDelimiter, LanguageDefinition, LanguageGrammar};
pub use registry::LanguageRegistry;
