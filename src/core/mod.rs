pub mod errors;
pub mod extractor;
pub mod models;
pub mod overlap;
pub mod scorer;
pub mod service;
pub mod tokenizer;
pub mod vectorizer;
