pub mod backend;
pub mod gemini;
pub mod lexicon;

pub use backend::BackendProvider;
pub use gemini::GeminiProvider;
pub use lexicon::LexiconProvider;
