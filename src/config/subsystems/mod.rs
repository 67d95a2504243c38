pub mod parser;
pub mod processor;
pub mod stemmer;

pub use parser::ParserConfig;
pub use processor::ProcessorConfig;
pub use stemmer::StemmerConfig;
