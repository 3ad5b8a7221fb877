// Resume analysis: PDF/text in, structured tags out.
// The provider is reached only through llm_client.

pub mod extract;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod prompts;
#[cfg(test)]
pub mod test_pdf;
