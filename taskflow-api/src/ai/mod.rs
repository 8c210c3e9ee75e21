/// AI suggestion adapter
///
/// The API invokes an external text-generation service on exactly two
/// endpoints: suggesting a work-log entry for a task and generating a
/// subtask list for a project. The core treats the service as a fallible,
/// latency-bearing black box behind the [`AiProvider`] trait; it never
/// touches the entity store.
///
/// - `provider`: The trait contract and error type
/// - `openai`: Production implementation against an OpenAI-compatible API
/// - `mock`: Deterministic implementation for tests

pub mod mock;
pub mod openai;
mod provider;

pub use mock::MockAiProvider;
pub use openai::OpenAiProvider;
pub use provider::{AiError, AiProvider, AiResult, SubtaskSuggestion};
