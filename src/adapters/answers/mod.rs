mod json_answers;

pub use json_answers::JsonAnswerStore;
