//! crates/learning_assistant_core/src/routes.rs
//!
//! Route strings the client links to. The core only builds links; the shell
//! performs the navigation.

pub const LOGIN: &str = "/login";
pub const DOCUMENTS: &str = "/documents";

pub fn document(id: &str) -> String {
    format!("{DOCUMENTS}/{id}")
}

pub fn quiz(id: &str) -> String {
    format!("/quizzes/{id}")
}
