//! Resume intake: text extraction, AI field extraction, reconciliation and storage.

pub mod extractor;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod reconcile;
pub mod storage;
pub mod text;
