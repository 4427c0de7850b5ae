//! Unit tests for summary prompts and generation.
