//! Unit tests for the production pipeline.
