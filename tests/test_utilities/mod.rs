/// Mock implementations for testing
pub mod mocks;
