/// Common test utilities for integration tests
///
/// - `mock_file`: temp files pre-filled with known content, and an in-memory
///   target with scripted write/seek/flush faults
/// - `test_helpers`: content verification helpers
#[allow(dead_code)]
pub mod mock_file;
#[allow(dead_code)]
pub mod test_helpers;
