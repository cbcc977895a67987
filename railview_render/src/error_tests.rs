use super::*;

#[test]
fn test_backend_error_display() {
    let err = Error::BackendError("device lost".to_string());
    assert_eq!(err.to_string(), "Backend error: device lost");
}

#[test]
fn test_out_of_memory_display() {
    assert_eq!(Error::OutOfMemory.to_string(), "Out of GPU memory");
}

#[test]
fn test_invalid_resource_display() {
    let err = Error::InvalidResource("program 'water_surface' not loaded".to_string());
    assert!(err.to_string().starts_with("Invalid resource:"));
    assert!(err.to_string().contains("water_surface"));
}

#[test]
fn test_initialization_failed_display() {
    let err = Error::InitializationFailed("no GPU adapter".to_string());
    assert_eq!(err.to_string(), "Initialization failed: no GPU adapter");
}

#[test]
fn test_error_is_std_error() {
    fn assert_std_error<E: std::error::Error>(_: &E) {}
    assert_std_error(&Error::OutOfMemory);
}

#[test]
fn test_error_clone() {
    let err = Error::BackendError("x".to_string());
    let cloned = err.clone();
    assert_eq!(err.to_string(), cloned.to_string());
}
