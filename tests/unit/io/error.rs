//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use sawgen::WalkError;
    use sawgen::io::error::{invalid_parameter, io_error};
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = WalkError::FileSystem {
            path: "/tmp/test.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("read"));
    }

    // Tests retry exhaustion names the loop, length and attempts
    // Verified by omitting attempts from message
    #[test]
    fn test_retries_exceeded_message() {
        let error = WalkError::RetriesExceeded {
            generator: "rejection sampling",
            length: 40,
            attempts: 1000,
        };

        let message = error.to_string();
        assert!(message.contains("rejection sampling"));
        assert!(message.contains("length 40"));
        assert!(message.contains("1000 attempts"));
        assert!(error.source().is_none());
    }

    // Tests randomness failures report what was drawn
    // Verified by omitting the alternatives from message
    #[test]
    fn test_randomness_messages() {
        let exhausted = WalkError::RandomnessExhausted { draws: 12 };
        assert!(exhausted.to_string().contains("12 draws"));

        let invalid = WalkError::InvalidChoice {
            choice: 5,
            alternatives: 3,
        };
        let message = invalid.to_string();
        assert!(message.contains('5'));
        assert!(message.contains("3 alternatives"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_helper() {
        let error = invalid_parameter("scale", &0, &"must be at least 1");

        let message = error.to_string();
        assert!(message.contains("scale"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be at least 1"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let error = WalkError::ImageExport {
            path: "/restricted/output.png".into(),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/output.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests conversion from io::Error and the path helper
    // Verified by converting to a parameter error
    #[test]
    fn test_conversions() {
        let converted: WalkError = std::io::Error::other("disk full").into();
        assert!(matches!(converted, WalkError::FileSystem { .. }));

        let path_error = io_error("Invalid output path");
        assert!(path_error.to_string().contains("Invalid output path"));
    }
}
