//! Failure-text classification
//!
//! chip-tool reports failures as free-form log text, not a structured
//! response, so the mapping to operator-facing messages is a substring
//! heuristic tied to the tool's wording. Patterns are tested in a fixed
//! order and the first match wins; a log that mentions several causes
//! resolves to the earliest-listed one. Keep the interface narrow (raw
//! text in, message out) so a structured parser can replace this later.

/// Map pairing failure output to an operator-facing message.
pub fn classify_pair_failure(output: &str) -> &'static str {
    let output = output.to_lowercase();

    if output.contains("integrity check failed") {
        return "Invalid pairing code format. Please check the QR code or manual pairing code.";
    }
    if output.contains("device discovery timed out") || output.contains("no devices found") {
        return "Device not found. Make sure the device is powered on and in pairing mode.";
    }
    if output.contains("failed to establish pase") {
        return "Failed to connect to device. Try resetting the device and pairing again.";
    }
    if output.contains("timeout") {
        return "Connection timeout. Ensure device is nearby and network is working.";
    }
    if output.contains("already commissioned") {
        return "Device is already paired. Reset the device before pairing again.";
    }
    if output.contains("invalid discriminator") {
        return "Invalid pairing code. Please verify the code from your device.";
    }

    "Pairing failed. Check that the device is in pairing mode and the code is correct."
}

/// Map unpair failure output to an operator-facing message.
pub fn classify_unpair_failure(output: &str) -> &'static str {
    let output = output.to_lowercase();

    if output.contains("not found") || output.contains("no device") {
        return "Device not found. It may already be unpaired.";
    }
    if output.contains("timeout") {
        return "Connection timeout. Device may be offline or unreachable.";
    }
    if output.contains("not commissioned") {
        return "Device is not paired to this controller.";
    }

    "Unpair failed. Device may be offline or already unpaired."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_categories() {
        assert!(classify_pair_failure("CHIP:SPL: Integrity check failed")
            .contains("Invalid pairing code format"));
        assert!(classify_pair_failure("device discovery timed out after 30s")
            .contains("powered on and in pairing mode"));
        assert!(classify_pair_failure("Error: no devices found during scan")
            .contains("powered on and in pairing mode"));
        assert!(classify_pair_failure("Failed to establish PASE session")
            .contains("resetting the device"));
        assert!(classify_pair_failure("CASE timeout while waiting")
            .contains("Connection timeout"));
        assert!(classify_pair_failure("node is already commissioned on fabric 1")
            .contains("already paired"));
        assert!(classify_pair_failure("setup payload: invalid discriminator 0xfff")
            .contains("verify the code"));
    }

    #[test]
    fn test_pair_fallback() {
        assert!(classify_pair_failure("some novel chip-tool wording")
            .starts_with("Pairing failed."));
        assert!(classify_pair_failure("").starts_with("Pairing failed."));
    }

    #[test]
    fn test_pair_first_listed_pattern_wins() {
        // "device discovery timed out" is listed before the generic
        // "timeout" pattern; a log matching both resolves to the earlier.
        let both = "device discovery timed out; session timeout reached";
        assert!(classify_pair_failure(both).contains("powered on and in pairing mode"));

        // Generic "timeout" is listed before "invalid discriminator", so
        // it wins even though the discriminator message is more specific.
        let ambiguous = "invalid discriminator in payload, retry timeout hit";
        assert!(classify_pair_failure(ambiguous).contains("Connection timeout"));
    }

    #[test]
    fn test_pair_matching_is_case_insensitive() {
        assert!(classify_pair_failure("ALREADY COMMISSIONED").contains("already paired"));
    }

    #[test]
    fn test_unpair_categories() {
        assert!(classify_unpair_failure("node not found in fabric table")
            .contains("may already be unpaired"));
        assert!(classify_unpair_failure("no device with that id")
            .contains("may already be unpaired"));
        assert!(classify_unpair_failure("unpair timeout").contains("offline or unreachable"));
        assert!(classify_unpair_failure("target is not commissioned")
            .contains("not paired to this controller"));
        assert!(classify_unpair_failure("???").starts_with("Unpair failed."));
    }

    #[test]
    fn test_unpair_first_listed_pattern_wins() {
        let both = "device not found after timeout";
        assert!(classify_unpair_failure(both).contains("may already be unpaired"));
    }
}
