//! Custom validation functions for configuration values

use validator::ValidationError;

/// Validate the shape of a Discord bot token.
///
/// Real tokens are three base64-ish segments joined by dots and well
/// over 50 characters; this catches pasted client secrets and empty
/// placeholders without trying to verify the token itself.
pub fn validate_discord_token(token: &str) -> Result<(), ValidationError> {
    if token.len() < 50 {
        return Err(ValidationError::new("discord_token_too_short"));
    }
    if token.split('.').count() != 3 {
        return Err(ValidationError::new("discord_token_malformed"));
    }
    if token
        .chars()
        .any(|c| !(c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-'))
    {
        return Err(ValidationError::new("discord_token_invalid_chars"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_token() {
        let token = "MTIzNDU2Nzg5MDEyMzQ1Njc4OTA.AbCdEf.GhIjKlMnOpQrStUvWxYz123456";
        assert!(validate_discord_token(token).is_ok());
    }

    #[test]
    fn test_rejects_short_token() {
        assert!(validate_discord_token("abc.def.ghi").is_err());
    }

    #[test]
    fn test_rejects_wrong_segment_count() {
        let token = "MTIzNDU2Nzg5MDEyMzQ1Njc4OTAAbCdEfGhIjKlMnOpQrStUvWxYz123456";
        assert!(validate_discord_token(token).is_err());
    }

    #[test]
    fn test_rejects_invalid_characters() {
        let token = "MTIzNDU2Nzg5MDEyMzQ1Njc4OTA.AbCdEf.GhIjKlMnOpQrStUvWxYz!23456";
        assert!(validate_discord_token(token).is_err());
    }
}
