use validator::ValidationError;

/// Validates that a SEO keyword can replace a URL path:
/// - Present and non-empty
/// - At most `max_length` characters
///
/// Any character is allowed; the keyword is taken verbatim as the path.
pub fn validate_seo_keyword(seo_keyword: &str, max_length: usize) -> Result<(), ValidationError> {
    if seo_keyword.is_empty() || seo_keyword.len() > max_length {
        let mut err = ValidationError::new("seo_keyword_length");
        err.message = Some(
            format!(
                "SEO keyword must be between 1 and {} characters",
                max_length
            )
            .into(),
        );
        return Err(err);
    }

    Ok(())
}
