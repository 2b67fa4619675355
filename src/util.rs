/// `{base}/{path}` with exactly one slash between them.
///
/// `path` is always relative to `base`, even when it looks like a full URL.
pub(crate) fn urljoin(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

/// `None` for missing, empty or whitespace-only values.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urljoin_normalizes_slashes() {
        assert_eq!(
            urljoin("https://api.sevimaplatform.com/", "/siakadcloud/v1/dosen"),
            "https://api.sevimaplatform.com/siakadcloud/v1/dosen"
        );
        assert_eq!(
            urljoin("https://api.sevimaplatform.com", "edlink/v1/sesi"),
            "https://api.sevimaplatform.com/edlink/v1/sesi"
        );
    }

    #[test]
    fn urljoin_never_leaves_the_base_host() {
        assert_eq!(
            urljoin("https://api.sevimaplatform.com", "http://other/x"),
            "https://api.sevimaplatform.com/http://other/x"
        );
        assert_eq!(
            urljoin("https://api.sevimaplatform.com/", "https://other/x"),
            "https://api.sevimaplatform.com/https://other/x"
        );
    }

    #[test]
    fn non_empty_drops_blank_values() {
        assert_eq!(non_empty(Some("  ".into())), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(" key ".into())), Some("key".into()));
    }
}
