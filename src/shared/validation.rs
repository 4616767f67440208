use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Photo URLs must point at an image file, optionally followed by a query string
    /// - Valid: "https://cdn.example.org/spill.jpg", "http://x.fr/a.PNG?w=400"
    /// - Invalid: "ftp://x.fr/a.jpg", "https://x.fr/a.pdf", "https://x.fr/jpg"
    pub static ref PHOTO_URL_REGEX: Regex =
        Regex::new(r"(?i)^https?://.+\.(jpg|jpeg|png|gif|webp|bmp|svg)(\?.*)?$").unwrap();

    /// Login and password accepted by the login endpoint: 1-20 ASCII letters or digits
    pub static ref CREDENTIAL_REGEX: Regex = Regex::new(r"^[A-Za-z0-9]{1,20}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_url_regex_valid() {
        assert!(PHOTO_URL_REGEX.is_match("https://example.org/photo.jpg"));
        assert!(PHOTO_URL_REGEX.is_match("http://example.org/a/b/photo.jpeg"));
        assert!(PHOTO_URL_REGEX.is_match("https://example.org/photo.PNG"));
        assert!(PHOTO_URL_REGEX.is_match("HTTPS://EXAMPLE.ORG/PHOTO.GIF"));
        assert!(PHOTO_URL_REGEX.is_match("https://example.org/photo.webp?w=400&h=300"));
        assert!(PHOTO_URL_REGEX.is_match("https://example.org/photo.bmp"));
        assert!(PHOTO_URL_REGEX.is_match("https://example.org/logo.svg"));
    }

    #[test]
    fn test_photo_url_regex_invalid() {
        assert!(!PHOTO_URL_REGEX.is_match("ftp://example.org/photo.jpg")); // scheme
        assert!(!PHOTO_URL_REGEX.is_match("https://example.org/document.pdf")); // extension
        assert!(!PHOTO_URL_REGEX.is_match("https://example.org/photo.jpg#top")); // fragment
        assert!(!PHOTO_URL_REGEX.is_match("https://.jpg")); // empty path
        assert!(!PHOTO_URL_REGEX.is_match("example.org/photo.jpg")); // no scheme
        assert!(!PHOTO_URL_REGEX.is_match(""));
    }

    #[test]
    fn test_credential_regex() {
        assert!(CREDENTIAL_REGEX.is_match("jdupont"));
        assert!(CREDENTIAL_REGEX.is_match("User42"));
        assert!(CREDENTIAL_REGEX.is_match("a"));
        assert!(CREDENTIAL_REGEX.is_match("abcdefghij0123456789")); // 20 chars

        assert!(!CREDENTIAL_REGEX.is_match(""));
        assert!(!CREDENTIAL_REGEX.is_match("abcdefghij01234567890")); // 21 chars
        assert!(!CREDENTIAL_REGEX.is_match("j.dupont"));
        assert!(!CREDENTIAL_REGEX.is_match("jean dupont"));
        assert!(!CREDENTIAL_REGEX.is_match("élodie"));
    }
}
