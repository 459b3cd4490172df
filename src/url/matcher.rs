use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern for acceptable seed URLs: optional `http`/`https` scheme,
/// optional `www.` prefix, a dotted host (Unicode letters allowed, so the
/// Cyrillic site domain matches), an optional port, an optional path.
static SEED_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?(www\.)?[\w-]+(\.[\w-]+)+(:\d+)?(/\S*)?$")
        .expect("seed URL pattern is a valid regex")
});

/// Checks whether a string is acceptable as a seed listing URL
///
/// The scheme may be omitted (it is filled in as `https` downstream), the
/// `www.` prefix is optional, and the host must contain at least one dot.
/// Anything that is not an HTTP(S)-shaped URL is rejected here so it never
/// reaches the fetch layer.
///
/// # Arguments
///
/// * `candidate` - The configured seed URL string
///
/// # Returns
///
/// * `true` - If the candidate matches the seed URL pattern
/// * `false` - Otherwise
///
/// # Examples
///
/// ```
/// use vestnik::url::is_valid_seed_url;
///
/// assert!(is_valid_seed_url("https://край-дорогобужский.рф/novosti/"));
/// assert!(is_valid_seed_url("http://www.example.com/list"));
/// assert!(is_valid_seed_url("www.example.com/list"));
///
/// assert!(!is_valid_seed_url("ftp://example.com/list"));
/// assert!(!is_valid_seed_url("not a url"));
/// ```
pub fn is_valid_seed_url(candidate: &str) -> bool {
    SEED_URL_RE.is_match(candidate)
}
