/// Scheme name expected in the `Authorization` header: `Authorization: jwt <token>`.
pub const JWT_SCHEME: &str = "jwt";

/// Extract the token from an `Authorization` header value.
///
/// The value must be exactly `<scheme> <token>` separated by whitespace. The scheme is
/// compared case-insensitively.
///
/// # Returns
/// The token, or `None` when the scheme differs or the value is not two parts
pub fn token_from_header<'a>(header: &'a str, scheme: &str) -> Option<&'a str> {
    let mut parts = header.split_whitespace();
    let found_scheme = parts.next()?;
    let token = parts.next()?;

    if parts.next().is_some() || !found_scheme.eq_ignore_ascii_case(scheme) {
        return None;
    }

    Some(token)
}
