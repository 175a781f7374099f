use url::{ParseError, Url};

// Relative references are validated by resolving them against this.
const RELATIVE_BASE: &str = "relative:///";

/// A URL split into the pieces that go into a signed URL.
///
/// `url` only decides whether the input is well formed. Host, path and query
/// are slices of the input itself, so nothing is normalized, re-escaped or
/// resolved before signing.
pub(crate) struct UrlParts<'a> {
    scheme: String,
    host: &'a str,
    path: &'a str,
    raw_query: &'a str,
}

impl<'a> UrlParts<'a> {
    pub(crate) fn parse(raw_url: &'a str) -> Result<UrlParts<'a>, ParseError> {
        let scheme = match Url::parse(raw_url) {
            Ok(url) => url.scheme().to_string(),
            Err(ParseError::RelativeUrlWithoutBase) => {
                Url::parse(RELATIVE_BASE)?.join(raw_url)?;
                String::new()
            }
            Err(e) => return Err(e),
        };

        // Same leading/trailing characters the parser ignores
        let input = raw_url.trim_matches(|c: char| c <= ' ');
        let without_fragment = input.split_once('#').map_or(input, |(before, _)| before);
        let (before_query, raw_query) = without_fragment
            .split_once('?')
            .unwrap_or((without_fragment, ""));

        let hierarchical = before_query
            .get(..scheme.len())
            .filter(|s| !scheme.is_empty() && s.eq_ignore_ascii_case(&scheme))
            .and_then(|_| before_query[scheme.len()..].strip_prefix(':'))
            .unwrap_or(before_query);

        let (host, path) = match hierarchical.strip_prefix("//") {
            Some(authority_and_path) => {
                let (authority, path) = authority_and_path
                    .find('/')
                    .map_or((authority_and_path, ""), |i| authority_and_path.split_at(i));
                let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
                (host, path)
            }
            None => ("", hierarchical),
        };

        Ok(UrlParts {
            scheme,
            host,
            path,
            raw_query,
        })
    }

    pub(crate) fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Host and port as written, without user info.
    pub(crate) fn host(&self) -> &str {
        self.host
    }

    pub(crate) fn path(&self) -> &str {
        self.path
    }

    pub(crate) fn raw_query(&self) -> &str {
        self.raw_query
    }

    /// The bytes the signature is computed over. The `?` is always present.
    pub(crate) fn path_and_query(&self) -> String {
        format!("{}?{}", self.path, self.raw_query)
    }
}
