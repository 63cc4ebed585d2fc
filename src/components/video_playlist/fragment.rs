use url::form_urlencoded;

const CONTENT_ID_PARAM: &str = "_contentId";

/// Server endpoint that renders a player fragment for one playlist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentEndpoint {
    uri: String,
    params: Vec<(String, String)>,
}

impl FragmentEndpoint {
    /// `params` is a query string such as `"context=playlist&autoplay=true"`;
    /// a leading `?` is accepted.
    pub fn new(uri: impl Into<String>, params: &str) -> Self {
        Self {
            uri: uri.into(),
            params: parse_query(params),
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Fragment URL for `content_id`, appended after the configured params.
    pub fn url_for(&self, content_id: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.params)
            .append_pair(CONTENT_ID_PARAM, content_id)
            .finish();
        format!("{}?{query}", self.uri)
    }
}

fn parse_query(raw: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(raw.trim_start_matches('?').as_bytes())
        .into_owned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_id_follows_existing_params() {
        let endpoint = FragmentEndpoint::new("/_fragments/player", "context=playlist&autoplay=true");
        assert_eq!(
            endpoint.url_for("abc-123"),
            "/_fragments/player?context=playlist&autoplay=true&_contentId=abc-123"
        );
    }

    #[test]
    fn empty_params_only_carry_content_id() {
        let endpoint = FragmentEndpoint::new("/f", "");
        assert_eq!(endpoint.url_for("42"), "/f?_contentId=42");
    }

    #[test]
    fn leading_question_mark_and_empty_pairs_are_tolerated() {
        let endpoint = FragmentEndpoint::new("/f", "?a=1&&flag");
        assert_eq!(endpoint.url_for("x"), "/f?a=1&flag=&_contentId=x");
    }

    #[test]
    fn values_are_form_encoded() {
        let endpoint = FragmentEndpoint::new("/f", "title=hello+world&q=a%26b");
        assert_eq!(
            endpoint.url_for("id with space"),
            "/f?title=hello+world&q=a%26b&_contentId=id+with+space"
        );
    }

    #[test]
    fn reserved_marks_follow_form_encoding() {
        let endpoint = FragmentEndpoint::new("/f", "a=x*y~z");
        assert_eq!(endpoint.url_for("1"), "/f?a=x*y%7Ez&_contentId=1");
    }

    #[test]
    fn content_id_is_escaped_like_any_other_value() {
        let endpoint = FragmentEndpoint::new("/f", "");
        assert_eq!(endpoint.url_for("a&b=c~"), "/f?_contentId=a%26b%3Dc%7E");
    }
}
