use crate::error::TemplateParseError;
use reqwest::Url;

/// Name of the query parameter that carries the variation text.
pub const QUERY_PARAM: &str = "q";

pub const DEFAULT_TEMPLATES: [&str; 7] = [
    "https://www.gileq.com/dsr?q=",
    "https://search.searchalike.com/serp?q=",
    "https://uk.questtips.com/dsr?q=",
    "https://www.novafluxa.com/dsr?q=",
    "https://explorewebzone.com/dsr?q=",
    "https://www.astartex.com/dsr/?q=",
    "https://nexizonal.com/dsr?q=",
];

pub fn default_templates() -> Vec<String> {
    DEFAULT_TEMPLATES.iter().map(|t| t.to_string()).collect()
}

/// Builds a search URL by setting `q=<value>` on `template`.
///
/// Any `q` already present in the template is replaced; other query pairs are
/// kept in their original order. The value is form-urlencoded.
pub fn build_search_url(template: &str, value: &str) -> Result<String, TemplateParseError> {
    let mut url = parse_template(template)?;

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != QUERY_PARAM)
        .map(|(key, val)| (key.into_owned(), val.into_owned()))
        .collect();

    url.set_query(None);
    {
        let mut pairs = url.query_pairs_mut();
        for (key, val) in &kept {
            pairs.append_pair(key, val);
        }
        pairs.append_pair(QUERY_PARAM, value);
    }

    Ok(url.to_string())
}

pub fn parse_template(template: &str) -> Result<Url, TemplateParseError> {
    let url = Url::parse(template).map_err(|e| TemplateParseError {
        template: template.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(TemplateParseError {
            template: template.to_string(),
            reason: "not a hierarchical URL".to_string(),
        });
    }

    Ok(url)
}
