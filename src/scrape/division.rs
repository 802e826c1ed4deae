// src/scrape/division.rs
//
// Organization (division) resolution: the portal's login flow starts on a
// page with a division dropdown; the selected option's value is the code
// every later address is scoped by.

use scraper::{Html, Selector};

use crate::data::DivisionCode;
use crate::error::ScrapeError;
use crate::net::Fetch;

use super::text_of;

/// Fetch the division-selection page and look up the code for
/// `division_name`. Matching is exact and case-sensitive on trimmed text.
pub fn retrieve_division_code(
    session: &impl Fetch,
    division_name: &str,
) -> Result<DivisionCode, ScrapeError> {
    let body = session.get("page=LoginGroup")?;
    let doc = Html::parse_document(&body);
    find_division_code(&doc, division_name)
}

/// Split out for unit tests.
pub fn find_division_code(doc: &Html, division_name: &str) -> Result<DivisionCode, ScrapeError> {
    let options = Selector::parse("select.select-gid[name='Group'] option").unwrap();
    let wanted = division_name.trim();

    for option in doc.select(&options) {
        if text_of(option) != wanted {
            continue;
        }
        let value = option
            .value()
            .attr("value")
            .ok_or(ScrapeError::MalformedPage(
                "division option without a value attribute",
            ))?;
        return Ok(DivisionCode(value.to_string()));
    }
    Err(ScrapeError::NotFound {
        name: division_name.to_string(),
        page: "division selection",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(options: &str) -> Html {
        Html::parse_document(&format!(
            r#"<html><body>
                <form><select class="select-gid" name="Group">{options}</select></form>
            </body></html>"#
        ))
    }

    #[test]
    fn finds_exact_match() {
        let doc = doc(r#"<option value="10">総務部</option><option value="20">営業部</option>"#);
        let code = find_division_code(&doc, "営業部").unwrap();
        assert_eq!(code, DivisionCode("20".into()));
    }

    #[test]
    fn trims_both_sides_before_matching() {
        let doc = doc("<option value=\"20\">\n  営業部\n</option>");
        assert!(find_division_code(&doc, "営業部 ").is_ok());
    }

    #[test]
    fn prefix_does_not_match() {
        let doc = doc(r#"<option value="20">営業部</option>"#);
        assert!(matches!(
            find_division_code(&doc, "営業"),
            Err(ScrapeError::NotFound { .. })
        ));
    }

    #[test]
    fn ignores_options_outside_the_division_select() {
        let html = r#"<html><body>
            <select name="Other"><option value="99">営業部</option></select>
            <select class="select-gid" name="Group"><option value="20">営業部</option></select>
        </body></html>"#;
        let doc = Html::parse_document(html);
        assert_eq!(
            find_division_code(&doc, "営業部").unwrap(),
            DivisionCode("20".into())
        );
    }

    #[test]
    fn missing_value_attribute_is_malformed() {
        let doc = doc("<option>営業部</option>");
        assert!(matches!(
            find_division_code(&doc, "営業部"),
            Err(ScrapeError::MalformedPage(_))
        ));
    }
}
