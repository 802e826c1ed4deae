// src/scrape/login.rs
//
// Login: the login page for a division lists its users in a dropdown whose
// option values are the user ids. We resolve the id from the operator's
// name, then POST the credential form back to the same address. The portal
// answers the POST with a plain 200 either way; its body is not inspected,
// so a rejected password only shows up on the calendar fetch that follows.

use scraper::{Html, Selector};

use crate::data::{DivisionCode, LoginInfo, UserId};
use crate::error::ScrapeError;
use crate::net::Fetch;

use super::text_of;

/// Fetch the login page for `division_code`, resolve the user id for
/// `login_info.name` and establish the session by POSTing the credential
/// form. Returns the resolved id.
pub fn login(
    session: &impl Fetch,
    division_code: &DivisionCode,
    login_info: &LoginInfo,
) -> Result<UserId, ScrapeError> {
    // The doubled `&` is what the portal itself emits; keep it.
    let query = format!(
        "gid={code}&&Group={code}",
        code = division_code.as_str()
    );
    let body = session.get(&query)?;
    let doc = Html::parse_document(&body);
    let user_id = find_user_id(&doc, &login_info.name)?;

    let form = [
        ("csrf_ticket", ""),
        ("_System", "login"),
        ("_Login", "1"),
        ("LoginMethod", "1"),
        ("_ID", user_id.as_str()),
        ("Password", login_info.password.as_str()),
    ];
    session.post_form(&query, &form)?;
    Ok(user_id)
}

/// Split out for unit tests.
pub fn find_user_id(doc: &Html, name: &str) -> Result<UserId, ScrapeError> {
    let options = Selector::parse("td.loginmain select.vr_loginForm[name='_ID'] option").unwrap();
    let wanted = name.trim();

    for option in doc.select(&options) {
        if text_of(option) != wanted {
            continue;
        }
        let value = option
            .value()
            .attr("value")
            .ok_or(ScrapeError::MalformedPage(
                "user option without a value attribute",
            ))?;
        return Ok(UserId(value.to_string()));
    }
    Err(ScrapeError::NotFound {
        name: name.to_string(),
        page: "login",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(options: &str) -> Html {
        Html::parse_document(&format!(
            r#"<html><body><table><tr><td class="loginmain">
                <select class="vr_loginForm" name="_ID">{options}</select>
            </td></tr></table></body></html>"#
        ))
    }

    #[test]
    fn finds_user_id() {
        let doc = doc(r#"<option value="101">山田 太郎</option><option value="102">鈴木 花子</option>"#);
        assert_eq!(
            find_user_id(&doc, "鈴木 花子").unwrap(),
            UserId("102".into())
        );
    }

    #[test]
    fn unknown_name_is_not_found() {
        let doc = doc(r#"<option value="101">山田 太郎</option>"#);
        assert!(matches!(
            find_user_id(&doc, "佐藤 次郎"),
            Err(ScrapeError::NotFound { name, page })
                if name == "佐藤 次郎" && page == "login"
        ));
    }

    #[test]
    fn option_text_is_trimmed() {
        let doc = doc("<option value=\"101\">\n  山田 太郎 \n</option>");
        assert!(find_user_id(&doc, "山田 太郎").is_ok());
    }
}
