// src/scrape/mod.rs
//
// One module per portal page. Each pairs a fetch function (drives the
// session) with a parse function over an already-built document, so the
// parsing can be unit-tested on synthetic markup.

mod division;
mod login;
mod month;

pub use division::retrieve_division_code;
pub use login::login;
pub use month::retrieve_monthly_schedules;

use scraper::ElementRef;

/// Trimmed text content of an element.
fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
