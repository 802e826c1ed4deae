// src/scrape/month.rs
//
// Month-view extraction. The grid shows roughly six weeks of `td.eventcell`
// cells, each labeled `M/D` by a `span.date`; the leading/trailing cells
// belong to the adjacent months and are skipped. Each kept cell holds zero
// or more `div.eventLink` entries with an optional `H:MM-H:MM` time span
// and a title-bearing `a.event` anchor.

use std::time::Instant;

use chrono::NaiveTime;
use log::{debug, info};
use scraper::{Html, Selector};

use crate::data::{Schedule, UserId, YearMonth};
use crate::error::ScrapeError;
use crate::net::Fetch;

use super::text_of;

/// Fetch the month-view page for `user_id` and extract every event of the
/// requested month, in grid order.
pub fn retrieve_monthly_schedules(
    session: &impl Fetch,
    user_id: &UserId,
    ym: &YearMonth,
) -> Result<Vec<Schedule>, ScrapeError> {
    let query = format!(
        "page=ScheduleUserMonth&UID={}&Date={}",
        user_id.as_str(),
        ym.first_day_token()
    );
    let body = session.get(&query)?;

    let t = Instant::now();
    let doc = Html::parse_document(&body);
    let schedules = parse_month_doc(&doc, ym)?;
    debug!("Month: parse {} in {:?}", ym, t.elapsed());
    info!("extracted {} schedules for {}", schedules.len(), ym);
    Ok(schedules)
}

/// Split out for unit tests.
pub fn parse_month_doc(doc: &Html, ym: &YearMonth) -> Result<Vec<Schedule>, ScrapeError> {
    let cells = Selector::parse("td.eventcell").unwrap();
    let date_label = Selector::parse("span.date").unwrap();
    let event_links = Selector::parse("div.eventLink").unwrap();
    let time_range = Selector::parse("div.eventInner span.eventDateTime").unwrap();
    let title_anchor = Selector::parse("div.eventInner a.event").unwrap();

    let mut schedules = Vec::new();

    for cell in doc.select(&cells) {
        // Every cell carries its date label; a cell without one means the
        // markup is not what this tool was written against.
        let label = cell
            .select(&date_label)
            .next()
            .ok_or(ScrapeError::MalformedPage("day cell without a date label"))?;
        let (month, day) = parse_date_label(&text_of(label))?;
        if month != ym.month() {
            continue; // leading/trailing day of an adjacent month
        }

        for event in cell.select(&event_links) {
            let (begin, end) = match event.select(&time_range).next() {
                Some(span) => parse_time_range(&text_of(span)),
                None => (None, None),
            };
            // Entries whose anchor has no title attribute are dropped, as
            // the site renders some non-event artifacts in the same shape.
            let Some(title) = event
                .select(&title_anchor)
                .next()
                .and_then(|a| a.value().attr("title"))
            else {
                continue;
            };
            schedules.push(Schedule {
                day,
                begin,
                end,
                title: Some(title.to_string()),
            });
        }
    }

    Ok(schedules)
}

/* ---------------- helpers ---------------- */

/// Parse a cell's `M/D` date label.
fn parse_date_label(text: &str) -> Result<(u8, u8), ScrapeError> {
    const BAD: ScrapeError = ScrapeError::MalformedPage("unreadable date label on a day cell");
    let (month, day) = text.split_once('/').ok_or(BAD)?;
    let month: u8 = month.trim().parse().map_err(|_| BAD)?;
    let day: u8 = day.trim().parse().map_err(|_| BAD)?;
    Ok((month, day))
}

/// Parse an `H:MM-H:MM` label into begin/end. Either side may be missing
/// or malformed; that side is absent, never an error. The label sometimes
/// carries a trailing `&nbsp;` artifact.
pub fn parse_time_range(text: &str) -> (Option<NaiveTime>, Option<NaiveTime>) {
    let text = text.strip_suffix("&nbsp;").unwrap_or(text);
    match text.split_once('-') {
        Some((begin, end)) => (parse_time(begin), parse_time(end)),
        None => (parse_time(text), None),
    }
}

fn parse_time(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    let (hour, minute) = text.split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}
