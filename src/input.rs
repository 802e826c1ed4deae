// src/input.rs
//
// Operator I/O boundary. Everything interactive lives here; the scrape
// modules only ever see already-validated values.

use std::io::{self, BufRead, Write};

use chrono::{Datelike, Local};

use crate::data::{LoginInfo, YearMonth};
use crate::error::ScrapeError;

/// Prompt for the division name, user name and (masked) password.
pub fn prompt_login_info() -> io::Result<LoginInfo> {
    let division_name = prompt_line("サイボウズでユーザーを選択するときの組織名: ")?;
    let name = prompt_line("サイボウズにログインするユーザーの名前: ")?;
    let password = rpassword::prompt_password("パスワード: ")?;
    Ok(LoginInfo {
        division_name,
        name,
        password,
    })
}

/// Prompt for the target year-month (`YYYY/MM`). Blank input means the
/// current local year-month.
pub fn prompt_year_month() -> anyhow::Result<YearMonth> {
    let today = Local::now();
    let default_value = format!("{:04}/{:02}", today.year(), today.month());
    let text = prompt_line(&format!("スケジュールを取得する年月 [default: {default_value}]: "))?;
    let text = if text.is_empty() { &default_value } else { &text };
    Ok(parse_year_month(text)?)
}

/// Parse `YYYY/MM` into a validated [`YearMonth`].
pub fn parse_year_month(text: &str) -> Result<YearMonth, ScrapeError> {
    let (year, month) = text
        .split_once('/')
        .ok_or_else(|| ScrapeError::Validation("年と月を/で区切って入力してください。".into()))?;
    let year: i32 = year
        .trim()
        .parse()
        .map_err(|_| ScrapeError::Validation("年を数値として認識できません。".into()))?;
    let month: i32 = month
        .trim()
        .parse()
        .map_err(|_| ScrapeError::Validation("月を数値として認識できません。".into()))?;
    YearMonth::new(year, month)
}

fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
