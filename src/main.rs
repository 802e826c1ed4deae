// src/main.rs
//
// Interactive scraper for Cybozu Office monthly schedules.
// One pass: prompt → resolve division → log in → fetch month grid → print.
// Any failure along the way aborts the run; there is nothing to retry.

use std::io;

use cb_scrape::{input, net::Session, params, report, scrape};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let login_info = input::prompt_login_info()?;
    let ym = input::prompt_year_month()?;

    let session = Session::new(params::CB_ROOT_URI)?;

    let division_code = scrape::retrieve_division_code(&session, &login_info.division_name)?;
    let user_id = scrape::login(&session, &division_code, &login_info)?;
    let schedules = scrape::retrieve_monthly_schedules(&session, &user_id, &ym)?;

    report::write_monthly_schedules(&mut io::stdout().lock(), &login_info.name, &ym, &schedules)?;
    Ok(())
}
