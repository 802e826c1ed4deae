// src/params.rs

/// Root of every portal endpoint. All page addresses are query strings
/// appended to this (the site routes on `page=`/`gid=` parameters).
pub const CB_ROOT_URI: &str = "http://192.168.220.14/scripts/cbag/ag.exe?";

pub const HTTP_TIMEOUT_SECS: u64 = 15;
