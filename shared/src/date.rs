//! 时间显示模块
//!
//! 服务端返回 RFC 3339 的 `createdAt` 字符串，界面上只显示本地日期 (`M/D/YYYY`)。

use chrono::{DateTime, Local, NaiveDate, TimeZone};

const DISPLAY_FORMAT: &str = "%-m/%-d/%Y";

/// 以浏览器/系统本地时区显示日期
///
/// 无法解析时原样返回，保证界面不会因为脏数据而空白。
pub fn display_date(raw: &str) -> String {
    display_date_in(raw, &Local)
}

/// 在指定时区下显示日期
pub fn display_date_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(tz).format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(DISPLAY_FORMAT).to_string();
    }
    raw.to_string()
}
