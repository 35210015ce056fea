use jiff::civil::date;
use jiff::tz::TimeZone;

use prospecta_core::report_files::{
    report_download_url, report_filename, report_filename_with_suffix,
};

fn fixed_time() -> jiff::Zoned {
    date(2024, 3, 7)
        .at(9, 5, 2, 0)
        .to_zoned(TimeZone::UTC)
        .expect("valid civil time")
}

#[test]
fn filename_uses_second_resolution_timestamp() {
    assert_eq!(
        report_filename(&fixed_time()),
        "market_research_20240307090502.docx"
    );
}

#[test]
fn suffixed_filename_keeps_timestamp() {
    assert_eq!(
        report_filename_with_suffix(&fixed_time(), 2),
        "market_research_20240307090502_2.docx"
    );
}

#[test]
fn download_url_points_under_static_reports() {
    assert_eq!(
        report_download_url("market_research_20240307090502.docx"),
        "/static/reports/market_research_20240307090502.docx"
    );
}
