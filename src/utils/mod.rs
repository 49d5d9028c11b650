use chrono::NaiveDate;

/// Helper function to format the date
///
/// Formats a `NaiveDate` the way appointment lists show it, e.g. "Dec 26, 2024".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Renders a percentage as a ten-cell text bar, e.g. `[#######---] 75%`.
/// Values above 100 are clamped.
pub fn progress_bar(percent: u8) -> String {
    let percent = percent.min(100);
    let filled = usize::from(percent) / 10;
    format!(
        "[{}{}] {}%",
        "#".repeat(filled),
        "-".repeat(10 - filled),
        percent
    )
}

/// Initials of a display name, skipping a leading "Dr." title.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter(|part| *part != "Dr.")
        .filter_map(|part| part.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 5).unwrap();
        assert_eq!(format_date(date), "Dec 5, 2024");
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(75), "[#######---] 75%");
        assert_eq!(progress_bar(0), "[----------] 0%");
        assert_eq!(progress_bar(250), "[##########] 100%");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Dr. John Smith"), "JS");
        assert_eq!(initials("Jane Wilson"), "JW");
        assert_eq!(initials(""), "");
    }
}
