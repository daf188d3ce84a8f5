//! Pure helpers for tunable values and tmpfiles lines

use crate::tuning::types::Tunable;

/// Current value from a knob's contents.
///
/// Selection knobs list every choice and bracket the active one
/// (`always [madvise] never`); numeric knobs hold the bare value.
pub fn parse_unit_value(raw: &str) -> String {
    let raw = raw.trim();
    if let (Some(start), Some(end)) = (raw.find('['), raw.find(']')) {
        if start < end {
            return raw[start + 1..end].trim().to_string();
        }
    }
    raw.to_string()
}

/// systemd-tmpfiles line writing `value` to `path` at boot
pub fn render_tmpfiles_line(path: &str, value: &str) -> String {
    format!("w {path} - - - - {value}\n")
}

pub fn unit_file_name(tunable: Tunable) -> String {
    format!("decktune-{}.conf", tunable.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracketed_selection_is_extracted() {
        assert_eq!(parse_unit_value("always [madvise] never\n"), "madvise");
        assert_eq!(
            parse_unit_value("always within_size advise [never] deny force"),
            "never"
        );
    }

    #[test]
    fn plain_value_is_trimmed() {
        assert_eq!(parse_unit_value("100\n"), "100");
        assert_eq!(parse_unit_value("  1 "), "1");
    }

    #[test]
    fn tmpfiles_line_format() {
        assert_eq!(
            render_tmpfiles_line(Tunable::Swappiness.path(), "1"),
            "w /proc/sys/vm/swappiness - - - - 1\n"
        );
        assert_eq!(unit_file_name(Tunable::HugePages), "decktune-hugepages.conf");
    }
}
