//! Single-line field extraction for spell block headers.
//!
//! Each helper handles one header line shape. None of them report errors:
//! lines that do not match the expected shape degrade to whatever value the
//! text yields, which is all the source format guarantees.

/// Value portion of a `Key: value` header line.
///
/// Degrades to the whole line when the `": "` separator is absent.
pub fn value_after(line: &str) -> &str {
    match line.split_once(": ") {
        Some((_, value)) => value,
        None => line,
    }
}

/// If `line` starts with `prefix`, return its value portion.
pub fn prefixed_value<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    if line.starts_with(prefix) {
        Some(value_after(line))
    } else {
        None
    }
}

/// Parsed level/school summary line, the second line of a block header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub level: u8,
    pub school: String,
    pub ritual: bool,
    pub cantrip: bool,
}

/// Parse a summary line like `3rd-level evocation (ritual)` or
/// `Conjuration cantrip`.
///
/// A leading digit carries the level and pushes the school to the second
/// token; otherwise the entry is level 0 and the school leads.
pub fn parse_summary(line: &str) -> Summary {
    let lowered = line.to_lowercase();
    let ritual = lowered.contains("ritual");
    let cantrip = lowered.contains("cantrip");

    let mut tokens = lowered.split_whitespace();
    let (level, school) = match line.chars().next().and_then(|c| c.to_digit(10)) {
        Some(digit) => (digit as u8, tokens.nth(1).unwrap_or("").to_string()),
        None => (0, tokens.next().unwrap_or("").to_string()),
    };

    Summary {
        level,
        school,
        ritual,
        cantrip,
    }
}

/// Parsed components line value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    pub verbal: bool,
    pub somatic: bool,
    pub material: bool,
    pub materials: Option<String>,
}

/// Parse a components value like `V, S, M (a pinch of salt)`.
///
/// The V/S/M flags track the literal characters; a parenthesized group, when
/// present, carries the material list.
pub fn parse_components(value: &str) -> Components {
    let materials = value.split_once('(').map(|(_, rest)| match rest.split_once(')') {
        Some((inner, _)) => inner.to_string(),
        None => rest.to_string(),
    });

    Components {
        verbal: value.contains('V'),
        somatic: value.contains('S'),
        material: value.contains('M'),
        materials,
    }
}

/// Parsed duration line value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duration {
    pub duration: String,
    pub concentration: bool,
}

/// Parse a duration value, splitting off the concentration marker.
///
/// `Concentration, up to 1 minute` stores as `up to 1 minute` with the
/// concentration flag set.
pub fn parse_duration(value: &str) -> Duration {
    let lowered = value.to_lowercase();
    let concentration = lowered.contains("concentration");

    Duration {
        duration: lowered.replace("concentration, ", ""),
        concentration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_after_separator() {
        assert_eq!(value_after("Casting Time: 1 action"), "1 action");
        assert_eq!(value_after("Range: 60 feet"), "60 feet");
    }

    #[test]
    fn test_value_after_degrades_to_whole_line() {
        assert_eq!(value_after("Instantaneous"), "Instantaneous");
    }

    #[test]
    fn test_prefixed_value() {
        assert_eq!(prefixed_value("Range: Touch", "Range"), Some("Touch"));
        assert_eq!(prefixed_value("Duration: 1 hour", "Range"), None);
    }

    #[test]
    fn test_summary_with_leading_digit() {
        let summary = parse_summary("3rd-level evocation (ritual)");

        assert_eq!(summary.level, 3);
        assert_eq!(summary.school, "evocation");
        assert!(summary.ritual);
        assert!(!summary.cantrip);
    }

    #[test]
    fn test_summary_without_digit() {
        let summary = parse_summary("conjuration");

        assert_eq!(summary.level, 0);
        assert_eq!(summary.school, "conjuration");
        assert!(!summary.ritual);
        assert!(!summary.cantrip);
    }

    #[test]
    fn test_summary_cantrip() {
        let summary = parse_summary("Evocation cantrip");

        assert_eq!(summary.level, 0);
        assert_eq!(summary.school, "evocation");
        assert!(summary.cantrip);
    }

    #[test]
    fn test_summary_uppercase_ritual_marker() {
        let summary = parse_summary("1st-level Divination (Ritual)");

        assert_eq!(summary.level, 1);
        assert_eq!(summary.school, "divination");
        assert!(summary.ritual);
    }

    #[test]
    fn test_components_full() {
        let parsed = parse_components("V, S, M (a pinch of salt)");

        assert!(parsed.verbal);
        assert!(parsed.somatic);
        assert!(parsed.material);
        assert_eq!(parsed.materials.as_deref(), Some("a pinch of salt"));
    }

    #[test]
    fn test_components_verbal_only() {
        let parsed = parse_components("V");

        assert!(parsed.verbal);
        assert!(!parsed.somatic);
        assert!(!parsed.material);
        assert_eq!(parsed.materials, None);
    }

    #[test]
    fn test_components_unclosed_parenthesis() {
        let parsed = parse_components("V, M (a live cricket");

        assert_eq!(parsed.materials.as_deref(), Some("a live cricket"));
    }

    #[test]
    fn test_duration_concentration() {
        let parsed = parse_duration("Concentration, up to 1 minute");

        assert!(parsed.concentration);
        assert_eq!(parsed.duration, "up to 1 minute");
    }

    #[test]
    fn test_duration_plain() {
        let parsed = parse_duration("Instantaneous");

        assert!(!parsed.concentration);
        assert_eq!(parsed.duration, "instantaneous");
    }
}
