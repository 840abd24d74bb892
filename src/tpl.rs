use std::collections::HashMap;
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Variables whose value depends on when the template is rendered
const TIME_VARIABLES: [&str; 2] = ["$TIMESTAMP", "$DATE"];

const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year][month][day]-[hour][minute][second]");

/// Template processor for resolving $VARIABLE format variables
#[derive(Clone, Debug)]
pub struct Tpl {
    variables: HashMap<String, String>,
}

impl Tpl {
    pub fn new() -> Self {
        Self {
            variables: HashMap::new(),
        }
    }

    /// Register a variable with its value
    pub fn register<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.variables.insert(key.into(), value.into());
    }

    /// Parse a string and resolve all registered $VARIABLE references
    pub fn parse(&self, input: &str) -> String {
        let mut result = input.to_string();

        for (key, value) in &self.variables {
            let pattern = format!("${}", key);
            result = result.replace(&pattern, value);
        }

        result
    }

    /// Parse a Vec of strings
    pub fn parse_vec(&self, input: &[String]) -> Vec<String> {
        input.iter().map(|s| self.parse(s)).collect()
    }

    /// Whether `input` references `$TIMESTAMP` or `$DATE`
    pub fn is_time_dependent(input: &str) -> bool {
        TIME_VARIABLES.iter().any(|v| input.contains(v))
    }

    /// Parse `input`, additionally resolving `$TIMESTAMP` (unix seconds) and
    /// `$DATE` (`YYYYMMDD-HHMMSS`) from `now`
    pub fn parse_at(&self, input: &str, now: OffsetDateTime) -> String {
        let timestamp = now.unix_timestamp().to_string();
        let date = now.format(DATE_FORMAT).unwrap_or_else(|_| timestamp.clone());

        self.parse(input)
            .replace("$TIMESTAMP", &timestamp)
            .replace("$DATE", &date)
    }
}

impl Default for Tpl {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_template_parsing() {
        let mut tpl = Tpl::new();
        tpl.register("VERSION", "1.0.0");
        tpl.register("PLATFORM", "linux");

        let result = tpl.parse("site-$VERSION-$PLATFORM");
        assert_eq!(result, "site-1.0.0-linux");
    }

    #[test]
    fn test_multiple_occurrences() {
        let mut tpl = Tpl::new();
        tpl.register("NAME", "test");

        let result = tpl.parse("$NAME-$NAME");
        assert_eq!(result, "test-test");
    }

    #[test]
    fn test_time_variables() {
        let mut tpl = Tpl::new();
        tpl.register("NAME", "site");
        let now = datetime!(2024-03-05 07:08:09 UTC);

        assert_eq!(tpl.parse_at("$NAME-$DATE", now), "site-20240305-070809");
        assert_eq!(tpl.parse_at("$NAME-$TIMESTAMP", now), "site-1709622489");
    }

    #[test]
    fn test_is_time_dependent() {
        assert!(Tpl::is_time_dependent("dist-$TIMESTAMP"));
        assert!(Tpl::is_time_dependent("$DATE"));
        assert!(!Tpl::is_time_dependent("$NAME-$VERSION"));
    }
}
