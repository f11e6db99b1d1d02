use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::math::ContrastStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    De,
    En,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::De => "de",
            Locale::En => "en",
        }
    }

    /// Widget label text. Unknown keys come back unchanged.
    pub fn message(self, key: &str) -> &str {
        let text = match (self, key) {
            (Locale::De, "name") => "Farbkontrast Testtool",
            (Locale::De, "backgroundLabel") => "Hintergrund",
            (Locale::De, "pickBgColor") => "Hintergrundfarbe wählen",
            (Locale::De, "swapColors") => "Farben tauschen",
            (Locale::De, "foregroundLabel") => "Textfarbe",
            (Locale::De, "pickFgColor") => "Textfarbe wählen",
            (Locale::De, "resultLabel") => "Ergebnis:",
            (Locale::De, "exampleLargeText") => "Beispiel für großen Text",
            (Locale::De, "exampleSmallText") => "Beispiel für kleinen Text",
            (Locale::En, "name") => "Color Contrast Testtool",
            (Locale::En, "backgroundLabel") => "Background",
            (Locale::En, "pickBgColor") => "Pick background color",
            (Locale::En, "swapColors") => "Swap colors",
            (Locale::En, "foregroundLabel") => "Text color",
            (Locale::En, "pickFgColor") => "Pick foreground color",
            (Locale::En, "resultLabel") => "Result:",
            (Locale::En, "exampleLargeText") => "Example for large text",
            (Locale::En, "exampleSmallText") => "Example for small text",
            _ => return key,
        };
        text
    }

    pub fn status_label(self, status: ContrastStatus) -> &'static str {
        match (self, status) {
            (Locale::De, ContrastStatus::Excellent) => "HERVORRAGEND",
            (Locale::De, ContrastStatus::Good) => "KÖNNTE BESSER SEIN",
            (Locale::De, ContrastStatus::Poor | ContrastStatus::Fail) => "SCHLECHTER KONTRAST",
            (Locale::En, ContrastStatus::Excellent) => "EXCELLENT",
            (Locale::En, ContrastStatus::Good) => "CAN BE BETTER",
            (Locale::En, ContrastStatus::Poor | ContrastStatus::Fail) => "BAD CONTRAST",
        }
    }

    /// Exactly two fraction digits with the locale's decimal separator.
    pub fn format_ratio(self, ratio: f64) -> String {
        let fixed = format!("{:.2}", ratio);
        match self {
            Locale::De => fixed.replace('.', ","),
            Locale::En => fixed,
        }
    }
}

impl FromStr for Locale {
    type Err = std::convert::Infallible;

    /// Unknown locale tags fall back to the default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Ok(match tag.split(['-', '_']).next().unwrap_or_default() {
            "en" => Locale::En,
            "de" => Locale::De,
            _ => Locale::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_match_widget() {
        assert_eq!(Locale::De.status_label(ContrastStatus::Excellent), "HERVORRAGEND");
        assert_eq!(Locale::De.status_label(ContrastStatus::Good), "KÖNNTE BESSER SEIN");
        assert_eq!(Locale::De.status_label(ContrastStatus::Fail), "SCHLECHTER KONTRAST");
        assert_eq!(Locale::En.status_label(ContrastStatus::Good), "CAN BE BETTER");
        assert_eq!(
            Locale::En.status_label(ContrastStatus::Poor),
            Locale::En.status_label(ContrastStatus::Fail)
        );
    }

    #[test]
    fn messages() {
        assert_eq!(Locale::De.message("name"), "Farbkontrast Testtool");
        assert_eq!(Locale::En.message("swapColors"), "Swap colors");
        assert_eq!(Locale::En.message("noSuchKey"), "noSuchKey");
    }

    #[test]
    fn ratio_formatting() {
        assert_eq!(Locale::De.format_ratio(7.5618), "7,56");
        assert_eq!(Locale::En.format_ratio(7.5618), "7.56");
        assert_eq!(Locale::En.format_ratio(21.0), "21.00");
        assert_eq!(Locale::De.format_ratio(1.0), "1,00");
    }

    #[test]
    fn parse_tags() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("en-US".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("DE_at".parse::<Locale>(), Ok(Locale::De));
        assert_eq!("fr".parse::<Locale>(), Ok(Locale::De));
        assert_eq!("".parse::<Locale>(), Ok(Locale::De));
    }

    #[test]
    fn deserializes_lowercase() {
        let locale: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(locale, Locale::En);
        assert!(serde_json::from_str::<Locale>("\"fr\"").is_err());
    }
}
