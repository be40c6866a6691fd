use forecast_core::ForecastKind;

/// One answer to the main menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Forecast(ForecastKind),
    Quit,
}

impl TryFrom<&str> for MenuChoice {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.trim().to_lowercase();

        match lower.as_str() {
            "1" => Ok(MenuChoice::Forecast(ForecastKind::Today)),
            "2" => Ok(MenuChoice::Forecast(ForecastKind::Weekly)),
            "3" => Ok(MenuChoice::Forecast(ForecastKind::Monthly)),
            "q" => Ok(MenuChoice::Quit),
            _ => Err(anyhow::anyhow!("Unknown menu choice '{value}'. Expected 1, 2, 3 or q.")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_forecast_kinds() {
        assert_eq!(MenuChoice::try_from("1").unwrap(), MenuChoice::Forecast(ForecastKind::Today));
        assert_eq!(MenuChoice::try_from("2").unwrap(), MenuChoice::Forecast(ForecastKind::Weekly));
        assert_eq!(MenuChoice::try_from("3").unwrap(), MenuChoice::Forecast(ForecastKind::Monthly));
    }

    #[test]
    fn quit_is_case_insensitive_and_trimmed() {
        assert_eq!(MenuChoice::try_from("q").unwrap(), MenuChoice::Quit);
        assert_eq!(MenuChoice::try_from(" Q \n").unwrap(), MenuChoice::Quit);
    }

    #[test]
    fn unknown_choice_error() {
        for input in ["", "4", "today", "1 2"] {
            let err = MenuChoice::try_from(input).unwrap_err();
            assert!(err.to_string().contains("Unknown menu choice"));
        }
    }
}
