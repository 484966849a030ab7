use clap::ValueEnum;

use crate::convert::{direction::wind_direction, icon::icon_url};
use crate::owm::WeatherResponse;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Units {
    Standard,
    Metric,
    #[default]
    Imperial,
}

impl Units {
    /// Value of the `units` query parameter.
    pub fn as_query(&self) -> &'static str {
        match self {
            Units::Standard => "standard",
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            Units::Standard => "K",
            Units::Metric => "°C",
            Units::Imperial => "°F",
        }
    }

    pub fn speed_suffix(&self) -> &'static str {
        match self {
            Units::Standard | Units::Metric => "m/s",
            Units::Imperial => "mph",
        }
    }
}

/// How the currently shown weather was looked up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchKind {
    #[default]
    City,
    Location,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions, ready for display.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeatherInfo {
    pub city_name: Option<String>,
    pub description: Option<String>,
    pub temperature: Option<f64>,
    pub feels_like: Option<f64>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub humidity: Option<u32>,
    pub wind_speed: Option<f64>,
    pub wind_deg: Option<f32>,
    pub wind_direction: Option<&'static str>,
    pub icon_url: Option<String>,
    pub rain_1h: Option<f64>,
    pub rain_3h: Option<f64>,
}

impl From<WeatherResponse> for WeatherInfo {
    fn from(resp: WeatherResponse) -> Self {
        let weather = resp.weather.and_then(|w| w.into_iter().next());
        let (description, icon) = match weather {
            Some(w) => (w.description, w.icon),
            None => (None, None),
        };
        let main = resp.main.unwrap_or_default();
        let wind = resp.wind.unwrap_or_default();
        let rain = resp.rain.unwrap_or_default();

        Self {
            city_name: resp.name,
            description,
            temperature: main.temp,
            feels_like: main.feels_like,
            temp_min: main.temp_min,
            temp_max: main.temp_max,
            humidity: main.humidity,
            wind_speed: wind.speed,
            wind_deg: wind.deg,
            wind_direction: wind.deg.map(wind_direction),
            icon_url: icon.as_deref().map(icon_url),
            rain_1h: rain.rain_1h,
            rain_3h: rain.rain_3h,
        }
    }
}
