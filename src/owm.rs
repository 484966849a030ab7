use reqwest::blocking::{Client, RequestBuilder};
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::weather::Units;

const BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Anything that can look up current conditions.
pub trait WeatherSource {
    fn by_coord(&self, lat: f64, lon: f64) -> Result<WeatherResponse>;

    fn by_city_name(&self, query: &str) -> Result<WeatherResponse>;
}

#[derive(Deserialize, Debug, Default)]
pub struct WeatherResponse {
    pub weather: Option<Vec<Weather>>,
    pub main: Option<Main>,
    pub wind: Option<Wind>,
    pub rain: Option<Rain>,
    pub name: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Weather {
    pub description: Option<String>,
    pub icon: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Main {
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub humidity: Option<u32>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Wind {
    pub speed: Option<f64>,
    pub deg: Option<f32>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Rain {
    #[serde(rename = "1h")]
    pub rain_1h: Option<f64>,

    #[serde(rename = "3h")]
    pub rain_3h: Option<f64>,
}

pub struct OpenWeatherMap {
    client: Client,
    base_url: String,
    api_key: String,
    units: Units,
}

impl OpenWeatherMap {
    pub fn new(api_key: String, units: Units) -> Result<Self> {
        let client = Client::builder().user_agent("owx").build()?;
        Ok(Self {
            client,
            base_url: BASE_URL.to_string(),
            api_key,
            units,
        })
    }

    fn get(&self) -> RequestBuilder {
        self.client.get(&self.base_url).query(&[
            ("units", self.units.as_query()),
            ("appid", self.api_key.as_str()),
        ])
    }

    fn coord_request(&self, lat: f64, lon: f64) -> RequestBuilder {
        self.get().query(&[("lat", lat), ("lon", lon)])
    }

    fn city_request(&self, query: &str) -> RequestBuilder {
        self.get().query(&[("q", query)])
    }
}

fn fetch(request: RequestBuilder) -> Result<WeatherResponse> {
    let resp = request.send()?.error_for_status()?.json()?;
    Ok(resp)
}

impl WeatherSource for OpenWeatherMap {
    fn by_coord(&self, lat: f64, lon: f64) -> Result<WeatherResponse> {
        debug!(lat, lon, "requesting weather by coordinates");
        fetch(self.coord_request(lat, lon))
    }

    fn by_city_name(&self, query: &str) -> Result<WeatherResponse> {
        debug!(query, "requesting weather by city name");
        fetch(self.city_request(query))
    }
}

/// `city,state,country` with empty trailing parts dropped.
pub fn build_query(city: &str, state: &str, country: &str) -> String {
    format!("{city},{state},{country}")
        .trim_end_matches(',')
        .to_string()
}
