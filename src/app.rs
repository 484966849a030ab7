use std::path::PathBuf;

use chrono::{DateTime, Local};
use tracing::{debug, error, info, warn};

use crate::error::{Error, Result};
use crate::owm::{build_query, WeatherResponse, WeatherSource};
use crate::prefs::Preferences;
use crate::weather::{FetchKind, Location, Units, WeatherInfo};

/// Holds what the screen shows and knows how to fetch it again.
pub struct App<S> {
    source: S,
    prefs: Preferences,
    prefs_path: Option<PathBuf>,
    location: Option<Location>,
    last_fetch: FetchKind,
    pub units: Units,
    pub weather: Option<WeatherInfo>,
    pub updated: Option<DateTime<Local>>,
    pub error: Option<Error>,
}

impl<S: WeatherSource> App<S> {
    pub fn new(source: S, prefs: Preferences, prefs_path: Option<PathBuf>, units: Units) -> Self {
        Self {
            source,
            prefs,
            prefs_path,
            location: None,
            last_fetch: FetchKind::default(),
            units,
            weather: None,
            updated: None,
            error: None,
        }
    }

    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }

    pub fn last_fetch(&self) -> FetchKind {
        self.last_fetch
    }

    /// Repeats the last kind of lookup.
    pub fn refresh(&mut self) {
        match self.last_fetch {
            FetchKind::City => {
                // Saved state and country are reused, not cleared.
                if self.prefs.city_name.is_some() {
                    self.fetch_by_city_name(None, None, None);
                } else {
                    self.error = Some(Error::InvalidCityName);
                }
            }
            FetchKind::Location => {
                if let Some(loc) = self.location {
                    self.fetch_by_location(loc.latitude, loc.longitude);
                } else {
                    self.error = Some(Error::InvalidLocationData);
                }
            }
        }
    }

    pub fn fetch_by_location(&mut self, latitude: f64, longitude: f64) {
        self.location = Some(Location {
            latitude,
            longitude,
        });
        let result = self.source.by_coord(latitude, longitude);
        self.apply(FetchKind::Location, result);
    }

    /// Looks up `city`, or the saved city when none is given. A given city
    /// replaces the saved search; with neither there is nothing to fetch.
    pub fn fetch_by_city_name(
        &mut self,
        city: Option<&str>,
        state: Option<&str>,
        country: Option<&str>,
    ) {
        if let Some(city) = city {
            self.prefs = Preferences {
                city_name: Some(city.to_string()),
                state_code: non_empty(state),
                country_code: non_empty(country),
            };
            if let Err(err) = self.save_prefs() {
                warn!("could not save preferences: {err}");
            }
        }

        let Some(city) = self.prefs.city_name.as_deref() else {
            debug!("no city to look up");
            return;
        };
        let query = build_query(
            city,
            self.prefs.state_code.as_deref().unwrap_or(""),
            self.prefs.country_code.as_deref().unwrap_or(""),
        );
        let result = self.source.by_city_name(&query);
        self.apply(FetchKind::City, result);
    }

    pub fn reset_error(&mut self) {
        self.error = None;
    }

    fn apply(&mut self, kind: FetchKind, result: Result<WeatherResponse>) {
        match result {
            Ok(resp) => {
                let info = WeatherInfo::from(resp);
                info!(city = ?info.city_name, ?kind, "weather updated");
                self.weather = Some(info);
                self.updated = Some(Local::now());
                self.last_fetch = kind;
                self.error = None;
            }
            Err(err) => {
                error!(?kind, "fetch failed: {err}");
                self.error = Some(err);
            }
        }
    }

    fn save_prefs(&self) -> Result<()> {
        match self.prefs_path {
            Some(ref path) => self.prefs.save(path),
            None => Ok(()),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
