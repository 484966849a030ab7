use clap::builder::{styling::AnsiColor, Styles};
use clap::Parser;

use crate::weather::Units;

const ABOUT: &str = "OpenWeatherMap weather TUI";

const LONG_ABOUT: &str = "
TUI for viewing current weather conditions sourced from OpenWeatherMap.

Search by city name, optionally narrowed with a state and country code (e.g. `owx Austin -s TX -c
US`), or by coordinates with --lat/--lon. An API key from https://openweathermap.org is required,
either through --api-key or the OPENWEATHER_API_KEY environment variable.

The city search is saved, so subsequent runs of `owx` will use the last city unless otherwise
specified.
";

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default())
    .usage(AnsiColor::Green.on_default())
    .literal(AnsiColor::Green.on_default())
    .placeholder(AnsiColor::Green.on_default());

#[derive(Parser, Debug)]
#[command(version, styles=STYLES, about=ABOUT, long_about = LONG_ABOUT)]
pub struct Args {
    #[arg(help = "City name (e.g. Madison, London, etc.)")]
    pub city: Option<String>,

    #[arg(short, long, requires = "city", help = "State code, US only")]
    pub state: Option<String>,

    #[arg(short, long, requires = "city", help = "ISO 3166 country code")]
    pub country: Option<String>,

    #[arg(long, requires = "lon", conflicts_with = "city", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    #[arg(long, requires = "lat", conflicts_with = "city", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    #[arg(short, long, value_enum, default_value_t = Units::Imperial)]
    pub units: Units,

    #[arg(
        short,
        long,
        default_value_t = 600,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Seconds between automatic refreshes"
    )]
    pub interval: u64,

    #[arg(long, help = "OpenWeatherMap API key [default: $OPENWEATHER_API_KEY]")]
    pub api_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_city_search() {
        let args = Args::try_parse_from(["owx", "Austin", "-s", "TX", "-c", "US"]).unwrap();
        assert_eq!(args.city.as_deref(), Some("Austin"));
        assert_eq!(args.state.as_deref(), Some("TX"));
        assert_eq!(args.country.as_deref(), Some("US"));
        assert_eq!(args.units, Units::Imperial);
        assert_eq!(args.interval, 600);
    }

    #[test]
    fn test_coordinates() {
        let args =
            Args::try_parse_from(["owx", "--lat", "43.07", "--lon", "-89.4", "-u", "metric"])
                .unwrap();
        assert_eq!(args.lat, Some(43.07));
        assert_eq!(args.lon, Some(-89.4));
        assert_eq!(args.units, Units::Metric);
        assert!(args.city.is_none());
    }

    #[test]
    fn test_rejects_partial_or_mixed_search() {
        assert!(Args::try_parse_from(["owx", "--lat", "43.07"]).is_err());
        assert!(Args::try_parse_from(["owx", "Austin", "--lat", "1", "--lon", "2"]).is_err());
        assert!(Args::try_parse_from(["owx", "-s", "TX"]).is_err());
    }

    #[test]
    fn test_interval_must_be_positive() {
        assert!(Args::try_parse_from(["owx", "--interval", "0"]).is_err());
        let args = Args::try_parse_from(["owx", "-i", "1"]).unwrap();
        assert_eq!(args.interval, 1);
    }
}
