pub mod icon {
    const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn/";

    /// Full URL of the 2x PNG for an OpenWeatherMap icon code (e.g. `10d`).
    pub fn icon_url(code: &str) -> String {
        format!("{ICON_BASE_URL}{code}@2x.png")
    }

    #[test]
    fn test_icon_url() {
        assert_eq!(icon_url("01d"), "https://openweathermap.org/img/wn/01d@2x.png");
        assert_eq!(icon_url("02d"), "https://openweathermap.org/img/wn/02d@2x.png");
        assert_eq!(icon_url("03d"), "https://openweathermap.org/img/wn/03d@2x.png");
        assert_eq!(icon_url("10d"), "https://openweathermap.org/img/wn/10d@2x.png");
        assert_eq!(icon_url("13d"), "https://openweathermap.org/img/wn/13d@2x.png");
    }

    #[test]
    fn test_icon_url_passes_code_through() {
        assert_eq!(icon_url(""), "https://openweathermap.org/img/wn/@2x.png");
        assert_eq!(icon_url("50n"), icon_url("50n"));
        assert_ne!(icon_url("01d"), icon_url("01n"));
    }
}

pub mod direction {
    const COMPASS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

    /// Compass label for a bearing in degrees. Sector edges round clockwise.
    pub fn wind_direction(deg: f32) -> &'static str {
        let deg = deg.rem_euclid(360.0);
        let idx = ((deg + 22.5) / 45.0) as usize % COMPASS.len();
        COMPASS[idx]
    }

    #[test]
    fn test_wind_direction() {
        assert_eq!(wind_direction(0.0), "N");
        assert_eq!(wind_direction(45.0), "NE");
        assert_eq!(wind_direction(90.0), "E");
        assert_eq!(wind_direction(135.0), "SE");
        assert_eq!(wind_direction(180.0), "S");
        assert_eq!(wind_direction(225.0), "SW");
        assert_eq!(wind_direction(270.0), "W");
        assert_eq!(wind_direction(315.0), "NW");
    }

    #[test]
    fn test_wind_direction_sectors() {
        assert_eq!(wind_direction(22.4), "N");
        assert_eq!(wind_direction(22.5), "NE");
        assert_eq!(wind_direction(337.4), "NW");
        assert_eq!(wind_direction(337.5), "N");
        assert_eq!(wind_direction(359.9), "N");
    }

    #[test]
    fn test_wind_direction_out_of_range() {
        assert_eq!(wind_direction(360.0), "N");
        assert_eq!(wind_direction(405.0), "NE");
        assert_eq!(wind_direction(-90.0), "W");
        assert_eq!(wind_direction(-45.0), "NW");
    }
}
