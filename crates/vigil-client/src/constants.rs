// Console API path constants

pub mod api_path {
    pub const CAMERAS: &str = "/cameras/";
    pub const TAGS: &str = "/tags/";
    pub const DEMOGRAPHICS_CONFIG: &str = "/demographics/config";
    pub const DEMOGRAPHICS_RESULTS: &str = "/demographics/results";
}
