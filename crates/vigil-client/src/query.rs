//! Canonical query state for server-backed list views
//!
//! Filter and pagination state maps to a canonical parameter list: a
//! filter that is absent or empty never reaches the backend, and any
//! filter change resets pagination to the first page because the old
//! offset no longer points at the same result set.
//!
//! The state round-trips losslessly through its query-string form; that
//! property is what makes bookmarkable list URLs and back-navigation
//! restore the identical view. Parsing is total: unknown keys are
//! ignored and malformed values fall back to defaults.

use vigil_api::{AgeGroup, Emotion, Ethnicity, Gender};

/// Page sizes the console offers.
pub const PAGE_SIZES: [u64; 4] = [6, 12, 24, 48];

/// Default page size.
pub const DEFAULT_PAGE_SIZE: u64 = 12;

/// Normalize a requested page size to an allowed choice.
pub fn normalize_page_size(size: u64) -> u64 {
    if PAGE_SIZES.contains(&size) {
        size
    } else {
        DEFAULT_PAGE_SIZE
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Pagination and filter state for the camera list view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CameraListQuery {
    page: u64,
    size: u64,
    camera_name: Option<String>,
}

impl Default for CameraListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
            camera_name: None,
        }
    }
}

impl CameraListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn camera_name(&self) -> Option<&str> {
        self.camera_name.as_deref()
    }

    /// Jump to a page without touching the filters.
    pub fn with_page(mut self, page: u64) -> Self {
        self.page = page.max(1);
        self
    }

    /// Change the page length; resets to the first page.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = normalize_page_size(size);
        self.page = 1;
        self
    }

    /// Set or clear the name filter; resets to the first page. An empty
    /// string clears the filter.
    pub fn with_name(mut self, name: &str) -> Self {
        self.camera_name = non_empty(name);
        self.page = 1;
        self
    }

    /// Canonical request parameters. Absent filters are omitted
    /// entirely, never sent as empty strings.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
        ];
        if let Some(name) = &self.camera_name {
            params.push(("camera_name", name.clone()));
        }
        params
    }

    /// Serialize to the shareable query-string form.
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(self.params()).unwrap_or_default()
    }

    /// Rebuild state from a query string.
    pub fn from_query_string(query: &str) -> Self {
        let mut state = Self::default();
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap_or_default();

        for (key, value) in pairs {
            match key.as_str() {
                "page" => {
                    if let Ok(page) = value.parse::<u64>() {
                        state.page = page.max(1);
                    }
                }
                "size" => {
                    if let Ok(size) = value.parse::<u64>() {
                        state.size = normalize_page_size(size);
                    }
                }
                "camera_name" => state.camera_name = non_empty(&value),
                _ => {}
            }
        }
        state
    }
}

/// Filter state for the demographics results view.
///
/// Results belong to one camera; the demographic filters and the date
/// window are optional narrowing on top.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultsQuery {
    camera_id: String,
    gender: Option<Gender>,
    age: Option<AgeGroup>,
    emotion: Option<Emotion>,
    ethnicity: Option<Ethnicity>,
    start_date: Option<String>,
    end_date: Option<String>,
}

impl ResultsQuery {
    pub fn new(camera_id: &str) -> Self {
        Self {
            camera_id: camera_id.to_string(),
            ..Default::default()
        }
    }

    pub fn camera_id(&self) -> &str {
        &self.camera_id
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn age(&self) -> Option<AgeGroup> {
        self.age
    }

    pub fn emotion(&self) -> Option<Emotion> {
        self.emotion
    }

    pub fn ethnicity(&self) -> Option<Ethnicity> {
        self.ethnicity
    }

    pub fn start_date(&self) -> Option<&str> {
        self.start_date.as_deref()
    }

    pub fn end_date(&self) -> Option<&str> {
        self.end_date.as_deref()
    }

    pub fn with_gender(mut self, gender: Option<Gender>) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_age(mut self, age: Option<AgeGroup>) -> Self {
        self.age = age;
        self
    }

    pub fn with_emotion(mut self, emotion: Option<Emotion>) -> Self {
        self.emotion = emotion;
        self
    }

    pub fn with_ethnicity(mut self, ethnicity: Option<Ethnicity>) -> Self {
        self.ethnicity = ethnicity;
        self
    }

    /// Set or clear the date window. Empty strings clear a bound.
    pub fn with_dates(mut self, start: Option<&str>, end: Option<&str>) -> Self {
        self.start_date = start.and_then(non_empty);
        self.end_date = end.and_then(non_empty);
        self
    }

    /// Drop every filter, keeping the camera.
    pub fn reset_filters(self) -> Self {
        Self::new(&self.camera_id)
    }

    /// Canonical request parameters. Absent filters are omitted
    /// entirely, never sent as empty strings.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("camera_id", self.camera_id.clone())];
        if let Some(gender) = self.gender {
            params.push(("gender", gender.to_string()));
        }
        if let Some(age) = self.age {
            params.push(("age", age.to_string()));
        }
        if let Some(emotion) = self.emotion {
            params.push(("emotion", emotion.to_string()));
        }
        if let Some(ethnicity) = self.ethnicity {
            params.push(("ethnicity", ethnicity.to_string()));
        }
        if let Some(start) = &self.start_date {
            params.push(("start_date", start.clone()));
        }
        if let Some(end) = &self.end_date {
            params.push(("end_date", end.clone()));
        }
        params
    }

    /// Serialize to the shareable query-string form.
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(self.params()).unwrap_or_default()
    }

    /// Rebuild state from a query string. An empty or unknown filter
    /// value parses as "no filter".
    pub fn from_query_string(query: &str) -> Self {
        let mut state = Self::default();
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap_or_default();

        for (key, value) in pairs {
            match key.as_str() {
                "camera_id" => state.camera_id = value,
                "gender" => state.gender = value.parse().ok(),
                "age" => state.age = value.parse().ok(),
                "emotion" => state.emotion = value.parse().ok(),
                "ethnicity" => state.ethnicity = value.parse().ok(),
                "start_date" => state.start_date = non_empty(&value),
                "end_date" => state.end_date = non_empty(&value),
                _ => {}
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_list_defaults() {
        let query = CameraListQuery::new();
        assert_eq!(query.page(), 1);
        assert_eq!(query.size(), DEFAULT_PAGE_SIZE);
        assert_eq!(
            query.params(),
            vec![("page", "1".to_string()), ("size", "12".to_string())]
        );
    }

    #[test]
    fn test_empty_name_filter_is_absent() {
        let query = CameraListQuery::new().with_name("");
        assert!(query.params().iter().all(|(key, _)| *key != "camera_name"));

        // Setting then clearing removes the key; it never degrades to
        // an empty-string parameter.
        let query = CameraListQuery::new().with_name("dock").with_name("");
        assert!(query.params().iter().all(|(key, _)| *key != "camera_name"));
    }

    #[test]
    fn test_filter_change_resets_page() {
        let query = CameraListQuery::new().with_page(4).with_name("entrance");
        assert_eq!(query.page(), 1);

        let query = CameraListQuery::new().with_page(4).with_size(24);
        assert_eq!(query.page(), 1);
        assert_eq!(query.size(), 24);
    }

    #[test]
    fn test_page_navigation_keeps_filters() {
        let query = CameraListQuery::new().with_name("entrance").with_page(3);
        assert_eq!(query.page(), 3);
        assert_eq!(query.camera_name(), Some("entrance"));
    }

    #[test]
    fn test_disallowed_size_normalizes_to_default() {
        assert_eq!(CameraListQuery::new().with_size(13).size(), DEFAULT_PAGE_SIZE);
        assert_eq!(CameraListQuery::new().with_size(48).size(), 48);
    }

    #[test]
    fn test_camera_list_round_trip() {
        let query = CameraListQuery::new()
            .with_name("front door")
            .with_size(24)
            .with_page(2);

        let restored = CameraListQuery::from_query_string(&query.to_query_string());
        assert_eq!(restored, query);
        assert_eq!(restored.params(), query.params());
    }

    #[test]
    fn test_camera_list_parsing_is_total() {
        let query = CameraListQuery::from_query_string("page=abc&size=999&bogus=1&camera_name=");
        assert_eq!(query.page(), 1);
        assert_eq!(query.size(), DEFAULT_PAGE_SIZE);
        assert!(query.camera_name().is_none());
    }

    #[test]
    fn test_results_empty_filters_are_absent() {
        let params = ResultsQuery::new("123").params();
        assert_eq!(params, vec![("camera_id", "123".to_string())]);

        // An empty-string filter value parses as "no filter" — applying
        // the same cleared state twice stays canonical.
        let query = ResultsQuery::from_query_string("camera_id=123&gender=");
        assert!(query.params().iter().all(|(key, _)| *key != "gender"));

        let again = ResultsQuery::from_query_string(&query.to_query_string());
        assert!(again.params().iter().all(|(key, _)| *key != "gender"));
        assert_eq!(again.params(), query.params());
    }

    #[test]
    fn test_results_filters_serialize_wire_values() {
        let query = ResultsQuery::new("123")
            .with_gender(Some(vigil_api::Gender::Female))
            .with_age(Some(vigil_api::AgeGroup::SixtyPlus))
            .with_ethnicity(Some(vigil_api::Ethnicity::MiddleEastern));

        let params = query.params();
        assert!(params.contains(&("gender", "female".to_string())));
        assert!(params.contains(&("age", "60+".to_string())));
        assert!(params.contains(&("ethnicity", "middle_eastern".to_string())));
    }

    #[test]
    fn test_results_round_trip() {
        let query = ResultsQuery::new("cam-7")
            .with_gender(Some(vigil_api::Gender::Male))
            .with_emotion(Some(vigil_api::Emotion::Surprise))
            .with_dates(Some("2024-01-01T00:00"), Some("2024-01-31T23:59"));

        let restored = ResultsQuery::from_query_string(&query.to_query_string());
        assert_eq!(restored, query);
        assert_eq!(restored.params(), query.params());
    }

    #[test]
    fn test_unknown_enum_value_parses_as_no_filter() {
        let query = ResultsQuery::from_query_string("camera_id=123&gender=unknown&age=12-99");
        assert!(query.gender().is_none());
        assert!(query.age().is_none());
    }

    #[test]
    fn test_reset_filters_keeps_camera() {
        let query = ResultsQuery::new("123")
            .with_gender(Some(vigil_api::Gender::Male))
            .with_dates(Some("2024-01-01T00:00"), None)
            .reset_filters();

        assert_eq!(query.camera_id(), "123");
        assert_eq!(query.params(), vec![("camera_id", "123".to_string())]);
    }

    #[test]
    fn test_empty_date_clears_bound() {
        let query = ResultsQuery::new("123").with_dates(Some(""), Some("2024-02-01T00:00"));
        assert!(query.start_date().is_none());
        assert_eq!(query.end_date(), Some("2024-02-01T00:00"));
    }
}
