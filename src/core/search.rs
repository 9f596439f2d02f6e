use crate::core::interpreter::interpret;
use crate::core::mapper::classify;
use crate::domain::model::{MealQuery, MealSlotCollection, ViewState};
use crate::domain::ports::{ConfigProvider, Renderer, Transport};
use crate::utils::error::Result;
use chrono::NaiveDate;
use url::Url;

/// Runs one fetch, interpret, classify, render cycle per call.
pub struct MealSearch<T: Transport, C: ConfigProvider> {
    transport: T,
    config: C,
}

impl<T: Transport, C: ConfigProvider> MealSearch<T, C> {
    pub fn new(transport: T, config: C) -> Self {
        Self { transport, config }
    }

    pub fn query_for(&self, date: NaiveDate) -> MealQuery {
        MealQuery {
            office_code: self.config.office_code().to_string(),
            school_code: self.config.school_code().to_string(),
            date,
        }
    }

    pub fn build_url(&self, query: &MealQuery) -> Result<Url> {
        let service_date = query.service_date();
        let url = Url::parse_with_params(
            self.config.api_base(),
            &[
                ("ATPT_OFCDC_SC_CODE", query.office_code.as_str()),
                ("SD_SCHUL_CODE", query.school_code.as_str()),
                ("MLSV_YMD", service_date.as_str()),
            ],
        )?;
        Ok(url)
    }

    pub async fn search(&self, date: NaiveDate) -> Result<MealSlotCollection> {
        let query = self.query_for(date);
        let url = self.build_url(&query)?;

        tracing::debug!("Making API request to: {}", url);
        let body = self.transport.fetch(url.as_str()).await?;
        tracing::debug!("Received {} bytes", body.len());

        let rows = interpret(&body).into_rows()?;
        let meals = classify(&rows);
        tracing::info!(
            "Found {} dishes for {} (breakfast {}, lunch {}, dinner {})",
            meals.total_dishes(),
            query.service_date(),
            meals.breakfast.len(),
            meals.lunch.len(),
            meals.dinner.len()
        );

        Ok(meals)
    }

    /// Searches and reports the loading and final state to `renderer`.
    ///
    /// Search failures end in [`ViewState::Error`]; only renderer errors
    /// are returned as `Err`.
    pub async fn run<R: Renderer + ?Sized>(
        &self,
        date: NaiveDate,
        renderer: &mut R,
    ) -> Result<ViewState> {
        renderer.render(&ViewState::Loading)?;

        let state = match self.search(date).await {
            Ok(meals) => ViewState::Content { date, meals },
            Err(e) => {
                tracing::warn!(
                    "Meal search failed: {} (Category: {:?})",
                    e,
                    e.category()
                );
                ViewState::Error(e.user_friendly_message())
            }
        };

        renderer.render(&state)?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MealConfig;
    use crate::utils::error::{MealError, NO_DATA_MESSAGE, TRANSPORT_FAILURE_MESSAGE};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StubTransport {
        response: std::result::Result<String, u16>,
        requested: Mutex<Vec<String>>,
    }

    impl StubTransport {
        fn body(body: &str) -> Self {
            Self {
                response: Ok(body.to_string()),
                requested: Mutex::new(Vec::new()),
            }
        }

        fn status(status: u16) -> Self {
            Self {
                response: Err(status),
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Transport for StubTransport {
        async fn fetch(&self, url: &str) -> Result<String> {
            self.requested.lock().unwrap().push(url.to_string());
            self.response
                .clone()
                .map_err(|status| MealError::HttpStatus { status })
        }
    }

    #[derive(Default)]
    struct RecordingRenderer {
        states: Vec<ViewState>,
    }

    impl Renderer for RecordingRenderer {
        fn render(&mut self, state: &ViewState) -> Result<()> {
            self.states.push(state.clone());
            Ok(())
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()
    }

    #[test]
    fn test_build_url() {
        let search = MealSearch::new(StubTransport::body(""), MealConfig::default());
        let url = search.build_url(&search.query_for(date())).unwrap();
        assert_eq!(
            url.as_str(),
            "https://open.neis.go.kr/hub/mealServiceDietInfo?ATPT_OFCDC_SC_CODE=J10&SD_SCHUL_CODE=7531100&MLSV_YMD=20250305"
        );
    }

    #[test]
    fn test_run_renders_loading_then_content() {
        let xml = "<mealServiceDietInfo><row><MMEAL_SC_CODE>2</MMEAL_SC_CODE><DDISH_NM>밥&lt;br/&gt;국</DDISH_NM></row></mealServiceDietInfo>";
        let search = MealSearch::new(StubTransport::body(xml), MealConfig::default());
        let mut renderer = RecordingRenderer::default();

        let state = tokio_test::block_on(search.run(date(), &mut renderer)).unwrap();

        assert_eq!(renderer.states.len(), 2);
        assert_eq!(renderer.states[0], ViewState::Loading);
        let ViewState::Content { meals, .. } = &state else {
            panic!("expected content, got {:?}", state);
        };
        assert_eq!(meals.lunch, vec!["밥", "국"]);
        assert_eq!(renderer.states[1], state);
        assert_eq!(search.transport.requested.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_run_maps_failures_to_error_state() {
        let mut renderer = RecordingRenderer::default();

        let search = MealSearch::new(StubTransport::status(500), MealConfig::default());
        let state = tokio_test::block_on(search.run(date(), &mut renderer)).unwrap();
        assert_eq!(state, ViewState::Error(TRANSPORT_FAILURE_MESSAGE.to_string()));

        let no_data = "<RESULT><CODE>INFO-200</CODE></RESULT>";
        let search = MealSearch::new(StubTransport::body(no_data), MealConfig::default());
        let state = tokio_test::block_on(search.run(date(), &mut renderer)).unwrap();
        assert_eq!(state, ViewState::Error(NO_DATA_MESSAGE.to_string()));
    }

    #[test]
    fn test_search_returns_typed_error() {
        let search = MealSearch::new(StubTransport::body("<broken"), MealConfig::default());
        let err = tokio_test::block_on(search.search(date())).unwrap_err();
        assert!(matches!(err, MealError::MalformedResponse { .. }));
    }
}
