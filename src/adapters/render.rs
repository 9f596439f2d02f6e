use crate::config::OutputFormat;
use crate::core::{MealSlotCollection, Renderer, ViewState};
use crate::utils::error::Result;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::io::Write;

pub fn title_for(date: NaiveDate) -> String {
    format!(
        "{}년 {}월 {}일 급식정보",
        date.year(),
        date.month(),
        date.day()
    )
}

pub fn empty_slot_message(label: &str) -> String {
    format!("{} 정보가 없습니다.", label)
}

pub fn renderer_for<W: Write + 'static>(format: OutputFormat, writer: W) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer::new(writer)),
        OutputFormat::Json => Box::new(JsonRenderer::new(writer)),
        OutputFormat::Csv => Box::new(CsvRenderer::new(writer)),
    }
}

/// Human readable sections, one dish per line.
pub struct TextRenderer<W: Write> {
    writer: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, state: &ViewState) -> Result<()> {
        match state {
            ViewState::Idle | ViewState::Loading => {}
            ViewState::Error(message) => {
                writeln!(self.writer, "{}", message)?;
            }
            ViewState::Content { date, meals } => {
                writeln!(self.writer, "{}", title_for(*date))?;
                for (slot, dishes) in meals.iter() {
                    writeln!(self.writer)?;
                    writeln!(self.writer, "[{}]", slot.label())?;
                    if dishes.is_empty() {
                        writeln!(self.writer, "{}", empty_slot_message(slot.label()))?;
                    }
                    for dish in dishes {
                        writeln!(self.writer, "{}", dish)?;
                    }
                }
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct ContentView<'a> {
    date: String,
    meals: &'a MealSlotCollection,
}

#[derive(Serialize)]
struct ErrorView<'a> {
    error: &'a str,
}

pub struct JsonRenderer<W: Write> {
    writer: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, state: &ViewState) -> Result<()> {
        match state {
            ViewState::Idle | ViewState::Loading => return Ok(()),
            ViewState::Error(message) => {
                serde_json::to_writer_pretty(&mut self.writer, &ErrorView { error: message })?;
            }
            ViewState::Content { date, meals } => {
                let view = ContentView {
                    date: date.format("%Y-%m-%d").to_string(),
                    meals,
                };
                serde_json::to_writer_pretty(&mut self.writer, &view)?;
            }
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// `date,meal,dish` rows; errors go out as a single `error` row.
pub struct CsvRenderer<W: Write> {
    writer: W,
}

impl<W: Write> CsvRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Renderer for CsvRenderer<W> {
    fn render(&mut self, state: &ViewState) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(&mut self.writer);
        match state {
            ViewState::Idle | ViewState::Loading => return Ok(()),
            ViewState::Error(message) => {
                csv_writer.write_record(["error"])?;
                csv_writer.write_record([message.as_str()])?;
            }
            ViewState::Content { date, meals } => {
                let date = date.format("%Y-%m-%d").to_string();
                csv_writer.write_record(["date", "meal", "dish"])?;
                for (slot, dishes) in meals.iter() {
                    for dish in dishes {
                        csv_writer.write_record([date.as_str(), slot.name(), dish.as_str()])?;
                    }
                }
            }
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> ViewState {
        ViewState::Content {
            date: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
            meals: MealSlotCollection {
                breakfast: vec![],
                lunch: vec!["밥".to_string(), "국".to_string()],
                dinner: vec!["카레".to_string()],
            },
        }
    }

    #[test]
    fn test_text_renderer_sections_and_placeholder() {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(&ViewState::Loading).unwrap();
        renderer.render(&content()).unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(
            output,
            "2025년 3월 5일 급식정보\n\n[조식]\n조식 정보가 없습니다.\n\n[중식]\n밥\n국\n\n[석식]\n카레\n"
        );
    }

    #[test]
    fn test_text_renderer_error() {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer
            .render(&ViewState::Error("급식정보를 찾을 수 없습니다.".to_string()))
            .unwrap();
        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(output, "급식정보를 찾을 수 없습니다.\n");
    }

    #[test]
    fn test_json_renderer() {
        let mut renderer = JsonRenderer::new(Vec::new());
        renderer.render(&content()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&renderer.into_inner()).unwrap();
        assert_eq!(value["date"], "2025-03-05");
        assert_eq!(value["meals"]["lunch"], serde_json::json!(["밥", "국"]));
        assert_eq!(value["meals"]["breakfast"], serde_json::json!([]));
    }

    #[test]
    fn test_csv_renderer() {
        let mut renderer = CsvRenderer::new(Vec::new());
        renderer.render(&content()).unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(
            output,
            "date,meal,dish\n2025-03-05,lunch,밥\n2025-03-05,lunch,국\n2025-03-05,dinner,카레\n"
        );
    }

    #[test]
    fn test_idle_renders_nothing() {
        let mut renderer = JsonRenderer::new(Vec::new());
        renderer.render(&ViewState::Idle).unwrap();
        assert!(renderer.into_inner().is_empty());
    }
}
