use crate::utils::error::{MealError, Result};
use chrono::NaiveDate;
use url::Url;

pub const EMPTY_DATE_MESSAGE: &str = "날짜를 선택해주세요.";
pub const PAST_DATE_MESSAGE: &str = "오늘 날짜 이후의 급식정보만 조회 가능합니다.";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(MealError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(MealError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(MealError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MealError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Parses a user-supplied date, either `YYYY-MM-DD` or the API's `YYYYMMDD`.
pub fn parse_search_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(MealError::ValidationError {
            message: EMPTY_DATE_MESSAGE.to_string(),
        });
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y%m%d"))
        .map_err(|e| MealError::ValidationError {
            message: format!("Invalid date '{}': {}", trimmed, e),
        })
}

/// Rejects dates before `today`.
pub fn validate_not_past(date: NaiveDate, today: NaiveDate) -> Result<()> {
    if date < today {
        return Err(MealError::ValidationError {
            message: PAST_DATE_MESSAGE.to_string(),
        });
    }
    Ok(())
}
