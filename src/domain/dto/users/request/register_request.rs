use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};
use crate::domain::entities::users::user::User;

/// 이 연도보다 늦게 태어난 사용자는 가입할 수 없습니다.
pub const LATEST_BIRTH_YEAR: i32 = 2010;

/// 회원가입 요청
///
/// 모든 문자열 필드는 필수이며 빈 문자열은 허용하지 않습니다.
/// `birthDay`는 `2001-04-09` 또는 `2001-04-09T00:00:00` 형식을 받습니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    #[validate(length(min = 1, max = 200, message = "Name is required (max 200 characters)"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Email is required (max 100 characters)"))]
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = 80, message = "Nickname is required (max 80 characters)"))]
    pub nickname: String,

    #[serde(deserialize_with = "deserialize_birth_day")]
    #[validate(custom(function = "validate_birth_day"))]
    pub birth_day: NaiveDate,

    #[validate(length(min = 1, max = 300, message = "Icon is required (max 300 characters)"))]
    pub icon: String,

    #[validate(length(min = 1, max = 250, message = "Description is required (max 250 characters)"))]
    pub user_description: String,
}

impl From<RegisterUserRequest> for User {
    fn from(request: RegisterUserRequest) -> Self {
        User::new(
            request.name,
            request.email,
            request.nickname,
            request.birth_day,
            request.icon,
            request.user_description,
        )
    }
}

/// 출생 연도가 [`LATEST_BIRTH_YEAR`]보다 늦으면 거부합니다.
///
/// 정확한 만 나이 계산이 아니라 연도만 비교합니다.
pub fn validate_birth_day(birth_day: &NaiveDate) -> Result<(), ValidationError> {
    if birth_day.year() > LATEST_BIRTH_YEAR {
        return Err(ValidationError::new("too_young")
            .with_message("User must be over 13 years old to register".into()));
    }
    Ok(())
}

fn deserialize_birth_day<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let date_part = match raw.split_once('T') {
        Some((date, _time)) => date,
        None => raw.as_str(),
    };

    NaiveDate::parse_from_str(date_part.trim(), "%Y-%m-%d")
        .map_err(|_| serde::de::Error::custom(format!("Enter a valid birthdate: {}", raw)))
}
