//! MongoDB 리포지토리 공통 기능
//!
//! 정수 ID 시퀀스 발급과 드라이버 에러 변환을 제공합니다.

use mongodb::bson::doc;
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use serde::{Deserialize, Serialize};
use crate::db::Database;
use crate::errors::{AppError, AppResult};
use super::COUNTERS_COLLECTION;

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 유니크 인덱스 이름과 충돌 시 메시지
const UNIQUE_INDEX_MESSAGES: [(&str, &str); 3] = [
    ("name_unique", "This user name already exists"),
    ("email_unique", "This user email already exists"),
    ("nickname_unique", "This user nickname already exists"),
];

#[derive(Debug, Serialize, Deserialize)]
struct Counter {
    #[serde(rename = "_id")]
    id: String,
    seq: i32,
}

/// `counters` 컬렉션에서 다음 ID를 원자적으로 발급합니다.
///
/// 시퀀스 문서가 없으면 생성하므로 첫 ID는 1입니다.
pub(crate) async fn next_sequence(db: &Database, name: &str) -> AppResult<i32> {
    let options = FindOneAndUpdateOptions::builder()
        .upsert(true)
        .return_document(ReturnDocument::After)
        .build();

    let counter = db
        .collection::<Counter>(COUNTERS_COLLECTION)
        .find_one_and_update(doc! { "_id": name }, doc! { "$inc": { "seq": 1 } })
        .with_options(options)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .ok_or_else(|| AppError::DatabaseError(format!("시퀀스 발급 실패: {}", name)))?;

    Ok(counter.seq)
}

/// 쓰기 에러를 변환합니다. 유니크 인덱스 위반은 409로 매핑됩니다.
///
/// 서버 메시지의 `index: <이름>` 토큰을 인덱스 이름과 정확히 비교합니다.
/// `nickname_unique`에는 `name_unique`가 부분 문자열로 들어 있습니다.
pub(crate) fn map_write_error(err: MongoError) -> AppError {
    let Some(raw) = duplicate_key_message(&err) else {
        return AppError::DatabaseError(err.to_string());
    };

    let violated = violated_index(raw);
    let message = UNIQUE_INDEX_MESSAGES
        .iter()
        .find(|(index, _)| Some(*index) == violated)
        .map(|(_, message)| message.to_string())
        .unwrap_or_else(|| "Duplicate key".to_string());

    AppError::ConflictError(message)
}

/// 중복 키 에러일 때만 서버 메시지를 돌려줍니다.
fn duplicate_key_message(err: &MongoError) -> Option<&str> {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE =>
        {
            Some(write_error.message.as_str())
        }
        ErrorKind::Command(command_error) if command_error.code == DUPLICATE_KEY_CODE => {
            Some(command_error.message.as_str())
        }
        _ => None,
    }
}

/// `E11000 ... index: nickname_unique dup key: ...`에서 인덱스 이름을 꺼냅니다.
fn violated_index(raw: &str) -> Option<&str> {
    let (_, rest) = raw.split_once("index: ")?;
    rest.split_whitespace().next()
}
