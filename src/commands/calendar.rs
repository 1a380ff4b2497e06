//! Calendar Commands

use serde::Serialize;
use crate::models::WeekView;
use super::{call, to_args};

#[derive(Serialize)]
struct OffsetArgs {
    offset: i64,
}

pub async fn calendar_week(offset: i64) -> Result<WeekView, String> {
    call("calendar_week", to_args(&OffsetArgs { offset })?).await
}
