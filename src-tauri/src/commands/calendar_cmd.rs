//! Calendar Commands

use mensa_core::{CalendarWeek, WeekView};

/// The current week, or the week `offset` weeks away
#[tauri::command]
pub fn calendar_week(offset: Option<i64>) -> WeekView {
    let today = chrono::Local::now().date_naive();
    CalendarWeek::containing(today)
        .offset(offset.unwrap_or(0))
        .view(today)
}
