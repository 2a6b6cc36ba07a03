//! Reply texts, already escaped for MarkdownV2.
//!
//! Kept free of I/O so the wording can be checked without a live bot.

use crate::error::SchedulingError;
use crate::services::coordinator::Proposal;
use crate::utils::datetime::TimePoint;
use crate::utils::markdown::{escape_markdown, inline_code};

pub const EVENT_EXAMPLE: &str = "/event Название | 31 января 20:00, 1 февраля 18:00";
pub const EXCLUDE_EXAMPLE: &str = "/exclude 31 января 20:00";
pub const ADD_EXAMPLE: &str = "/add 2 февраля 19:00";

pub fn welcome() -> String {
    escape_markdown(
        "Привет! Я помогаю найти время, которое подходит всем.\n\n\
         Создайте событие через /event, исключайте неудобные варианты через /exclude \
         и завершите опрос командой /done.",
    )
}

fn bullet_list(points: &[TimePoint], marker: &str) -> String {
    points
        .iter()
        .map(|p| format!("{} {}", marker, escape_markdown(&p.to_string())))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn event_created(proposal: &Proposal) -> String {
    let options = bullet_list(&proposal.event.sorted_options(), "\\-");
    let mut text = format!(
        "Событие «{}» создано\\!\nЧтобы исключить время, напишите:\n{}\n\nДоступные варианты:\n{}",
        escape_markdown(&proposal.event.name),
        inline_code(EXCLUDE_EXAMPLE),
        options
    );

    if !proposal.rejected.is_empty() {
        text.push_str("\n\n⚠️ ");
        text.push_str(&escape_markdown(&format!(
            "Не распознано: {}",
            proposal.rejected.join(", ")
        )));
    }
    text
}

pub fn excluded(point: &TimePoint) -> String {
    escape_markdown(&format!("Вы исключили: {point}"))
}

pub fn added(point: &TimePoint) -> String {
    escape_markdown(&format!("Добавлено: {point}"))
}

pub fn resolved(available: &[TimePoint]) -> String {
    if available.is_empty() {
        return escape_markdown("❌ Общего времени нет.");
    }
    format!("Все могут в:\n\n{}", bullet_list(available, "✅"))
}

/// Guidance for a refused command.
pub fn scheduling_error(error: &SchedulingError) -> String {
    match error {
        SchedulingError::NoValidDates => escape_markdown(
            "Не удалось распознать ни одну дату. Формат: 31 января 20:00. \
             Поддерживаются только русские названия месяцев.",
        ),
        SchedulingError::NoActiveEvent => escape_markdown("Нет активного события. Создайте его через /event"),
        SchedulingError::UnparsableDate { raw } => format!(
            "{} {}",
            escape_markdown(&format!("Не удалось распознать дату «{raw}». Используйте формат:")),
            inline_code("31 января 20:00")
        ),
        SchedulingError::OptionNotOffered { raw } => format!(
            "{}\n{} {}",
            escape_markdown("Такого варианта нет."),
            escape_markdown("Хотите предложить его? Напишите:"),
            inline_code(&format!("/add {raw}"))
        ),
        SchedulingError::MalformedProposal => format!(
            "{} {}",
            escape_markdown("Используйте:"),
            inline_code(EVENT_EXAMPLE)
        ),
    }
}
